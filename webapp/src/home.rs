use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio::pages::{AboutBlockView, DetailGroupView, HomePage, ProjectCardView, Run};

use crate::{
    Route,
    components::{
        footer::Footer,
        icons::{ARROW_RIGHT, Svg},
        media_card::MediaFrame,
        scroll::{FadeIn, ParallaxText},
        text::Emphasized,
    },
};

#[component]
fn DetailGroup(group: DetailGroupView) -> Element {
    let class = if group.stacked {
        "detail-group stacked"
    } else {
        "detail-group"
    };

    rsx! {
        div { class: "{class}",
            p { class: "detail-label", "{group.label}" }
            ul { class: "chips",
                for chip in group.chips.iter() {
                    li { class: "chip", "{chip}" }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(card: ProjectCardView) -> Element {
    let class = if card.mirrored {
        "project-card mirrored"
    } else {
        "project-card"
    };
    let target = Route::Project {
        slug: card.slug.clone(),
    };

    rsx! {
        article { class: "{class}",
            Link { class: "project-card-media", to: target.clone(),
                MediaFrame { media: card.showcase }
            }
            div { class: "project-card-body",
                ParallaxText { id: format!("project-title-{}", card.slug),
                    h3 { class: "project-card-title",
                        Link { to: target.clone(), "{card.title}" }
                    }
                }
                p { class: "project-card-description", "{card.description}" }
                div { class: "detail-grid",
                    for group in card.details {
                        DetailGroup { group }
                    }
                }
                Link { class: "arrow-link", to: target,
                    "{card.explore}"
                    Svg { paths: ARROW_RIGHT }
                }
            }
        }
    }
}

#[component]
fn AboutBlock(index: usize, block: AboutBlockView) -> Element {
    rsx! {
        FadeIn {
            id: format!("about-block-{index}"),
            class: "about-block",
            delay_ms: block.delay_ms,
            h3 { "{block.title}" }
            for text in block.paragraphs {
                p {
                    Emphasized { text }
                }
            }
        }
    }
}

#[component]
pub fn HomeView(home: HomePage) -> Element {
    let hero = home.hero;

    rsx! {
        section { class: "hero", id: "hero",
            p { class: "hero-label", "{hero.label}" }
            h1 { class: "hero-intro",
                for run in hero.intro {
                    match run {
                        Run::Plain(text) => rsx! { "{text}" },
                        Run::Accent(text) => rsx! {
                            span { class: "accent", "{text}" }
                        },
                    }
                }
            }
            a {
                class: "arrow-link",
                href: "{hero.linkedin_href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{hero.linkedin_label}"
                Svg { paths: ARROW_RIGHT }
            }
        }

        section { class: "projects", id: "projects",
            ParallaxText { id: "projects-title",
                h2 { class: "section-title", "{home.projects_title}" }
            }
            for card in home.projects {
                ProjectCard { card }
            }
        }

        section { class: "about", id: "about",
            ParallaxText { id: "about-title",
                h2 { class: "section-title", "{home.about_title}" }
            }
            div { class: "about-grid",
                for (index, block) in home.about.into_iter().enumerate() {
                    AboutBlock { index, block }
                }
            }
        }

        ParallaxText { id: "cta", class: "cta",
            p { "{home.cta}" }
        }

        Footer { footer: home.footer }
    }
}
