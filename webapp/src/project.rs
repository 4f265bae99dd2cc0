use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio::pages::{
    BlockView, CaseStudyView, HeadedText, MoreProjectView, ProjectPage, SectionView,
};

use crate::{
    Route,
    components::{
        footer::Footer,
        icons::{ARROW_LEFT, ARROW_RIGHT, Glyph, Svg},
        media_card::MediaFrame,
        scroll::{FadeIn, ParallaxText},
        text::Emphasized,
    },
};

#[component]
fn Summary(item: HeadedText) -> Element {
    rsx! {
        div {
            h4 { "{item.heading}" }
            p {
                Emphasized { text: item.text }
            }
        }
    }
}

#[component]
fn Block(block: BlockView) -> Element {
    match block {
        BlockView::Prose { heading, text } => rsx! {
            div { class: "prose",
                if let Some(heading) = heading {
                    h4 { "{heading}" }
                }
                p {
                    Emphasized { text }
                }
            }
        },
        BlockView::Highlights(items) => rsx! {
            div { class: "highlights",
                for item in items {
                    div { class: "highlight",
                        Glyph { icon: item.icon }
                        div {
                            h5 { "{item.label}" }
                            p { "{item.text}" }
                        }
                    }
                }
            }
        },
        BlockView::Cards(cards) => rsx! {
            div { class: "cards",
                for card in cards {
                    div { class: "card",
                        h5 { "{card.title}" }
                        p { "{card.text}" }
                    }
                }
            }
        },
        BlockView::Stat { value, label, text } => rsx! {
            div { class: "stat",
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
                p { "{text}" }
            }
        },
        BlockView::Bullets(points) => rsx! {
            ul { class: "bullets",
                for point in points {
                    li { "{point}" }
                }
            }
        },
        BlockView::Media(media) => rsx! {
            div { class: "case-media",
                for item in media {
                    MediaFrame { media: item }
                }
            }
        },
    }
}

#[component]
fn Section(id: String, section: SectionView) -> Element {
    let SectionView {
        number,
        title,
        blocks,
    } = section;

    // media-only sections run full width
    let class = if blocks.iter().all(|b| matches!(b, BlockView::Media(_))) {
        "case-section wide"
    } else {
        "case-section"
    };

    rsx! {
        FadeIn { id, class: "{class}",
            div { class: "case-section-header",
                if let Some(number) = number {
                    span { class: "case-section-number", "{number}" }
                }
                h2 { class: "case-section-title", "{title}" }
            }
            for block in blocks {
                Block { block }
            }
        }
    }
}

#[component]
fn CaseStudy(slug: String, case_study: CaseStudyView) -> Element {
    let CaseStudyView {
        tags,
        title,
        subtitle,
        challenge,
        role,
        outcome,
        overview,
        sections,
    } = case_study;

    rsx! {
        header { class: "case-header",
            ul { class: "case-tags",
                for tag in tags {
                    li { class: "chip", "{tag}" }
                }
            }
            ParallaxText { id: format!("{slug}-title"),
                h1 { class: "case-title", "{title}" }
            }
            p { class: "case-subtitle", "{subtitle}" }
        }

        div { class: "case-summary",
            Summary { item: challenge }
            Summary { item: role }
            Summary { item: outcome }
        }

        div { class: "case-overview",
            MediaFrame { media: overview }
        }

        for (index, section) in sections.into_iter().enumerate() {
            Section { id: format!("{slug}-section-{index}"), section }
        }
    }
}

#[component]
fn MoreProjects(projects: Vec<MoreProjectView>, link_label: String) -> Element {
    rsx! {
        div { class: "more-projects-list",
            for project in projects {
                Link {
                    class: "more-project",
                    to: Route::Project {
                        slug: project.slug,
                    },
                    h4 { "{project.title}" }
                    span { class: "arrow-link",
                        "{link_label}"
                        Svg { paths: ARROW_RIGHT }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectView(project: ProjectPage) -> Element {
    let ProjectPage {
        slug,
        back_label,
        case_study,
        more_projects_title,
        more_projects,
        view_case_study,
        view_all_projects,
        footer,
        ..
    } = project;

    rsx! {
        article { class: "case-study",
            a { class: "back-link", href: "/#projects",
                Svg { paths: ARROW_LEFT }
                "{back_label}"
            }
            CaseStudy { slug, case_study }
        }

        section { class: "more-projects",
            h2 { class: "section-title", "{more_projects_title}" }
            MoreProjects {
                projects: more_projects,
                link_label: view_case_study,
            }
            a { class: "arrow-link", href: "/#projects",
                "{view_all_projects}"
                Svg { paths: ARROW_RIGHT }
            }
        }

        Footer { footer }
    }
}
