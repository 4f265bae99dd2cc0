use dioxus::prelude::*;
use tracing::debug;

use portfolio::{
    Site,
    i18n::Translator,
    pages::{Page, PageContext, SiteRoute, compose, document_title},
};

use crate::{
    common::{
        providers::{use_site, use_translator},
        storage::WebSessionStore,
    },
    components::password_gate::PasswordGate,
    home::HomeView,
    not_found::NotFoundView,
    project::ProjectView,
};

// `unlocked_now` covers the render right after a successful gate submit, in case the session
// flag could not be written
fn compose_page(site: &Site, t: &Translator, route: &SiteRoute, unlocked_now: Option<&str>) -> Page {
    let store = WebSessionStore;
    let is_gated = |slug: &str| site.gate.is_gated(slug);
    let is_unlocked =
        |slug: &str| unlocked_now == Some(slug) || site.gate.is_unlocked(&store, slug);

    let ctx = PageContext {
        translator: t,
        linkedin_url: &site.config.links.linkedin,
        is_gated: &is_gated,
        is_unlocked: &is_unlocked,
    };

    debug!(%route, locale = %t.locale(), "composing page");
    compose(route, &ctx)
}

// every route renders through here: compose the page for the active locale and gate state,
// then lay out whichever view came back
#[component]
fn RoutedPage(route: SiteRoute) -> Element {
    let site = use_site();
    let translator = use_translator();
    let mut unlocked = use_signal(|| None::<String>);

    let t = translator.read();
    let page = compose_page(&site, &t, &route, unlocked.read().as_deref());
    let title = document_title(&t, &page);
    let description = t.text("meta.description");

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        match page {
            Page::Home(home) => rsx! {
                HomeView { home }
            },
            Page::Project(project) if project.locked => {
                let slug = project.slug.clone();
                rsx! {
                    PasswordGate {
                        slug: project.slug,
                        on_authenticate: move |_| unlocked.set(Some(slug.clone())),
                    }
                }
            }
            Page::Project(project) => rsx! {
                ProjectView { project }
            },
            Page::NotFound(page) => rsx! {
                NotFoundView { page }
            },
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        RoutedPage { route: SiteRoute::Home }
    }
}

#[component]
pub fn Project(slug: String) -> Element {
    rsx! {
        RoutedPage { route: SiteRoute::Project { slug } }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        RoutedPage {
            route: SiteRoute::Unknown {
                path: format!("/{}", segments.join("/")),
            },
        }
    }
}
