#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use portfolio::Site;

mod common;
use common::{providers, style};

mod components;
use components::navigation::NavBar;

mod home;
mod not_found;
mod project;

mod page;
use page::{Home, NotFound, Project};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/projects/:slug")]
        Project { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // everything in the site bundle is compiled in, so this only fails on a broken build
    let site = use_hook(|| Site::bundled().map_err(|err| format!("{err:#}")));

    match site {
        Ok(site) => rsx! {
            Portfolio { site }
        },
        Err(err) => {
            error!("failed to load site: {err}");
            rsx! {
                div { class: "fatal", "{err}" }
            }
        }
    }
}

#[component]
fn Portfolio(site: Site) -> Element {
    // locale and theme are resolved here, synchronously, so the first frame already has the
    // right language and palette
    providers::use_site_providers(site);

    rsx! {
        style { "{style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
