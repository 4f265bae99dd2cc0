use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio::pages::NotFoundPage;

use crate::Route;

#[component]
pub fn NotFoundView(page: NotFoundPage) -> Element {
    rsx! {
        section { class: "not-found",
            h1 { "{page.title}" }
            p { "{page.text}" }
            code { "{page.path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "{page.home_label}" }
        }
    }
}
