use dioxus::prelude::*;

use portfolio::pages::FooterView;

#[component]
pub fn Footer(footer: FooterView) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div {
                    p { class: "footer-name", "{footer.name}" }
                    p { "{footer.role}" }
                    p { "{footer.tagline}" }
                }
                div { class: "footer-meta",
                    p { "{footer.copyright}" }
                    p { "{footer.built_with}" }
                    p { "{footer.thanks}" }
                }
            }
        }
    }
}
