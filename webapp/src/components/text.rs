use dioxus::prelude::*;

use portfolio::pages::EmphasizedText;

#[component]
pub fn Emphasized(text: EmphasizedText) -> Element {
    let EmphasizedText {
        before,
        emphasis,
        after,
    } = text;

    rsx! {
        "{before}"
        if let Some(emphasis) = emphasis {
            strong { "{emphasis}" }
        }
        "{after}"
    }
}
