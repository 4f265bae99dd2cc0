use dioxus::prelude::*;

use portfolio::effects::fade_style;

use crate::common::effects::{use_parallax, use_scroll_fade};

// text that drifts up into place as it scrolls through the viewport
#[component]
pub fn ParallaxText(id: String, #[props(default)] class: String, children: Element) -> Element {
    let style = use_parallax(id.clone());
    let transform = style.read().transform();

    rsx! {
        div {
            id: "{id}",
            class: "parallax-text {class}",
            style: "transform: {transform};",
            {children}
        }
    }
}

// fades and rises into place the first time it comes into view
#[component]
pub fn FadeIn(
    id: String,
    #[props(default)] class: String,
    #[props(default)] delay_ms: u32,
    children: Element,
) -> Element {
    let reveal = use_scroll_fade(id.clone());
    let css = fade_style(reveal.read().is_revealed(), delay_ms).css();

    rsx! {
        div { id: "{id}", class: "fade-in {class}", style: "{css}", {children} }
    }
}
