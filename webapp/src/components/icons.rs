use dioxus::prelude::*;

use portfolio::projects::Icon;

// stroke icons on a 24x24 grid, drawn in currentColor

pub const ARROW_RIGHT: &[&str] = &["M5 12h14", "M13 6l6 6-6 6"];
pub const ARROW_LEFT: &[&str] = &["M19 12H5", "M11 18l-6-6 6-6"];
pub const EYE: &[&str] = &[
    "M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z",
    "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
];
pub const EYE_OFF: &[&str] = &[
    "M9.9 5.2A9.6 9.6 0 0 1 12 5c6.5 0 10 7 10 7a17 17 0 0 1-2.2 3.2",
    "M6.6 6.6A17 17 0 0 0 2 12s3.5 7 10 7a9.4 9.4 0 0 0 5.4-1.6",
    "M9.9 9.9a3 3 0 0 0 4.2 4.2",
    "M2 2l20 20",
];
pub const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const CLOSE: &[&str] = &["M6 6l12 12", "M18 6L6 18"];
pub const SUN: &[&str] = &[
    "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
    "M12 1v2",
    "M12 21v2",
    "M4.2 4.2l1.4 1.4",
    "M18.4 18.4l1.4 1.4",
    "M1 12h2",
    "M21 12h2",
    "M4.2 19.8l1.4-1.4",
    "M18.4 5.6l1.4-1.4",
];
pub const MOON: &[&str] = &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"];
pub const GLOBE: &[&str] = &[
    "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
    "M2 12h20",
    "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
];
pub const LOCK: &[&str] = &[
    "M5 11h14v10H5z",
    "M8 11V7a4 4 0 0 1 8 0v4",
];

fn glyph(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Check => &["M20 6L9 17l-5-5"],
        Icon::Bolt => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        Icon::Lock => LOCK,
        Icon::Question => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3",
            "M12 17h.01",
        ],
        Icon::Clipboard => &[
            "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
            "M9 2h6v4H9z",
        ],
        Icon::Users => &[
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M23 21v-2a4 4 0 0 0-3-3.9",
            "M16 3.1a4 4 0 0 1 0 7.8",
        ],
        Icon::Layers => &[
            "M12 2L2 7l10 5 10-5-10-5z",
            "M2 17l10 5 10-5",
            "M2 12l10 5 10-5",
        ],
        Icon::Target => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
            "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
    }
}

#[component]
pub fn Svg(paths: &'static [&'static str]) -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}

#[component]
pub fn Glyph(icon: Icon) -> Element {
    rsx! {
        Svg { paths: glyph(icon) }
    }
}
