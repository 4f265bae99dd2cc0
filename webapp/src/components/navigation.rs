use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use portfolio::{
    menu::{MenuEvent, MenuState},
    pages::{LinkView, compose_nav},
    theme::Theme,
};

use crate::{
    Route,
    common::{
        dom::{self, Listener},
        providers::{set_locale, toggle_theme, use_site, use_theme, use_translator},
    },
    components::icons::{CLOSE, GLOBE, MENU, MOON, SUN, Svg},
};

const NAV_ID: &str = "site-nav";

// only write the signal when the event actually changes something, so stray key presses and
// clicks do not re-render the navbar
fn dispatch(mut menu: Signal<MenuState>, event: MenuEvent) {
    let mut next = *menu.peek();
    next.apply(event);

    if next != *menu.peek() {
        menu.set(next);
    }
}

#[component]
fn NavBarLink(link: LinkView, on_follow: EventHandler<()>) -> Element {
    let LinkView {
        label,
        href,
        external,
    } = link;

    rsx! {
        if external {
            a {
                class: "navbar-link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_| on_follow.call(()),
                "{label}"
            }
        } else {
            a {
                class: "navbar-link",
                href: "{href}",
                onclick: move |_| on_follow.call(()),
                "{label}"
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let translator = use_translator();
    let theme = use_theme();

    let current = theme();
    let label = translator.read().text(current.toggle_label_key()).to_owned();

    rsx! {
        button {
            class: "icon-button",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |_| toggle_theme(theme),
            match current {
                Theme::Dark => rsx! { Svg { paths: SUN } },
                Theme::Light => rsx! { Svg { paths: MOON } },
            }
        }
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let translator = use_translator();

    let current = translator.read().locale();
    let next = current.next();
    let label = translator.read().text("navbar.language").to_owned();
    let next_name = next.native_name();
    let code = current.code().to_uppercase();

    rsx! {
        button {
            class: "icon-button",
            title: "{label}: {next_name}",
            "aria-label": "{label}",
            onclick: move |_| set_locale(translator, next),
            Svg { paths: GLOBE }
            span { "{code}" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_site();
    let translator = use_translator();
    let menu = use_signal(MenuState::default);
    let follow = use_callback(move |()| dispatch(menu, MenuEvent::LinkFollowed));

    // escape and clicks outside the navbar close the menu
    use_hook(move || {
        let keydown = Listener::on_document("keydown", move |evt| {
            if let Some(key) = evt.dyn_ref::<KeyboardEvent>() {
                dispatch(menu, MenuEvent::from_key(&key.key()));
            }
        });

        let mousedown = Listener::on_document("mousedown", move |evt| {
            let event = if dom::contains(NAV_ID, evt.target().as_ref()) {
                MenuEvent::PointerDownInside
            } else {
                MenuEvent::PointerDownOutside
            };
            dispatch(menu, event);
        });

        Rc::new((keydown, mousedown))
    });

    // the page underneath must not scroll while the overlay is up
    use_effect(move || dom::set_body_overflow(menu.read().body_overflow()));
    use_drop(|| dom::set_body_overflow(""));

    let nav_view = compose_nav(&translator.read(), &site.config.links.cv);
    let state = menu();
    let toggle_label = translator.read().text(state.toggle_label_key()).to_owned();
    let overlay_class = state.overlay_class();

    rsx! {
        header { class: "navbar", id: NAV_ID,
            div { class: "navbar-inner",
                Link {
                    class: "navbar-brand",
                    to: Route::Home {},
                    onclick: move |_| follow.call(()),
                    span { class: "navbar-name", "{nav_view.name}" }
                    span { class: "navbar-role", "{nav_view.role}" }
                }

                nav { class: "navbar-links",
                    for link in nav_view.links.iter().cloned() {
                        NavBarLink { link, on_follow: follow }
                    }
                }

                div { class: "navbar-controls",
                    LanguageSwitcher {}
                    ThemeToggle {}
                    button {
                        class: "icon-button menu-toggle",
                        title: "{toggle_label}",
                        "aria-label": "{toggle_label}",
                        "aria-expanded": state.is_open(),
                        onclick: move |_| dispatch(menu, MenuEvent::Toggle),
                        if state.is_open() {
                            Svg { paths: CLOSE }
                        } else {
                            Svg { paths: MENU }
                        }
                    }
                }
            }

            nav { class: "{overlay_class}",
                for link in nav_view.links.iter().cloned() {
                    NavBarLink { link, on_follow: follow }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
