use tracing::warn;
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Event, EventTarget, Node, Window};

use portfolio::{
    effects::{ElementGeometry, Viewport},
    locale::Locale,
    pages::html_lang,
    theme::{PREFERS_DARK_QUERY, Theme},
};

// thin wrappers around the handful of dom calls the site makes
//
// all of them are best-effort: a missing window or element means we are not in a browser (or
// the element has not mounted yet) and the call quietly does nothing

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn measure(id: &str) -> Option<(ElementGeometry, Viewport)> {
    let window = window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    let height = window.inner_height().ok()?.as_f64()?;

    Some((
        ElementGeometry {
            top: rect.top(),
            height: rect.height(),
        },
        Viewport { height },
    ))
}

pub fn contains(id: &str, target: Option<&EventTarget>) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_ref::<Node>()) else {
        return false;
    };

    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some_and(|el| el.contains(Some(node)))
}

pub fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    if let Err(err) = body.style().set_property("overflow", value) {
        warn!("failed to set body overflow: {err:?}");
    }
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        warn!("failed to set theme attribute: {err:?}");
    }
    if let Err(err) = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
    {
        warn!("failed to set theme class: {err:?}");
    }
}

pub fn apply_locale(locale: Locale) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(err) = root.set_attribute("lang", html_lang(locale)) {
            warn!("failed to set document language: {err:?}");
        }
    }
}

pub fn prefers_dark() -> Option<bool> {
    window()?
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

pub fn browser_languages() -> Vec<String> {
    window()
        .and_then(|w| w.navigator().language())
        .into_iter()
        .collect()
}

// a dom event listener that detaches itself when dropped, so a hook can own one for the
// lifetime of its component
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Listener {
                target,
                event,
                callback,
            }),
            Err(err) => {
                warn!("failed to attach {event} listener: {err:?}");
                None
            }
        }
    }

    pub fn on_window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Listener::new(window()?.into(), event, callback)
    }

    pub fn on_document<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Listener::new(window()?.document()?.into(), event, callback)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach {} listener: {err:?}", self.event);
        }
    }
}
