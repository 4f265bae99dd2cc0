use dioxus::prelude::*;
use tracing::{Level, debug, instrument};

use portfolio::{
    LOCALE_STORAGE_KEY, Site, THEME_STORAGE_KEY,
    i18n::Translator,
    locale::Locale,
    theme::Theme,
};

use crate::common::{
    dom,
    storage::{get_local_storage, set_local_storage},
};

// site-wide state lives in three contexts: the immutable site bundle, the active translator
// (which carries the locale), and the theme
//
// locale and theme are resolved inside use_hook, so they are settled before the first render
// and the page never flashes the wrong palette or language

#[instrument(level=Level::DEBUG, skip_all)]
fn initial_locale(site: &Site) -> Locale {
    let stored = get_local_storage::<Locale>(LOCALE_STORAGE_KEY);
    let locale = Locale::resolve(stored, &dom::browser_languages(), site.config.default_locale);

    debug!(?stored, %locale, "resolved locale");
    locale
}

#[instrument(level=Level::DEBUG)]
fn initial_theme() -> Theme {
    let stored = get_local_storage::<Theme>(THEME_STORAGE_KEY);
    let theme = Theme::resolve(stored, dom::prefers_dark());

    debug!(?stored, %theme, "resolved theme");
    theme
}

pub fn use_site_providers(site: Site) {
    let catalog = site.catalog.clone();
    let locale = use_hook(|| initial_locale(&site));

    let theme = use_hook(|| {
        let theme = initial_theme();
        dom::apply_theme(theme);
        theme
    });

    use_context_provider(|| site);
    let translator = use_context_provider(|| Signal::new(Translator::new(catalog, locale)));
    let theme = use_context_provider(|| Signal::new(theme));

    use_effect(move || dom::apply_theme(theme()));
    use_effect(move || dom::apply_locale(translator.read().locale()));
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

pub fn use_translator() -> Signal<Translator> {
    use_context::<Signal<Translator>>()
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

// both setters persist the choice, the effects above push it into the document

pub fn set_locale(mut translator: Signal<Translator>, locale: Locale) {
    if translator.peek().locale() == locale {
        return;
    }

    debug!(%locale, "switching locale");
    translator.write().switch(locale);
    set_local_storage(LOCALE_STORAGE_KEY, locale);
}

pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = theme.peek().toggled();

    debug!(theme = %next, "switching theme");
    theme.set(next);
    set_local_storage(THEME_STORAGE_KEY, next);
}
