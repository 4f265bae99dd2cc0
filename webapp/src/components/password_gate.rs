use dioxus::prelude::*;
use tracing::error;

use portfolio::gate::GateForm;

use crate::{
    common::{
        providers::{use_site, use_translator},
        storage::WebSessionStore,
    },
    components::icons::{ARROW_LEFT, EYE, EYE_OFF, LOCK, Svg},
};

// the screen shown in place of a locked case study
//
// a match writes the session flag and hands control back to the page through
// on_authenticate; a mismatch shows the fixed error and empties the field
#[component]
pub fn PasswordGate(slug: String, on_authenticate: EventHandler<()>) -> Element {
    let site = use_site();
    let translator = use_translator();
    let mut form = use_signal(GateForm::default);

    let t = translator.read();
    let contact_href = site.config.links.linkedin.clone();
    let back = t.text("common.back_to_projects");
    let title_before = t.text("gate.title_before");
    let title_emphasis = t.text("gate.title_emphasis");
    let title_after = t.text("gate.title_after");
    let contact = t.text("gate.contact");
    let contact_rest = t.text("gate.contact_rest");
    let placeholder = t.text("gate.placeholder");
    let submit_label = t.text("gate.submit");

    let state = form.read().clone();
    let input_type = state.input_type();
    let reveal_label = t.text(state.reveal_label_key());
    let error = state.error.map(|key| t.text(key));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let unlocked = form
            .write()
            .submit(&site.gate, &mut WebSessionStore, &slug);

        match unlocked {
            Ok(true) => on_authenticate.call(()),
            Ok(false) => {}
            // the secret matched, only remembering it failed, so show the content anyway
            Err(err) => {
                error!("failed to record unlock for {slug}: {err}");
                on_authenticate.call(())
            }
        }
    };

    rsx! {
        section { class: "gate",
            div { class: "gate-card",
                a { class: "back-link", href: "/#projects",
                    Svg { paths: ARROW_LEFT }
                    "{back}"
                }
                span { class: "gate-icon", Svg { paths: LOCK } }
                h1 { class: "gate-title",
                    "{title_before}"
                    span { class: "accent", "{title_emphasis}" }
                    "{title_after}"
                }
                p { class: "gate-contact",
                    a {
                        href: "{contact_href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{contact}"
                    }
                    "{contact_rest}"
                }
                form { class: "gate-form", onsubmit: submit,
                    div { class: "gate-input-row",
                        input {
                            class: "gate-input",
                            r#type: "{input_type}",
                            value: "{state.input}",
                            placeholder: "{placeholder}",
                            autofocus: true,
                            oninput: move |evt| form.write().edit(evt.value()),
                        }
                        button {
                            class: "icon-button gate-reveal",
                            r#type: "button",
                            title: "{reveal_label}",
                            "aria-label": "{reveal_label}",
                            onclick: move |_| form.write().toggle_reveal(),
                            if state.reveal {
                                Svg { paths: EYE_OFF }
                            } else {
                                Svg { paths: EYE }
                            }
                        }
                    }
                    if let Some(error) = error {
                        p { class: "gate-error", role: "alert", "{error}" }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                }
            }
        }
    }
}
