use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::GateConfig;

// password gate
//
// a case study listed in the gate config shows a password screen until the visitor types the
// configured secret.  the comparison is a plain, case-sensitive string equality against a value
// that ships to every browser: this is friction in front of unfinished or NDA-adjacent work,
// not a security boundary, and nothing here should be mistaken for one.  there is deliberately
// no hashing, attempt counting or lockout

pub const AUTH_FLAG_PREFIX: &str = "project-auth-";
pub const GATE_ERROR_KEY: &str = "gate.error";

pub fn flag_key(slug: &str) -> String {
    format!("{AUTH_FLAG_PREFIX}{slug}")
}

// session-scoped boolean flags
//
// the browser implementation sits on top of sessionStorage, so flags vanish when the tab does;
// nothing in the application clears them explicitly
pub trait SessionStore {
    fn get_flag(&self, key: &str) -> Option<bool>;

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    flags: HashMap<String, bool>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_owned(), value);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Match,
    NoMatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Unlocked,
    Rejected { message_key: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gate {
    secrets: HashMap<String, String>,
}

impl Gate {
    pub fn new(secrets: HashMap<String, String>) -> Self {
        Gate { secrets }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.secrets.clone())
    }

    pub fn is_gated(&self, slug: &str) -> bool {
        self.secrets.contains_key(slug)
    }

    pub fn verify(&self, slug: &str, candidate: &str) -> GateDecision {
        match self.secrets.get(slug) {
            Some(secret) if secret == candidate => GateDecision::Match,
            _ => GateDecision::NoMatch,
        }
    }

    // a mismatch never touches the store
    pub fn submit<S: SessionStore>(
        &self,
        store: &mut S,
        slug: &str,
        candidate: &str,
    ) -> Result<GateOutcome> {
        match self.verify(slug, candidate) {
            GateDecision::Match => {
                store.set_flag(&flag_key(slug), true)?;
                info!(slug, "project unlocked for this session");
                Ok(GateOutcome::Unlocked)
            }
            GateDecision::NoMatch => {
                debug!(slug, "gate rejected candidate");
                Ok(GateOutcome::Rejected {
                    message_key: GATE_ERROR_KEY,
                })
            }
        }
    }

    // projects without a secret are always open
    pub fn is_unlocked<S: SessionStore>(&self, store: &S, slug: &str) -> bool {
        !self.is_gated(slug) || store.get_flag(&flag_key(slug)).unwrap_or(false)
    }
}

// the gate screen's form state, kept separate from the component so the submit behavior can
// be checked without a browser
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateForm {
    pub input: String,
    pub error: Option<&'static str>,
    pub reveal: bool,
}

impl GateForm {
    pub fn edit(&mut self, value: String) {
        self.input = value;
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
    }

    pub fn input_type(&self) -> &'static str {
        if self.reveal { "text" } else { "password" }
    }

    pub fn reveal_label_key(&self) -> &'static str {
        if self.reveal { "gate.hide" } else { "gate.show" }
    }

    // submits the current input and returns true when the content should be shown
    //
    // the previous error is cleared up front; a rejection sets the fixed message and empties
    // the field
    pub fn submit<S: SessionStore>(&mut self, gate: &Gate, store: &mut S, slug: &str) -> Result<bool> {
        self.error = None;

        match gate.submit(store, slug, &self.input)? {
            GateOutcome::Unlocked => Ok(true),
            GateOutcome::Rejected { message_key } => {
                self.error = Some(message_key);
                self.input.clear();
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Error;

    use super::*;

    const SLUG: &str = "longevity-passport";

    fn gate() -> Gate {
        Gate::new(HashMap::from([(
            String::from(SLUG),
            String::from("helena2024"),
        )]))
    }

    #[test]
    fn wrong_password_is_rejected_without_setting_the_flag() {
        let gate = gate();
        let mut store = MemorySessionStore::new();

        for candidate in ["wrongpass", "", "Helena2024", "helena2024 ", " helena2024", "helena"] {
            assert_eq!(gate.verify(SLUG, candidate), GateDecision::NoMatch);
            assert_eq!(
                gate.submit(&mut store, SLUG, candidate).unwrap(),
                GateOutcome::Rejected {
                    message_key: GATE_ERROR_KEY
                }
            );
        }

        assert_eq!(store.get_flag("project-auth-longevity-passport"), None);
        assert!(!gate.is_unlocked(&store, SLUG));
    }

    #[test]
    fn exact_password_sets_the_flag() {
        let gate = gate();
        let mut store = MemorySessionStore::new();

        assert_eq!(gate.verify(SLUG, "helena2024"), GateDecision::Match);
        assert_eq!(
            gate.submit(&mut store, SLUG, "helena2024").unwrap(),
            GateOutcome::Unlocked
        );
        assert_eq!(store.get_flag("project-auth-longevity-passport"), Some(true));
        assert!(gate.is_unlocked(&store, SLUG));
    }

    #[test]
    fn flags_are_per_project() {
        let gate = Gate::new(HashMap::from([
            (String::from("a"), String::from("one")),
            (String::from("b"), String::from("two")),
        ]));
        let mut store = MemorySessionStore::new();

        // a's secret does not open b
        assert_eq!(
            gate.submit(&mut store, "b", "one").unwrap(),
            GateOutcome::Rejected {
                message_key: GATE_ERROR_KEY
            }
        );
        gate.submit(&mut store, "a", "one").unwrap();

        assert!(gate.is_unlocked(&store, "a"));
        assert!(!gate.is_unlocked(&store, "b"));
    }

    #[test]
    fn ungated_projects_are_open_and_never_match() {
        let gate = gate();
        let store = MemorySessionStore::new();

        assert!(!gate.is_gated("seven-springs"));
        assert!(gate.is_unlocked(&store, "seven-springs"));
        assert_eq!(gate.verify("seven-springs", ""), GateDecision::NoMatch);
    }

    #[test]
    fn form_clears_input_and_shows_error_on_mismatch() {
        let gate = gate();
        let mut store = MemorySessionStore::new();
        let mut form = GateForm::default();

        form.edit(String::from("wrongpass"));
        assert!(!form.submit(&gate, &mut store, SLUG).unwrap());
        assert_eq!(form.input, "");
        assert_eq!(form.error, Some(GATE_ERROR_KEY));

        form.edit(String::from("helena2024"));
        assert!(form.submit(&gate, &mut store, SLUG).unwrap());
        assert_eq!(form.error, None);
        assert_eq!(store.get_flag(&flag_key(SLUG)), Some(true));
    }

    #[test]
    fn reveal_toggles_the_input_type() {
        let mut form = GateForm::default();
        assert_eq!(form.input_type(), "password");

        form.toggle_reveal();
        assert_eq!(form.input_type(), "text");
        assert_eq!(form.reveal_label_key(), "gate.hide");
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get_flag(&self, _key: &str) -> Option<bool> {
            None
        }

        fn set_flag(&mut self, _key: &str, _value: bool) -> Result<()> {
            Err(Error::msg("storage disabled"))
        }
    }

    #[test]
    fn storage_failure_surfaces_only_on_match() {
        let gate = gate();

        assert!(gate.submit(&mut BrokenStore, SLUG, "helena2024").is_err());
        assert!(gate.submit(&mut BrokenStore, SLUG, "nope").is_ok());
    }
}
