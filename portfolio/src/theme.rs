use std::fmt;

use serde::{Deserialize, Serialize};

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    // stored preference, then the system color scheme, then dark (the site's native palette)
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> Theme {
        match (stored, system_prefers_dark) {
            (Some(theme), _) => theme,
            (None, Some(false)) => Self::Light,
            (None, _) => Self::Dark,
        }
    }

    // translation key for the toggle's accessible label, which names the theme we would
    // switch *to*
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Light => "navbar.theme_dark",
            Self::Dark => "navbar.theme_light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_order() {
        assert_eq!(Theme::resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn stored_form_round_trips() {
        let raw = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(raw, "\"light\"");
        assert_eq!(serde_json::from_str::<Theme>(&raw).unwrap(), Theme::Light);
    }
}
