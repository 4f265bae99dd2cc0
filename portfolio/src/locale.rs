use std::{fmt, str::FromStr};

use anyhow::Error;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn all() -> Vec<Self> {
        vec![Self::En, Self::Es]
    }

    // bcp47 primary subtag, also used for <html lang>
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    // the switcher labels each language in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    // accepts full language tags ("es-MX", "en_GB") and matches on the primary subtag
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::all().into_iter().find(|l| l.code() == primary)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    // startup resolution
    //
    // an explicit choice by the visitor wins, then the first browser language we support,
    // then the site default.  this runs before the first render so the page never paints in
    // the wrong language
    pub fn resolve(stored: Option<Locale>, browser: &[String], default: Locale) -> Locale {
        if let Some(locale) = stored {
            return locale;
        }

        browser
            .iter()
            .find_map(|tag| Self::from_tag(tag))
            .unwrap_or(default)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::msg(format!("unsupported locale: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_on_primary_subtag() {
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de-DE"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn stored_preference_wins() {
        let browser = vec![String::from("en-US")];
        assert_eq!(
            Locale::resolve(Some(Locale::Es), &browser, Locale::En),
            Locale::Es
        );
    }

    #[test]
    fn browser_languages_are_tried_in_order() {
        let browser = vec![
            String::from("fr-FR"),
            String::from("es-AR"),
            String::from("en"),
        ];
        assert_eq!(Locale::resolve(None, &browser, Locale::En), Locale::Es);
        assert_eq!(Locale::resolve(None, &[], Locale::Es), Locale::Es);
    }

    #[test]
    fn next_cycles_through_every_locale() {
        let mut seen = vec![Locale::En];
        let mut current = Locale::En.next();
        while current != Locale::En {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Locale::all());
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("xx".parse::<Locale>().is_err());
    }
}
