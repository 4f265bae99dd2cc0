use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    sync::Arc,
};

use anyhow::{Context, Error, Result};
use toml::{Table, Value};
use tracing::{Level, debug, instrument, warn};

use crate::locale::Locale;

// the tables are compiled in; switching language never touches the network
const BUNDLED_TABLES: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../locales/en.toml")),
    (Locale::Es, include_str!("../locales/es.toml")),
];

// a single translated value
//
// most keys are plain text, but chip groups and case-study tags are ordered lists and are
// kept as such rather than being joined and split again at render time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Text(String),
    List(Vec<String>),
}

impl Entry {
    fn kind(&self) -> &'static str {
        match self {
            Entry::Text(_) => "text",
            Entry::List(_) => "list",
        }
    }
}

// one locale's strings, flattened from nested toml tables into dotted key paths
// (e.g. `projects.seven_springs.title`)
#[derive(Clone, Debug)]
pub struct TranslationTable {
    entries: BTreeMap<String, Entry>,
}

impl TranslationTable {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn parse(locale: Locale, doc: &str) -> Result<Self> {
        let root: Table = toml::from_str(doc)
            .with_context(|| format!("failed to parse translation table for {locale}"))?;

        let mut entries = BTreeMap::new();
        flatten("", &root, &mut entries)
            .with_context(|| format!("invalid translation table for {locale}"))?;

        debug!(entries = entries.len(), "parsed translation table");
        Ok(TranslationTable { entries })
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut BTreeMap<String, Entry>) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            Value::String(s) => {
                out.insert(key, Entry::Text(s.clone()));
            }
            Value::Array(items) => {
                let list = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        other => Err(Error::msg(format!(
                            "{key}: list items must be strings, found {}",
                            other.type_str()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                out.insert(key, Entry::List(list));
            }
            Value::Table(inner) => flatten(&key, inner, out)?,
            other => {
                return Err(Error::msg(format!(
                    "{key}: expected string, list or table, found {}",
                    other.type_str()
                )));
            }
        }
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    KindMismatch { expected: &'static str, found: &'static str },
}

// a key that exists in some locale but is absent (or shaped differently) in another
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogIssue {
    pub locale: Locale,
    pub key: String,
    pub kind: IssueKind,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{}: missing key {}", self.locale, self.key),
            IssueKind::KindMismatch { expected, found } => write!(
                f,
                "{}: key {} is a {found}, expected a {expected}",
                self.locale, self.key
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TranslationCatalog {
    tables: HashMap<Locale, TranslationTable>,
}

impl TranslationCatalog {
    pub fn bundled() -> Result<Self> {
        Self::from_sources(BUNDLED_TABLES)
    }

    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self> {
        let tables = sources
            .iter()
            .map(|(locale, doc)| -> Result<(Locale, TranslationTable)> {
                Ok((*locale, TranslationTable::parse(*locale, doc)?))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        for locale in Locale::all() {
            if !tables.contains_key(&locale) {
                return Err(Error::msg(format!("no translation table for {locale}")));
            }
        }

        Ok(TranslationCatalog { tables })
    }

    pub fn table(&self, locale: Locale) -> Option<&TranslationTable> {
        self.tables.get(&locale)
    }

    // every key must exist with the same shape in every locale
    //
    // the union of keys across all tables is the reference set, so a key added to only one
    // language is reported against all of the others
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut reference: BTreeMap<&str, &Entry> = BTreeMap::new();
        for locale in Locale::all() {
            if let Some(table) = self.tables.get(&locale) {
                for (key, entry) in &table.entries {
                    reference.entry(key.as_str()).or_insert(entry);
                }
            }
        }

        let mut issues = Vec::new();
        for locale in Locale::all() {
            let Some(table) = self.tables.get(&locale) else {
                continue;
            };

            for (key, expected) in &reference {
                match table.get(key) {
                    None => issues.push(CatalogIssue {
                        locale,
                        key: key.to_string(),
                        kind: IssueKind::Missing,
                    }),
                    Some(found) if found.kind() != expected.kind() => issues.push(CatalogIssue {
                        locale,
                        key: key.to_string(),
                        kind: IssueKind::KindMismatch {
                            expected: expected.kind(),
                            found: found.kind(),
                        },
                    }),
                    Some(_) => {}
                }
            }
        }

        issues
    }

    pub fn keys(&self) -> BTreeSet<&str> {
        self.tables.values().flat_map(|t| t.keys()).collect()
    }
}

// what to do when a page asks for a key that does not exist
//
// development builds panic so that the mistake is found immediately; release builds log and
// render nothing.  the key path itself is never rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    Panic,
    Empty,
}

impl Default for MissingKeyPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            MissingKeyPolicy::Panic
        } else {
            MissingKeyPolicy::Empty
        }
    }
}

// the language provider's value: a locale plus the catalog it reads from
#[derive(Clone, Debug)]
pub struct Translator {
    locale: Locale,
    catalog: Arc<TranslationCatalog>,
    policy: MissingKeyPolicy,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && self.policy == other.policy
            && Arc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl Translator {
    pub fn new(catalog: Arc<TranslationCatalog>, locale: Locale) -> Self {
        Translator {
            locale,
            catalog,
            policy: MissingKeyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn switch(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn try_entry(&self, key: &str) -> Option<&Entry> {
        self.catalog.table(self.locale)?.get(key)
    }

    pub fn text(&self, key: &str) -> &str {
        match self.try_entry(key) {
            Some(Entry::Text(s)) => s.as_str(),
            found => {
                self.missing(key, "text", found);
                ""
            }
        }
    }

    pub fn list(&self, key: &str) -> &[String] {
        match self.try_entry(key) {
            Some(Entry::List(items)) => items.as_slice(),
            found => {
                self.missing(key, "list", found);
                &[]
            }
        }
    }

    fn missing(&self, key: &str, wanted: &str, found: Option<&Entry>) {
        let found = found.map(Entry::kind).unwrap_or("nothing");

        match self.policy {
            MissingKeyPolicy::Panic => {
                panic!("translation {key} ({}): wanted {wanted}, found {found}", self.locale)
            }
            MissingKeyPolicy::Empty => {
                warn!(key, locale = %self.locale, wanted, found, "missing translation")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = r#"
        [navbar]
        about = "About"
        [chips]
        platform = ["Web", "iOS"]
    "#;

    const ES: &str = r#"
        [navbar]
        about = "Sobre mí"
        [chips]
        platform = "Web"
        extra = "solo en español"
    "#;

    fn bundled() -> Arc<TranslationCatalog> {
        Arc::new(TranslationCatalog::bundled().unwrap())
    }

    #[test]
    fn nested_tables_flatten_to_dotted_paths() {
        let table = TranslationTable::parse(Locale::En, EN).unwrap();

        assert_eq!(
            table.get("navbar.about"),
            Some(&Entry::Text(String::from("About")))
        );
        assert_eq!(
            table.get("chips.platform"),
            Some(&Entry::List(vec![String::from("Web"), String::from("iOS")]))
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn non_string_values_are_rejected() {
        assert!(TranslationTable::parse(Locale::En, "count = 3").is_err());
        assert!(TranslationTable::parse(Locale::En, "chips = [1, 2]").is_err());
    }

    #[test]
    fn every_locale_needs_a_table() {
        assert!(TranslationCatalog::from_sources(&[(Locale::En, EN)]).is_err());
    }

    #[test]
    fn validate_reports_missing_and_mismatched_keys() {
        let catalog =
            TranslationCatalog::from_sources(&[(Locale::En, EN), (Locale::Es, ES)]).unwrap();
        let issues = catalog.validate();

        assert!(issues.contains(&CatalogIssue {
            locale: Locale::En,
            key: String::from("chips.extra"),
            kind: IssueKind::Missing,
        }));
        assert!(issues.iter().any(|i| i.locale == Locale::Es
            && i.key == "chips.platform"
            && matches!(i.kind, IssueKind::KindMismatch { .. })));
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn bundled_catalog_is_complete() {
        let catalog = bundled();
        let issues = catalog.validate();

        assert!(issues.is_empty(), "catalog issues: {issues:?}");
    }

    #[test]
    fn every_key_resolves_to_translated_text_in_every_locale() {
        let catalog = bundled();

        for locale in Locale::all() {
            let t = Translator::new(catalog.clone(), locale).with_policy(MissingKeyPolicy::Panic);
            for key in catalog.keys() {
                match t.try_entry(key) {
                    Some(Entry::Text(s)) => {
                        assert!(!s.trim().is_empty(), "{locale}: {key} is blank");
                        assert_ne!(s, key, "{locale}: {key} is untranslated");
                    }
                    Some(Entry::List(items)) => {
                        assert!(!items.is_empty(), "{locale}: {key} is an empty list")
                    }
                    None => panic!("{locale}: {key} is missing"),
                }
            }
        }
    }

    #[test]
    fn switching_locale_changes_text() {
        let mut t = Translator::new(bundled(), Locale::En);
        let english = t.text("navbar.about").to_owned();

        t.switch(Locale::Es);
        assert_eq!(t.locale(), Locale::Es);
        assert_ne!(t.text("navbar.about"), english);
    }

    #[test]
    fn soft_policy_renders_nothing() {
        let t = Translator::new(bundled(), Locale::En).with_policy(MissingKeyPolicy::Empty);

        assert_eq!(t.text("does.not.exist"), "");
        assert!(t.list("does.not.exist").is_empty());
        // asking for a list as text counts as missing too
        assert_eq!(t.text("projects.seven_springs.industry_chips"), "");
    }

    #[test]
    #[should_panic(expected = "does.not.exist")]
    fn loud_policy_panics() {
        let t = Translator::new(bundled(), Locale::En).with_policy(MissingKeyPolicy::Panic);
        t.text("does.not.exist");
    }
}
