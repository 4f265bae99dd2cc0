use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, debug, instrument, warn};

pub mod config;
pub mod effects;
pub mod gate;
pub mod i18n;
pub mod locale;
pub mod menu;
pub mod pages;
pub mod projects;
pub mod theme;

use config::SiteConfig;
use gate::Gate;
use i18n::TranslationCatalog;

// storage keys
//
// locale and theme live in local storage so that they survive across sessions, while gate
// flags are written to session storage (see gate.rs) and disappear with the tab
pub const STORAGE_PREFIX: &str = "portfolio";
pub const LOCALE_STORAGE_KEY: &str = "locale";
pub const THEME_STORAGE_KEY: &str = "theme";

// everything the frontend needs that is fixed for the lifetime of the page
//
// this is built once before the first render and handed to the component tree through
// context, so that nothing downstream has to reach for a global
#[derive(Clone, Debug)]
pub struct Site {
    pub config: Arc<SiteConfig>,
    pub catalog: Arc<TranslationCatalog>,
    pub gate: Gate,
}

// the frontend passes the site around as a component prop, which needs equality; the shared
// parts compare by identity
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
            && Arc::ptr_eq(&self.catalog, &other.catalog)
            && self.gate == other.gate
    }
}

impl Site {
    #[instrument(level=Level::DEBUG)]
    pub fn bundled() -> Result<Self> {
        let config = config::bundled_config()?;
        let catalog = Arc::new(TranslationCatalog::bundled()?);

        let issues = catalog.validate();
        for issue in &issues {
            warn!("translation catalog: {issue}");
        }
        debug!(issues = issues.len(), "validated translation catalog");

        let gate = Gate::from_config(&config.gate);

        Ok(Site {
            config,
            catalog,
            gate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_site_builds() {
        let site = Site::bundled().unwrap();

        assert!(site.catalog.validate().is_empty());
        assert!(site.gate.is_gated("longevity-passport"));
    }
}
