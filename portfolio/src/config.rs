use std::{collections::HashMap, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

use crate::locale::Locale;

// the site configuration ships inside the binary, there is no server to fetch it from
pub const BUNDLED_CONFIG: &str = include_str!("../site.toml");

// portfolio configuration
//
// everything that is neither translated text nor page layout: outbound links, the fallback
// locale and the gate secrets
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub default_locale: Locale,
    pub links: LinkConfig,
    pub gate: GateConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinkConfig {
    pub cv: String,
    pub linkedin: String,
}

// gate secrets, keyed by project slug
//
// these are cleartext and end up in the wasm bundle where anyone can read them.  the gate
// only adds friction in front of a case study; it provides no confidentiality whatsoever
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GateConfig {
    #[serde(default)]
    pub secrets: HashMap<String, String>,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    // the error is deliberately not echoed with the document, since it holds the secrets
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

pub fn bundled_config() -> Result<Arc<SiteConfig>> {
    Ok(Arc::new(parse_config(BUNDLED_CONFIG)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = bundled_config().unwrap();

        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(
            config.gate.secrets.get("longevity-passport").map(String::as_str),
            Some("helena2024")
        );
        assert!(config.links.cv.starts_with("https://"));
    }

    #[test]
    fn gate_table_is_optional() {
        let doc = r#"
            [config]
            default_locale = "es"

            [config.links]
            cv = "https://example.com/cv"
            linkedin = "https://example.com/in"

            [config.gate]
        "#;

        let config = parse_config(doc).unwrap();
        assert_eq!(config.default_locale, Locale::Es);
        assert!(config.gate.secrets.is_empty());
    }

    #[test]
    fn missing_links_is_an_error() {
        let doc = r#"
            [config]
            default_locale = "en"
            [config.gate]
        "#;

        assert!(parse_config(doc).is_err());
    }
}
