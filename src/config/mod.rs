use config::{Config, ConfigBuilder, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::store::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    pub key: String,
    pub value: String,
}

/// Initial contents of a [`Dataset`], read from TOML:
///
/// ```toml
/// strict = true
///
/// [[entries]]
/// key = "server.port"
/// value = "6379"
/// ```
///
/// With `strict` (the default) entries go through [`Dataset::add`] and a
/// repeated key is an error. Otherwise they go through [`Dataset::set`] and
/// the last occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    pub strict: bool,
    #[serde(default)]
    pub entries: Vec<SeedEntry>,
}

pub fn load_config(path: &str) -> std::result::Result<SeedConfig, config::ConfigError> {
    let config = finish(builder()?.add_source(File::with_name(path)))?;
    debug!(path, strict = config.strict, entries = config.entries.len(), "loaded seed config");
    Ok(config)
}

pub fn parse_config(toml: &str) -> std::result::Result<SeedConfig, config::ConfigError> {
    finish(builder()?.add_source(File::from_str(toml, FileFormat::Toml)))
}

fn builder() -> std::result::Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Config::builder().set_default("strict", true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> std::result::Result<SeedConfig, config::ConfigError> {
    builder.build()?.try_deserialize()
}

impl SeedConfig {
    pub fn build(&self) -> Result<Dataset> {
        let mut dataset = Dataset::new();
        for SeedEntry { key, value } in &self.entries {
            if self.strict {
                dataset.add(key, value)?;
            } else {
                if dataset.exists(key) {
                    warn!(key = key.as_str(), "seed entry overwrites an earlier value");
                }
                dataset.set(key, value);
            }
        }

        debug!(entries = dataset.len(), strict = self.strict, "seeded dataset");
        Ok(dataset)
    }
}

impl Dataset {
    pub fn from_config_file(path: &str) -> Result<Self> {
        load_config(path)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatasetError;

    const SEED: &str = r#"
        [[entries]]
        key = "app.name"
        value = "demo"

        [[entries]]
        key = "app.version"
        value = "1.0"

        [[entries]]
        key = "db.url"
        value = "memory"
    "#;

    #[test]
    fn strict_is_the_default() {
        let config = parse_config(SEED).unwrap();
        assert!(config.strict);
        assert_eq!(config.entries.len(), 3);
        assert_eq!(
            config.entries[0],
            SeedEntry { key: "app.name".into(), value: "demo".into() },
        );
    }

    #[test]
    fn entries_are_optional() {
        let config = parse_config("strict = false").unwrap();
        assert!(!config.strict);
        assert!(config.entries.is_empty());
        assert!(config.build().unwrap().is_empty());
    }

    #[test]
    fn build_seeds_every_entry() {
        let dataset = parse_config(SEED).unwrap().build().unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get_started_with("app.").len(), 2);
        assert_eq!(dataset.get("db.url").as_deref(), Some("memory"));
    }

    #[test]
    fn strict_build_rejects_duplicates() {
        let config = SeedConfig {
            strict: true,
            entries: vec![
                SeedEntry { key: "a".into(), value: "1".into() },
                SeedEntry { key: "a".into(), value: "2".into() },
            ],
        };
        let err = config.build().unwrap_err();
        assert!(matches!(err, DatasetError::NotUnique(v) if v.key() == "a"));
    }

    #[test]
    fn relaxed_build_keeps_last_value() {
        let config = SeedConfig {
            strict: false,
            entries: vec![
                SeedEntry { key: "a".into(), value: "1".into() },
                SeedEntry { key: "a".into(), value: "2".into() },
            ],
        };
        let dataset = config.build().unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("a").as_deref(), Some("2"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Dataset::from_config_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, DatasetError::Config(_)));
    }
}
