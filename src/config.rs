use std::{path::PathBuf, time::Duration};

use tracing::warn;

pub const TIMEOUT_SECS_VAR: &str = "HTTP_SHOULD_TIMEOUT_SECS";
pub const RESOURCE_DIR_VAR: &str = "HTTP_SHOULD_RESOURCE_DIR";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RESOURCE_DIR: &str = "tests/resources";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub timeout: Duration,
    pub resource_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            resource_root: PathBuf::from(DEFAULT_RESOURCE_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(TIMEOUT_SECS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid {}={:?}, using {:?}",
                    TIMEOUT_SECS_VAR, raw, config.timeout
                ),
            }
        }

        if let Some(dir) = lookup(RESOURCE_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.resource_root = PathBuf::from(dir);
        }

        config
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, path::PathBuf, time::Duration};

    use crate::config::{Config, RESOURCE_DIR_VAR, TIMEOUT_SECS_VAR};

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.resource_root, PathBuf::from("tests/resources"));
    }

    #[test]
    fn test_config_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (TIMEOUT_SECS_VAR, "5"),
            (RESOURCE_DIR_VAR, "fixtures/golden"),
        ]));

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.resource_root, PathBuf::from("fixtures/golden"));
    }

    #[test]
    fn test_config_falls_back_on_invalid_values() {
        let config = Config::from_lookup(lookup_from(&[
            (TIMEOUT_SECS_VAR, "soon"),
            (RESOURCE_DIR_VAR, "  "),
        ]));

        assert_eq!(config, Config::default());
    }
}
