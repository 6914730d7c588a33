use crate::data_access::DataAccess;
use crate::models::UserId;
use crate::storage::{DataSource, FileSource, HttpSource};
use std::{env, sync::Arc};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_SOURCE: &str = "data/mockData.json";
const DEFAULT_USER_ID: UserId = 12;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// File path or `http(s)://` URL of the mock dataset.
    pub data_source: String,
    /// Malformed records are errors instead of missing data.
    pub strict_data: bool,
    pub default_user_id: UserId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            strict_data: cfg!(debug_assertions),
            default_user_id: DEFAULT_USER_ID,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            data_source: lookup("APP_DATA_SOURCE").unwrap_or(defaults.data_source),
            strict_data: lookup("APP_STRICT_DATA")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.strict_data),
            default_user_id: parse_or(&lookup, "APP_DEFAULT_USER", defaults.default_user_id),
        }
    }

    pub fn source(&self) -> Arc<dyn DataSource> {
        if self.data_source.starts_with("http://") || self.data_source.starts_with("https://") {
            Arc::new(HttpSource::new(self.data_source.clone()))
        } else {
            Arc::new(FileSource::new(&self.data_source))
        }
    }

    pub fn data_access(&self) -> DataAccess {
        DataAccess::new(self.source(), self.strict_data)
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %value, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_source, "data/mockData.json");
        assert_eq!(config.default_user_id, 12);
        assert_eq!(config.strict_data, cfg!(debug_assertions));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config(&[
            ("PORT", "9000"),
            ("APP_DATA_SOURCE", "http://localhost:3000/mock.json"),
            ("APP_STRICT_DATA", "off"),
            ("APP_DEFAULT_USER", "18"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_source, "http://localhost:3000/mock.json");
        assert!(!config.strict_data);
        assert_eq!(config.default_user_id, 18);
        assert_eq!(config.source().describe(), "http://localhost:3000/mock.json");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config(&[("PORT", "eighty"), ("APP_STRICT_DATA", "maybe")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.strict_data, cfg!(debug_assertions));
    }
}
