use std::path::PathBuf;

use vitalsim_core::vitals::DEFAULT_MAX_HEART_RATE_LIMIT;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the simulator locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry mirrors any request origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Heart-rate ceiling at startup (default: `150`).
    pub initial_max_hr: i64,
    /// Fixed seed for the random walk. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Directory served under `/dashboard`, if any.
    pub dashboard_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            cors_origins: vec!["*".into()],
            request_timeout_secs: 30,
            initial_max_hr: DEFAULT_MAX_HEART_RATE_LIMIT,
            seed: None,
            dashboard_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `127.0.0.1` |
    /// | `PORT`                 | `8000`      |
    /// | `CORS_ORIGINS`         | `*`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `MAX_HR_LIMIT`         | `150`       |
    /// | `VITALS_SEED`          | unset       |
    /// | `DASHBOARD_DIR`        | unset       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = parse_or(&lookup, "PORT", "u16", defaults.port)?;

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            "u64",
            defaults.request_timeout_secs,
        )?;

        let initial_max_hr = parse_or(&lookup, "MAX_HR_LIMIT", "i64", defaults.initial_max_hr)?;

        let seed = match lookup("VITALS_SEED") {
            Some(raw) => Some(parse_value("VITALS_SEED", "u64", &raw)?),
            None => None,
        };

        let dashboard_dir = lookup("DASHBOARD_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            initial_max_hr,
            seed,
            dashboard_dir,
        })
    }

    /// Whether `*` is among the configured origins.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(raw) => parse_value(var, expected, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.initial_max_hr, 150);
        assert!(config.seed.is_none());
        assert!(config.dashboard_dir.is_none());
        assert!(config.allows_any_origin());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("PORT", "9001"),
            ("CORS_ORIGINS", "http://localhost:5173, http://127.0.0.1:5500,"),
            ("MAX_HR_LIMIT", "-20"),
            ("VITALS_SEED", "42"),
            ("DASHBOARD_DIR", "./dashboard"),
        ])
        .unwrap();

        assert_eq!(config.port, 9001);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5500"]
        );
        assert!(!config.allows_any_origin());
        assert_eq!(config.initial_max_hr, -20);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.dashboard_dir, Some(PathBuf::from("./dashboard")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }

    #[test]
    fn invalid_seed_is_reported() {
        let err = load(&[("VITALS_SEED", "-1")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "VITALS_SEED", .. });
    }
}
