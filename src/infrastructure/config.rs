use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Clone, Debug)]
pub struct Config {
    /// Bearer token for the upstream metadata API
    pub api_key: String,
    pub tmdb_api_url: String,
    pub tmdb_image_url: String,
    pub request_timeout: Option<Duration>,
    pub port: u16,
    pub static_dir: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup("API_KEY").unwrap_or_default(),
            tmdb_api_url: lookup("TMDB_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            tmdb_image_url: lookup("TMDB_IMAGE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            request_timeout: lookup("TMDB_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.api_key, "");
        assert_eq!(config.tmdb_api_url, DEFAULT_API_URL);
        assert_eq!(config.tmdb_image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, "static");
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("API_KEY", "secret"),
            ("TMDB_API_URL", "http://127.0.0.1:9000/"),
            ("TMDB_TIMEOUT_SECS", "7"),
            ("PORT", "not-a-port"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]);
        let config = Config::from_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.tmdb_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(7)));
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        // SAFETY: serialised with every other test that touches the environment
        unsafe {
            env::set_var("PORT", "4321");
        }
        let config = Config::from_env();
        unsafe {
            env::remove_var("PORT");
        }
        assert_eq!(config.port, 4321);
    }
}
