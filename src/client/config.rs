use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PREDICT_PATH: &str = "/predict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the emotion detection service, shown on the docs page
    pub api_url: String,
    pub predict_path: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads the process environment; callers load `.env` first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            api_url: read("EMOTION_API_URL", DEFAULT_API_URL),
            predict_path: read("EMOTION_API_PREDICT_PATH", DEFAULT_PREDICT_PATH),
            log_level: read("LOG_LEVEL", "info"),
        }
    }

    /// Full URL of the prediction endpoint, joined with exactly one `/`.
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.predict_url())
    }

    /// Route `LOG_LEVEL` into `RUST_LOG` so `env_logger::init` picks it up.
    pub fn apply_log_level(&self) {
        env::set_var("RUST_LOG", &self.log_level);
    }
}
