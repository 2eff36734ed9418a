use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_STORAGE_DIR: &str = "./storage";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_REVIEW_SCHEDULE: &str = "*/30 * * * * *";
const DEFAULT_REVIEW_MIN_AGE_SECS: u64 = 300;

/// Connection details for the OpenAI-compatible chat completions endpoint.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

pub struct Config {
    pub database_url: String,

    /// Public base URL without trailing slash, used for file links.
    pub app_url: String,
    pub jwt_secret: String,
    pub storage_dir: String,

    /// Registering with this address yields an admin account.
    pub admin_email: Option<String>,

    /// Review poller is disabled when `None`.
    pub llm: Option<LlmConfig>,
    pub review_schedule: String,
    pub review_min_age_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let app_url = required("APP_URL")?;
        Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            var: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let review_min_age_secs = match var("REVIEW_MIN_AGE_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: "REVIEW_MIN_AGE_SECS".to_string(),
                reason: format!("'{}' is not a number of seconds", value),
            })?,
            None => DEFAULT_REVIEW_MIN_AGE_SECS,
        };

        let llm = var("LLM_API_URL").map(|api_url| LlmConfig {
            api_url,
            api_key: var("LLM_API_KEY"),
            model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
        });

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: app_url.trim_end_matches('/').to_string(),
            jwt_secret: required("JWT_SECRET")?,
            storage_dir: var("STORAGE_DIR").unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string()),
            admin_email: var("ADMIN_EMAIL").map(|email| email.trim().to_lowercase()),
            llm,
            review_schedule: var("REVIEW_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_REVIEW_SCHEDULE.to_string()),
            review_min_age_secs,
        })
    }

    /// Session cookies are only marked secure when served over https.
    pub fn secure_cookies(&self) -> bool {
        self.app_url.starts_with("https://")
    }
}
