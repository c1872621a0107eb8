// config.rs
use std::env;
use std::fmt;

pub const API_TOKEN: &str = "API_TOKEN";
pub const PROXY_ZONE: &str = "PROXY_ZONE";
pub const WEB_UNBLOCK_ZONE: &str = "WEB_UNBLOCK_ZONE";
pub const LLM_API_KEY: &str = "LLM_API_KEY";

/// Credentials for the scraping stack, read once at start-up.
///
/// None of these are consumed by the extraction path yet; they are carried on
/// the agent so proxy, unblocking and LLM-assisted parsing can be wired in
/// without touching deeper components.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    pub api_token: Option<String>,
    pub proxy_zone: Option<String>,
    pub web_unblock_zone: Option<String>,
    pub llm_api_key: Option<String>,
}

impl AgentConfig {
    /// Loads `.env` from the working directory when present, then reads the
    /// process environment. Variables already set are not overridden by `.env`.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_token: lookup(API_TOKEN),
            proxy_zone: lookup(PROXY_ZONE),
            web_unblock_zone: lookup(WEB_UNBLOCK_ZONE),
            llm_api_key: lookup(LLM_API_KEY),
        }
    }
}

// Only report presence so secrets never reach the logs.
impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn set(v: &Option<String>) -> &'static str {
            if v.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("AgentConfig")
            .field("api_token", &set(&self.api_token))
            .field("proxy_zone", &set(&self.proxy_zone))
            .field("web_unblock_zone", &set(&self.web_unblock_zone))
            .field("llm_api_key", &set(&self.llm_api_key))
            .finish()
    }
}
