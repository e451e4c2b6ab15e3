//! Application Configuration
//!
//! Values baked in at build time from environment variables, e.g.
//! `TAXONOMY_API_URL=https://api.example.com/api/v1 trunk build --release`.

const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";
const DEFAULT_PAGE_LIMIT: u32 = 10;
const DEFAULT_TOKEN_KEY: &str = "token";
const DEFAULT_TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Categories per page
    pub page_limit: u32,
    /// localStorage key holding the bearer token
    pub token_key: String,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TAXONOMY_API_URL"),
            option_env!("TAXONOMY_PAGE_LIMIT"),
            option_env!("TAXONOMY_TOKEN_KEY"),
        )
    }

    fn from_values(api_url: Option<&str>, page_limit: Option<&str>, token_key: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_limit = match page_limit.map(|raw| (raw, raw.trim().parse::<u32>())) {
            Some((_, Ok(limit))) if limit > 0 => limit,
            Some((raw, _)) => {
                log::warn!("[CONFIG] ignoring invalid TAXONOMY_PAGE_LIMIT {:?}", raw);
                defaults.page_limit
            }
            None => defaults.page_limit,
        };

        let token_key = token_key
            .map(str::to_string)
            .filter(|key| !key.is_empty())
            .unwrap_or(defaults.token_key);

        Self {
            api_base_url,
            page_limit,
            token_key,
            toast_duration_ms: defaults.toast_duration_ms,
        }
    }
}
