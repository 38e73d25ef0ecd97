//! Runtime configuration of the page.
//!
//! Each setting is looked up in the host page first (a `<meta>` tag, so a
//! deployed `index.html` can be edited without rebuilding), then in the
//! environment captured at build time, then falls back to a default.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const API_URL_META: &str = "vinhos-api-url";
const LOG_LEVEL_META: &str = "vinhos-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base address of the classification service, without trailing slash.
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Reads the host page and the build environment.
    pub fn load() -> Self {
        Self::resolve(
            meta_content(API_URL_META).or_else(|| option_env!("VINHOS_API_URL").map(String::from)),
            meta_content(LOG_LEVEL_META)
                .or_else(|| option_env!("VINHOS_LOG_LEVEL").map(String::from)),
        )
    }

    pub fn resolve(api_base_url: Option<String>, log_level: Option<String>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
