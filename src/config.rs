use gloo::utils::window;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

const LS_KEY: &str = "daily_log_config_v1";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_AUTHOR_NAME: &str = "Daily Logger";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub author_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Trims both fields and strips trailing slashes from the base URL.
    pub fn validated(&self) -> Result<AppConfig, FormError> {
        let url = self.api_base_url.trim().trim_end_matches('/').to_string();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(FormError::InvalidApiUrl(self.api_base_url.trim().to_string()));
        }
        let name = self.author_name.trim().to_string();
        if name.is_empty() {
            return Err(FormError::MissingAuthor);
        }
        Ok(AppConfig {
            api_base_url: url,
            author_name: name,
        })
    }

    fn from_raw(raw: &str) -> AppConfig {
        serde_json::from_str::<AppConfig>(raw)
            .ok()
            .and_then(|cfg| cfg.validated().ok())
            .unwrap_or_default()
    }
}

/// Reads the saved settings, falling back to defaults on anything unreadable.
pub fn load_config() -> AppConfig {
    let storage = window().local_storage().ok().flatten();
    let Some(storage) = storage else { return AppConfig::default() };
    let Ok(Some(raw)) = storage.get_item(LS_KEY) else { return AppConfig::default() };
    AppConfig::from_raw(&raw)
}

pub fn save_config(config: &AppConfig) {
    let storage = window().local_storage().ok().flatten();
    let Some(storage) = storage else {
        gloo::console::warn!("local storage unavailable, settings not persisted");
        return;
    };
    if let Ok(raw) = serde_json::to_string(config) {
        if storage.set_item(LS_KEY, &raw).is_err() {
            gloo::console::warn!("failed to write settings to local storage");
        }
    }
}
