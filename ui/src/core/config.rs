//! Runtime configuration for the page session.

use serde::{Deserialize, Serialize};

/// Endpoints and timings used by the create form.
///
/// Every field has a default so a page only needs to override what differs.
/// On the web the optional `window.qrStudioConfig` object is merged in;
/// native builds read `QRSTUDIO_BASE_URL` for the origin relative endpoints
/// resolve against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub preview_endpoint: String,
    pub submit_action: String,
    pub debounce_ms: u64,
    pub initial_preview_delay_ms: u64,
    pub toast_timeout_ms: u64,
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            preview_endpoint: "/preview-qr".into(),
            submit_action: "/create-qr".into(),
            debounce_ms: 400,
            initial_preview_delay_ms: 500,
            toast_timeout_ms: 5_000,
            history_capacity: 10,
        }
    }
}

impl AppConfig {
    /// Load overrides from the host environment, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::core::platform::read_page_global("qrStudioConfig") {
                Some(Ok(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
                    tracing::warn!("ignoring malformed qrStudioConfig: {err}");
                    Self::default()
                }),
                Some(Err(err)) => {
                    tracing::warn!("unable to read qrStudioConfig: {err}");
                    Self::default()
                }
                None => Self::default(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut config = Self::default();
            if let Ok(base) = std::env::var("QRSTUDIO_BASE_URL") {
                config.base_url = base;
            }
            config
        }
    }

    /// Absolute (or page-relative on the web) preview URL.
    pub fn preview_url(&self) -> String {
        join_url(&self.base_url, &self.preview_endpoint)
    }

    pub fn submit_url(&self) -> String {
        join_url(&self.base_url, &self.submit_action)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = AppConfig::default();
        assert_eq!(config.preview_url(), "/preview-qr");
        assert_eq!(config.submit_url(), "/create-qr");
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"base_url":"https://qr.example/","debounce_ms":250}"#)
                .unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.preview_url(), "https://qr.example/preview-qr");
        assert_eq!(config.toast_timeout_ms, 5_000);
    }
}
