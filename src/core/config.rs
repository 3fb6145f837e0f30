/// Exit transition length of the detail modal.
pub const MODAL_CLOSE_DELAY_MS: u32 = 300;

const FALLBACK_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin serving `/api/clientes` and `/api/exportar`, without trailing slash.
    pub api_base_url: String,
    pub modal_close_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(FALLBACK_BASE_URL)
    }
}

impl AppConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            modal_close_delay_ms: MODAL_CLOSE_DELAY_MS,
        }
    }

    /// Base URL from `CLIENT_BOARD_API_BASE_URL` at build time, otherwise the page origin.
    pub fn from_browser() -> Self {
        if let Some(base_url) = option_env!("CLIENT_BOARD_API_BASE_URL") {
            return Self::with_base_url(base_url);
        }
        match page_origin() {
            Some(origin) => Self::with_base_url(&origin),
            None => Self::default(),
        }
    }
}

fn page_origin() -> Option<String> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window().and_then(|w| w.location().origin().ok())
    } else {
        None
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        let config = AppConfig::with_base_url("https://kanban.example.com//");
        assert_eq!(config.api_base_url, "https://kanban.example.com");
        assert_eq!(config.modal_close_delay_ms, 300);
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:5000");
    }
}
