use std::path::PathBuf;

/// Runtime configuration for a placepull run.
///
/// Loaded from environment variables by [`crate::config::load_app_config`].
/// All knobs except the API key have defaults, so a `.env` with
/// `GOOGLE_PLACES_API_KEY` alone is enough to run the tool.
#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Wait before resubmitting a pagination token. The Places API only
    /// honors a `next_page_token` after a short server-side propagation
    /// delay, so this defaults to 2000 ms.
    pub page_token_delay_ms: u64,
    pub output_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("output_path", &self.output_path)
            .finish()
    }
}
