use siyc_core::config::ApiConfig;

/// API settings for this build, honouring `SIYC_API_BASE_URL` and `SIYC_API_TIMEOUT_MS` when
/// they were set at compile time. Invalid overrides fall back to the defaults.
#[must_use]
pub fn api_config() -> ApiConfig {
    resolve(option_env!("SIYC_API_BASE_URL"), option_env!("SIYC_API_TIMEOUT_MS"))
}

fn resolve(base_url: Option<&str>, timeout_ms: Option<&str>) -> ApiConfig {
    ApiConfig::with_overrides(base_url, timeout_ms).unwrap_or_else(|err| {
        log::warn!("config: ignoring build overrides: {err}");
        ApiConfig::default()
    })
}
