use crate::models::{
    energy::{CurrentMetrics, DailyRecord},
    error::AppError,
    rate_config::RateConfig,
    summary::EnergySummary,
    telemetry::TimelineSample,
};
use serde::{Deserialize, de::DeserializeOwned};

// CONSTANTS
const FALLBACK_BASE_URL: &str = "http://localhost:8000/api";
const API_PREFIX: &str = "/api";

const CURRENT_PATH: &str = "/energy/current";
const SUMMARY_PATH: &str = "/energy/summary";
const DAILY_PATH: &str = "/energy/daily";
const TIMELINE_PATH: &str = "/energy/timeline";
const CONFIG_PATH: &str = "/config";

const GENERIC_REJECTION: &str = "Save failed";

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`. Without an explicit base URL the API is
    /// assumed to live under `/api` on the page's own origin.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| {
                page_origin().map_or_else(
                    || FALLBACK_BASE_URL.to_string(),
                    |origin| format!("{origin}{API_PREFIX}"),
                )
            }),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ConfigUpdateResponse {
    #[serde(default)]
    config: Option<RateConfig>,
}

/// Extracts the message from an error body: a string `detail`, the first
/// `msg` of a `detail` list, or a generic fallback.
pub fn rejection_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_REJECTION.to_string();
    };

    match &value["detail"] {
        serde_json::Value::String(detail) => detail.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item["msg"].as_str())
            .unwrap_or(GENERIC_REJECTION)
            .to_string(),
        _ => GENERIC_REJECTION.to_string(),
    }
}

// DASHBOARD CLIENT
/// HTTP client for the energy dashboard API.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_current(&self) -> Result<CurrentMetrics, AppError> {
        self.get(CURRENT_PATH).await
    }

    pub async fn fetch_summary(&self) -> Result<EnergySummary, AppError> {
        self.get(SUMMARY_PATH).await
    }

    pub async fn fetch_daily(&self) -> Result<Vec<DailyRecord>, AppError> {
        self.get(DAILY_PATH).await
    }

    pub async fn fetch_timeline(&self) -> Result<Vec<TimelineSample>, AppError> {
        self.get(TIMELINE_PATH).await
    }

    pub async fn fetch_config(&self) -> Result<RateConfig, AppError> {
        self.get(CONFIG_PATH).await
    }

    /// Submits new settings and returns the values the server accepted.
    /// Settings outside the allowed ranges are rejected locally and never sent.
    pub async fn update_config(&self, config: &RateConfig) -> Result<RateConfig, AppError> {
        config.validate()?;

        let response = self
            .http
            .post(self.config.url(CONFIG_PATH))
            .json(config)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ServerRejection(rejection_detail(&body)));
        }

        let echoed: ConfigUpdateResponse = response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))?;

        Ok(echoed.config.unwrap_or(*config))
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.config.url(path))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Timeout
        } else if error.is_request() {
            AppError::FetchFailure(format!("Request error: {error}"))
        } else {
            AppError::FetchFailure(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::FetchFailure(format!("Resource not found: {status}")),
            400..=499 => AppError::FetchFailure(format!("Client error {status}: {body}")),
            500..=599 => AppError::FetchFailure(format!("Server error {status}: {body}")),
            _ => AppError::FetchFailure(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the live snapshot using default configuration.
pub async fn fetch_current() -> Result<CurrentMetrics, AppError> {
    DashboardClient::new()?.fetch_current().await
}

/// Fetches the rolling summary using default configuration.
pub async fn fetch_summary() -> Result<EnergySummary, AppError> {
    DashboardClient::new()?.fetch_summary().await
}

/// Fetches the per-day breakdown using default configuration.
pub async fn fetch_daily() -> Result<Vec<DailyRecord>, AppError> {
    DashboardClient::new()?.fetch_daily().await
}

/// Fetches the last 24 hours of samples using default configuration.
pub async fn fetch_timeline() -> Result<Vec<TimelineSample>, AppError> {
    DashboardClient::new()?.fetch_timeline().await
}

/// Fetches the rate configuration using default configuration.
pub async fn fetch_config() -> Result<RateConfig, AppError> {
    DashboardClient::new()?.fetch_config().await
}

/// Submits rate configuration using default configuration.
pub async fn update_config(config: RateConfig) -> Result<RateConfig, AppError> {
    DashboardClient::new()?.update_config(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_fallback() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig::builder().base_url("https://plant.example/api/").build();
        assert_eq!(
            config.url(TIMELINE_PATH),
            "https://plant.example/api/energy/timeline"
        );
        assert_eq!(config.url(CONFIG_PATH), "https://plant.example/api/config");
    }

    #[test]
    fn test_rejection_detail_string() {
        let body = r#"{"detail": "Rate locked by administrator"}"#;
        assert_eq!(rejection_detail(body), "Rate locked by administrator");
    }

    #[test]
    fn test_rejection_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "voltage"], "msg": "Input should be less than or equal to 600", "type": "less_than_equal"}]}"#;
        assert_eq!(
            rejection_detail(body),
            "Input should be less than or equal to 600"
        );
    }

    #[test]
    fn test_rejection_detail_fallback() {
        assert_eq!(rejection_detail("<html>502</html>"), "Save failed");
        assert_eq!(rejection_detail(r#"{"error": "nope"}"#), "Save failed");
        assert_eq!(rejection_detail(r#"{"detail": []}"#), "Save failed");
    }

    #[test]
    fn test_update_echo_shapes() {
        let echoed: ConfigUpdateResponse = serde_json::from_str(
            r#"{"status": "ok", "config": {"rate_per_kwh": 0.25, "voltage": 480, "power_factor": 0.9}}"#,
        )
        .unwrap();
        assert_eq!(echoed.config.unwrap().voltage, 480.0);

        let bare: ConfigUpdateResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(bare.config.is_none());
    }
}
