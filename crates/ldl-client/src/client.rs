//! HTTP client for the remote prediction service.

use ldl_core::PredictionBackend;
use ldl_model::{LipidPanel, RemoteServiceError};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::RemoteSettings;
use crate::types::{HealthResponse, PredictRequest, PredictResponse};

/// User agent string for service requests.
const USER_AGENT_VALUE: &str = concat!("ldl-predictor/", env!("CARGO_PKG_VERSION"));

/// Error bodies longer than this are cut before being stored.
const MAX_ERROR_BODY: usize = 256;

/// Client for the remote LDL-C prediction service.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    settings: RemoteSettings,
}

impl RemoteClient {
    /// Creates a client for the service described by `settings`.
    pub fn new(settings: &RemoteSettings) -> Result<Self, RemoteServiceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        // Proxies from the environment never apply to a service on this host.
        if is_loopback(&settings.base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(|e| {
            RemoteServiceError::Network(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    pub fn settings(&self) -> &RemoteSettings {
        &self.settings
    }

    /// Posts the panel and returns the unrounded LDL-C value.
    pub async fn predict_ldl(&self, panel: &LipidPanel) -> Result<f64, RemoteServiceError> {
        if !self.settings.enabled {
            return Err(RemoteServiceError::Disabled);
        }
        let url = self.settings.predict_url();
        tracing::debug!("Posting prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest::from(panel))
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        interpret_response(status, &body)
    }

    /// Queries the service root and returns its status message.
    pub async fn health(&self) -> Result<String, RemoteServiceError> {
        let url = self.settings.health_url();
        tracing::debug!("Checking service health at {}", url);

        let response = self.client.get(&url).send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        let health: HealthResponse = serde_json::from_str(&body)
            .map_err(|e| RemoteServiceError::MalformedBody(e.to_string()))?;
        Ok(health.message)
    }
}

impl PredictionBackend for RemoteClient {
    async fn predict(&self, panel: &LipidPanel) -> Result<f64, RemoteServiceError> {
        self.predict_ldl(panel).await
    }
}

/// Decide what a prediction response means.
///
/// Only a 2xx status whose body carries a finite `LDL-C` number is a
/// success.
pub fn interpret_response(status: u16, body: &str) -> Result<f64, RemoteServiceError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }
    let response: PredictResponse = serde_json::from_str(body)
        .map_err(|e| RemoteServiceError::MalformedBody(e.to_string()))?;
    if response.ldl_c.is_finite() {
        Ok(response.ldl_c)
    } else {
        Err(RemoteServiceError::NonFiniteValue)
    }
}

fn status_error(status: u16, body: &str) -> RemoteServiceError {
    RemoteServiceError::Status {
        status,
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    }
}

fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url).is_ok_and(|url| {
        matches!(
            url.host_str(),
            Some("localhost" | "127.0.0.1" | "[::1]")
        )
    })
}

fn network_error(err: reqwest::Error) -> RemoteServiceError {
    RemoteServiceError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RemoteClient::new(&RemoteSettings::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_is_loopback() {
        assert!(is_loopback("http://127.0.0.1:8000"));
        assert!(is_loopback("http://localhost/"));
        assert!(!is_loopback(crate::DEFAULT_BASE_URL));
        assert!(!is_loopback("not a url"));
    }

    #[test]
    fn test_interpret_success() {
        assert_eq!(interpret_response(200, r#"{"LDL-C": 118.27}"#), Ok(118.27));
    }

    #[test]
    fn test_interpret_error_status() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            RemoteServiceError::Status {
                status: 500,
                body: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_truncates_long_body() {
        let body = "x".repeat(1000);
        match interpret_response(502, &body) {
            Err(RemoteServiceError::Status { body, .. }) => assert_eq!(body.len(), MAX_ERROR_BODY),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_interpret_malformed_body() {
        for body in ["", "not json", r#"{"LDL-C": "high"}"#, r#"{"value": 1}"#] {
            assert!(matches!(
                interpret_response(200, body),
                Err(RemoteServiceError::MalformedBody(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_disabled_client_never_connects() {
        let settings = RemoteSettings {
            enabled: false,
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: Some(1),
        };
        let client = RemoteClient::new(&settings).unwrap();
        let panel = LipidPanel::new(200.0, 50.0, 150.0).unwrap();
        assert_eq!(
            client.predict_ldl(&panel).await,
            Err(RemoteServiceError::Disabled)
        );
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let client = RemoteClient::new(&RemoteSettings::with_base_url("not a url")).unwrap();
        let panel = LipidPanel::new(200.0, 50.0, 150.0).unwrap();
        let err = client.predict_ldl(&panel).await.unwrap_err();
        assert!(err.is_transport());
    }
}
