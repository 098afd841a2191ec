//! Registration request/response handling.
//!
//! The HTTP exchange itself is delegated to a [`RegistrationTransport`] so the same client runs
//! over browser `fetch` in the web crate and over scripted transports in tests and the tester.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::presenter::ErrorCategory;
use crate::session::AttendeeStatus;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Validated registration payload, serialized as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AttendeeStatus,
}

/// Parsed JSON body of a successful registration response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerAck(pub Value);

impl ServerAck {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("request exceeded its timeout")]
    TimedOut,
    #[error("no response: {0}")]
    Unreachable(String),
}

/// Performs one JSON POST and reports the raw response.
///
/// Implementations must honour `request.timeout` and report [`TransportFailure::TimedOut`] when
/// it elapses.
#[async_trait(?Send)]
pub trait RegistrationTransport {
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Request timeout. Please try again.")]
    Timeout,
    #[error("Network error. Please check your connection and try again.")]
    Network { detail: String },
    /// Non-2xx response. `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response from server. Please try again.")]
    MalformedResponse { status: u16, detail: String },
    #[error("Registration failed. Please try again.")]
    Encode(String),
}

impl RegistrationError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Timeout | Self::Network { .. } => ErrorCategory::Network,
            Self::Server { .. } | Self::MalformedResponse { .. } | Self::Encode(_) => {
                ErrorCategory::Server
            }
        }
    }
}

impl From<TransportFailure> for RegistrationError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::TimedOut => Self::Timeout,
            TransportFailure::Unreachable(detail) => Self::Network { detail },
        }
    }
}

/// Map a raw response onto the registration outcome.
///
/// # Errors
///
/// Non-2xx responses become [`RegistrationError::Server`]; a 2xx body that is not JSON becomes
/// [`RegistrationError::MalformedResponse`].
pub fn classify_response(response: &TransportResponse) -> Result<ServerAck, RegistrationError> {
    let parsed = serde_json::from_str::<Value>(&response.body);
    if response.is_success() {
        return parsed
            .map(ServerAck)
            .map_err(|err| RegistrationError::MalformedResponse {
                status: response.status,
                detail: err.to_string(),
            });
    }

    let reported = parsed.ok().and_then(|body| {
        body.get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .map(str::to_string)
    });
    Err(RegistrationError::Server {
        status: response.status,
        message: reported.unwrap_or_else(|| format!("HTTP error! status: {}", response.status)),
    })
}

pub struct RegistrationClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T> RegistrationClient<T>
where
    T: RegistrationTransport,
{
    pub const fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// # Errors
    ///
    /// Returns [`RegistrationError::Encode`] if the payload cannot be serialized.
    pub fn build_request(
        &self,
        input: &RegistrationInput,
    ) -> Result<TransportRequest, RegistrationError> {
        let body =
            serde_json::to_string(input).map_err(|err| RegistrationError::Encode(err.to_string()))?;
        Ok(TransportRequest {
            url: self.config.register_url(),
            content_type: JSON_CONTENT_TYPE,
            body,
            timeout: self.config.timeout(),
        })
    }

    /// Post one registration. No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns the classified transport or server failure.
    pub async fn submit(&self, input: &RegistrationInput) -> Result<ServerAck, RegistrationError> {
        let request = self.build_request(input)?;
        log::debug!("registration: POST {}", request.url);

        let outcome = match self.transport.post_json(&request).await {
            Ok(response) => classify_response(&response),
            Err(failure) => Err(RegistrationError::from(failure)),
        };

        match &outcome {
            Ok(ack) => log::info!("registration: accepted (id {:?})", ack.id()),
            Err(err) => log::error!("registration: failed: {err:?}"),
        }
        outcome
    }
}

/// Enforces `request.timeout` around another transport using the tokio timer.
#[cfg(any(feature = "async", test))]
pub struct TimeoutTransport<T> {
    inner: T,
}

#[cfg(any(feature = "async", test))]
impl<T> TimeoutTransport<T> {
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    pub const fn inner(&self) -> &T {
        &self.inner
    }
}

#[cfg(any(feature = "async", test))]
#[async_trait(?Send)]
impl<T> RegistrationTransport for TimeoutTransport<T>
where
    T: RegistrationTransport,
{
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        tokio::time::timeout(request.timeout, self.inner.post_json(request))
            .await
            .unwrap_or(Err(TransportFailure::TimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Canned {
        outcome: Result<TransportResponse, TransportFailure>,
        seen: RefCell<Vec<TransportRequest>>,
    }

    impl Canned {
        fn new(outcome: Result<TransportResponse, TransportFailure>) -> Self {
            Self {
                outcome,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl RegistrationTransport for Canned {
        async fn post_json(
            &self,
            request: &TransportRequest,
        ) -> Result<TransportResponse, TransportFailure> {
            self.seen.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    struct Stalled;

    #[async_trait(?Send)]
    impl RegistrationTransport for Stalled {
        async fn post_json(
            &self,
            _request: &TransportRequest,
        ) -> Result<TransportResponse, TransportFailure> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(TransportResponse::new(201, "{}"))
        }
    }

    fn input() -> RegistrationInput {
        RegistrationInput {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "98765 43210".into(),
            status: AttendeeStatus::Couple,
        }
    }

    #[test]
    fn request_carries_json_body_and_timeout() {
        let client = RegistrationClient::new(
            ApiConfig::default(),
            Canned::new(Ok(TransportResponse::new(201, "{}"))),
        );
        let request = client.build_request(&input()).unwrap();
        assert_eq!(request.url, "https://backend-siyc.onrender.com/api/register");
        assert_eq!(request.content_type, "application/json");
        assert_eq!(request.timeout, Duration::from_millis(50_000));
        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["status"], "couple");
        assert_eq!(body["phone"], "98765 43210");
    }

    #[test]
    fn created_with_json_body_succeeds() {
        let client = RegistrationClient::new(
            ApiConfig::default(),
            Canned::new(Ok(TransportResponse::new(201, r#"{"id":"abc"}"#))),
        );
        let ack = block_on(client.submit(&input())).expect("201 is success");
        assert_eq!(ack.id(), Some("abc"));
        assert_eq!(client.transport().seen.borrow().len(), 1);
    }

    #[test]
    fn server_error_uses_payload_message() {
        let err = classify_response(&TransportResponse::new(
            400,
            r#"{"error":"duplicate email"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate email");
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn server_error_without_payload_is_generic() {
        let err = classify_response(&TransportResponse::new(502, "<html>Bad gateway</html>"))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");

        let err = classify_response(&TransportResponse::new(500, r#"{"error":"  "}"#)).unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn non_json_success_is_malformed() {
        let err = classify_response(&TransportResponse::new(200, "ok")).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::MalformedResponse { status: 200, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Unexpected response from server. Please try again."
        );
    }

    #[test]
    fn transport_failures_map_to_network_messages() {
        let client = RegistrationClient::new(
            ApiConfig::default(),
            Canned::new(Err(TransportFailure::Unreachable("Failed to fetch".into()))),
        );
        let err = block_on(client.submit(&input())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Network error. Please check your connection and try again."
        );
        assert_eq!(err.category(), ErrorCategory::Network);

        let timeout = RegistrationError::from(TransportFailure::TimedOut);
        assert_eq!(timeout.to_string(), "Request timeout. Please try again.");
        assert_eq!(timeout.category(), ErrorCategory::Network);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_request_times_out_after_bound() {
        let client = RegistrationClient::new(ApiConfig::default(), TimeoutTransport::new(Stalled));
        let started = tokio::time::Instant::now();
        let err = client.submit(&input()).await.unwrap_err();
        assert_eq!(err, RegistrationError::Timeout);
        let waited = started.elapsed();
        assert!(waited >= Duration::from_secs(50));
        assert!(waited < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_wrapper_passes_fast_responses_through() {
        let transport = TimeoutTransport::new(Canned::new(Ok(TransportResponse::new(
            200,
            r#"{"id":"fast"}"#,
        ))));
        let client = RegistrationClient::new(ApiConfig::default(), transport);
        let ack = client.submit(&input()).await.unwrap();
        assert_eq!(ack.id(), Some("fast"));
        assert_eq!(client.transport().inner().seen.borrow().len(), 1);
    }
}
