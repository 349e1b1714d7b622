// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the coaching chat backend.
//!
//! Provides [`ChatClient`] which handles request construction, credential
//! attachment, and bounded exponential backoff for transient and
//! rate-limited failures.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

use verve_config::model::ApiConfig;
use verve_core::{ChatError, Identity, Role, VerveError};

use crate::types::{ApiErrorBody, CompletionRequest, ResponsePayload, WireMessage};

/// Maximum number of request attempts per dispatch.
const MAX_ATTEMPTS: u32 = 3;

/// Per-dispatch retry bookkeeping.
///
/// Created fresh for every invocation and discarded on success or
/// exhaustion -- never shared across calls, so concurrent dispatches need
/// no locking.
struct RetryState {
    attempt: u32,
    last_error: Option<ChatError>,
}

impl RetryState {
    fn new() -> Self {
        Self {
            attempt: 0,
            last_error: None,
        }
    }
}

/// HTTP client for chat backend communication.
///
/// The public fallback credential is attached to every request as the
/// `apikey` default header; the Authorization bearer is chosen per dispatch
/// from the resolved identity. Constructed once and shared via `Arc` --
/// there is no process-wide singleton.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    public_key: String,
    base_delay: Duration,
}

impl ChatClient {
    /// Creates a new chat client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, VerveError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.public_key).map_err(|e| {
                VerveError::Config(format!("invalid public key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VerveError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            public_key: config.public_key.clone(),
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
        })
    }

    /// Sends one user message and returns the raw response payload.
    ///
    /// On HTTP 2xx the payload is returned immediately -- exactly one
    /// attempt on first success. Failures retry with exponential backoff
    /// (`base_delay * 2^attempt`) on a single shared attempt counter:
    /// HTTP 429 schedules its backoff wait before the budget is
    /// re-checked, so a rate-limited attempt always waits even when it
    /// was the last one in the budget; other failures only wait when
    /// budget remains. Malformed 2xx bodies are never retried.
    ///
    /// Demo identities never reach this client; the orchestrator routes
    /// them to the demo responder.
    pub async fn dispatch(
        &self,
        message: &str,
        identity: &Identity,
    ) -> Result<ResponsePayload, ChatError> {
        debug_assert!(
            !identity.is_demo(),
            "demo identities must not reach the network layer"
        );

        let body = CompletionRequest {
            messages: vec![WireMessage {
                role: Role::User.to_string(),
                content: message.to_string(),
            }],
            user_id: identity.user_id().map(str::to_string),
        };

        // Bearer falls back to the public credential for anonymous calls.
        let bearer = match identity.session_token() {
            Some(token) => token.expose_secret().to_string(),
            None => self.public_key.clone(),
        };

        let mut state = RetryState::new();
        while state.attempt < MAX_ATTEMPTS {
            match self.attempt_request(&body, &bearer).await {
                Ok(payload) => return Ok(payload),
                Err(err @ ChatError::InvalidFormat(_)) => return Err(err),
                Err(err @ ChatError::RateLimited) => {
                    state.attempt += 1;
                    state.last_error = Some(err);
                    let wait = self.backoff_delay(state.attempt);
                    warn!(
                        attempt = state.attempt,
                        wait_ms = wait.as_millis() as u64,
                        "rate limited, backing off"
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(err) => {
                    state.attempt += 1;
                    if state.attempt >= MAX_ATTEMPTS {
                        state.last_error = Some(err);
                        break;
                    }
                    let wait = self.backoff_delay(state.attempt);
                    warn!(
                        attempt = state.attempt,
                        error = %err,
                        wait_ms = wait.as_millis() as u64,
                        "transient failure, will retry"
                    );
                    state.last_error = Some(err);
                    tokio::time::sleep(wait).await;
                }
            }
        }

        Err(state.last_error.unwrap_or(ChatError::RateLimited))
    }

    async fn attempt_request(
        &self,
        body: &CompletionRequest,
        bearer: &str,
    ) -> Result<ResponsePayload, ChatError> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatError::Network {
                source: Box::new(e),
            })?;

        let status = response.status();
        debug!(status = %status, "chat backend response received");

        if status.is_success() {
            let text = response.text().await.map_err(|e| ChatError::Network {
                source: Box::new(e),
            })?;
            return serde_json::from_str(&text)
                .map_err(|e| ChatError::InvalidFormat(format!("malformed response body: {e}")));
        }

        if status.as_u16() == 429 {
            return Err(ChatError::RateLimited);
        }

        let body_text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body_text) {
            Ok(api_err) => api_err.error,
            Err(_) => body_text,
        };
        Err(ChatError::Http {
            status: status.as_u16(),
            body: message,
        })
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.pow(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_BASE_DELAY_MS: u64 = 20;

    fn test_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            public_key: "pk_test".to_string(),
            session_token: None,
            user_id: None,
            timeout_secs: 5,
            retry_base_delay_ms: TEST_BASE_DELAY_MS,
        }
    }

    fn test_client(base_url: &str) -> ChatClient {
        ChatClient::new(&test_config(base_url)).unwrap()
    }

    fn authenticated() -> Identity {
        Identity::Authenticated {
            session_token: secrecy::SecretString::from("sess-token-123".to_string()),
            user_id: "user-1".to_string(),
        }
    }

    fn reply_body(content: &str) -> serde_json::Value {
        serde_json::json!({"choices": [{"message": {"content": content}}]})
    }

    #[tokio::test]
    async fn success_uses_exactly_one_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Hi!")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let payload = client.dispatch("hello", &authenticated()).await.unwrap();
        assert_eq!(
            crate::validate::extract_content(payload).unwrap(),
            "Hi!"
        );
    }

    #[tokio::test]
    async fn authenticated_dispatch_sends_bearer_and_public_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("apikey", "pk_test"))
            .and(header("authorization", "Bearer sess-token-123"))
            .and(body_partial_json(
                serde_json::json!({"userId": "user-1", "messages": [{"role": "user", "content": "hello"}]}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.dispatch("hello", &authenticated()).await;
        assert!(result.is_ok(), "headers and body should match: {result:?}");
    }

    #[tokio::test]
    async fn anonymous_dispatch_falls_back_to_public_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("apikey", "pk_test"))
            .and(header("authorization", "Bearer pk_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.dispatch("hello", &Identity::Anonymous).await;
        assert!(result.is_ok(), "anonymous bearer should match: {result:?}");
    }

    #[tokio::test]
    async fn anonymous_request_body_omits_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client.dispatch("hello", &Identity::Anonymous).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("userId").is_none());
    }

    #[tokio::test]
    async fn rate_limited_twice_then_success_backs_off_both_times() {
        let server = MockServer::start().await;

        // First two requests return 429, third succeeds.
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("finally")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let started = Instant::now();
        let payload = client.dispatch("hello", &authenticated()).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(
            crate::validate::extract_content(payload).unwrap(),
            "finally"
        );
        // Backoff applied both times: base*2 + base*4.
        let minimum = Duration::from_millis(TEST_BASE_DELAY_MS * 6);
        assert!(
            elapsed >= minimum,
            "expected at least {minimum:?} of backoff, got {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn http_500_makes_exactly_max_attempts_then_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "boom"})),
            )
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.dispatch("hello", &authenticated()).await.unwrap_err();
        match err {
            ChatError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn persistent_rate_limiting_exhausts_and_surfaces_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.dispatch("hello", &authenticated()).await.unwrap_err();
        assert!(matches!(err, ChatError::RateLimited), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_success_body_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.dispatch("hello", &authenticated()).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidFormat(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn non_json_error_body_is_carried_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.dispatch("hello", &authenticated()).await.unwrap_err();
        match err {
            ChatError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_surfaces_network_error() {
        // Bind a server to learn a free port, then shut it down so the
        // address refuses connections.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = test_client(&uri);
        let err = client.dispatch("hello", &authenticated()).await.unwrap_err();
        assert!(matches!(err, ChatError::Network { .. }), "got {err:?}");
    }
}
