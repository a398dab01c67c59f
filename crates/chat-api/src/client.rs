//! Per-token HTTP client for the chat service
//!
//! One client per account: the session token, user-agent, and accept
//! headers are baked into the client at construction, so every request
//! carries them without further plumbing. Timeouts and connection
//! handling stay at the reqwest defaults — the cycler's pacing comes
//! from its own sleeps, not from transport tuning.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER};
use tracing::debug;

use common::Secret;

use crate::classify::is_rate_limited;
use crate::constants::{SESSION_HEADER, USER_AGENT};
use crate::error::{Error, Result};
use crate::types::{ChatRequest, NewThreadRequest, PointsBalance, SendOutcome, Thread, ThreadList};

/// HTTP client bound to one account's session token and a fixed base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for one session token.
    ///
    /// Fails only if the token cannot form a valid header value (control
    /// characters, embedded newlines) or the underlying client cannot be
    /// constructed.
    pub fn new(base_url: &str, token: &Secret) -> Result<Self> {
        let mut session = HeaderValue::from_str(token.expose())
            .map_err(|e| Error::InvalidToken(format!("token not usable as header value: {e}")))?;
        session.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, session);
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Http(format!("building HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the reward balance for this account.
    pub async fn check_points(&self) -> Result<PointsBalance> {
        let response = self
            .http
            .get(format!("{}/points", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Http(format!("points request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PointsBalance>()
            .await
            .map_err(|e| Error::Decode(format!("invalid points response: {e}")))
    }

    /// List this account's conversation threads, newest-first as the
    /// service orders them. A response without a `data` array yields an
    /// empty list.
    pub async fn list_threads(&self) -> Result<Vec<Thread>> {
        let response = self
            .http
            .get(format!("{}/threads", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Http(format!("threads request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list = response
            .json::<ThreadList>()
            .await
            .map_err(|e| Error::Decode(format!("invalid threads response: {e}")))?;
        Ok(list.data)
    }

    /// Create a new thread seeded with the given first message.
    ///
    /// The thread id is generated client-side; the service echoes the
    /// created thread back.
    pub async fn create_thread(&self, first_message: &str) -> Result<Thread> {
        let request = NewThreadRequest::new(first_message);
        debug!(thread_id = %request.id, "creating thread");

        let response = self
            .http
            .post(format!("{}/threads", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Http(format!("thread creation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Thread>()
            .await
            .map_err(|e| Error::Decode(format!("invalid thread response: {e}")))
    }

    /// Post one message to a thread.
    ///
    /// An error body carrying the exact rate-limit detail marker returns
    /// `Ok(SendOutcome::RateLimited)` regardless of status code — that is
    /// the one service response the caller must react to. Every other
    /// failure is an `Err` the caller may log and skip.
    pub async fn send_message(&self, thread_id: &str, text: &str) -> Result<SendOutcome> {
        let request = ChatRequest::new(thread_id, text);

        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Http(format!("chat request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            if is_rate_limited(&body) {
                return Ok(SendOutcome::RateLimited);
            }
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::Decode(format!("invalid chat response: {e}")))?;
        Ok(SendOutcome::Sent(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use crate::classify::RATE_LIMIT_DETAIL;

    /// Bind a mock service on an ephemeral port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, &Secret::new("tok-12345")).unwrap()
    }

    #[tokio::test]
    async fn sends_session_headers_on_every_request() {
        let seen: Arc<Mutex<Option<(String, String, String)>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();

        let app = Router::new().route(
            "/points",
            get(move |headers: axum::http::HeaderMap| {
                let captured = captured.clone();
                async move {
                    let pick = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("")
                            .to_string()
                    };
                    *captured.lock().unwrap() =
                        Some((pick("x-session-token"), pick("user-agent"), pick("accept")));
                    Json(json!({"points": 1, "total_points": 2}))
                }
            }),
        );
        let base_url = serve(app).await;

        client(&base_url).check_points().await.unwrap();

        let (session, user_agent, accept) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(session, "tok-12345");
        assert_eq!(user_agent, USER_AGENT);
        assert_eq!(accept, "*/*");
    }

    #[tokio::test]
    async fn check_points_parses_balance() {
        let app = Router::new().route(
            "/points",
            get(|| async { Json(json!({"points": 5, "total_points": 12})) }),
        );
        let base_url = serve(app).await;

        let balance = client(&base_url).check_points().await.unwrap();
        assert_eq!(balance.points, 5);
        assert_eq!(balance.total_points, 12);
    }

    #[tokio::test]
    async fn check_points_error_preserves_status_and_body() {
        let app = Router::new().route(
            "/points",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
        );
        let base_url = serve(app).await;

        let err = client(&base_url).check_points().await.unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("upstream down"), "body: {body}");
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_points_non_json_success_is_decode_error() {
        let app = Router::new().route("/points", get(|| async { "not json" }));
        let base_url = serve(app).await;

        let err = client(&base_url).check_points().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn list_threads_returns_data_in_order() {
        let app = Router::new().route(
            "/threads",
            get(|| async { Json(json!({"data": [{"id": "t-1"}, {"id": "t-2"}]})) }),
        );
        let base_url = serve(app).await;

        let threads = client(&base_url).list_threads().await.unwrap();
        let ids: Vec<&str> = threads.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-2"]);
    }

    #[tokio::test]
    async fn list_threads_missing_data_is_empty() {
        let app = Router::new().route("/threads", get(|| async { Json(json!({})) }));
        let base_url = serve(app).await;

        let threads = client(&base_url).list_threads().await.unwrap();
        assert!(threads.is_empty());
    }

    #[tokio::test]
    async fn list_threads_error_status_is_err() {
        let app = Router::new().route(
            "/threads",
            get(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
        );
        let base_url = serve(app).await;

        let err = client(&base_url).list_threads().await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 401, .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn create_thread_returns_created_thread() {
        // The mock echoes the posted body, as the real service does.
        let app = Router::new().route(
            "/threads",
            post(|Json(body): Json<Value>| async move { Json(body) }),
        );
        let base_url = serve(app).await;

        let thread = client(&base_url)
            .create_thread("Starting new conversation")
            .await
            .unwrap();
        assert!(
            uuid::Uuid::parse_str(&thread.id).is_ok(),
            "created thread id must be the client-generated uuid, got: {}",
            thread.id
        );
    }

    #[tokio::test]
    async fn create_thread_error_status_is_err() {
        let app = Router::new().route(
            "/threads",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base_url = serve(app).await;

        let err = client(&base_url)
            .create_thread("Starting new conversation")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn send_message_success_returns_sent_payload() {
        let app = Router::new().route(
            "/chat",
            post(|| async { Json(json!({"message": "answered"})) }),
        );
        let base_url = serve(app).await;

        let outcome = client(&base_url)
            .send_message("t-1", "What is Bitcoin?")
            .await
            .unwrap();
        match outcome {
            SendOutcome::Sent(payload) => assert_eq!(payload["message"], "answered"),
            SendOutcome::RateLimited => panic!("expected Sent"),
        }
    }

    #[tokio::test]
    async fn send_message_rate_limit_detail_returns_rate_limited() {
        let app = Router::new().route(
            "/chat",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({"detail": RATE_LIMIT_DETAIL})),
                )
            }),
        );
        let base_url = serve(app).await;

        let outcome = client(&base_url)
            .send_message("t-1", "What is Bitcoin?")
            .await
            .unwrap();
        assert!(matches!(outcome, SendOutcome::RateLimited));
    }

    #[tokio::test]
    async fn rate_limit_detail_is_recognized_on_any_error_status() {
        // The service identifies the condition by the body marker, not the
        // status code.
        let app = Router::new().route(
            "/chat",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": RATE_LIMIT_DETAIL})),
                )
            }),
        );
        let base_url = serve(app).await;

        let outcome = client(&base_url)
            .send_message("t-1", "What is DeFi?")
            .await
            .unwrap();
        assert!(matches!(outcome, SendOutcome::RateLimited));
    }

    #[tokio::test]
    async fn send_message_other_error_is_err_with_body() {
        let app = Router::new().route(
            "/chat",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "model unavailable"})),
                )
            }),
        );
        let base_url = serve(app).await;

        let err = client(&base_url)
            .send_message("t-1", "What is DeFi?")
            .await
            .unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("model unavailable"), "body: {body}");
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_token_is_rejected_at_construction() {
        let result = ApiClient::new("http://127.0.0.1:1", &Secret::new("tok\nwith-newline"));
        assert!(
            matches!(result, Err(Error::InvalidToken(_))),
            "tokens with control characters must fail client construction"
        );
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_normalized() {
        let app = Router::new().route(
            "/points",
            get(|| async { Json(json!({"points": 1, "total_points": 1})) }),
        );
        let base_url = serve(app).await;

        let balance = client(&format!("{base_url}/"))
            .check_points()
            .await
            .unwrap();
        assert_eq!(balance.points, 1);
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let err = client("http://127.0.0.1:1").check_points().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)), "got: {err:?}");
    }
}
