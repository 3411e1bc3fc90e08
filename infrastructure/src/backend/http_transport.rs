//! reqwest-based transport to the debate backend

use super::protocol::{BackendResponse, error_detail};
use async_trait::async_trait;
use debate_application::{BackendRequest, Transport, TransportError};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends backend requests as JSON `POST`s
///
/// A single call is a single attempt; retries are driven by the caller.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &BackendRequest) -> Result<String, TransportError> {
        let url = self.url(request.endpoint());
        debug!("POST {} ({})", url, request.kind());

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }
        if !status.is_success() {
            let detail = error_detail(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let decoded: BackendResponse = serde_json::from_str(&body)
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;
        debug!("{} returned {} chars", request.kind(), decoded.response.len());
        Ok(decoded.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::PerspectiveInput;
    use mockito::Matcher;
    use serde_json::json;

    fn chat() -> BackendRequest {
        BackendRequest::Chat {
            system_message: "You are Perspective A".into(),
            user_message: "Present your opening position".into(),
        }
    }

    #[tokio::test]
    async fn test_chat_request_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/routes/chat/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "system_message": "You are Perspective A",
                "user_message": "Present your opening position",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response": "AI poses real risks."}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url(), DEFAULT_TIMEOUT).unwrap();
        let text = transport.send(&chat()).await.unwrap();

        assert_eq!(text, "AI poses real risks.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_research_paper_request_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/routes/chat/research_paper")
            .match_body(Matcher::Json(json!({
                "topic": "UBI",
                "perspectives": [{"stance": "For", "content": "Reduces poverty."}],
                "system_message": "Write a paper",
            })))
            .with_status(200)
            .with_body(r#"{"response": "**Abstract**\nText"}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(format!("{}/", server.url()), DEFAULT_TIMEOUT).unwrap();
        let request = BackendRequest::ResearchPaper {
            topic: "UBI".into(),
            perspectives: vec![PerspectiveInput::new("For", "Reduces poverty.")],
            system_message: "Write a paper".into(),
        };
        let text = transport.send(&request).await.unwrap();

        assert_eq!(text, "**Abstract**\nText");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/routes/chat/")
            .with_status(429)
            .with_body(r#"{"detail": "slow down"}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            transport.send(&chat()).await.unwrap_err(),
            TransportError::RateLimited
        );
    }

    #[tokio::test]
    async fn test_error_status_uses_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/routes/chat/")
            .with_status(500)
            .with_body(r#"{"detail": "Error processing message: upstream timeout"}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            transport.send(&chat()).await.unwrap_err(),
            TransportError::Status {
                status: 500,
                detail: "Error processing message: upstream timeout".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_without_detail_uses_reason() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/routes/chat/")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            transport.send(&chat()).await.unwrap_err(),
            TransportError::Status {
                status: 404,
                detail: "Not Found".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_success_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/routes/chat/")
            .with_status(200)
            .with_body("plain text, not json")
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url(), DEFAULT_TIMEOUT).unwrap();
        let err = transport.send(&chat()).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidResponse(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport =
            HttpTransport::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(5))
                .unwrap();

        let err = transport.send(&chat()).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
