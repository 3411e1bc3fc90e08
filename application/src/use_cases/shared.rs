//! Shared utilities for use cases.
//!
//! Contains the retrying send used by every use case that talks to the
//! backend (GetResponse, GeneratePaper).

use crate::config::RetryPolicy;
use crate::ports::transport::{BackendRequest, SendError, Transport};
use tracing::{debug, warn};

/// Send a request, retrying retryable failures with exponential backoff.
///
/// Attempts the request up to `policy.max_attempts()` times. Non-retryable
/// errors are returned immediately; after exhaustion the last error is
/// returned with the number of attempts made.
pub(crate) async fn send_with_retry<T: Transport + ?Sized>(
    transport: &T,
    request: &BackendRequest,
    policy: &RetryPolicy,
) -> Result<String, SendError> {
    let mut retry = 0;
    loop {
        debug!(
            endpoint = request.endpoint(),
            attempt = retry + 1,
            "Sending {} request",
            request.kind()
        );

        match transport.send(request).await {
            Ok(body) => return Ok(body),
            Err(e) if e.is_retryable() && retry < policy.max_retries => {
                let backoff = policy.backoff_for(retry);
                warn!(
                    attempt = retry + 1,
                    backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "Backend request failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                retry += 1;
            }
            Err(e) => {
                return Err(SendError {
                    attempts: retry + 1,
                    source: e,
                });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{ScriptedTransport, assert_gap};
    use super::*;
    use crate::ports::transport::TransportError;
    use std::time::Duration;
    use tokio::time::Instant;

    fn chat() -> BackendRequest {
        BackendRequest::Chat {
            system_message: "system".into(),
            user_message: "user".into(),
        }
    }

    fn server_error() -> TransportError {
        TransportError::Status {
            status: 500,
            detail: "Internal Server Error".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_needs_one_attempt() {
        let transport = ScriptedTransport::always(Ok("hello".into()));
        let body = send_with_retry(&transport, &chat(), &RetryPolicy::default())
            .await
            .unwrap();
        assert_eq!(body, "hello");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_then_success_backs_off() {
        let transport = ScriptedTransport::new(vec![
            Err(TransportError::RateLimited),
            Err(TransportError::RateLimited),
            Ok("third time".into()),
        ]);
        let start = Instant::now();
        let body = send_with_retry(&transport, &chat(), &RetryPolicy::default())
            .await
            .unwrap();

        assert_eq!(body, "third time");
        let times = transport.call_times();
        assert_eq!(times.len(), 3);
        assert_gap(times[0] - start, 0);
        assert_gap(times[1] - times[0], 1000);
        assert_gap(times[2] - times[1], 2000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_surfaces_last_error() {
        let transport = ScriptedTransport::always(Err(server_error()));
        let start = Instant::now();
        let err = send_with_retry(&transport, &chat(), &RetryPolicy::default())
            .await
            .unwrap_err();

        assert_eq!(err.attempts, 4);
        assert_eq!(err.source, server_error());
        assert_eq!(transport.call_count(), 4);
        // 1s + 2s + 4s of backoff
        assert_gap(Instant::now() - start, 7000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_response_is_not_retried() {
        let transport =
            ScriptedTransport::always(Err(TransportError::InvalidResponse("not json".into())));
        let err = send_with_retry(&transport, &chat(), &RetryPolicy::default())
            .await
            .unwrap_err();
        assert_eq!(err.attempts, 1);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_errors_are_retried() {
        let transport = ScriptedTransport::new(vec![
            Err(TransportError::Network("connection reset".into())),
            Ok("recovered".into()),
        ]);
        let policy = RetryPolicy::default().with_initial_backoff(Duration::from_millis(250));
        let body = send_with_retry(&transport, &chat(), &policy).await.unwrap();
        assert_eq!(body, "recovered");
        let times = transport.call_times();
        assert_gap(times[1] - times[0], 250);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retries_policy() {
        let transport = ScriptedTransport::always(Err(TransportError::RateLimited));
        let err = send_with_retry(&transport, &chat(), &RetryPolicy::none())
            .await
            .unwrap_err();
        assert_eq!(err.attempts, 1);
        assert_eq!(err.source, TransportError::RateLimited);
    }
}
