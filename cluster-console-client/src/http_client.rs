//! Generic HTTP request plumbing.
//!
//! One place for sending requests, logging, reading responses and retrying,
//! so the gateway implementation only deals with URLs and payloads.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::GatewayError;

/// Maximum number of response-body characters echoed into debug logs.
const LOG_BODY_LIMIT: usize = 500;

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response status and body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url_or_action` - URL or action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on success
    /// * `Err(GatewayError::Network | Timeout | RateLimited)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), GatewayError> {
        log::debug!("[gateway] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                GatewayError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[gateway] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            log::warn!("[gateway] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(GatewayError::RateLimited { retry_after });
        }

        // 502/503/504 are transport-level failures and retryable
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[gateway] Server error (HTTP {status_code})");
            return Err(GatewayError::Network {
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response.text().await.map_err(|e| GatewayError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[gateway] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[gateway] JSON parse failed: {e}");
            log::error!("[gateway] Raw response: {}", truncate_for_log(response_text));
            GatewayError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with automatic retries.
    ///
    /// Only transient errors are retried (see [`is_retryable`]), using an
    /// exponential backoff strategy: 100ms, 200ms, 400ms, ... capped at 10s.
    /// `RateLimited` honors the server's `Retry-After` (capped at 30s).
    /// Business errors are returned immediately.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
        max_retries: u32,
    ) -> Result<(u16, String), GatewayError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url_or_action).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder 只能使用一次，重试前必须克隆
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[gateway] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url_or_action).await;
            };

            match Self::execute_request(req, method_name, url_or_action).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[gateway] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| GatewayError::Network {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Whether an error is worth retrying.
///
/// Network errors, timeouts and rate limiting are transient; envelope
/// errors, parse errors and validation errors are not.
pub(crate) fn is_retryable(error: &GatewayError) -> bool {
    matches!(
        error,
        GatewayError::Network { .. } | GatewayError::Timeout { .. } | GatewayError::RateLimited { .. }
    )
}

/// Delay before the next retry attempt.
///
/// Uses the server-provided `Retry-After` (capped at 30s) for rate limits,
/// exponential backoff otherwise.
fn retry_delay(error: &GatewayError, attempt: u32) -> Duration {
    if let GatewayError::RateLimited {
        retry_after: Some(secs),
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

/// Truncate long bodies before echoing them into logs.
fn truncate_for_log(text: &str) -> String {
    if text.chars().count() <= LOG_BODY_LIMIT {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(LOG_BODY_LIMIT).collect();
        format!("{truncated}... (truncated)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        assert!(is_retryable(&GatewayError::Network {
            detail: "err".into()
        }));
    }

    #[test]
    fn retryable_timeout() {
        assert!(is_retryable(&GatewayError::Timeout {
            detail: "err".into()
        }));
    }

    #[test]
    fn retryable_rate_limited() {
        assert!(is_retryable(&GatewayError::RateLimited { retry_after: None }));
    }

    #[test]
    fn not_retryable_api_error() {
        assert!(!is_retryable(&GatewayError::Api {
            code: 1,
            message: "err".into()
        }));
    }

    #[test]
    fn not_retryable_parse_error() {
        assert!(!is_retryable(&GatewayError::Parse {
            detail: "err".into()
        }));
    }

    #[test]
    fn not_retryable_validation_error() {
        assert!(!is_retryable(&GatewayError::Validation("err".into())));
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_first_attempts() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    // ---- retry_delay ----

    #[test]
    fn retry_delay_honors_retry_after() {
        let e = GatewayError::RateLimited {
            retry_after: Some(5),
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));
    }

    #[test]
    fn retry_delay_caps_retry_after() {
        let e = GatewayError::RateLimited {
            retry_after: Some(600),
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn retry_delay_falls_back_to_backoff() {
        let e = GatewayError::Network { detail: "x".into() };
        assert_eq!(retry_delay(&e, 1), Duration::from_millis(200));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, GatewayError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, GatewayError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(GatewayError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- truncate_for_log ----

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_for_log("short"), "short");
    }

    #[test]
    fn truncate_long_body() {
        let long = "a".repeat(LOG_BODY_LIMIT + 10);
        let out = truncate_for_log(&long);
        assert!(out.ends_with("... (truncated)"));
        assert!(out.len() < long.len() + 20);
    }
}
