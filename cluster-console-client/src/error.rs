//! Unified error type for gateway operations.

use thiserror::Error;

/// Error produced by the cluster gateway client.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on
/// retry:
/// - [`Network`](Self::Network) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential
/// backoff (mutating operations only; list requests fail fast so the UI can
/// keep its previous rows on screen).
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("Rate limited")]
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
    },

    /// The service accepted the request but reported a failure in its
    /// response envelope (non-zero `code`).
    #[error("Gateway error ({code}): {message}")]
    Api {
        /// Envelope error code.
        code: i32,
        /// Human-readable message from the service.
        message: String,
    },

    /// Failed to parse the service's response body.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Local validation failed before any network call was made.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl GatewayError {
    /// 是否为预期行为（用户输入、服务端业务拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Api { .. })
    }
}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = GatewayError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_api_error() {
        let e = GatewayError::Api {
            code: 1,
            message: "duplicate name".to_string(),
        };
        assert_eq!(e.to_string(), "Gateway error (1): duplicate name");
    }

    #[test]
    fn display_validation_error() {
        let e = GatewayError::Validation("name is required".to_string());
        assert_eq!(e.to_string(), "Validation error: name is required");
    }

    #[test]
    fn expected_classification() {
        assert!(GatewayError::Validation("x".into()).is_expected());
        assert!(
            GatewayError::Api {
                code: 1,
                message: "x".into()
            }
            .is_expected()
        );
        assert!(
            !GatewayError::Network {
                detail: "x".into()
            }
            .is_expected()
        );
        assert!(!GatewayError::RateLimited { retry_after: None }.is_expected());
    }
}
