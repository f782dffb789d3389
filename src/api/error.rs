use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure taxonomy surfaced to pages. Kept `Clone` so a settled result can
/// live inside a signal and be re-read across renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable response arrived: timeout, DNS failure, refused connection.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `message` holds the server's JSON `message` (or
    /// `error`) field when the body carried one.
    #[error("{}", message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },

    /// 401. The interception layer has already torn down the session and
    /// fired the redirect by the time a caller sees this value.
    #[error("session expired")]
    Unauthorized,

    /// 2xx response whose body did not decode as the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Resolve the display message for one operation: a server-provided
    /// message wins, everything else collapses to the operation's fixed
    /// default. `Unauthorized` is left alone since the redirect preempts
    /// normal error display.
    pub fn or_fallback(self, fallback: &str) -> ApiError {
        match self {
            ApiError::Server {
                status,
                message: Some(msg),
            } if !msg.is_empty() => ApiError::Server {
                status,
                message: Some(msg),
            },
            ApiError::Server { status, .. } => ApiError::Server {
                status,
                message: Some(fallback.to_string()),
            },
            ApiError::Transport(_) => ApiError::Transport(fallback.to_string()),
            ApiError::Decode(_) => ApiError::Decode(fallback.to_string()),
            ApiError::Unauthorized => ApiError::Unauthorized,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: Some("index is rebuilding".to_string()),
        };
        assert_eq!(
            err.or_fallback("Search failed").to_string(),
            "index is rebuilding"
        );
    }

    #[test]
    fn missing_or_empty_server_message_uses_fallback() {
        let bare = ApiError::Server {
            status: 502,
            message: None,
        };
        assert_eq!(bare.or_fallback("Upload failed").to_string(), "Upload failed");

        let empty = ApiError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.or_fallback("Upload failed").to_string(), "Upload failed");
    }

    #[test]
    fn transport_and_decode_use_fallback() {
        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            transport.or_fallback("Failed to fetch documents").to_string(),
            "Failed to fetch documents"
        );

        let decode = ApiError::Decode("missing field `id`".to_string());
        assert_eq!(
            decode.or_fallback("Analysis failed").to_string(),
            "Analysis failed"
        );
    }

    #[test]
    fn unauthorized_is_never_rewritten() {
        let err = ApiError::Unauthorized.or_fallback("Upload failed");
        assert_eq!(err, ApiError::Unauthorized);
    }
}
