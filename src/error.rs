use thiserror::Error;

/// Failure modes of a single API call, mirroring the error taxonomy the
/// backend contract defines: transport problems, malformed envelopes, and
/// business rejections carried inside a well-formed envelope.
///
/// Authorization failures are not distinguished; an expired or missing token
/// surfaces as whatever the backend answers with, usually a [`ApiError::Backend`]
/// rejection. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The backend answered with `success=false`; the message is surfaced
    /// verbatim to the user.
    #[error("{0}")]
    Backend(String),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Session(#[from] crate::client::session::SessionError),
}

impl ApiError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed(detail.into())
    }

    /// Message shown to the user for this failure: the backend's own words
    /// when it rejected the request, a generic retry hint otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(message) if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Fallback notification when the backend gave us nothing quotable.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ApiError::Backend("email already enrolled".into());
        assert_eq!(err.user_message(), "email already enrolled");
    }

    #[test]
    fn transport_failures_fall_back_to_generic_text() {
        let err = ApiError::Malformed("not json".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn empty_backend_message_falls_back() {
        let err = ApiError::Backend(String::new());
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }
}
