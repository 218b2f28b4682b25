//! Explicit admin credentials.
//!
//! Every admin-scoped call takes an [`AdminSession`] argument instead of
//! reading a token from ambient storage, so authentication is a visible
//! dependency at each call site. The session is read-only once constructed;
//! nothing in the SDK ever writes a token back.

use std::fs;
use std::path::Path;

use reqwest::header::HeaderValue;
use thiserror::Error;

use beacon_api_types::LoginSession;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("admin token is empty")]
    EmptyToken,
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error("token contains characters not valid in a header")]
    InvalidHeader,
}

/// Bearer credential for the admin API surface.
#[derive(Debug, Clone)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self { token })
    }

    /// Read a token from a file, trimming surrounding whitespace.
    pub fn from_token_file(path: &Path) -> Result<Self, SessionError> {
        let raw = fs::read_to_string(path).map_err(SessionError::TokenFile)?;
        Self::new(raw.trim())
    }

    pub fn from_login(login: &LoginSession) -> Result<Self, SessionError> {
        Self::new(login.token.clone())
    }

    /// `Authorization` header value for this session.
    pub fn auth_header(&self) -> Result<HeaderValue, SessionError> {
        HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| SessionError::InvalidHeader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_carries_bearer_scheme() {
        let session = AdminSession::new("abc123").expect("session");
        let header = session.auth_header().expect("header");
        assert_eq!(header.to_str().expect("header str"), "Bearer abc123");
    }

    #[test]
    fn blank_token_is_rejected() {
        let err = AdminSession::new("   ").expect_err("blank token");
        assert!(matches!(err, SessionError::EmptyToken));
    }

    #[test]
    fn token_file_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        std::io::Write::write_all(&mut file, b"  tok-1\n").expect("write");
        let session = AdminSession::from_token_file(file.path()).expect("session");
        let header = session.auth_header().expect("header");
        assert_eq!(header.to_str().expect("header str"), "Bearer tok-1");
    }
}
