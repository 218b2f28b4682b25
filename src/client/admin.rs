use reqwest::Method;

use beacon_api_types::{LoginRequest, LoginSession};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Exchange admin credentials for a bearer token and profile. The token
    /// is handed to the caller; the SDK never stores it.
    pub async fn login_admin(&self, credentials: &LoginRequest) -> Result<LoginSession, ApiError> {
        self.request(
            Method::POST,
            "api/admin/login",
            &[],
            Some(credentials),
            None,
        )
        .await
    }
}
