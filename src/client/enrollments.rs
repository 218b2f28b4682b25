use bytes::Bytes;
use reqwest::Method;

use beacon_api_types::{EnrollmentPage, EnrollmentReceipt, NewEnrollment};

use super::{AdminSession, ApiClient, page_query};
use crate::error::ApiError;

impl ApiClient {
    /// Public enrollment submission.
    pub async fn submit_enrollment(
        &self,
        enrollment: &NewEnrollment,
    ) -> Result<EnrollmentReceipt, ApiError> {
        self.request(Method::POST, "api/enrollments", &[], Some(enrollment), None)
            .await
    }

    /// Admin page of enrollments plus the collection total.
    pub async fn list_enrollments(
        &self,
        session: &AdminSession,
        page: u32,
        limit: u32,
    ) -> Result<EnrollmentPage, ApiError> {
        self.request(
            Method::GET,
            "api/admin/enrollments",
            &page_query(page, limit),
            None::<&()>,
            Some(session),
        )
        .await
    }

    /// CSV export of the whole enrollment collection.
    pub async fn export_enrollments(&self, session: &AdminSession) -> Result<Bytes, ApiError> {
        self.fetch_bytes("api/admin/enrollments/export", session)
            .await
    }
}
