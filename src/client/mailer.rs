use reqwest::multipart::{Form, Part};

use beacon_api_types::{AdmissionMailing, CandidateBatch, SendReport};

use super::{AdminSession, ApiClient};
use crate::error::ApiError;

impl ApiClient {
    /// Upload a candidates CSV (`Name,Email,Course` header). Parsing happens
    /// server-side; the response is the parsed candidate set.
    pub async fn upload_candidates_csv(
        &self,
        session: &AdminSession,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<CandidateBatch, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|err| ApiError::InvalidInput(err.to_string()))?;
        let form = Form::new().part("csv", part);
        self.request_multipart("api/admin/admission-mailer/upload-csv", form, Some(session))
            .await
    }

    /// Dispatch one batch of admission mails. Per-recipient substitution is
    /// done by the backend; the report is a single aggregate count.
    pub async fn send_admission_emails(
        &self,
        session: &AdminSession,
        mailing: &AdmissionMailing,
    ) -> Result<SendReport, ApiError> {
        self.request(
            reqwest::Method::POST,
            "api/admin/admission-mailer/send",
            &[],
            Some(mailing),
            Some(session),
        )
        .await
    }
}
