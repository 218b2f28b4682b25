use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use beacon_api_types::{ApplicationReceipt, NewVolunteerApplication, VolunteerPage};

use super::{AdminSession, ApiClient, page_query};
use crate::error::ApiError;

/// A CV file ready for multipart upload. Constructed through
/// [`crate::forms::volunteer::VolunteerForm::attach_cv`], which enforces the
/// size and extension limits before the file ever reaches form state.
#[derive(Debug, Clone)]
pub struct CvAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ApiClient {
    /// Public volunteer application. Text fields and the CV travel together
    /// in one multipart body.
    pub async fn submit_volunteer_application(
        &self,
        application: &NewVolunteerApplication,
        cv: &CvAttachment,
    ) -> Result<ApplicationReceipt, ApiError> {
        let mut form = Form::new()
            .text("fullName", application.full_name.clone())
            .text("email", application.email.clone())
            .text("phone", application.phone.clone())
            .text(
                "areaOfExpertise",
                application.area_of_expertise.as_str().to_string(),
            )
            .text("shortBio", application.short_bio.clone())
            .text("availability", application.availability.as_str().to_string())
            .text("experience", application.experience.clone())
            .text("motivation", application.motivation.clone());

        let part = Part::bytes(cv.bytes.to_vec())
            .file_name(cv.file_name.clone())
            .mime_str(&cv.content_type)
            .map_err(|err| ApiError::InvalidInput(err.to_string()))?;
        form = form.part("cv", part);

        self.request_multipart("api/volunteer-applications", form, None)
            .await
    }

    /// Admin page of volunteer applications plus the collection total.
    pub async fn list_volunteer_applications(
        &self,
        session: &AdminSession,
        page: u32,
        limit: u32,
    ) -> Result<VolunteerPage, ApiError> {
        self.request(
            Method::GET,
            "api/admin/volunteer-applications",
            &page_query(page, limit),
            None::<&()>,
            Some(session),
        )
        .await
    }

    /// CSV export of the whole volunteer application collection.
    pub async fn export_volunteer_applications(
        &self,
        session: &AdminSession,
    ) -> Result<Bytes, ApiError> {
        self.fetch_bytes("api/admin/volunteer-applications/export", session)
            .await
    }
}
