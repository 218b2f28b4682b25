//! Volunteer application form controller, including the CV attachment
//! checks that run before a file is accepted into form state.

use bytes::Bytes;
use thiserror::Error;

use beacon_api_types::{AreaOfExpertise, NewVolunteerApplication, VolunteerAvailability};

use super::rules::{self, FieldErrors};
use super::{SubmitOutcome, SubmitState};
use crate::client::{ApiClient, CvAttachment};

/// 5 MiB, matching the backend's upload cap.
pub const MAX_CV_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_CV_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CvError {
    #[error("CV must be 5MB or smaller")]
    TooLarge,
    #[error("CV must be a PDF, DOC, or DOCX file")]
    UnsupportedType,
}

#[derive(Debug, Default)]
pub struct VolunteerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub area_of_expertise: Option<AreaOfExpertise>,
    pub short_bio: String,
    pub availability: Option<VolunteerAvailability>,
    pub experience: String,
    pub motivation: String,
    cv: Option<CvAttachment>,
    state: SubmitState,
    errors: FieldErrors,
    application_id: Option<i64>,
}

impl VolunteerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn cv(&self) -> Option<&CvAttachment> {
        self.cv.as_ref()
    }

    pub fn application_id(&self) -> Option<i64> {
        self.application_id
    }

    /// Accept a CV into form state after checking size and extension. An
    /// oversized or wrong-type file is rejected outright and never attached,
    /// independent of the required-field validation.
    pub fn attach_cv(&mut self, file_name: &str, bytes: Bytes) -> Result<(), CvError> {
        if bytes.len() > MAX_CV_BYTES {
            return Err(CvError::TooLarge);
        }
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !ALLOWED_CV_EXTENSIONS.contains(&extension.as_str()) {
            return Err(CvError::UnsupportedType);
        }

        let content_type = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        self.cv = Some(CvAttachment {
            file_name: file_name.to_string(),
            content_type,
            bytes,
        });
        Ok(())
    }

    fn validate(&mut self) -> Option<NewVolunteerApplication> {
        let mut errors = FieldErrors::new();

        rules::require(&mut errors, "fullName", &self.full_name, "Full name is required");
        rules::require_email(&mut errors, "email", &self.email);
        rules::require(&mut errors, "phone", &self.phone, "Phone number is required");
        let area = rules::require_choice(
            &mut errors,
            "areaOfExpertise",
            self.area_of_expertise,
            "Please select your area of expertise",
        );
        rules::require(&mut errors, "shortBio", &self.short_bio, "Short bio is required");
        let availability = rules::require_choice(
            &mut errors,
            "availability",
            self.availability,
            "Please select your availability",
        );
        rules::require(
            &mut errors,
            "experience",
            &self.experience,
            "Please describe your experience",
        );
        rules::require(
            &mut errors,
            "motivation",
            &self.motivation,
            "Please share your motivation",
        );
        if self.cv.is_none() {
            errors.insert("cv", "Please upload your CV".to_string());
        }

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }

        Some(NewVolunteerApplication {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            area_of_expertise: area?,
            short_bio: self.short_bio.trim().to_string(),
            availability: availability?,
            experience: self.experience.trim().to_string(),
            motivation: self.motivation.trim().to_string(),
        })
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            return SubmitOutcome::AlreadySubmitted;
        }
        let Some(payload) = self.validate() else {
            return SubmitOutcome::Blocked;
        };
        // validate() guarantees the attachment is present.
        let Some(cv) = self.cv.clone() else {
            return SubmitOutcome::Blocked;
        };

        self.state = SubmitState::Submitting;
        match api.submit_volunteer_application(&payload, &cv).await {
            Ok(receipt) => {
                self.state = SubmitState::Submitted;
                self.errors.clear();
                self.application_id = Some(receipt.application_id);
                SubmitOutcome::Accepted {
                    confirmation: format!(
                        "Thank you for volunteering! Your application reference is #{}.",
                        receipt.application_id
                    ),
                }
            }
            Err(err) => {
                self.state = SubmitState::Idle;
                SubmitOutcome::Failed {
                    message: err.user_message(),
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
