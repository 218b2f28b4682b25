//! Contact form controller.

use beacon_api_types::NewContact;

use super::rules::{self, FieldErrors};
use super::{SubmitOutcome, SubmitState};
use crate::client::ApiClient;

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: SubmitState,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn validate(&mut self) -> Option<NewContact> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "name", &self.name, "Name is required");
        rules::require_email(&mut errors, "email", &self.email);
        rules::require(&mut errors, "message", &self.message, "Message is required");

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        Some(NewContact {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            return SubmitOutcome::AlreadySubmitted;
        }
        let Some(payload) = self.validate() else {
            return SubmitOutcome::Blocked;
        };

        self.state = SubmitState::Submitting;
        match api.submit_contact(&payload).await {
            Ok(_) => {
                self.state = SubmitState::Submitted;
                self.errors.clear();
                SubmitOutcome::Accepted {
                    confirmation: "Message sent! We'll get back to you soon.".to_string(),
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
