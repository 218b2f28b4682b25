//! Enrollment form controller for the public training-program application.

use beacon_api_types::{EnrollmentAvailability, Gender, NewEnrollment, SkillInterest};

use super::rules::{self, FieldErrors};
use super::{SubmitOutcome, SubmitState};
use crate::client::ApiClient;

/// Raw field state of the enrollment form. `age` is kept as entered so an
/// unparsable value surfaces as an inline error rather than being coerced.
#[derive(Debug, Default)]
pub struct EnrollmentForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub location: String,
    pub skill_interest: Option<SkillInterest>,
    pub education: String,
    pub experience: String,
    pub motivation: String,
    pub availability: Option<EnrollmentAvailability>,
    pub how_did_you_hear: String,
    state: SubmitState,
    errors: FieldErrors,
    enrollment_id: Option<i64>,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Inline errors from the last validation pass, keyed by field.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn enrollment_id(&self) -> Option<i64> {
        self.enrollment_id
    }

    fn validate(&mut self) -> Option<NewEnrollment> {
        let mut errors = FieldErrors::new();

        rules::require(&mut errors, "fullName", &self.full_name, "Full name is required");
        rules::require_email(&mut errors, "email", &self.email);
        rules::require(&mut errors, "phone", &self.phone, "Phone number is required");
        let age = rules::parse_in_range(&mut errors, "age", &self.age, 16, 35, "Age is required");
        let gender =
            rules::require_choice(&mut errors, "gender", self.gender, "Gender is required");
        rules::require(&mut errors, "location", &self.location, "Location is required");
        let skill_interest = rules::require_choice(
            &mut errors,
            "skillInterest",
            self.skill_interest,
            "Please select a skill interest",
        );
        rules::require(
            &mut errors,
            "motivation",
            &self.motivation,
            "Please share your motivation",
        );
        let availability = rules::require_choice(
            &mut errors,
            "availability",
            self.availability,
            "Please confirm your availability",
        );

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }

        Some(NewEnrollment {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age: age?,
            gender: gender?,
            location: self.location.trim().to_string(),
            skill_interest: skill_interest?,
            education: non_empty(&self.education),
            experience: non_empty(&self.experience),
            motivation: self.motivation.trim().to_string(),
            availability: availability?,
            how_did_you_hear: self.how_did_you_hear.trim().to_string(),
        })
    }

    /// Validate and submit. At most one request is ever in flight, and a
    /// submitted form refuses to submit again until [`Self::reset`].
    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            return SubmitOutcome::AlreadySubmitted;
        }
        let Some(payload) = self.validate() else {
            return SubmitOutcome::Blocked;
        };

        self.state = SubmitState::Submitting;
        match api.submit_enrollment(&payload).await {
            Ok(receipt) => {
                self.state = SubmitState::Submitted;
                self.errors.clear();
                self.enrollment_id = Some(receipt.enrollment_id);
                SubmitOutcome::Accepted {
                    confirmation: format!(
                        "Application received! Your enrollment reference is #{}.",
                        receipt.enrollment_id
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

    /// Clear all fields and return to the editable state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;

    fn filled_form() -> EnrollmentForm {
        EnrollmentForm {
            full_name: "Ada Obi".into(),
            email: "ada@example.org".into(),
            phone: "+2348000000".into(),
            age: "21".into(),
            gender: Some(Gender::Female),
            location: "Lagos".into(),
            skill_interest: Some(SkillInterest::WebDevelopment),
            motivation: "I want to build things".into(),
            availability: Some(EnrollmentAvailability::YesFullTime),
            how_did_you_hear: "a friend".into(),
            ..EnrollmentForm::default()
        }
    }

    #[tokio::test]
    async fn empty_required_fields_block_without_network_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/enrollments");
            then.status(200).body("{}");
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let mut form = EnrollmentForm::new();
        let outcome = form.submit(&api).await;

        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert!(form.errors().contains_key("fullName"));
        assert!(form.errors().contains_key("availability"));
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn boundary_ages_pass_validation() {
        for age in ["16", "35"] {
            let mut form = filled_form();
            form.age = age.into();
            assert!(form.validate().is_some(), "age {age} should validate");
        }
        for age in ["15", "36"] {
            let mut form = filled_form();
            form.age = age.into();
            assert!(form.validate().is_none(), "age {age} should be rejected");
            assert!(form.errors().contains_key("age"));
        }
    }

    #[tokio::test]
    async fn malformed_email_blocks_submission() {
        let mut form = filled_form();
        form.email = "not an email".into();
        assert!(form.validate().is_none());
        assert!(form.errors().contains_key("email"));
    }

    #[tokio::test]
    async fn accepted_submission_locks_the_form() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/enrollments")
                .json_body_includes(r#"{"fullName":"Ada Obi","age":21,"skillInterest":"web-development"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"success":true,"data":{"enrollmentId":42},"message":"ok"}"#);
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let mut form = filled_form();

        let outcome = form.submit(&api).await;
        assert!(outcome.is_accepted());
        assert_eq!(form.state(), SubmitState::Submitted);
        assert_eq!(form.enrollment_id(), Some(42));

        // A second submit while already submitted sends nothing.
        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::AlreadySubmitted);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn backend_rejection_returns_form_to_editable_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/enrollments");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"success":false,"data":null,"message":"cohort is full"}"#);
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let mut form = filled_form();

        let outcome = form.submit(&api).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "cohort is full".into()
            }
        );
        assert_eq!(form.state(), SubmitState::Idle);
    }
}
