//! Thin controllers for the one-shot engagement forms: newsletter signup,
//! donation initiation, and volunteer/partner interest.

use beacon_api_types::{NewDonation, NewVolunteerInterest};

use super::rules::{self, FieldErrors};
use super::{SubmitOutcome, SubmitState};
use crate::client::ApiClient;

#[derive(Debug, Default)]
pub struct NewsletterForm {
    pub email: String,
    state: SubmitState,
    errors: FieldErrors,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            return SubmitOutcome::AlreadySubmitted;
        }
        let mut errors = FieldErrors::new();
        rules::require_email(&mut errors, "email", &self.email);
        self.errors = errors;
        if !self.errors.is_empty() {
            return SubmitOutcome::Blocked;
        }

        self.state = SubmitState::Submitting;
        match api.subscribe_newsletter(self.email.trim()).await {
            Ok(()) => {
                self.state = SubmitState::Submitted;
                SubmitOutcome::Accepted {
                    confirmation: "You're subscribed!".to_string(),
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
}

/// Donation form. On acceptance the confirmation carries the hosted payment
/// URL the donor is redirected to.
#[derive(Debug, Default)]
pub struct DonationForm {
    pub amount: String,
    pub name: String,
    pub email: String,
    state: SubmitState,
    errors: FieldErrors,
    payment_url: Option<String>,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn payment_url(&self) -> Option<&str> {
        self.payment_url.as_deref()
    }

    fn validate(&mut self) -> Option<NewDonation> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "name", &self.name, "Name is required");
        rules::require_email(&mut errors, "email", &self.email);
        let amount = match self.amount.trim().parse::<f64>() {
            Ok(value) if value > 0.0 => Some(value),
            Ok(_) => {
                errors.insert("amount", "Amount must be greater than zero".to_string());
                None
            }
            Err(_) => {
                errors.insert("amount", "Amount is required".to_string());
                None
            }
        };

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        Some(NewDonation {
            amount: amount?,
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
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
        match api.initiate_donation(&payload).await {
            Ok(receipt) => {
                self.state = SubmitState::Submitted;
                self.payment_url = Some(receipt.payment_url.clone());
                SubmitOutcome::Accepted {
                    confirmation: format!("Continue your donation at {}", receipt.payment_url),
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
}

#[derive(Debug, Default)]
pub struct InterestForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
    state: SubmitState,
    errors: FieldErrors,
}

impl InterestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn validate(&mut self) -> Option<NewVolunteerInterest> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "name", &self.name, "Name is required");
        rules::require_email(&mut errors, "email", &self.email);
        rules::require(&mut errors, "phone", &self.phone, "Phone number is required");
        rules::require(
            &mut errors,
            "interest",
            &self.interest,
            "Please tell us how you'd like to get involved",
        );

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        let message = self.message.trim();
        Some(NewVolunteerInterest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            interest: self.interest.trim().to_string(),
            message: if message.is_empty() {
                None
            } else {
                Some(message.to_string())
            },
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
        match api.submit_volunteer_interest(&payload).await {
            Ok(_) => {
                self.state = SubmitState::Submitted;
                SubmitOutcome::Accepted {
                    confirmation: "Thanks for your interest! We'll be in touch.".to_string(),
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
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;

    #[tokio::test]
    async fn newsletter_rejects_malformed_email_locally() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/newsletter/subscribe");
            then.status(200).body("{}");
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let mut form = NewsletterForm {
            email: "nope".into(),
            ..NewsletterForm::default()
        };
        assert_eq!(form.submit(&api).await, SubmitOutcome::Blocked);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn donation_requires_positive_amount() {
        let server = MockServer::start();
        let api = ApiClient::new(&server.base_url()).expect("client");

        let mut form = DonationForm {
            amount: "0".into(),
            name: "Ada".into(),
            email: "ada@example.org".into(),
            ..DonationForm::default()
        };
        assert_eq!(form.submit(&api).await, SubmitOutcome::Blocked);
        assert!(form.errors().contains_key("amount"));
    }

    #[tokio::test]
    async fn donation_surfaces_payment_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/donations/initiate");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"success":true,"data":{"paymentUrl":"https://pay.example/d/1"},"message":""}"#,
                );
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let mut form = DonationForm {
            amount: "50".into(),
            name: "Ada".into(),
            email: "ada@example.org".into(),
            ..DonationForm::default()
        };
        assert!(form.submit(&api).await.is_accepted());
        assert_eq!(form.payment_url(), Some("https://pay.example/d/1"));
    }
}
