use reqwest::Method;

use beacon_api_types::{
    ContactReceipt, DonationReceipt, InterestReceipt, NewContact, NewDonation,
    NewVolunteerInterest, NewsletterSignup,
};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Public contact form submission.
    pub async fn submit_contact(&self, contact: &NewContact) -> Result<ContactReceipt, ApiError> {
        self.request(Method::POST, "api/contact", &[], Some(contact), None)
            .await
    }

    /// Newsletter subscription; the envelope carries no data.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), ApiError> {
        let payload = NewsletterSignup {
            email: email.to_string(),
        };
        self.request_unit(Method::POST, "api/newsletter/subscribe", Some(&payload), None)
            .await
    }

    /// Start a donation and receive the hosted payment URL.
    pub async fn initiate_donation(
        &self,
        donation: &NewDonation,
    ) -> Result<DonationReceipt, ApiError> {
        self.request(
            Method::POST,
            "api/donations/initiate",
            &[],
            Some(donation),
            None,
        )
        .await
    }

    /// Lightweight volunteer/partner interest submission.
    pub async fn submit_volunteer_interest(
        &self,
        interest: &NewVolunteerInterest,
    ) -> Result<InterestReceipt, ApiError> {
        self.request(Method::POST, "api/volunteer", &[], Some(interest), None)
            .await
    }
}
