use serde::{Deserialize, Serialize};

/// Payload for the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    // The backend issues string ids for contact messages, unlike the numeric
    // ids used elsewhere.
    pub contact_id: String,
}

/// Payload for a newsletter subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

/// Payload for starting a donation; the backend answers with a hosted
/// payment URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDonation {
    pub amount: f64,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub payment_url: String,
}

/// Payload for the lightweight volunteer/partner interest form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVolunteerInterest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestReceipt {
    pub interest_id: i64,
}
