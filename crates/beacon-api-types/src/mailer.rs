use serde::{Deserialize, Serialize};

/// One admission candidate parsed server-side from an uploaded CSV row.
/// Session-scoped; never persisted beyond the mailer workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateBatch {
    pub candidates: Vec<Candidate>,
}

/// One batch send: the filtered candidate set plus the message template.
/// `{Name}` and `{Course}` placeholders are substituted per recipient by the
/// backend mail worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionMailing {
    pub candidates: Vec<Candidate>,
    pub subject: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReport {
    pub sent_count: u64,
}
