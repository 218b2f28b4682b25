//! Admission mailer: a four-stage linear workflow where each stage gates
//! the next.
//!
//! 1. upload a candidates CSV (parsed server-side),
//! 2. filter the candidate set by exact course name or "all",
//! 3. compose a subject/body template with `{Name}` and `{Course}` tokens,
//! 4. preview the rendered message for the first filtered candidate, then
//!    send one batch call covering every filtered candidate.
//!
//! The send reports a single aggregate count; there is no per-recipient
//! failure reporting.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::info;

use beacon_api_types::{AdmissionMailing, Candidate};

use crate::client::{AdminSession, ApiClient};
use crate::error::ApiError;

/// Header row plus two example rows, offered as a download next to the
/// upload control.
pub const SAMPLE_CSV: &str = "Name,Email,Course\nJohn Doe,john@example.com,Web Development\nJane Smith,jane@example.com,Graphic Design";

pub const DEFAULT_CTA_TEXT: &str = "Join Now";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailerError {
    #[error("please upload a CSV file")]
    NotACsv,
    #[error("no candidates loaded; upload a CSV first")]
    NoCandidates,
    #[error("subject and message are required")]
    MissingTemplate,
    #[error("{0}")]
    Api(String),
}

impl From<ApiError> for MailerError {
    fn from(err: ApiError) -> Self {
        MailerError::Api(err.user_message())
    }
}

/// Course filter for stage 2: everything, or one exact course name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Course(String),
}

/// Substitute `{Name}` and `{Course}` tokens for one candidate.
pub fn render_template(template: &str, candidate: &Candidate) -> String {
    template
        .replace("{Name}", &candidate.name)
        .replace("{Course}", &candidate.course)
}

/// Fully rendered preview for the first filtered candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPreview {
    pub subject: String,
    pub body: String,
}

/// In-memory state of one mailer workflow run. Candidates live only for
/// the session; nothing is persisted client-side.
#[derive(Debug, Default)]
pub struct MailerSession {
    candidates: Vec<Candidate>,
    filter: CourseFilter,
    pub subject: String,
    pub message: String,
    pub cta_text: String,
    pub cta_link: String,
}

impl MailerSession {
    pub fn new() -> Self {
        Self {
            cta_text: DEFAULT_CTA_TEXT.to_string(),
            ..Self::default()
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn filter(&self) -> &CourseFilter {
        &self.filter
    }

    /// Stage 1: upload the CSV. Only the `.csv` extension is checked
    /// client-side; parsing and validation happen on the backend.
    pub async fn upload_csv(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<usize, MailerError> {
        if !file_name.to_ascii_lowercase().ends_with(".csv") {
            return Err(MailerError::NotACsv);
        }
        let batch = api.upload_candidates_csv(session, file_name, bytes).await?;
        info!(count = batch.candidates.len(), "candidates loaded");
        self.candidates = batch.candidates;
        self.filter = CourseFilter::All;
        Ok(self.candidates.len())
    }

    /// Stage 2: set the course filter.
    pub fn set_filter(&mut self, filter: CourseFilter) {
        self.filter = filter;
    }

    /// Candidates passing the current filter, in upload order.
    pub fn filtered(&self) -> Vec<&Candidate> {
        match &self.filter {
            CourseFilter::All => self.candidates.iter().collect(),
            CourseFilter::Course(course) => self
                .candidates
                .iter()
                .filter(|candidate| candidate.course == *course)
                .collect(),
        }
    }

    /// Candidate count per course, for the filter dropdown.
    pub fn course_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for candidate in &self.candidates {
            *counts.entry(candidate.course.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn body_template(&self) -> String {
        let mut body = self.message.clone();
        if !self.cta_link.is_empty() && !self.cta_text.is_empty() {
            body.push_str(&format!("\n\n{}: {}", self.cta_text, self.cta_link));
        }
        body
    }

    /// Stage 4a: render the template for the first filtered candidate.
    /// `None` until candidates are loaded and pass the filter.
    pub fn preview(&self) -> Option<MailPreview> {
        let filtered = self.filtered();
        let first = filtered.first()?;
        Some(MailPreview {
            subject: render_template(&self.subject, first),
            body: render_template(&self.body_template(), first),
        })
    }

    /// Stage 4b: dispatch one batch send to every filtered candidate.
    /// Refused while the template is incomplete or no candidates remain.
    /// On success the compose state resets for the next run; the candidate
    /// set is kept so another filter can be applied.
    pub async fn send(
        &mut self,
        api: &ApiClient,
        session: &AdminSession,
    ) -> Result<u64, MailerError> {
        if self.subject.trim().is_empty() || self.message.trim().is_empty() {
            return Err(MailerError::MissingTemplate);
        }
        let recipients: Vec<Candidate> = self.filtered().into_iter().cloned().collect();
        if recipients.is_empty() {
            return Err(MailerError::NoCandidates);
        }

        let mailing = AdmissionMailing {
            candidates: recipients,
            subject: self.subject.clone(),
            message: self.message.clone(),
            cta_link: if self.cta_link.is_empty() {
                None
            } else {
                Some(self.cta_link.clone())
            },
            cta_text: if self.cta_text.is_empty() {
                None
            } else {
                Some(self.cta_text.clone())
            },
        };
        let report = api.send_admission_emails(session, &mailing).await?;
        info!(sent = report.sent_count, "admission mails dispatched");

        self.subject.clear();
        self.message.clear();
        self.cta_link.clear();
        self.cta_text = DEFAULT_CTA_TEXT.to_string();
        Ok(report.sent_count)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;

    fn candidate(id: i64, name: &str, course: &str) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            course: course.to_string(),
        }
    }

    fn loaded_session() -> MailerSession {
        MailerSession {
            candidates: vec![
                candidate(1, "Ada", "Web Development"),
                candidate(2, "Grace", "Graphic Design"),
                candidate(3, "Joy", "Web Development"),
            ],
            ..MailerSession::new()
        }
    }

    #[test]
    fn template_substitutes_name_and_course() {
        let rendered = render_template(
            "Hi {Name}, welcome to {Course}",
            &candidate(1, "Ada", "Web Development"),
        );
        assert_eq!(rendered, "Hi Ada, welcome to Web Development");
    }

    #[test]
    fn filter_matches_exact_course_or_all() {
        let mut session = loaded_session();
        assert_eq!(session.filtered().len(), 3);

        session.set_filter(CourseFilter::Course("Web Development".into()));
        let filtered = session.filtered();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.course == "Web Development"));

        session.set_filter(CourseFilter::Course("Photography & Video".into()));
        assert!(session.filtered().is_empty());
    }

    #[test]
    fn course_counts_feed_the_dropdown() {
        let session = loaded_session();
        let counts = session.course_counts();
        assert_eq!(counts.get("Web Development"), Some(&2));
        assert_eq!(counts.get("Graphic Design"), Some(&1));
    }

    #[test]
    fn preview_renders_first_filtered_candidate_with_cta() {
        let mut session = loaded_session();
        session.subject = "Welcome to {Course}".into();
        session.message = "Hi {Name}, welcome to {Course}".into();
        session.cta_link = "https://chat.example/join".into();

        session.set_filter(CourseFilter::Course("Graphic Design".into()));
        let preview = session.preview().expect("preview");
        assert_eq!(preview.subject, "Welcome to Graphic Design");
        assert_eq!(
            preview.body,
            "Hi Grace, welcome to Graphic Design\n\nJoin Now: https://chat.example/join"
        );
    }

    #[test]
    fn preview_requires_candidates() {
        let mut session = MailerSession::new();
        session.subject = "s".into();
        session.message = "m".into();
        assert!(session.preview().is_none());
    }

    #[tokio::test]
    async fn non_csv_upload_is_rejected_before_any_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/admin/admission-mailer/upload-csv");
            then.status(200).body("{}");
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let admin = AdminSession::new("tok").expect("session");
        let mut session = MailerSession::new();

        let err = session
            .upload_csv(&api, &admin, "candidates.xlsx", b"junk".to_vec())
            .await
            .expect_err("rejected");
        assert_eq!(err, MailerError::NotACsv);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn send_refuses_incomplete_template() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/admin/admission-mailer/send");
            then.status(200).body("{}");
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let admin = AdminSession::new("tok").expect("session");
        let mut session = loaded_session();
        session.subject = "Welcome".into();

        let err = session.send(&api, &admin).await.expect_err("refused");
        assert_eq!(err, MailerError::MissingTemplate);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn send_dispatches_filtered_batch_and_resets_compose_state() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/admin/admission-mailer/send")
                .header("authorization", "Bearer tok")
                .json_body_includes(r#"{"subject":"Welcome to {Course}"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"success":true,"data":{"sentCount":2},"message":""}"#);
        });

        let api = ApiClient::new(&server.base_url()).expect("client");
        let admin = AdminSession::new("tok").expect("session");
        let mut session = loaded_session();
        session.subject = "Welcome to {Course}".into();
        session.message = "Hi {Name}".into();
        session.set_filter(CourseFilter::Course("Web Development".into()));

        let sent = session.send(&api, &admin).await.expect("sent");
        assert_eq!(sent, 2);
        assert!(session.subject.is_empty());
        assert_eq!(session.cta_text, DEFAULT_CTA_TEXT);
        // Candidates survive for another filtered run.
        assert_eq!(session.candidates().len(), 3);
        mock.assert();
    }
}
