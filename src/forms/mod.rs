//! Form controllers: field state, client-side validation, and the
//! submission lifecycle shared by every data-collection form.
//!
//! Each controller owns its raw field values, validates them into a typed
//! request payload, and drives one submission at a time through
//! [`SubmitState`]. Validation failures never reach the network; backend
//! rejections return the form to an editable state with the backend's
//! message attached.

pub mod blog_editor;
pub mod contact;
pub mod engage;
pub mod enrollment;
pub mod rules;
pub mod volunteer;

pub use rules::FieldErrors;

/// Submission lifecycle of a form. One request in flight at most: submit is
/// refused while `Submitting`, and - unless a form explicitly allows
/// resubmission, like the blog editor - once `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Result of driving one submit attempt to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field validation failed; inline errors are populated and no request
    /// was sent.
    Blocked,
    /// The form is already submitted (or a request is in flight); nothing
    /// was sent.
    AlreadySubmitted,
    /// The backend accepted the submission.
    Accepted { confirmation: String },
    /// The request was sent and failed; the form is editable again.
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}
