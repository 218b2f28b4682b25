#![deny(clippy::all, clippy::pedantic)]

pub mod admin;
pub mod blog;
pub mod contact;
pub mod engage;
pub mod enrollments;
pub mod mailer;
pub mod volunteers;

use beacon_client::forms::{FieldErrors, SubmitOutcome};

use crate::context::CliError;
use crate::print;

/// Map a form submission outcome onto the process exit path: a confirmation
/// goes to stdout, everything else becomes a typed error.
pub(crate) fn finish_submit(outcome: SubmitOutcome, errors: &FieldErrors) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Accepted { confirmation } => {
            println!("{confirmation}");
            Ok(())
        }
        SubmitOutcome::Blocked => Err(CliError::Validation(print::field_errors(errors))),
        SubmitOutcome::AlreadySubmitted => {
            Err(CliError::InvalidInput("form was already submitted".into()))
        }
        SubmitOutcome::Failed { message } => Err(CliError::Submission(message)),
    }
}
