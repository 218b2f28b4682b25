#![deny(clippy::all, clippy::pedantic)]

use thiserror::Error;

use beacon_client::client::session::SessionError;
use beacon_client::export::ExportError;
use beacon_client::mailer::MailerError;
use beacon_client::{AdminSession, ApiClient, ApiError};

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("api URL is required (use --api-url or BEACON_API_URL)")]
    MissingApiUrl,
    #[error("admin token is required (use --token-file or BEACON_ADMIN_TOKEN)")]
    MissingToken,
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Mailer(#[from] MailerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("validation failed:\n{0}")]
    Validation(String),
    #[error("submission failed: {0}")]
    Submission(String),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Shared handler state. The session is optional because the public
/// commands (submissions, blog reads) run unauthenticated.
#[derive(Debug)]
pub struct Ctx {
    pub api: ApiClient,
    pub session: Option<AdminSession>,
}

impl Ctx {
    /// Session for admin commands, or a uniform error telling the user how
    /// to supply one.
    pub fn session(&self) -> Result<&AdminSession, CliError> {
        self.session.as_ref().ok_or(CliError::MissingToken)
    }
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let api_url = cli.api_url.as_deref().ok_or(CliError::MissingApiUrl)?;
    let api = ApiClient::new(api_url)?;

    // Token file wins over the env var when both are set.
    let session = if let Some(path) = &cli.token_file {
        Some(AdminSession::from_token_file(path)?)
    } else if let Some(token) = &cli.admin_token_env {
        Some(AdminSession::new(token)?)
    } else {
        None
    };

    Ok(Ctx { api, session })
}
