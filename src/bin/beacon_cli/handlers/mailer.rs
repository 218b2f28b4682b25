#![deny(clippy::all, clippy::pedantic)]

use std::path::{Path, PathBuf};

use beacon_client::mailer::{CourseFilter, MailerError, MailerSession, SAMPLE_CSV};

use crate::args::MailerCmd;
use crate::context::{CliError, Ctx};
use crate::io::{file_name, read_bytes, read_value};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: MailerCmd) -> Result<(), CliError> {
    match cmd {
        MailerCmd::Sample => {
            println!("{SAMPLE_CSV}");
            Ok(())
        }
        MailerCmd::Upload { csv } => upload(ctx, &csv).await,
        MailerCmd::Preview {
            csv,
            course,
            subject,
            message,
            message_file,
            cta_text,
            cta_link,
        } => {
            let compose = ComposeInput {
                subject,
                message,
                message_file,
                cta_text,
                cta_link,
            };
            preview(ctx, &csv, course, compose).await
        }
        MailerCmd::Send {
            csv,
            course,
            subject,
            message,
            message_file,
            cta_text,
            cta_link,
        } => {
            let compose = ComposeInput {
                subject,
                message,
                message_file,
                cta_text,
                cta_link,
            };
            send(ctx, &csv, course, compose).await
        }
    }
}

struct ComposeInput {
    subject: String,
    message: Option<String>,
    message_file: Option<PathBuf>,
    cta_text: Option<String>,
    cta_link: Option<String>,
}

/// Upload the CSV and apply the course filter, the shared front half of
/// every mailer run.
async fn loaded(
    ctx: &Ctx,
    csv: &Path,
    course: Option<String>,
) -> Result<MailerSession, CliError> {
    let session = ctx.session()?;
    let name = file_name(csv)?;
    let bytes = read_bytes(csv)?;

    let mut mailer = MailerSession::new();
    mailer.upload_csv(&ctx.api, session, &name, bytes).await?;
    if let Some(course) = course {
        mailer.set_filter(CourseFilter::Course(course));
    }
    Ok(mailer)
}

fn compose(mailer: &mut MailerSession, input: ComposeInput) -> Result<(), CliError> {
    mailer.subject = input.subject;
    mailer.message = read_value(input.message, input.message_file)?;
    if let Some(text) = input.cta_text {
        mailer.cta_text = text;
    }
    if let Some(link) = input.cta_link {
        mailer.cta_link = link;
    }
    Ok(())
}

async fn upload(ctx: &Ctx, csv: &Path) -> Result<(), CliError> {
    let mailer = loaded(ctx, csv, None).await?;
    println!("loaded {} candidates", mailer.candidates().len());
    print_json(&mailer.course_counts())?;
    Ok(())
}

async fn preview(
    ctx: &Ctx,
    csv: &Path,
    course: Option<String>,
    input: ComposeInput,
) -> Result<(), CliError> {
    let mut mailer = loaded(ctx, csv, course).await?;
    compose(&mut mailer, input)?;

    let preview = mailer.preview().ok_or(MailerError::NoCandidates)?;
    println!("To: {} recipients", mailer.filtered().len());
    println!("Subject: {}", preview.subject);
    println!();
    println!("{}", preview.body);
    Ok(())
}

async fn send(
    ctx: &Ctx,
    csv: &Path,
    course: Option<String>,
    input: ComposeInput,
) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut mailer = loaded(ctx, csv, course).await?;
    compose(&mut mailer, input)?;

    let sent = mailer.send(&ctx.api, session).await?;
    println!("sent {sent} emails");
    Ok(())
}
