#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use tempfile::NamedTempFile;

use beacon_client::{AdminSession, ApiClient};

use crate::args::{
    AdminArgs, AdminCmd, BlogCmd, ContactCmd, EngageCmd, EnrollmentsCmd, MailerCmd, VolunteersCmd,
};
use crate::context::{CliError, Ctx, build_ctx_from_cli};
use crate::handlers::{blog, contact, engage, enrollments, mailer, volunteers};

fn ctx(server: &MockServer) -> Ctx {
    Ctx {
        api: ApiClient::new(&server.base_url()).expect("client"),
        session: Some(AdminSession::new("tok").expect("session")),
    }
}

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

fn login_cli(api_url: Option<String>) -> crate::args::Cli {
    crate::args::Cli {
        api_url,
        token_file: None,
        admin_token_env: None,
        command: crate::args::Commands::Admin(AdminArgs {
            action: AdminCmd::Login {
                email: "admin@example.org".into(),
                password: "pw".into(),
            },
        }),
    }
}

#[test]
fn build_ctx_prefers_token_file_over_env() -> Result<(), CliError> {
    let file = tmp_file("file-token\n");
    let mut cli = login_cli(Some("https://example.org".into()));
    cli.token_file = Some(file.path().to_path_buf());
    cli.admin_token_env = Some("env-token".into());

    let ctx = build_ctx_from_cli(&cli)?;
    let header = ctx.session()?.auth_header()?;
    assert_eq!(header.to_str().expect("header str"), "Bearer file-token");
    Ok(())
}

#[test]
fn build_ctx_errors_without_api_url() {
    let err = build_ctx_from_cli(&login_cli(None)).expect_err("missing url should fail");
    assert!(matches!(err, CliError::MissingApiUrl));
}

#[test]
fn public_commands_work_without_a_token() -> Result<(), CliError> {
    let ctx = build_ctx_from_cli(&login_cli(Some("https://example.org".into())))?;
    assert!(ctx.session.is_none());
    assert!(matches!(ctx.session(), Err(CliError::MissingToken)));
    Ok(())
}

#[test]
fn mistyped_subcommand_is_a_parse_error_not_a_token() {
    use clap::Parser;

    // "enrolments" must not be consumed as a positional token value.
    let result = crate::args::Cli::try_parse_from(["beacon-cli", "enrolments", "blog", "list"]);
    assert!(result.is_err());
}

#[test]
fn read_value_prefers_file_over_inline() -> Result<(), CliError> {
    let file = tmp_file("from-file");
    let val = crate::io::read_value(Some("inline".into()), Some(file.path().to_path_buf()))?;
    assert_eq!(val, "from-file");
    Ok(())
}

#[tokio::test]
async fn contact_send_reads_message_file() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/contact")
            .json_body_includes(r#"{"name":"Ada","message":"long message"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"data":{"contactId":"c-1"},"message":"ok"}"#);
    });

    let message = tmp_file("long message");
    contact::handle(
        &ctx(&server),
        ContactCmd::Send {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            message: None,
            message_file: Some(message.path().to_path_buf()),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn invalid_submission_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/enrollments");
        then.status(200).body("{}");
    });

    let err = enrollments::handle(
        &ctx(&server),
        EnrollmentsCmd::Submit {
            full_name: String::new(),
            email: "not-an-email".into(),
            phone: String::new(),
            age: "15".into(),
            gender: crate::args::GenderArg::Female,
            location: String::new(),
            skill_interest: crate::args::SkillInterestArg::General,
            education: None,
            experience: None,
            motivation: String::new(),
            availability: crate::args::EnrollAvailabilityArg::Unsure,
            how_did_you_hear: String::new(),
        },
    )
    .await
    .expect_err("validation should fail");

    assert!(matches!(err, CliError::Validation(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn newsletter_subscribe_validates_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/newsletter/subscribe");
        then.status(200).body("{}");
    });

    let err = engage::handle(
        &ctx(&server),
        EngageCmd::Subscribe {
            email: "not-an-email".into(),
        },
    )
    .await
    .expect_err("validation should fail");

    assert!(matches!(err, CliError::Validation(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn volunteer_submit_rejects_wrong_cv_type_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/volunteer-applications");
        then.status(200).body("{}");
    });

    let cv = tmp_file("plain text, not a cv");
    let err = volunteers::handle(
        &ctx(&server),
        VolunteersCmd::Submit {
            full_name: "Chidi Eze".into(),
            email: "chidi@example.org".into(),
            phone: "+2348111111".into(),
            area_of_expertise: crate::args::ExpertiseArg::Mentorship,
            short_bio: "Engineer and mentor".into(),
            cv: cv.path().to_path_buf(),
            availability: crate::args::VolunteerAvailabilityArg::Weekends,
            experience: "Five years mentoring".into(),
            motivation: "Give back".into(),
        },
    )
    .await
    .expect_err("cv type should be rejected");

    assert!(matches!(err, CliError::InvalidInput(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn enrollments_list_sends_page_query_with_token() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/admin/enrollments")
            .query_param("page", "2")
            .query_param("limit", "5")
            .header("authorization", "Bearer tok");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"data":{"enrollments":[],"total":0},"message":""}"#);
    });

    enrollments::handle(
        &ctx(&server),
        EnrollmentsCmd::List {
            page: 2,
            limit: 5,
            search: None,
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn blog_create_reads_content_file() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/admin/blog/posts")
            .json_body_includes(r#"{"title":"T","content":"BODY","status":"draft"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"success":true,"data":{"id":1,"title":"T","content":"BODY","excerpt":"E","author":"A","slug":"t","status":"draft"},"message":""}"#,
            );
    });

    let content = tmp_file("BODY");
    blog::handle(
        &ctx(&server),
        BlogCmd::Create {
            title: "T".into(),
            excerpt: "E".into(),
            author: "A".into(),
            content: None,
            content_file: Some(content.path().to_path_buf()),
            status: crate::args::PostStatusArg::Draft,
            image_url: None,
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn blog_delete_without_yes_sends_nothing() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/api/admin/blog/posts/7");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"data":null,"message":""}"#);
    });

    blog::handle(&ctx(&server), BlogCmd::Delete { id: 7, yes: false }).await?;
    assert_eq!(mock.calls(), 0);

    blog::handle(&ctx(&server), BlogCmd::Delete { id: 7, yes: true }).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn mailer_send_uploads_then_dispatches() -> Result<(), CliError> {
    let server = MockServer::start();
    let upload = server.mock(|when, then| {
        when.method("POST")
            .path("/api/admin/admission-mailer/upload-csv")
            .header("authorization", "Bearer tok");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"success":true,"data":{"candidates":[{"id":1,"name":"Ada","email":"ada@example.org","course":"Web Development"}]},"message":""}"#,
            );
    });
    let send = server.mock(|when, then| {
        when.method("POST")
            .path("/api/admin/admission-mailer/send")
            .json_body_includes(r#"{"subject":"Welcome, {Name}"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"data":{"sentCount":1},"message":""}"#);
    });

    let csv = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("csv tmp");
    std::fs::write(csv.path(), "Name,Email,Course\nAda,ada@example.org,Web Development\n")
        .expect("write csv");

    mailer::handle(
        &ctx(&server),
        MailerCmd::Send {
            csv: csv.path().to_path_buf(),
            course: None,
            subject: "Welcome, {Name}".into(),
            message: Some("Hi {Name}, you're in {Course}.".into()),
            message_file: None,
            cta_text: None,
            cta_link: None,
        },
    )
    .await?;
    upload.assert();
    send.assert();
    Ok(())
}
