#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use beacon_api_types::EnrollmentRecord;
use beacon_client::export::save_export;
use beacon_client::forms::enrollment::EnrollmentForm;
use beacon_client::listing::ListController;

use crate::args::{EnrollAvailabilityArg, EnrollmentsCmd, GenderArg, SkillInterestArg};
use crate::context::{CliError, Ctx};
use crate::handlers::finish_submit;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: EnrollmentsCmd) -> Result<(), CliError> {
    match cmd {
        EnrollmentsCmd::Submit {
            full_name,
            email,
            phone,
            age,
            gender,
            location,
            skill_interest,
            education,
            experience,
            motivation,
            availability,
            how_did_you_hear,
        } => {
            let input = SubmitInput {
                full_name,
                email,
                phone,
                age,
                gender,
                location,
                skill_interest,
                education,
                experience,
                motivation,
                availability,
                how_did_you_hear,
            };
            submit(ctx, input).await
        }
        EnrollmentsCmd::List {
            page,
            limit,
            search,
        } => list(ctx, page, limit, search).await,
        EnrollmentsCmd::Export { out_dir } => export(ctx, out_dir).await,
    }
}

struct SubmitInput {
    full_name: String,
    email: String,
    phone: String,
    age: String,
    gender: GenderArg,
    location: String,
    skill_interest: SkillInterestArg,
    education: Option<String>,
    experience: Option<String>,
    motivation: String,
    availability: EnrollAvailabilityArg,
    how_did_you_hear: String,
}

async fn submit(ctx: &Ctx, input: SubmitInput) -> Result<(), CliError> {
    let mut form = EnrollmentForm::new();
    form.full_name = input.full_name;
    form.email = input.email;
    form.phone = input.phone;
    form.age = input.age;
    form.gender = Some(input.gender.into());
    form.location = input.location;
    form.skill_interest = Some(input.skill_interest.into());
    form.education = input.education.unwrap_or_default();
    form.experience = input.experience.unwrap_or_default();
    form.motivation = input.motivation;
    form.availability = Some(input.availability.into());
    form.how_did_you_hear = input.how_did_you_hear;

    let outcome = form.submit(&ctx.api).await;
    finish_submit(outcome, form.errors())
}

async fn list(ctx: &Ctx, page: u32, limit: u32, search: Option<String>) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut ctrl: ListController<EnrollmentRecord> = ListController::new(limit);
    ctrl.fetch_page(&ctx.api, session, page).await?;
    if let Some(term) = search {
        ctrl.set_search(term);
    }

    print_json(&ctrl.visible())?;
    println!(
        "page {} of {} ({} total)",
        ctrl.page(),
        ctrl.total_pages(),
        ctrl.total()
    );
    Ok(())
}

async fn export(ctx: &Ctx, out_dir: PathBuf) -> Result<(), CliError> {
    let session = ctx.session()?;
    let bytes = ctx.api.export_enrollments(session).await?;
    let path = save_export(&out_dir, "enrollments", bytes).await?;
    println!("{}", path.display());
    Ok(())
}
