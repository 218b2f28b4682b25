#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use bytes::Bytes;

use beacon_api_types::VolunteerApplicationRecord;
use beacon_client::export::save_export;
use beacon_client::forms::volunteer::VolunteerForm;
use beacon_client::listing::ListController;

use crate::args::{ExpertiseArg, VolunteerAvailabilityArg, VolunteersCmd};
use crate::context::{CliError, Ctx};
use crate::handlers::finish_submit;
use crate::io::{file_name, read_bytes};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: VolunteersCmd) -> Result<(), CliError> {
    match cmd {
        VolunteersCmd::Submit {
            full_name,
            email,
            phone,
            area_of_expertise,
            short_bio,
            cv,
            availability,
            experience,
            motivation,
        } => {
            let input = SubmitInput {
                full_name,
                email,
                phone,
                area_of_expertise,
                short_bio,
                cv,
                availability,
                experience,
                motivation,
            };
            submit(ctx, input).await
        }
        VolunteersCmd::List {
            page,
            limit,
            search,
        } => list(ctx, page, limit, search).await,
        VolunteersCmd::Export { out_dir } => export(ctx, out_dir).await,
    }
}

struct SubmitInput {
    full_name: String,
    email: String,
    phone: String,
    area_of_expertise: ExpertiseArg,
    short_bio: String,
    cv: PathBuf,
    availability: VolunteerAvailabilityArg,
    experience: String,
    motivation: String,
}

async fn submit(ctx: &Ctx, input: SubmitInput) -> Result<(), CliError> {
    let mut form = VolunteerForm::new();
    form.full_name = input.full_name;
    form.email = input.email;
    form.phone = input.phone;
    form.area_of_expertise = Some(input.area_of_expertise.into());
    form.short_bio = input.short_bio;
    form.availability = Some(input.availability.into());
    form.experience = input.experience;
    form.motivation = input.motivation;

    let name = file_name(&input.cv)?;
    let bytes = Bytes::from(read_bytes(&input.cv)?);
    form.attach_cv(&name, bytes)
        .map_err(|err| CliError::InvalidInput(err.to_string()))?;

    let outcome = form.submit(&ctx.api).await;
    finish_submit(outcome, form.errors())
}

async fn list(ctx: &Ctx, page: u32, limit: u32, search: Option<String>) -> Result<(), CliError> {
    let session = ctx.session()?;
    let mut ctrl: ListController<VolunteerApplicationRecord> = ListController::new(limit);
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
    let bytes = ctx.api.export_volunteer_applications(session).await?;
    let path = save_export(&out_dir, "volunteer-applications", bytes).await?;
    println!("{}", path.display());
    Ok(())
}
