#![deny(clippy::all, clippy::pedantic)]

use beacon_client::forms::engage::{DonationForm, InterestForm, NewsletterForm};

use crate::args::EngageCmd;
use crate::context::{CliError, Ctx};
use crate::handlers::finish_submit;

pub async fn handle(ctx: &Ctx, cmd: EngageCmd) -> Result<(), CliError> {
    match cmd {
        EngageCmd::Subscribe { email } => {
            let mut form = NewsletterForm::new();
            form.email = email;
            let outcome = form.submit(&ctx.api).await;
            finish_submit(outcome, form.errors())
        }
        EngageCmd::Donate {
            amount,
            name,
            email,
        } => {
            let mut form = DonationForm::new();
            form.amount = amount;
            form.name = name;
            form.email = email;
            let outcome = form.submit(&ctx.api).await;
            finish_submit(outcome, form.errors())
        }
        EngageCmd::Interest {
            name,
            email,
            phone,
            interest,
            message,
        } => {
            let mut form = InterestForm::new();
            form.name = name;
            form.email = email;
            form.phone = phone;
            form.interest = interest;
            form.message = message.unwrap_or_default();
            let outcome = form.submit(&ctx.api).await;
            finish_submit(outcome, form.errors())
        }
    }
}
