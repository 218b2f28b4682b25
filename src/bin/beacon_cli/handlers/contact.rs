#![deny(clippy::all, clippy::pedantic)]

use beacon_client::forms::contact::ContactForm;

use crate::args::ContactCmd;
use crate::context::{CliError, Ctx};
use crate::handlers::finish_submit;
use crate::io::read_value;

pub async fn handle(ctx: &Ctx, cmd: ContactCmd) -> Result<(), CliError> {
    match cmd {
        ContactCmd::Send {
            name,
            email,
            message,
            message_file,
        } => {
            let mut form = ContactForm::new();
            form.name = name;
            form.email = email;
            form.message = read_value(message, message_file)?;
            let outcome = form.submit(&ctx.api).await;
            finish_submit(outcome, form.errors())
        }
    }
}
