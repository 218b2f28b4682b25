#![deny(clippy::all, clippy::pedantic)]

use beacon_api_types::LoginRequest;

use crate::args::AdminCmd;
use crate::context::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: AdminCmd) -> Result<(), CliError> {
    match cmd {
        AdminCmd::Login { email, password } => {
            let credentials = LoginRequest { email, password };
            let session = ctx.api.login_admin(&credentials).await?;
            print_json(&session)?;
            Ok(())
        }
    }
}
