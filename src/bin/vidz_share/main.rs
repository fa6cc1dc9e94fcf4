//! vidz-share: fill in and submit the share-content form from the command line.
#![deny(clippy::all, clippy::pedantic)]

mod error;
mod handlers;
mod print;
mod session;


use vidz_share::config::{self, Command};
use vidz_share::infra::{api::ApiClient, telemetry};

use error::CliError;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let (cli, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let session = session::from_cli(&cli)?;
    let client = ApiClient::new(&settings.api.base_url, settings.api.timeout)?
        .with_bearer(session.token().map(str::to_owned));

    match &cli.command {
        Command::Share(args) => handlers::share(&client, &session, &settings.form, args).await?,
        Command::Tags => handlers::tags(&client).await?,
    }

    Ok(())
}
