#![deny(clippy::all, clippy::pedantic)]

use std::fs;

use vidz_share::config::CliArgs;
use vidz_share::domain::session::SessionIdentity;

use crate::error::CliError;

/// Session identity for this invocation. A token file wins over the
/// environment; a missing token is left for the form to report.
pub fn from_cli(cli: &CliArgs) -> Result<SessionIdentity, CliError> {
    let token = if let Some(path) = &cli.token_file {
        Some(
            fs::read_to_string(path)
                .map_err(CliError::TokenFile)?
                .trim()
                .to_string(),
        )
    } else {
        cli.token_env.clone()
    };

    Ok(SessionIdentity::new(cli.user_id.clone(), token))
}
