#![deny(clippy::all, clippy::pedantic)]

use thiserror::Error;
use vidz_share::application::error::ShareError;
use vidz_share::application::ports::ApiError;
use vidz_share::config::LoadError;
use vidz_share::domain::routes::Route;
use vidz_share::infra::error::InfraError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] InfraError),
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not logged in, redirected to {0}")]
    Redirected(Route),
    #[error("share rejected: {0}")]
    Rejected(#[from] ShareError),
    #[error("post was not created")]
    NotCreated,
    #[error("failed to render output: {0}")]
    Output(String),
}
