use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("failed to install tracing subscriber")]
    Telemetry(#[from] TryInitError),
}
