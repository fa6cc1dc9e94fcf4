pub mod api;
pub mod error;
pub mod navigation;
pub mod telemetry;
