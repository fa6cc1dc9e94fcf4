//! vidz-share: the share-content form of the vidz video library, as a
//! headless state machine with an HTTP adapter and a command-line driver.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
