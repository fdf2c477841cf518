//! sxcu-setup: interactive setup wizard for a self-hosted share/paste stack.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{SetupOptions, SetupOutcome, setup};
pub use domain::{AppError, ConfigurationMap, SetupPaths, UploadProfile};
