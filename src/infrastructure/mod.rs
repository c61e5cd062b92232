//! Infrastructure layer
//!
//! Ambient configuration and logging for hosts running validation passes.

mod config;
mod logging;

pub use config::{Config, LOG_LEVEL_ENV, ROOT_LOCATION_ENV};
pub use logging::init_logging;
