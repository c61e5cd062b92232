//! # configrepo-contract - configuration-as-code contract entities
//!
//! In-memory contract objects for a pipeline configuration repository,
//! together with the validation protocol they share. Each entity resolves a
//! human-readable location for itself, validates its own fields into a shared
//! [`ErrorCollection`] and takes part in uniqueness checks among its
//! siblings.
//!
//! ## Example
//!
//! ```rust
//! use configrepo_contract::{Contract, EnvironmentVariable, EnvironmentVariables};
//!
//! let vars = EnvironmentVariables::from_vec(vec![
//!     EnvironmentVariable::plain("PATH", "/usr/bin"),
//!     EnvironmentVariable::encrypted("TOKEN", "AES:abc"),
//!     EnvironmentVariable::new("PATH"),
//! ]);
//!
//! let errors = vars.errors("ci.gocd.yaml; Pipeline (build)");
//! assert_eq!(errors.error_count(), 2);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod contract;
pub mod infrastructure;

pub use contract::{
    Contract, ContractError, EnvironmentVariable, EnvironmentVariables, ErrorCollection,
    is_blank, resolve_location,
};
pub use infrastructure::{Config, init_logging};

/// Version of the configrepo-contract crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
