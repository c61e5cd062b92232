//! Contract entities and their validation protocol

pub mod collection;
pub mod environment_variable;
pub mod errors;
pub mod location;

pub use collection::EnvironmentVariables;
pub use environment_variable::EnvironmentVariable;
pub use errors::{ContractError, ErrorCollection, is_blank};
pub use location::{Contract, resolve_location};
