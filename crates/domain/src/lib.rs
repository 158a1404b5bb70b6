//! RU-DNS Domain Layer
pub mod address_table;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod query;
pub mod query_plan;
pub mod response;
pub mod tld_mapping;

pub use address_table::{AddressEntry, AddressTable};
pub use codec::FormatError;
pub use config::{CliOverrides, Config, ConfigError};
pub use endpoint::Endpoint;
pub use errors::DomainError;
pub use query::{Query, QueryMode};
pub use query_plan::QueryPlan;
pub use response::{Response, ResponseFlag, NOT_FOUND_ADDRESS};
pub use tld_mapping::{TldDelegation, TldMapping};
