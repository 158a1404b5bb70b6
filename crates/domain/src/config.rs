pub mod errors;
pub mod logging;
pub mod network;
pub mod roles;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use network::NetworkConfig;
pub use roles::{ClientConfig, RootServerConfig, TldServerConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
