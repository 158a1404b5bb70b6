use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::network::NetworkConfig;
use super::roles::{ClientConfig, RootServerConfig, TldServerConfig};
use super::server::ServerConfig;

const DEFAULT_CONFIG_FILE: &str = "rudns.toml";

/// Main configuration structure shared by every RU-DNS role
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket (root and TLD servers)
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound call limits
    #[serde(default)]
    pub network: NetworkConfig,

    /// Root server tables and response log
    #[serde(default)]
    pub root: RootServerConfig,

    /// TLD server table and response log
    #[serde(default)]
    pub tld: TldServerConfig,

    /// Client driver input and output
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rudns.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.network.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(db) = overrides.root_database {
            self.root.database = db;
        }
        if let Some(responses) = overrides.root_responses {
            self.root.responses = responses;
        }
        if let Some(lines) = overrides.delegation_lines {
            self.root.delegation_lines = lines;
        }
        if let Some(name) = overrides.tld_name {
            self.tld.name = name;
        }
        if let Some(db) = overrides.tld_database {
            self.tld.database = Some(db);
        }
        if let Some(responses) = overrides.tld_responses {
            self.tld.responses = Some(responses);
        }
        if let Some(host) = overrides.rs_host {
            self.client.rs_host = host;
        }
        if let Some(hostnames) = overrides.hostnames {
            self.client.hostnames = hostnames;
        }
        if let Some(resolved) = overrides.resolved {
            self.client.resolved = resolved;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.network.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        if self.network.max_message_size == 0 {
            return Err(ConfigError::Validation(
                "Maximum message size must be greater than 0".to_string(),
            ));
        }

        if self.root.delegation_lines == 0 {
            return Err(ConfigError::Validation(
                "Root database needs at least one delegation line".to_string(),
            ));
        }

        if self.tld.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "TLD server name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub root_database: Option<String>,
    pub root_responses: Option<String>,
    pub delegation_lines: Option<usize>,
    pub tld_name: Option<String>,
    pub tld_database: Option<String>,
    pub tld_responses: Option<String>,
    pub rs_host: Option<String>,
    pub hostnames: Option<String>,
    pub resolved: Option<String>,
}
