use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RootServerConfig {
    #[serde(default = "default_root_database")]
    pub database: String,

    #[serde(default = "default_root_responses")]
    pub responses: String,

    /// Leading non-empty database lines holding `tld endpoint` delegations.
    #[serde(default = "default_delegation_lines")]
    pub delegation_lines: usize,
}

impl Default for RootServerConfig {
    fn default() -> Self {
        Self {
            database: default_root_database(),
            responses: default_root_responses(),
            delegation_lines: default_delegation_lines(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TldServerConfig {
    #[serde(default = "default_tld_name")]
    pub name: String,

    /// Defaults to `<name>database.txt` when unset.
    #[serde(default)]
    pub database: Option<String>,

    /// Defaults to `<name>responses.txt` when unset.
    #[serde(default)]
    pub responses: Option<String>,
}

impl TldServerConfig {
    pub fn database_path(&self) -> String {
        self.database
            .clone()
            .unwrap_or_else(|| format!("{}database.txt", self.name))
    }

    pub fn responses_path(&self) -> String {
        self.responses
            .clone()
            .unwrap_or_else(|| format!("{}responses.txt", self.name))
    }
}

impl Default for TldServerConfig {
    fn default() -> Self {
        Self {
            name: default_tld_name(),
            database: None,
            responses: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_rs_host")]
    pub rs_host: String,

    #[serde(default = "default_hostnames")]
    pub hostnames: String,

    #[serde(default = "default_resolved")]
    pub resolved: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rs_host: default_rs_host(),
            hostnames: default_hostnames(),
            resolved: default_resolved(),
        }
    }
}

fn default_root_database() -> String {
    "rsdatabase.txt".to_string()
}
fn default_root_responses() -> String {
    "rsresponses.txt".to_string()
}
fn default_delegation_lines() -> usize {
    2
}
fn default_tld_name() -> String {
    "ts1".to_string()
}
fn default_rs_host() -> String {
    "localhost".to_string()
}
fn default_hostnames() -> String {
    "hostnames.txt".to_string()
}
fn default_resolved() -> String {
    "resolved.txt".to_string()
}
