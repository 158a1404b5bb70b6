use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Bound on every outbound connect, write and read, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Size of the single read buffer a message has to fit in.
    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,
}

impl NetworkConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            max_message_size: default_max_message_size(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_message_size() -> usize {
    1024
}
