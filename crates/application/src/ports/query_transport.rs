use async_trait::async_trait;
use rudns_domain::{DomainError, Query, Response};

#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Sends `query` to `host:port` over a fresh connection and waits for
    /// the single reply. Timeouts and malformed replies are errors.
    async fn exchange(&self, host: &str, port: u16, query: &Query)
        -> Result<Response, DomainError>;
}
