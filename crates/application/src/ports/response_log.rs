use async_trait::async_trait;
use rudns_domain::{DomainError, Response};

/// Append-only record of produced or received responses, in order.
#[async_trait]
pub trait ResponseLog: Send + Sync {
    async fn append(&self, response: &Response) -> Result<(), DomainError>;
}
