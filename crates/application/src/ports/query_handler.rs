use async_trait::async_trait;
use rudns_domain::{Query, Response};

/// What a listening role does with one well-formed query.
///
/// Handlers never fail: every upstream problem is folded into the answer.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    async fn handle(&self, query: &Query) -> Response;

    /// Short name used in log fields.
    fn role(&self) -> &'static str;
}
