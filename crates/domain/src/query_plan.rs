use crate::query::QueryMode;
use std::sync::Arc;

/// One `(domain, mode)` line of the client's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub domain: Arc<str>,
    pub mode: QueryMode,
}

impl QueryPlan {
    pub fn new(domain: impl Into<Arc<str>>, mode: QueryMode) -> Self {
        Self {
            domain: domain.into(),
            mode,
        }
    }
}
