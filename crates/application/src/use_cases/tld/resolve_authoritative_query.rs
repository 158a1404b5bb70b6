use crate::ports::{QueryHandler, ResponseLog};
use async_trait::async_trait;
use rudns_domain::{AddressTable, Query, Response};
use std::sync::Arc;
use tracing::{debug, warn};

/// TLD server logic: authoritative lookup in a static table.
pub struct AuthoritativeResolverUseCase {
    records: Arc<AddressTable>,
    response_log: Arc<dyn ResponseLog>,
}

impl AuthoritativeResolverUseCase {
    pub fn new(records: Arc<AddressTable>, response_log: Arc<dyn ResponseLog>) -> Self {
        Self {
            records,
            response_log,
        }
    }

    pub async fn resolve(&self, query: &Query) -> Response {
        let response = match self.records.lookup(&query.domain) {
            Some(entry) => Response::authoritative(
                query,
                Arc::clone(&entry.domain),
                Arc::clone(&entry.address),
            ),
            None => Response::not_found(query),
        };

        debug!(
            domain = %query.domain,
            flag = %response.flag,
            id = query.id,
            "Authoritative lookup"
        );

        if let Err(e) = self.response_log.append(&response).await {
            warn!(
                error = %e,
                domain = %response.domain,
                id = response.id,
                "Failed to log response"
            );
        }

        response
    }
}

#[async_trait]
impl QueryHandler for AuthoritativeResolverUseCase {
    async fn handle(&self, query: &Query) -> Response {
        self.resolve(query).await
    }

    fn role(&self) -> &'static str {
        "ts"
    }
}
