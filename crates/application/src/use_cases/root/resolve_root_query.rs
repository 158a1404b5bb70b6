use crate::ports::{QueryHandler, QueryTransport, ResponseLog};
use async_trait::async_trait;
use rudns_domain::{
    AddressTable, Query, QueryMode, Response, ResponseFlag, TldDelegation, TldMapping,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Root server logic: delegate by TLD, forward recursively, or answer directly.
pub struct RootResolverUseCase {
    delegations: Arc<TldMapping>,
    direct: Arc<AddressTable>,
    transport: Arc<dyn QueryTransport>,
    response_log: Arc<dyn ResponseLog>,
    default_tld_port: u16,
}

impl RootResolverUseCase {
    /// `default_tld_port` is used for delegations whose endpoint names no port.
    pub fn new(
        delegations: Arc<TldMapping>,
        direct: Arc<AddressTable>,
        transport: Arc<dyn QueryTransport>,
        response_log: Arc<dyn ResponseLog>,
        default_tld_port: u16,
    ) -> Self {
        Self {
            delegations,
            direct,
            transport,
            response_log,
            default_tld_port,
        }
    }

    pub async fn resolve(&self, query: &Query) -> Response {
        let response = match self.delegations.find(&query.domain) {
            Some(delegation) => match query.mode {
                QueryMode::Iterative => {
                    debug!(domain = %query.domain, tld = %delegation.tld, "Issuing referral");
                    Response::referral(query, delegation.endpoint.to_string())
                }
                QueryMode::Recursive => self.forward(query, delegation).await,
            },
            None => self.answer_directly(query),
        };

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

    async fn forward(&self, query: &Query, delegation: &TldDelegation) -> Response {
        let host = delegation.endpoint.host();
        let port = delegation.endpoint.port_or(self.default_tld_port);

        let upstream = match self.transport.exchange(host, port, query).await {
            Ok(upstream) => upstream,
            Err(e) => {
                let reason = if e.is_transport() {
                    "unreachable"
                } else {
                    "malformed reply"
                };
                warn!(
                    error = %e,
                    reason,
                    server = %delegation.endpoint,
                    domain = %query.domain,
                    id = query.id,
                    "TLD server failed, answering NotFound"
                );
                return Response::not_found(query);
            }
        };

        if upstream.id != query.id {
            warn!(
                server = %delegation.endpoint,
                expected = query.id,
                received = upstream.id,
                "TLD server answered with a foreign id, answering NotFound"
            );
            return Response::not_found(query);
        }

        match upstream.flag {
            ResponseFlag::Authoritative => {
                info!(
                    domain = %upstream.domain,
                    address = %upstream.target,
                    id = upstream.id,
                    "Recursive answer obtained"
                );
                upstream.into_recursive_answer()
            }
            ResponseFlag::NotFound => Response::not_found(query),
            other => {
                debug!(
                    flag = %other,
                    server = %delegation.endpoint,
                    "Relaying non-authoritative upstream answer"
                );
                upstream
            }
        }
    }

    fn answer_directly(&self, query: &Query) -> Response {
        match self.direct.lookup(&query.domain) {
            Some(entry) => Response::authoritative(
                query,
                Arc::clone(&query.domain),
                Arc::clone(&entry.address),
            ),
            None => {
                info!(domain = %query.domain, id = query.id, "No direct mapping");
                Response::not_found(query)
            }
        }
    }
}

#[async_trait]
impl QueryHandler for RootResolverUseCase {
    async fn handle(&self, query: &Query) -> Response {
        self.resolve(query).await
    }

    fn role(&self) -> &'static str {
        "rs"
    }
}
