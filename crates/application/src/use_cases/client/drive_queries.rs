use crate::ports::{QueryTransport, ResponseLog};
use rudns_domain::{Endpoint, Query, QueryMode, QueryPlan, Response};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Hop at which a query pair stopped without an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedHop {
    Root,
    Tld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Done,
    Failed(FailedHop),
}

#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub plan: QueryPlan,
    /// Every response received for this pair, in arrival order.
    pub responses: Vec<Response>,
    pub state: ResolutionState,
}

impl ResolutionOutcome {
    pub fn is_done(&self) -> bool {
        self.state == ResolutionState::Done
    }

    /// The last answer received, i.e. the one the pair resolved to.
    pub fn final_response(&self) -> Option<&Response> {
        self.responses.last()
    }
}

/// Client side of the protocol: one RS query per plan entry, plus a single
/// follow-up to the referred TLD server for iterative referrals.
pub struct ClientDriverUseCase {
    transport: Arc<dyn QueryTransport>,
    resolved_log: Arc<dyn ResponseLog>,
    root_host: String,
    root_port: u16,
}

impl ClientDriverUseCase {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        resolved_log: Arc<dyn ResponseLog>,
        root_host: impl Into<String>,
        root_port: u16,
    ) -> Self {
        Self {
            transport,
            resolved_log,
            root_host: root_host.into(),
            root_port,
        }
    }

    pub async fn run(&self, plans: &[QueryPlan]) -> Vec<ResolutionOutcome> {
        let mut next_id: u64 = 1;
        let mut outcomes = Vec::with_capacity(plans.len());

        for plan in plans {
            outcomes.push(self.resolve_one(plan, &mut next_id).await);
            next_id += 1;
        }

        let done = outcomes.iter().filter(|o| o.is_done()).count();
        info!(total = outcomes.len(), done, "Finished processing queries");

        outcomes
    }

    async fn resolve_one(&self, plan: &QueryPlan, next_id: &mut u64) -> ResolutionOutcome {
        let query = Query::new(Arc::clone(&plan.domain), *next_id, plan.mode);
        let mut outcome = ResolutionOutcome {
            plan: plan.clone(),
            responses: Vec::with_capacity(2),
            state: ResolutionState::Done,
        };

        let root_answer = match self
            .transport
            .exchange(&self.root_host, self.root_port, &query)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    server = %self.root_host,
                    domain = %plan.domain,
                    id = query.id,
                    "No response received from RS"
                );
                outcome.state = ResolutionState::Failed(FailedHop::Root);
                return outcome;
            }
        };

        self.record(&root_answer).await;
        let follow_referral = plan.mode == QueryMode::Iterative && root_answer.is_referral();
        let referral_target = Arc::clone(&root_answer.target);
        outcome.responses.push(root_answer);

        if !follow_referral {
            return outcome;
        }

        let endpoint: Endpoint = match referral_target.parse() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                warn!(error = %e, referral = %referral_target, "Referral target is not an endpoint");
                outcome.state = ResolutionState::Failed(FailedHop::Tld);
                return outcome;
            }
        };

        *next_id += 1;
        let follow_up = Query::iterative(Arc::clone(&plan.domain), *next_id);
        let port = endpoint.port_or(self.root_port);
        debug!(server = %endpoint, port, query = %follow_up, "Following referral");

        match self
            .transport
            .exchange(endpoint.host(), port, &follow_up)
            .await
        {
            Ok(response) => {
                self.record(&response).await;
                outcome.responses.push(response);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    server = %endpoint,
                    domain = %plan.domain,
                    id = follow_up.id,
                    "No response received from TS"
                );
                outcome.state = ResolutionState::Failed(FailedHop::Tld);
            }
        }

        outcome
    }

    async fn record(&self, response: &Response) {
        if let Err(e) = self.resolved_log.append(response).await {
            warn!(error = %e, id = response.id, "Failed to record resolved response");
        }
    }
}
