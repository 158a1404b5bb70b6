use anyhow::Context;
use rudns_application::ports::{QueryHandler, QueryTransport, ResponseLog};
use rudns_application::use_cases::{
    AuthoritativeResolverUseCase, ClientDriverUseCase, RootResolverUseCase,
};
use rudns_domain::Config;
use rudns_infrastructure::repositories::FileResponseLog;
use rudns_infrastructure::tables::{load_address_table, load_query_plans, load_root_database};
use rudns_infrastructure::transport::TcpTransport;
use std::sync::Arc;
use tracing::{info, warn};

fn transport(config: &Config) -> Arc<dyn QueryTransport> {
    Arc::new(TcpTransport::new(
        config.network.query_timeout(),
        config.network.max_message_size,
    ))
}

pub async fn build_root_resolver(config: &Config) -> anyhow::Result<Arc<dyn QueryHandler>> {
    let (delegations, direct) =
        load_root_database(&config.root.database, config.root.delegation_lines)?;

    let response_log: Arc<dyn ResponseLog> = Arc::new(
        FileResponseLog::append_mode(&config.root.responses)
            .await
            .context("opening root response log")?,
    );

    Ok(Arc::new(RootResolverUseCase::new(
        Arc::new(delegations),
        Arc::new(direct),
        transport(config),
        response_log,
        config.server.port,
    )))
}

pub async fn build_tld_resolver(config: &Config) -> anyhow::Result<Arc<dyn QueryHandler>> {
    let database = config.tld.database_path();
    let records = load_address_table(&database)?;

    let responses = config.tld.responses_path();
    let response_log: Arc<dyn ResponseLog> = Arc::new(
        FileResponseLog::append_mode(&responses)
            .await
            .with_context(|| format!("opening {} response log", config.tld.name))?,
    );

    info!(name = %config.tld.name, database = %database, "TLD server configured");

    Ok(Arc::new(AuthoritativeResolverUseCase::new(
        Arc::new(records),
        response_log,
    )))
}

/// Resolves the whole hostnames file, then returns.
pub async fn run_client(config: &Config) -> anyhow::Result<()> {
    let plans = load_query_plans(&config.client.hostnames)?;

    let resolved_log = Arc::new(
        FileResponseLog::truncate_mode(&config.client.resolved)
            .await
            .context("opening resolved log")?,
    );

    let driver = ClientDriverUseCase::new(
        transport(config),
        Arc::clone(&resolved_log) as Arc<dyn ResponseLog>,
        config.client.rs_host.clone(),
        config.server.port,
    );

    info!(
        rs_host = %config.client.rs_host,
        port = config.server.port,
        queries = plans.len(),
        "Client started"
    );

    let outcomes = driver.run(&plans).await;
    let failed = outcomes.iter().filter(|o| !o.is_done()).count();
    if failed > 0 {
        warn!(failed, "Some queries did not complete");
    }

    info!(resolved = %resolved_log.path().display(), "Client finished");
    Ok(())
}
