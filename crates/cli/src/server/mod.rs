use rudns_application::ports::QueryHandler;
use rudns_domain::Config;
use rudns_infrastructure::server::RuDnsServer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves until Ctrl-C. Bind failures are returned so the process exits non-zero.
pub async fn run_until_ctrl_c(
    config: &Config,
    handler: Arc<dyn QueryHandler>,
) -> anyhow::Result<()> {
    let addr = config.server.listen_addr();
    let server = RuDnsServer::bind(&addr, handler, config.network.max_message_size)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    server.run(shutdown).await;
    info!("Server shutdown complete");
    Ok(())
}
