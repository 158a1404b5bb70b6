use clap::{Args, Parser, Subcommand};
use rudns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rudns")]
#[command(version)]
#[command(about = "RU-DNS - two-tier name resolution over TCP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Bind address for the server roles
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Timeout for every outbound call, in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    role: Role,
}

#[derive(Subcommand)]
enum Role {
    /// Run the root server
    Rs(RootArgs),
    /// Run a TLD server
    Ts(TldArgs),
    /// Resolve every line of the hostnames file through the root server
    Client(ClientArgs),
}

#[derive(Args)]
struct RootArgs {
    /// Port to listen on
    port: Option<u16>,

    /// Delegation and direct mapping table
    #[arg(long, value_name = "FILE")]
    database: Option<String>,

    /// Append-only response log
    #[arg(long, value_name = "FILE")]
    responses: Option<String>,

    /// Number of leading database lines holding TLD delegations
    #[arg(long)]
    delegation_lines: Option<usize>,
}

#[derive(Args)]
struct TldArgs {
    /// Port to listen on
    port: Option<u16>,

    /// Server name, used to derive default file names
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Authoritative mapping table
    #[arg(long, value_name = "FILE")]
    database: Option<String>,

    /// Append-only response log
    #[arg(long, value_name = "FILE")]
    responses: Option<String>,
}

#[derive(Args)]
struct ClientArgs {
    /// Root server host
    rs_host: Option<String>,

    /// Root server port, also assumed for referred TLD servers without one
    port: Option<u16>,

    /// Input list of `domain mode` lines
    #[arg(long, value_name = "FILE")]
    hostnames: Option<String>,

    /// Output log, recreated on every run
    #[arg(long, value_name = "FILE")]
    resolved: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            bind_address: self.bind.clone(),
            query_timeout_ms: self.timeout_ms,
            log_level: self.log_level.clone(),
            ..Default::default()
        };

        match &self.role {
            Role::Rs(args) => {
                overrides.port = args.port;
                overrides.root_database = args.database.clone();
                overrides.root_responses = args.responses.clone();
                overrides.delegation_lines = args.delegation_lines;
            }
            Role::Ts(args) => {
                overrides.port = args.port;
                overrides.tld_name = args.name.clone();
                overrides.tld_database = args.database.clone();
                overrides.tld_responses = args.responses.clone();
            }
            Role::Client(args) => {
                overrides.port = args.port;
                overrides.rs_host = args.rs_host.clone();
                overrides.hostnames = args.hostnames.clone();
                overrides.resolved = args.resolved.clone();
            }
        }

        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting RU-DNS v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.role {
        Role::Rs(_) => {
            let handler = di::build_root_resolver(&config).await?;
            server::run_until_ctrl_c(&config, handler).await
        }
        Role::Ts(_) => {
            let handler = di::build_tld_resolver(&config).await?;
            server::run_until_ctrl_c(&config, handler).await
        }
        Role::Client(_) => di::run_client(&config).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "RU-DNS exited with an error");
    }
    result
}
