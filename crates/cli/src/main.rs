use anyhow::Context;
use clap::Parser;
use ferrous_cname_application::use_cases::InjectCnameUseCase;
use ferrous_cname_domain::CliOverrides;
use ferrous_cname_infrastructure::dns::{HickoryMessageCodec, UdpForwarder};
use ferrous_cname_infrastructure::rules::RuleStore;
use ferrous_cname_jobs::{JobRunner, RulesReloadJob};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod check;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-cname")]
#[command(version)]
#[command(about = "Ferrous CNAME - DNS forwarder that answers configured domains with a CNAME")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (host:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// CNAME rules file (JSON)
    #[arg(short = 'r', long, value_name = "FILE")]
    rules: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Resolve one name against the rules and exit
    #[arg(long, value_name = "NAME")]
    check: Option<String>,

    /// Query type used with --check
    #[arg(long, default_value = "A", requires = "check")]
    qtype: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream.clone(),
        rules_file: cli.rules.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let rules = Arc::new(RuleStore::load(&config.cname.rules_file));
    let use_case = Arc::new(InjectCnameUseCase::new(
        rules.clone(),
        Arc::new(HickoryMessageCodec::new()),
    ));

    if let Some(name) = cli.check.as_deref() {
        return check::run_check(&use_case, name, &cli.qtype);
    }

    info!("Starting Ferrous CNAME v{}", env!("CARGO_PKG_VERSION"));

    let bind_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.dns_port)
        .parse()
        .context("Invalid bind address")?;
    let upstream_addr: SocketAddr = config
        .upstream
        .server
        .parse()
        .with_context(|| format!("Invalid upstream address '{}'", config.upstream.server))?;

    let forwarder = Arc::new(UdpForwarder::new(
        upstream_addr,
        Duration::from_millis(config.upstream.query_timeout),
    ));

    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.cname.reload_interval_secs > 0 {
        runner = runner.with_rules_reload(
            RulesReloadJob::new(rules).with_interval(config.cname.reload_interval_secs),
        );
    }
    let jobs = runner.start().await;

    let server_shutdown = shutdown.clone();
    let server = tokio::spawn(server::start_dns_server(
        bind_addr,
        use_case,
        forwarder,
        server_shutdown,
    ));

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received");
        }
        result = server => {
            match result {
                Ok(Err(e)) => error!(error = %e, "DNS server error"),
                Err(e) => error!(error = %e, "DNS server task panicked"),
                Ok(Ok(())) => {}
            }
        }
    }

    shutdown.cancel();
    for job in jobs {
        let _ = job.await;
    }

    info!("Server shutdown complete");
    Ok(())
}
