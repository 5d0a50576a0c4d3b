use clap::Parser;
use quartz_dns_api::AppState;
use quartz_dns_domain::CliOverrides;
use quartz_dns_infrastructure::cache::InvalidationSubscriber;
use quartz_dns_infrastructure::dns::QuartzDnsHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "quartz-dns")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quartz DNS - Authoritative DNS server backed by SQLite")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Admin API port
    #[arg(short = 'a', long)]
    api_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        api_port: cli.api_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Quartz DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    // Dependency injection
    let repos = di::Repositories::new(pool, &config.cache);
    let use_cases = di::UseCases::new(&repos, &config);

    let shutdown = CancellationToken::new();

    // The subscriber drops cached entries for every published record
    // mutation, keeping the cache consistent with the store.
    let subscriber = Arc::new(
        InvalidationSubscriber::new(repos.cache.clone()).with_cancellation(shutdown.clone()),
    );
    subscriber.start().await?;

    let app_state = AppState {
        create_zone: use_cases.create_zone,
        delete_zone: use_cases.delete_zone,
        get_zone: use_cases.get_zone,
        list_zones: use_cases.list_zones,
        create_record: use_cases.create_record,
        update_record: use_cases.update_record,
        delete_record: use_cases.delete_record,
        get_record: use_cases.get_record,
        list_records: use_cases.list_records,
        stats: repos.stats.clone(),
    };

    // DNS front end in the background
    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let dns_handler = QuartzDnsHandler::new(use_cases.resolve_query.clone(), repos.stats.clone());

    let dns_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler, dns_shutdown).await {
            error!(error = %e, "DNS server error");
        }
    });

    // Admin API in the background
    let api_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.api_port).parse()?;

    let api_shutdown = shutdown.clone();
    let api_handle = tokio::spawn(async move {
        if let Err(e) = server::start_web_server(api_addr, app_state, api_shutdown).await {
            error!(error = %e, "Admin API server error");
        }
    });

    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, stopping"),
        Err(e) => warn!(error = %e, "Unable to listen for shutdown signal, stopping"),
    }

    shutdown.cancel();
    let _ = api_handle.await;

    info!("Server shutdown complete");
    Ok(())
}
