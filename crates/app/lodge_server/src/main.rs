//! Lodge API server binary.
//!
//! Serves the credential endpoints, the booking-platform webhooks and the
//! public availability read from one listener.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use lodge_api::AppState;
use lodge_api::config::ApiConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "lodge_server", about = "Lodge API server")]
struct Args {
    /// Address to listen on. Overrides `BIND_ADDR`.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/lodge"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Keep all data in process instead of PostgreSQL. Nothing survives a restart.
    #[arg(long, default_value_t = false)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,lodge_api=debug,lodge_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind.clone(),
        pg_connection_url: args.database_url.clone(),
        ..ApiConfig::from_env()
    };

    let state = if args.in_memory {
        warn!("using in-memory store; data is lost on exit");
        AppState::in_memory(config.clone())
    } else {
        info!(max_connections = args.max_connections, "configuring connection pool");
        let pool = PgPoolOptions::new()
            .max_connections(args.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&args.database_url)
            .await?;

        info!("running database migrations");
        lodge_api::migrate(&pool).await?;

        AppState::postgres(pool, config.clone())
    };

    // Seed outside the request path; the request-path layer only retries.
    match state.ensure_seed_admin().await {
        Ok(outcome) => info!(?outcome, "seed admin checked"),
        Err(e) => warn!(error = %e, "seed admin bootstrap failed, will retry on first request"),
    }

    let app = lodge_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
