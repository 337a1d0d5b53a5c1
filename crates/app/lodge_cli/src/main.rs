// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use lodge_core::auth::bootstrap::{SeedAdmin, SeedOutcome, seed_admin};
use lodge_core::auth::password::hash_password;
use lodge_core::store::PgStore;
use sqlx::PgPool;

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::HashPassword { password } => {
            println!("{}", hash_password(&password));
        }
        Commands::Migrate { database_url } => {
            tokio::runtime::Runtime::new()?.block_on(migrate(&database_url))?;
        }
        Commands::SeedAdmin {
            database_url,
            email,
            password,
        } => {
            let config = SeedAdmin::from_parts(Some(email), Some(password)).ok_or_else(|| {
                Error::Custom("seed email and password must not be empty".into())
            })?;
            tokio::runtime::Runtime::new()?.block_on(seed(&database_url, &config))?;
        }
    }

    Ok(())
}

async fn migrate(database_url: &str) -> Result<()> {
    let pool = PgPool::connect(database_url).await?;
    lodge_core::migrate::migrate(&pool).await?;
    log::info!("migrations applied");
    pool.close().await;
    Ok(())
}

async fn seed(database_url: &str, config: &SeedAdmin) -> Result<()> {
    let pool = PgPool::connect(database_url).await?;
    let store = PgStore::new(pool.clone());
    match seed_admin(&store, Some(config)).await? {
        SeedOutcome::Created => log::info!("created admin {}", config.email),
        SeedOutcome::AlreadyExists => log::info!("admin {} already exists", config.email),
        SeedOutcome::Skipped => log::warn!("no seed credentials given"),
    }
    pool.close().await;
    Ok(())
}
