use clap::{Parser, Subcommand};

/// Lodge operator tool.
#[derive(Parser, Debug)]
#[command(name = "lodge_cli", version, about = "Lodge operator tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Apply database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },

    /// Create the seed admin if it does not exist yet.
    SeedAdmin {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        #[arg(long, env = "SEED_ADMIN_EMAIL")]
        email: String,

        #[arg(long, env = "SEED_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Print the stored credential for a password.
    HashPassword {
        #[arg(env = "LODGE_PASSWORD", hide_env_values = true)]
        password: String,
    },
}
