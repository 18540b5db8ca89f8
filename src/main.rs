use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use volunteer_pool::{
    config::Config, error::ResultExt, pool::Coordinator, rng::RandomNumberGenerator, server,
};

/// Shared chromosome pool for volunteer genetic-algorithm search.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file with `repository` and `vars`.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:5000")]
    bind: String,

    /// Seed for the sampling RNG; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> volunteer_pool::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let config = Config::from_file(&args.config)?;
    info!(
        repository = config.repository(),
        traps = config.vars().traps(),
        cache_size = config.vars().cache_size(),
        "configuration loaded"
    );

    let rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };
    let pool = Arc::new(Coordinator::with_rng(&config, rng)?);
    info!(winning_fitness = pool.termination().target(), "termination rule resolved");

    let listener = TcpListener::bind(args.bind.as_str())
        .await
        .context(format!("Failed to bind {}", args.bind))?;
    server::serve(listener, pool).await
}
