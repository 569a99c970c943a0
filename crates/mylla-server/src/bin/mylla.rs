use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mylla_server::{config, MyllaServer, ServerConfig};

#[derive(Parser)]
#[command(
    name = "mylla",
    version,
    about = "Smart irrigation & fertilization advice API"
)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Directory containing the classifier artifacts
    /// (irrigation.json, fertiliser.json)
    #[arg(long, value_name = "DIR", default_value = config::DEFAULT_MODEL_DIR)]
    model_dir: PathBuf,

    /// Custom nutrient ruleset JSON (defaults to the built-in NPK bands)
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Respond with the bare fertiliser verdict, without nutrient statuses
    /// and recommendations
    #[arg(long)]
    no_recommendations: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        model_dir: cli.model_dir,
        rules_path: cli.rules,
        recommendations: !cli.no_recommendations,
    };

    let server = MyllaServer::new(config)?;
    server.start().await?;

    Ok(())
}
