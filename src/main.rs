use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use qdrant_admin::cli::{shell, DistanceArg};
use qdrant_admin::connector::api::{Container, ContainerConfig, Router};
use qdrant_admin::{
    ChunkingConfig, Commands, QdrantConfig, VectorParams, DEFAULT_QDRANT_PORT, DEFAULT_QDRANT_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_UPSERT_BATCH_SIZE, DEFAULT_VECTOR_SIZE,
};

#[derive(Parser)]
#[command(name = "qdrant-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Qdrant base URL; the port is added when the URL has none
    #[arg(long, global = true, env = "QDRANT_URL", default_value = DEFAULT_QDRANT_URL)]
    url: String,

    #[arg(long, global = true, env = "QDRANT_PORT", default_value_t = DEFAULT_QDRANT_PORT)]
    port: u16,

    #[arg(long, global = true, env = "QDRANT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Use an in-process store instead of a Qdrant server
    #[arg(long, global = true)]
    memory_storage: bool,

    /// Vector size of created collections and of placeholder embeddings
    #[arg(long, global = true, default_value_t = DEFAULT_VECTOR_SIZE)]
    vector_size: u64,

    #[arg(long, global = true, value_enum, default_value_t = DistanceArg::Cosine)]
    distance: DistanceArg,

    /// Maximum chunk length in characters
    #[arg(long, global = true, default_value_t = 1000)]
    chunk_size: usize,

    /// Characters shared between neighbouring chunks
    #[arg(long, global = true, default_value_t = 200)]
    chunk_overlap: usize,

    /// Points per upsert request
    #[arg(long, global = true, default_value_t = DEFAULT_UPSERT_BATCH_SIZE)]
    batch_size: usize,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            qdrant: QdrantConfig {
                url: self.url.clone(),
                port: self.port,
                api_key: self.api_key.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            memory_storage: self.memory_storage,
            vector_params: VectorParams::new(self.vector_size, self.distance.into()),
            chunking: ChunkingConfig::new(self.chunk_size, self.chunk_overlap),
            batch_size: self.batch_size,
            show_progress: true,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(cli.container_config())?;

    if cli.command == Commands::Shell {
        return shell::run(&container).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
