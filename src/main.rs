//! book-catalogue-server - serves the book store over the rpc router.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_catalogue::{rpc, BookStore};

/// Book catalogue rpc server.
#[derive(Parser)]
#[command(name = "book-catalogue-server", about = "Serve the book catalogue store")]
struct Cli {
    /// Address to bind the rpc server.
    #[arg(long, default_value = "127.0.0.1:8080", env = "BOOK_CATALOGUE_BIND")]
    bind: String,

    /// Start without the seed record.
    #[arg(long)]
    empty: bool,
}

/// Settings the server runs with.
#[derive(Debug, Clone)]
struct ServerConfig {
    bind: String,
    seed: bool,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            bind: cli.bind,
            seed: !cli.empty,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalogue=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(Cli::parse().into()).await
}

async fn run(config: ServerConfig) -> Result<()> {
    let store = if config.seed {
        BookStore::seeded()
    } else {
        BookStore::new()
    };
    tracing::info!(books = store.len(), bind = %config.bind, "starting book catalogue");

    let service = Arc::new(rpc::book_service(Arc::new(store)));
    rpc::serve(service, &config.bind).await?;
    Ok(())
}
