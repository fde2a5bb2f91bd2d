use anyhow::Result;
use catalog_aggregator::{
    common::constants::DEFAULT_CONFIG_PATH,
    config::Config,
    infra::ReqwestHttp,
    observability, server, CatalogAggregator,
};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "catalog_aggregator")]
#[command(about = "GraphQL service merging the Fake Store and DummyJSON product catalogs")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL server
    Serve {
        /// Port to run the server on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fetch and merge both catalogs once, printing the products as JSON
    Products {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn build_aggregator(config: &Config) -> Result<Arc<CatalogAggregator>> {
    let http = ReqwestHttp::with_timeout(config.sources.timeout())?;
    Ok(Arc::new(CatalogAggregator::new(
        Arc::new(http),
        config.sources.endpoints(),
        config.sources.output_variant,
    )))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    let _log_guard = observability::init_logging();

    let config = Config::load(&cli.config)?;
    info!(
        source_a = %config.sources.source_a_url,
        source_b = %config.sources.source_b_url,
        variant = ?config.sources.output_variant,
        "Configuration loaded"
    );

    let aggregator = build_aggregator(&config)?;

    match cli.command {
        Commands::Serve { port } => {
            if config.metrics.enabled {
                if let Err(e) = observability::metrics::init() {
                    warn!("Failed to initialize metrics: {}", e);
                }
            }

            let port = port.unwrap_or(config.server.port);
            server::start_server(aggregator, port).await?;
        }
        Commands::Products { pretty } => {
            let products = aggregator.fetch_products().await;
            let output = if pretty {
                serde_json::to_string_pretty(&products)?
            } else {
                serde_json::to_string(&products)?
            };
            println!("{}", output);
        }
    }

    Ok(())
}
