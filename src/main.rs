use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pivdocs::api::{self, CspNonce, SecurityPolicy};
use pivdocs::config::SiteConfig;

#[derive(Parser)]
#[command(name = "pivdocs")]
#[command(about = "Website and manual server for the PIV analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Send production headers (HSTS, strict CSP)
        #[arg(long)]
        production: bool,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the route table
    Routes,
    /// Print the Content-Security-Policy for a freshly minted nonce
    Policy {
        #[arg(long)]
        production: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "pivdocs=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    tracing::info!(
        "Starting pivdocs ({}) on {}",
        config.environment.as_str(),
        addr
    );

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("pivdocs listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pivdocs stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            production,
            config,
        }) => {
            let mut site = match config {
                Some(path) => SiteConfig::load(&path)?,
                None => SiteConfig::from_env()?,
            };
            site.apply_cli(host, port, production);

            serve(site).await?;
        }
        Some(Commands::Routes) => {
            for (method, path, description) in api::ROUTES {
                println!("{:<6} {:<20} {}", method, path, description);
            }
        }
        Some(Commands::Policy { production }) => {
            let policy = if production {
                SecurityPolicy::production(pivdocs::config::DEFAULT_HSTS_MAX_AGE)
            } else {
                SecurityPolicy::development()
            };
            let nonce = CspNonce::generate()?;
            for (name, value) in policy.headers(&nonce) {
                println!("{}: {}", name, value);
            }
        }
        None => {
            // Default: start server with env configuration
            serve(SiteConfig::from_env()?).await?;
        }
    }

    Ok(())
}
