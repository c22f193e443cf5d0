use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_lists::{api, config::AppConfig, store::SessionRegistry};

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "Session-scoped todo lists in the browser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind (overrides TODO_LISTS_HOST)
        #[arg(long)]
        host: Option<std::net::IpAddr>,

        /// Port to bind (overrides TODO_LISTS_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_lists=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let app = api::create_router(SessionRegistry::new(), config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Todo lists listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AppConfig::from_env();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        // Default: start server with environment configuration
        None => serve(config).await?,
    }

    Ok(())
}
