use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kitespot_agent::api::{AppState, create_router};
use kitespot_agent::handler::handler;

#[derive(Parser)]
#[command(name = "kitespot-agent", about = "Fetch a kitespot page and store it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve `/api/crawler`, one invocation per request
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Run a single invocation and print the response
    Once,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    match Cli::parse().command {
        Command::Serve { bind } => {
            let app = create_router(AppState::from_env());
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            tracing::info!("listening on {bind}");
            axum::serve(listener, app).await?;
        }
        Command::Once => {
            let response = handler().await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.is_ok() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
