use std::path::Path;

use anyhow::Context;
use book_catalog::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

async fn load_config(args: &CliArgs) -> anyhow::Result<ServerConfig> {
    let config = if Path::new(&args.config_file).exists() {
        ServerConfig::from_config_file(&args.config_file).await?
    } else {
        tracing::warn!(config_file = %args.config_file, "Config file not found, using defaults");

        ServerConfig::default()
    };

    Ok(match args.socket_address {
        Some(socket_address) => config.with_socket_address(socket_address),
        None => config,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,book_catalog=trace,tower_http=trace");
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!("Starting ...");

    let config = load_config(&args).await?;
    let server = Server::new(config);

    server.run().await?;

    Ok(())
}
