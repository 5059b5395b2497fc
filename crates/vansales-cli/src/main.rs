//! Van sales CLI application
//!
//! Command-line and MCP front-end for the journey plan client.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, VanSalesMcpServer};
use renderer::TerminalRenderer;
use vansales_core::{params::SignIn, ApiClientBuilder, Config};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        username,
        password,
        config,
        no_color,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    let mut builder = ApiClientBuilder::from_config(&config);
    if let Some(api_url) = api_url {
        builder = builder.with_base_url(api_url);
    }
    let client = builder.build().context("Failed to initialize API client")?;
    let credentials = SignIn {
        username: username.or(config.username).unwrap_or_default(),
        password: password.unwrap_or_default(),
    };

    let renderer = TerminalRenderer::new(!no_color);

    info!("vansales started against {}", client.base_url());

    match command {
        Some(Journey(args)) => {
            Cli::new(client, credentials, renderer)
                .journey(&args.into())
                .await
        }
        Some(Customer { command }) => {
            Cli::new(client, credentials, renderer)
                .handle_customer_command(command)
                .await
        }
        Some(Profile) => Cli::new(client, credentials, renderer).profile().await,
        Some(Options) => Cli::new(client, credentials, renderer).options().await,
        Some(Serve) => {
            info!("Starting vansales MCP server");
            run_stdio_server(VanSalesMcpServer::new(client))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(client, credentials, renderer)
                .journey(&Default::default())
                .await
        }
    }
}
