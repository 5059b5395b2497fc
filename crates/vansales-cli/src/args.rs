use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CustomerCommands, JourneyArgs};

/// Van sales journey plan client
///
/// Signs in to the journey plan API, lists today's customers by visit
/// status and records visit outcomes. Can also run as an MCP (Model Context
/// Protocol) server over stdio.
#[derive(Parser)]
#[command(version, about, name = "vansales")]
pub struct Args {
    /// Root URL of the journey plan API. Defaults to the config file value,
    /// then http://localhost:3000
    #[arg(long, global = true, env = "VANSALES_API_URL")]
    pub api_url: Option<String>,

    /// Username to sign in with
    #[arg(short, long, global = true, env = "VANSALES_USERNAME")]
    pub username: Option<String>,

    /// Password to sign in with
    #[arg(long, global = true, env = "VANSALES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the config file. Defaults to
    /// $XDG_CONFIG_HOME/vansales/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a command, today's PENDING customers are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// List today's journey, one visit status tab at a time
    #[command(alias = "j")]
    Journey(JourneyArgs),
    /// Show a customer or record a visit
    #[command(alias = "c")]
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Show the option lists published by the API
    Options,
    /// Start the MCP server
    Serve,
}
