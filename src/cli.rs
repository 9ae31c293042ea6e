use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "login-form")]
#[command(version)]
#[command(about = "Login form endpoint and form client")]
pub struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serves the form endpoint and static assets
    Serve,
    /// Validates credentials and submits them once to the form endpoint
    Submit {
        /// Email address to submit
        #[arg(long, default_value = "")]
        email: String,
        /// Password to submit
        #[arg(long, default_value = "")]
        password: String,
        /// Form endpoint URL, overriding client.endpoint
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
}
