use clap::{Parser, Subcommand, command};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Alternative configuration file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: ServiceCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ServiceCommand {
    /// Configure a service to start automatically
    Enable {
        /// Service name
        service: String,
    },

    /// Stop a service from starting automatically
    Disable {
        /// Service name
        service: String,
    },

    /// Restart a service
    Restart {
        /// Service name
        service: String,
    },

    /// Report whether a service is enabled
    Status {
        /// Service name
        service: String,
    },

    /// Report the detected service manager and shutdown state
    Detect,
}
