//! Command-line interface.

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

/// URL shortener with redirect visit tracking.
#[derive(Debug, Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
}

/// Flags overriding the environment configuration.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database URL (postgres://… or sqlite:…)
    #[arg(long)]
    pub db: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Serve arguments; running without a subcommand serves with defaults.
    pub fn serve_args(self) -> ServeArgs {
        match self.command {
            Some(Command::Serve(args)) => args,
            None => ServeArgs::default(),
        }
    }
}

impl ServeArgs {
    /// Applies the flags on top of the loaded configuration.
    pub fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.set_port(port);
        }
        if let Some(db) = self.db {
            config.database_url = db;
        }
        if self.debug {
            config.debug = true;
        }
    }
}
