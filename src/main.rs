use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shortlink::cli::Cli;
use shortlink::config::Config;
use shortlink::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse().serve_args();

    let mut config = Config::from_env()?;
    args.apply(&mut config);

    init_tracing(&config);

    config.validate()?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    // An explicit debug switch beats RUST_LOG.
    let filter = if config.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
