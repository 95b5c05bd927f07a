//! `recipe-api` binary

use clap::Parser;
use recipe_api::{config::Config, server::Server};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recipe-api",
    about = "Fridge Friend recipe generation API",
    version,
    author
)]
struct Args {
    /// TOML configuration file; defaults and environment apply without one
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a default configuration and exit
    #[arg(long)]
    gen_config: bool,

    #[arg(short, long)]
    debug: bool,
}

/// JSON logs; `RUST_LOG` wins over `--debug`
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout stays clean for redirection into a file
    if args.gen_config {
        println!("{}", Config::generate_example()?);
        return Ok(());
    }

    init_tracing(args.debug);
    info!(version = recipe_api::VERSION, "Starting recipe API");

    let config = Config::load(args.config.as_deref())?;
    info!(bind_address = %config.server.bind_address, "Configuration loaded");

    Server::new(config)
        .await?
        .run()
        .await
        .inspect_err(|e| error!("Recipe API stopped with an error: {}", e))?;

    info!("Recipe API shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["recipe-api", "-c", "broker.toml", "--debug"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("broker.toml")));
        assert!(args.debug);
        assert!(!args.gen_config);

        let args = Args::try_parse_from(["recipe-api", "--gen-config"]).unwrap();
        assert!(args.gen_config);
        assert_eq!(args.config, None);
    }
}
