//! indicators -- queries the mindicador.cl economic indicators API.
//!
//! Entry point. Wires together:
//!   - Configuration loading
//!   - Tracing setup
//!   - The two startup calls (all indicators, current UF) on a
//!     single-threaded runtime

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use indicators::HttpJsonClient;
use indicators::config::Config;
use indicators::net::ReqwestTransport;
use indicators::runner::{list_console_handlers, run_startup, uf_console_handlers};

// ---------------------------------------------------------------------------
// CLI argument parsing (minimal, no clap dependency)
// ---------------------------------------------------------------------------

struct CliArgs {
    config_path: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                if let Some(path) = args.next() {
                    config_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("indicators {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Run with --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    CliArgs { config_path }
}

fn print_usage() {
    println!(
        "\
indicators {version} -- Chilean economic indicators from mindicador.cl

USAGE:
    indicators [OPTIONS]

OPTIONS:
    -c, --config <PATH>    Path to configuration file [default: indicators.toml]
    -h, --help             Print this help message
    -V, --version          Print version information

ENVIRONMENT:
    RUST_LOG                   Override log level (e.g. RUST_LOG=debug)
    INDICATORS_CONFIG          Alternative to --config flag
    INDICATORS_API_BASE_URL    Override api.base_url
",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// `--config` wins, then `INDICATORS_CONFIG`, then the default file name.
fn resolve_config_path(cli: Option<PathBuf>, env: Option<String>) -> PathBuf {
    cli.or_else(|| env.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("indicators.toml"))
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
        .block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    let cli = parse_args();
    let config_path = resolve_config_path(cli.config_path, std::env::var("INDICATORS_CONFIG").ok());

    let config = Config::load(&config_path)?;

    init_tracing(&config);

    let endpoints = config.endpoints();
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        all = %endpoints.all,
        uf = %endpoints.uf,
        "Starting indicators"
    );

    let transport = ReqwestTransport::builder()
        .user_agent(&config.api.user_agent)
        .build();
    let client = HttpJsonClient::with_transport(transport);

    // Failures are reported by each call's handler; they do not change the
    // exit status.
    run_startup(
        client,
        endpoints,
        list_console_handlers(),
        uf_console_handlers(),
    )
    .await;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tracing initialization
// ---------------------------------------------------------------------------

/// Set up the tracing subscriber based on configuration.
fn init_tracing(config: &Config) {
    // RUST_LOG env var takes precedence over config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.logging.level;
        EnvFilter::new(format!("indicators={level},warn"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_usage_does_not_panic() {
        print_usage();
    }

    #[test]
    fn test_resolve_config_path_precedence() {
        assert_eq!(
            resolve_config_path(Some("a.toml".into()), Some("b.toml".into())),
            PathBuf::from("a.toml")
        );
        assert_eq!(
            resolve_config_path(None, Some("b.toml".into())),
            PathBuf::from("b.toml")
        );
        assert_eq!(resolve_config_path(None, None), PathBuf::from("indicators.toml"));
    }
}
