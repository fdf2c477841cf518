//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app::api::{self, SetupOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sxcu-setup")]
#[command(version)]
#[command(
    about = "Generate .env, Caddyfile, docker-compose.yaml and ShareX upload profiles",
    long_about = None
)]
struct Cli {
    /// Output directory [default: output]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Directory with Caddyfile, docker-compose.yaml and sxcu/ templates
    /// (defaults to the built-in templates)
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,
    /// TOML settings file with output_dir, templates_dir and [defaults]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Accept every default without prompting
    #[arg(short = 'y', long)]
    yes: bool,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "sxcu_setup=debug" } else { "sxcu_setup=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = SetupOptions {
        output_dir: cli.output,
        templates_dir: cli.templates,
        settings_file: cli.config,
        accept_defaults: cli.yes,
    };

    if let Err(e) = run_setup(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_setup(options: SetupOptions) -> Result<(), AppError> {
    let outcome = api::setup(options)?;

    for path in &outcome.written {
        println!("✅ Wrote {}", path.display());
    }
    for path in &outcome.removed {
        println!("🗑️  Removed stale {}", path.display());
    }
    match outcome.web_server_port {
        Some(port) => println!(
            "ℹ️  Point your web server at port {} (no Caddyfile generated)",
            port
        ),
        None => println!("ℹ️  Caddy will serve the api and paste site"),
    }
    println!("✅ Setup complete in {}", outcome.output_root.display());
    Ok(())
}
