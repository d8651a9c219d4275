use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use vibe::api::{EndpointTarget, HttpFortuneSource};
use vibe::core::config::{self, CliOverrides};
use vibe::core::viewer;

#[derive(Parser)]
#[command(name = "vibe", version, about = "Fortune viewer for the Vibe Code demo API")]
struct Args {
    /// Backend base URL (overrides VIBE_API_URL and the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Fetch a single fortune, print it and exit instead of starting the TUI
    #[arg(long, value_enum)]
    once: Option<EndpointTarget>,

    /// Log file (defaults to vibe.log in the current directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger is configured from the file, so report load errors after init
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::VibeConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        api_url: args.api_url,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Vibe starting up with API {} ({:?})",
        resolved.base_url,
        resolved.base_url_source
    );

    if let Some(target) = args.once {
        let source = HttpFortuneSource::new(resolved.base_url);
        return match viewer::fetch_once(&source, target).await {
            Ok(text) => {
                println!("{text}");
                Ok(())
            }
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
        };
    }

    vibe::tui::run(resolved)
}
