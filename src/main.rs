use clap::Parser;
use picklist::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "picklist", about = "Pick numbers off a list, shuffle the rest")]
struct Args {
    /// Seed for the shuffle RNG (same seed, same shuffles)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file to use instead of ~/.picklist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level written to picklist.log (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to picklist.log in current directory.
    // Starts wide open so config loading is logged; narrowed once resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("picklist.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let loaded = config::load_config(args.config.as_deref());
    if let Err(e) = &loaded {
        log::warn!("Using default config: {}", e);
        eprintln!("picklist: {e}; using defaults");
    }
    let file_config = loaded.unwrap_or_default();
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            seed: args.seed,
            log_level: args.log_level,
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "Picklist starting up (seed: {:?}, transition: {:?})",
        resolved.seed,
        resolved.transition
    );

    picklist::tui::run(resolved)
}
