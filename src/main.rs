use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconforge::config::{config_file_path, read_config};
use iconforge::converter::probe_installed;
use iconforge::layout::Layout;
use iconforge::logger::{self, log_error};
use iconforge::pipeline;
use iconforge::{Config, Converter, IconError, PlatformSelection};

/// Rasterize the project logo into Linux and macOS icon sets.
#[derive(Debug, Parser)]
#[command(name = "iconforge", version)]
struct Args {
    /// Project root containing assets/icons/<name>.svg
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Icon basename
    #[arg(long)]
    name: Option<String>,

    #[arg(long, value_enum)]
    platform: Option<PlatformSelection>,

    /// Force one converter instead of probing
    #[arg(long, value_enum)]
    converter: Option<Converter>,

    /// Settings file (defaults to <root>/iconforge.txt)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show which converters are installed and exit
    #[arg(long)]
    list_converters: bool,
}

fn load_config(args: &Args) -> Result<Config, IconError> {
    let path = args.config.clone().unwrap_or_else(|| config_file_path(&args.root));
    let mut cfg = read_config(&path)?;
    if let Some(name) = &args.name {
        cfg.name = name.clone();
    }
    if let Some(p) = args.platform {
        cfg.platform = p;
    }
    if let Some(c) = args.converter {
        cfg.converter = Some(c);
    }
    if let Some(log) = &args.log_file {
        cfg.log_file = log.display().to_string();
    }
    Ok(cfg)
}

fn list_converters() {
    for c in Converter::ALL {
        let state = if probe_installed(c) { "available" } else { "not found" };
        println!("  {:<14} {}", c.program(), state);
    }
}

fn run(args: &Args) -> Result<(), IconError> {
    // Listing is read-only and must not depend on a valid settings file
    if args.list_converters {
        list_converters();
        return Ok(());
    }

    let cfg = load_config(args)?;
    let log_file = (!cfg.log_file.trim().is_empty()).then(|| PathBuf::from(cfg.log_file.trim()));
    logger::init(log_file.as_deref());

    let layout = Layout::new(&args.root, &cfg);
    let summary = pipeline::run(&layout, cfg.platform, cfg.converter).inspect_err(|e| {
        log_error("icon generation aborted", e);
    })?;
    println!(
        "\n✅ Icon generation complete! {}/{} PNG icons via {}",
        summary.succeeded(),
        summary.attempted(),
        summary.converter
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
