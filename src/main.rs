use anyhow::{Context, Result};
use clap::Parser;
use font_integrity::cli::Args;
use font_integrity::utils::init_logging;
use font_integrity::{run, Error};

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    init_logging(config.debug_mode);

    if !config.root.is_dir() {
        eprintln!("Error: {}", Error::InvalidPath(config.root.clone()));
        std::process::exit(1);
    }

    run(&config).with_context(|| format!("Font check of {} failed", config.root.display()))?;
    Ok(())
}
