//! Config command handlers.

use anyhow::{Context, Result};
use evd_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

/// Prints the configuration after file, defaults and flags are applied.
pub fn show(config: &config::Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    println!("# effective base_path = {:?}", config.effective_base_path());
    Ok(())
}

pub fn generate() -> Result<()> {
    let toml = config::Config::generate()?;
    print!("{toml}");
    Ok(())
}
