//! config command - Get, set, or list configuration values

use crate::core::config::{Config, ConfigKey};
use crate::engine::Context;
use anyhow::{Context as _, Result};

fn load(ctx: &Context) -> Result<Config> {
    let paths = ctx.paths()?;
    Config::load(&ctx.env, &paths).context("Failed to load config")
}

/// Get a configuration value (defaults applied).
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    let config = load(ctx)?;
    println!("{}", config.get(key));
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    let mut config = load(ctx)?;

    config.set(key, value)?;
    let path = config.save().context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} = {} ({})", key, value, path.display());
    }

    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load(ctx)?;

    match config.loaded_from() {
        Some(path) => println!("# gov configuration ({})", path.display()),
        None => println!("# gov configuration (defaults; {} not found)", config.path().display()),
    }

    for key in ConfigKey::ALL {
        println!("{} = {}", key, config.get(key));
    }

    Ok(())
}
