//! Non-interactive commands

use crate::config::Config;
use crate::registry::{AppEntry, Registry};
use anyhow::{Context, Result};

/// `mateapps list`
pub(super) fn cmd_list(config: &Config) -> Result<()> {
    let registry =
        Registry::with_overrides(&config.apps).context("Failed to build app registry")?;
    for line in list_lines(&registry) {
        println!("{}", line);
    }
    Ok(())
}

fn list_lines(registry: &Registry) -> Vec<String> {
    registry.iter().map(format_entry).collect()
}

fn format_entry(entry: &AppEntry) -> String {
    format!(
        "{:<12} {} {}",
        entry.key.as_str(),
        entry.key.icon().glyph,
        entry.title
    )
}

/// `mateapps config`
pub(super) fn cmd_config(config: &Config) -> Result<()> {
    let text = config
        .to_toml()
        .context("Failed to serialize configuration")?;
    print!("{}", text);
    Ok(())
}
