//! Interactive shell command

use crate::config::Config;
use crate::feedback;
use crate::registry::{AppKey, Registry};
use crate::shell::ShellController;
use crate::shell::viewport::columns_to_px;
use crate::tui::{self, App};
use anyhow::{Context, Result};
use ratatui::layout::Rect;

/// `mateapps run` (and the default with no subcommand)
pub(super) async fn cmd_run(mut config: Config, app: Option<String>, mute: bool) -> Result<()> {
    if mute {
        config.sound.enabled = false;
    }

    let registry =
        Registry::with_overrides(&config.apps).context("Failed to build app registry")?;
    let initial = initial_app(&config, app.as_deref(), &registry)?;

    let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let shell = ShellController::new(
        registry,
        initial,
        columns_to_px(cols),
        feedback::from_config(&config.sound),
    );

    tui::run(App::new(shell, Rect::new(0, 0, cols, rows))).await
}

/// `--app` beats `shell.initial_app`, which beats the first registry entry
fn initial_app(config: &Config, cli_app: Option<&str>, registry: &Registry) -> Result<AppKey> {
    if let Some(raw) = cli_app {
        return Ok(raw.parse()?);
    }
    Ok(config.shell.initial_app()?.unwrap_or_else(|| registry.first()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_app_precedence() {
        let registry = Registry::builtin();
        let mut config = Config::default();
        assert_eq!(
            initial_app(&config, None, &registry).unwrap(),
            AppKey::Espressioni
        );

        config.shell.initial_app = Some("mcmmcd".into());
        assert_eq!(initial_app(&config, None, &registry).unwrap(), AppKey::Mcmmcd);

        assert_eq!(
            initial_app(&config, Some("sudoku"), &registry).unwrap(),
            AppKey::Sudoku
        );
    }

    #[test]
    fn test_initial_app_rejects_unknown() {
        let registry = Registry::builtin();
        assert!(initial_app(&Config::default(), Some("scacchi"), &registry).is_err());
    }
}
