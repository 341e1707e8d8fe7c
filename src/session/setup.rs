//! Session setup and initialization

use crate::config::Config;
use crate::error::ShowcaseError;
use crate::ui::UIConfig;
use log::{debug, info};
use std::path::Path;
use std::time::Duration;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    /// Force the background colour on, whatever the file says.
    pub with_background: bool,
    pub progress_step_ms: Option<u64>,
    pub seed: Option<u64>,
}

/// Session data for both TUI and headless modes
#[derive(Debug, Clone)]
pub struct SessionData {
    /// Resolved host settings
    pub ui_config: UIConfig,
}

/// Resolves the settings of a session
///
/// 1. Loads the config file, or defaults when it does not exist
/// 2. Applies the command-line overrides
///
/// # Errors
/// Returns an error when the config file exists but cannot be read or parsed.
pub fn setup_session(
    config_path: &Path,
    overrides: SessionOverrides,
) -> Result<SessionData, ShowcaseError> {
    let config = Config::load_or_default(config_path)?;
    debug!("Loaded config from {}: {:?}", config_path.display(), config);

    let progress_step = overrides
        .progress_step_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.progress_step());

    let ui_config = UIConfig {
        with_background_color: overrides.with_background || config.with_background_color,
        progress_step,
        celebration: config.celebration(),
        seed: overrides.seed,
    };
    info!(
        "Session ready (progress step {:?}, celebration {:?})",
        ui_config.progress_step, ui_config.celebration
    );

    Ok(SessionData { ui_config })
}
