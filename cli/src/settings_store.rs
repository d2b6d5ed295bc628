//! Settings persistence for the host.
//!
//! The engine only ever sees a `MeterConfig` value; reading and writing the
//! TOML document happens here.

use std::fs;
use std::path::{Path, PathBuf};

use dpsmeter_types::MeterSettings;

/// Errors that can occur while loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Default settings location: `<config dir>/dpsmeter/settings.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dpsmeter").join("settings.toml"))
}

/// Load a settings file. Missing keys fall back to their defaults.
pub fn load_settings(path: &Path) -> Result<MeterSettings, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load settings, falling back to defaults when the file is missing or unreadable.
pub fn load_settings_or_default(path: &Path) -> MeterSettings {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file, using defaults");
        return MeterSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load settings, using defaults");
            MeterSettings::default()
        }
    }
}

/// Save settings as pretty TOML, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &MeterSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(settings).map_err(|e| SettingsError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| SettingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "Settings saved");
    Ok(())
}
