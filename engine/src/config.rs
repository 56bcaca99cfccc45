//! Optional user configuration.
//!
//! `~/.folio/config.toml`, falling back to `./.folio/config.toml`. Absence
//! is not an error; every field has a default.

use serde::Deserialize;
use std::{fs, path::PathBuf};

use folio_types::ui::UiOptions;

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and decorations.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable animations and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl FolioConfig {
    /// Primary config path (`~/.folio/config.toml`), if a home directory
    /// exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
    }

    /// Load the first config file that exists. `Ok(None)` when none does.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let mut candidates = Vec::new();
        if let Some(primary) = Self::path() {
            candidates.push(primary);
        }
        candidates.push(PathBuf::from(".folio").join("config.toml"));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            let config: FolioConfig =
                toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
            return Ok(Some(config));
        }
        Ok(None)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: FolioConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn app_section_maps_to_ui_options() {
        let config: FolioConfig = toml::from_str(
            "[app]\nascii_only = true\nreduced_motion = true\n",
        )
        .expect("config parses");
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.reduced_motion);
        assert!(!options.high_contrast);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config: FolioConfig =
            toml::from_str("[app]\nfuture_option = \"x\"\n").expect("unknown keys ignored");
        assert_eq!(config.ui_options(), UiOptions::default());
    }
}
