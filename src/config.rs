// Einstellungen der Anwendung, als JSON im Konfigurationsverzeichnis

use crate::error::ConfigError;
use crate::geometry::IntersectCfg;
use crate::scene::SceneParams;
use crate::view::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Umgebungsvariable für einen abweichenden Pfad der Konfigurationsdatei
pub const CONFIG_ENV: &str = "STRICH_CONFIG";

const APP_DIR: &str = "strich-geometrie";
const FILE_NAME: &str = "config.json";

/// Farben und Größen der Zeichnung
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub base_color: Color,
    pub ray_color: Color,
    pub boundary_color: Color,
    pub sector_color: Color,
    pub text_color: Color,
    pub line_width: f32,
    pub sector_radius: f32,
    pub font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            base_color: Color::rgb(50, 50, 200),
            ray_color: Color::rgb(200, 100, 0),
            boundary_color: Color::rgb(150, 150, 150),
            sector_color: Color::rgba(255, 200, 0, 90),
            text_color: Color::rgb(56, 62, 66),
            line_width: 3.0,
            sector_radius: 60.0,
            font_size: 18.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneParams,
    pub intersect: IntersectCfg,
    pub style: Style,
}

impl AppConfig {
    /// Standardpfad: `$STRICH_CONFIG` oder `<config_dir>/strich-geometrie/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Lädt die Einstellungen vom Standardpfad, bei Problemen Standardwerte
    pub fn load() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{e}, verwende Standardwerte");
                return Self::default();
            }
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "keine Konfiguration vorhanden, verwende Standardwerte");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}, verwende Standardwerte");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text).map_err(io_err)?;
        tracing::info!(path = %path.display(), "Einstellungen gespeichert");
        Ok(())
    }

    /// Speichert am Standardpfad
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }
}
