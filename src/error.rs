// Fehlertypen für Geometrie, Szene und Konfiguration

use std::path::PathBuf;

/// Fehler des Geometrie-Kerns
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Die beiden Geraden sind parallel (oder eine davon ist entartet)
    #[error("Kein Schnittpunkt: die Geraden sind parallel")]
    NoIntersection,

    /// Strecke mit Start == Ende, keine Richtung bestimmbar
    #[error("Entartete Strecke: Start und Ende sind identisch ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },
}

/// Fehler beim Aufbau einer Szene
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Ungültige Eingabe: {0}")]
    InvalidInput(String),

    #[error("{context}: {source}")]
    Geometry {
        context: &'static str,
        #[source]
        source: GeometryError,
    },
}

/// Fehler beim Laden oder Speichern der Einstellungen
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Konfigurationsverzeichnis nicht gefunden")]
    NoConfigDir,

    #[error("Datei {path} konnte nicht gelesen/geschrieben werden: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Datei {path} ist kein gültiges JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
