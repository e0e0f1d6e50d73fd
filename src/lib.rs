// Strich-Geometrie: Linien mit Winkeln in Strich (6400 pro Vollkreis),
// Drehung, Skalierung, Parallelen und Schnittpunkte

pub mod config;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod ui;
pub mod view;

pub use error::{ConfigError, GeometryError, SceneError};
