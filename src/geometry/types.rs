// Grundlegende Datenstrukturen für die Geometrie
// Koordinaten sind f64 in Welteinheiten, Winkel in Strich

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Punkt im 2D-Raum
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euklidische Länge des Ortsvektors
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Gerichtete Strecke von `start` nach `end`
///
/// `angle` (in Strich) ist ein Konstruktionsparameter: er hält fest, um welchen
/// Winkel `end` beim Erzeugen um `start` gedreht wurde. Nach `scale` oder dem
/// Kappen an einem Schnittpunkt passt er nicht mehr zwingend zur Richtung
/// `start -> end`. Abgeleitete Linien (Parallele) haben keinen Winkel (`None`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub angle: Option<f64>,
}

/// Verhalten, wenn beim Kappen einer Linie kein Schnittpunkt existiert
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntersectionFallback {
    /// Fehler melden, Linie bleibt unverändert
    #[default]
    Reject,
    /// Altes Verhalten: Endpunkt wird auf (0, 0) gesetzt
    Origin,
}
