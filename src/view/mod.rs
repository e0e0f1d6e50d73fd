// Darstellungsschicht: Zeichenbefehle für Linien, Winkelsektoren und Texte
// Die Geometrie kennt dieses Modul nicht, es konsumiert nur deren Werte

mod egui_canvas;

pub use egui_canvas::{EguiCanvas, ScreenTransform};

use crate::geometry::{mils_to_radians, Line, Point};
use serde::{Deserialize, Serialize};

/// RGBA-Farbe, unabhängig vom Zeichen-Backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Zeichenfläche. Positionen in Weltkoordinaten, Radien, Versätze und
/// Schriftgrößen in Pixeln.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Kreissektor um `center` zwischen `start_rad` und `end_rad`
    fn draw_circle_sector(
        &mut self,
        center: Point,
        radius: f32,
        start_rad: f64,
        end_rad: f64,
        color: Color,
    );

    fn draw_text(&mut self, anchor: Point, offset: [f32; 2], text: &str, font_size: f32, color: Color);
}

/// Zeichnet die Linie von `start` nach `end`
pub fn draw_line(canvas: &mut impl Canvas, line: &Line, color: Color, width: f32) {
    canvas.draw_line(line.start, line.end, color, width);
}

/// Zeichnet den Winkel der Linie als Sektor am Startpunkt.
///
/// Der Sektor endet in der aktuellen Richtung der Linie und überstreicht den
/// gespeicherten Winkel rückwärts. Linien ohne Winkel werden übersprungen.
pub fn draw_angle_sector(canvas: &mut impl Canvas, line: &Line, radius: f32, color: Color) -> bool {
    let Some(angle) = line.angle else {
        return false;
    };
    if line.is_degenerate() {
        return false;
    }

    let d = line.direction();
    let heading = d.y.atan2(d.x);
    let sweep = mils_to_radians(angle);
    let (from, to) = if sweep >= 0.0 {
        (heading - sweep, heading)
    } else {
        (heading, heading - sweep)
    };

    canvas.draw_circle_sector(line.start, radius, from, to, color);
    true
}

/// Schreibt `text` an die Mitte der Linie, um `offset` Pixel versetzt
pub fn draw_label(
    canvas: &mut impl Canvas,
    line: &Line,
    offset: [f32; 2],
    font_size: f32,
    color: Color,
    text: &str,
) {
    canvas.draw_text(line.midpoint(), offset, text, font_size, color);
}

/// Zahl mit Dezimalkomma
pub fn format_with_comma(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value).replace('.', ",")
}
