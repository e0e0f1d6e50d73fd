// Canvas-Implementierung auf Basis von egui::Painter

use super::{Canvas, Color};
use crate::geometry::Point;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// Anzahl Kreissegmente pro Vollkreis für die Sektor-Näherung
const SEGMENTS_PER_TURN: f64 = 96.0;

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// Abbildung Welt -> Bildschirm: gleichmäßige Skalierung plus Verschiebung,
/// so dass alle Punkte mit Rand in das Zielrechteck passen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    min: Point,
    scale: f32,
    offset: Vec2,
}

impl ScreenTransform {
    pub fn fit<'a>(points: impl IntoIterator<Item = &'a Point>, rect: Rect, padding: f32) -> Self {
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for p in points.into_iter().filter(|p| p.is_finite()) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        // Keine (gültigen) Punkte: Ursprung in die Ecke
        if min_x > max_x {
            min_x = 0.0;
            max_x = 1.0;
            min_y = 0.0;
            max_y = 1.0;
        }

        let width = (max_x - min_x).max(1e-9);
        let height = (max_y - min_y).max(1e-9);

        let available = rect.size();
        let scale_x = (available.x - 2.0 * padding).max(1.0) / width as f32;
        let scale_y = (available.y - 2.0 * padding).max(1.0) / height as f32;
        let scale = scale_x.min(scale_y);

        let offset = Vec2::new(
            rect.min.x + (available.x - width as f32 * scale) / 2.0,
            rect.min.y + (available.y - height as f32 * scale) / 2.0,
        );

        Self {
            min: Point::new(min_x, min_y),
            scale,
            offset,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(
            self.offset.x + (p.x - self.min.x) as f32 * self.scale,
            self.offset.y + (p.y - self.min.y) as f32 * self.scale,
        )
    }
}

/// Zeichnet über einen egui-Painter
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    transform: ScreenTransform,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, transform: ScreenTransform) -> Self {
        Self { painter, transform }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.painter.line_segment(
            [self.transform.to_screen(from), self.transform.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn draw_circle_sector(
        &mut self,
        center: Point,
        radius: f32,
        start_rad: f64,
        end_rad: f64,
        color: Color,
    ) {
        let c = self.transform.to_screen(center);
        let sweep = end_rad - start_rad;
        let steps = ((sweep.abs() / std::f64::consts::TAU) * SEGMENTS_PER_TURN)
            .ceil()
            .max(1.0) as usize;

        let arc: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let a = start_rad + sweep * i as f64 / steps as f64;
                c + Vec2::new(a.cos() as f32, a.sin() as f32) * radius
            })
            .collect();

        // Fächer aus Dreiecken, jedes für sich konvex
        let fill: Color32 = color.into();
        for pair in arc.windows(2) {
            self.painter.add(Shape::convex_polygon(
                vec![c, pair[0], pair[1]],
                fill,
                Stroke::NONE,
            ));
        }

        let mut outline = Vec::with_capacity(arc.len() + 2);
        outline.push(c);
        outline.extend(arc);
        outline.push(c);
        self.painter.add(Shape::line(outline, Stroke::new(1.0, Color32::from_rgb(color.r, color.g, color.b))));
    }

    fn draw_text(&mut self, anchor: Point, offset: [f32; 2], text: &str, font_size: f32, color: Color) {
        self.painter.text(
            self.transform.to_screen(anchor) + Vec2::new(offset[0], offset[1]),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color.into(),
        );
    }
}
