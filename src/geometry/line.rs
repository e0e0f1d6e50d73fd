// Konstruktion und Transformationen von Linien

use super::angle::mils_to_radians;
use super::intersection::{intersect_with, IntersectCfg};
use super::types::{IntersectionFallback, Line, Point};
use crate::error::GeometryError;

/// Dreht `point` um `center` um `mils` Strich (Standard-2D-Rotation)
pub fn rotate_around(point: Point, center: Point, mils: f64) -> Point {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let rad = mils_to_radians(mils);
    let (sin, cos) = rad.sin_cos();

    Point::new(
        dx * cos - dy * sin + center.x,
        dx * sin + dy * cos + center.y,
    )
}

impl Line {
    /// Erzeugt eine Linie. Bei `rotate == true` wird `end` um `start` um
    /// `angle` Strich gedreht, sonst unverändert übernommen.
    /// `angle` wird in beiden Fällen gespeichert.
    pub fn new(start: Point, end: Point, rotate: bool, angle: f64) -> Self {
        let end = if rotate {
            rotate_around(end, start, angle)
        } else {
            end
        };

        Self {
            start,
            end,
            angle: Some(angle),
        }
    }

    /// Linie ohne Winkelangabe (z.B. abgeleitete Parallelen)
    pub fn without_angle(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            angle: None,
        }
    }

    /// Richtungsvektor `end - start`
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Skaliert beide Endpunkte relativ zum Koordinatenursprung.
    /// Eine Linie außerhalb des Ursprungs wird dabei auch verschoben.
    pub fn scale(&mut self, factor: f64) {
        self.start = self.start * factor;
        self.end = self.end * factor;
    }

    /// Setzt `end` auf den Schnittpunkt mit `other`.
    /// Ohne Schnittpunkt bleibt die Linie unverändert.
    pub fn end_at_intersection(&mut self, other: &Line) -> Result<Point, GeometryError> {
        self.clamp_end(other, &IntersectCfg::default(), IntersectionFallback::Reject)
    }

    /// Setzt `start` auf den Schnittpunkt mit `other`.
    /// Ohne Schnittpunkt bleibt die Linie unverändert.
    pub fn start_at_intersection(&mut self, other: &Line) -> Result<Point, GeometryError> {
        self.clamp_start(other, &IntersectCfg::default(), IntersectionFallback::Reject)
    }

    /// Legacy: ohne Schnittpunkt wird `end` auf (0, 0) gesetzt
    pub fn end_at_intersection_or_origin(&mut self, other: &Line) {
        self.end = intersect_with(self, other, &IntersectCfg::default()).unwrap_or(Point::ORIGIN);
    }

    /// Legacy: ohne Schnittpunkt wird `start` auf (0, 0) gesetzt
    pub fn start_at_intersection_or_origin(&mut self, other: &Line) {
        self.start = intersect_with(self, other, &IntersectCfg::default()).unwrap_or(Point::ORIGIN);
    }

    /// Kappt `end` am Schnittpunkt mit `other`, Verhalten ohne Schnittpunkt
    /// über `fallback` wählbar
    pub fn clamp_end(
        &mut self,
        other: &Line,
        cfg: &IntersectCfg,
        fallback: IntersectionFallback,
    ) -> Result<Point, GeometryError> {
        let point = resolve(intersect_with(self, other, cfg), fallback)?;
        self.end = point;
        Ok(point)
    }

    /// Kappt `start` am Schnittpunkt mit `other`
    pub fn clamp_start(
        &mut self,
        other: &Line,
        cfg: &IntersectCfg,
        fallback: IntersectionFallback,
    ) -> Result<Point, GeometryError> {
        let point = resolve(intersect_with(self, other, cfg), fallback)?;
        self.start = point;
        Ok(point)
    }
}

fn resolve(hit: Option<Point>, fallback: IntersectionFallback) -> Result<Point, GeometryError> {
    match (hit, fallback) {
        (Some(point), _) => Ok(point),
        (None, IntersectionFallback::Origin) => {
            tracing::warn!("kein Schnittpunkt, Endpunkt fällt auf (0, 0) zurück");
            Ok(Point::ORIGIN)
        }
        (None, IntersectionFallback::Reject) => Err(GeometryError::NoIntersection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Point, b: Point, tol: f64) -> bool {
        (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), true, 1600.0);
        // 1600 * 0.000982 ist nicht exakt π/2
        assert!(close(line.end, Point::new(0.0, 10.0), 1e-2));
        assert_eq!(line.angle, Some(1600.0));
    }

    #[test]
    fn test_rotate_around_non_origin_start() {
        let line = Line::new(Point::new(5.0, 5.0), Point::new(15.0, 5.0), true, 3200.0);
        assert!(close(line.end, Point::new(-5.0, 5.0), 1e-2));
        assert_eq!(line.start, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_no_rotation_keeps_end_bits() {
        let end = Point::new(0.1 + 0.2, -7.333_333_333_3);
        let line = Line::new(Point::new(1.0, 2.0), end, false, 1234.0);
        assert_eq!(line.end.x.to_bits(), end.x.to_bits());
        assert_eq!(line.end.y.to_bits(), end.y.to_bits());
        assert_eq!(line.angle, Some(1234.0));
    }

    #[test]
    fn test_scale_is_origin_relative() {
        let mut line = Line::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0), false, 0.0);
        line.scale(2.0);
        assert_eq!(line.start, Point::new(2.0, 2.0));
        assert_eq!(line.end, Point::new(4.0, 4.0));
        // Winkel bleibt, was er war
        assert_eq!(line.angle, Some(0.0));
    }

    #[test]
    fn test_end_at_intersection() {
        let mut a = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), false, 0.0);
        let b = Line::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0), false, 0.0);
        assert_eq!(a.end_at_intersection(&b), Ok(Point::new(5.0, 5.0)));
        assert_eq!(a.end, Point::new(5.0, 5.0));
        assert_eq!(a.start, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_start_at_intersection() {
        let mut a = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), false, 0.0);
        let b = Line::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0), false, 0.0);
        assert_eq!(a.start_at_intersection(&b), Ok(Point::new(5.0, 5.0)));
        assert_eq!(a.start, Point::new(5.0, 5.0));
        assert_eq!(a.end, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_parallel_rejects_and_keeps_line() {
        let mut a = Line::new(Point::new(1.0, 1.0), Point::new(10.0, 1.0), false, 0.0);
        let b = Line::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0), false, 0.0);
        let before = a;
        assert_eq!(a.end_at_intersection(&b), Err(GeometryError::NoIntersection));
        assert_eq!(a.start_at_intersection(&b), Err(GeometryError::NoIntersection));
        assert_eq!(a, before);
    }

    #[test]
    fn test_legacy_origin_fallback() {
        let mut a = Line::new(Point::new(1.0, 1.0), Point::new(10.0, 1.0), false, 0.0);
        let b = Line::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0), false, 0.0);
        a.end_at_intersection_or_origin(&b);
        assert_eq!(a.end, Point::ORIGIN);

        let mut c = Line::new(Point::new(1.0, 1.0), Point::new(10.0, 1.0), false, 0.0);
        c.start_at_intersection_or_origin(&b);
        assert_eq!(c.start, Point::ORIGIN);
        assert_eq!(c.end, Point::new(10.0, 1.0));
    }

    #[test]
    fn test_clamp_with_origin_fallback() {
        let mut a = Line::new(Point::new(1.0, 1.0), Point::new(10.0, 1.0), false, 0.0);
        let b = Line::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0), false, 0.0);
        let hit = a.clamp_end(&b, &IntersectCfg::default(), IntersectionFallback::Origin);
        assert_eq!(hit, Ok(Point::ORIGIN));
        assert_eq!(a.end, Point::ORIGIN);
    }

    #[test]
    fn test_angle_not_updated_after_clamp() {
        let mut a = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), true, 800.0);
        let cross = Line::new(Point::new(0.0, 3.0), Point::new(10.0, 3.0), false, 0.0);
        a.end_at_intersection(&cross).unwrap();
        assert_eq!(a.angle, Some(800.0));
        assert!((a.end.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_helpers() {
        let line = Line::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0), false, 0.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point::new(2.5, 3.0));
        assert!(!line.is_degenerate());
        assert!(Line::without_angle(Point::new(1.0, 1.0), Point::new(1.0, 1.0)).is_degenerate());
    }

    proptest! {
        #[test]
        fn prop_rotation_preserves_length(
            sx in -1e3f64..1e3, sy in -1e3f64..1e3,
            ex in -1e3f64..1e3, ey in -1e3f64..1e3,
            mils in -6400.0f64..6400.0,
        ) {
            let plain = Line::new(Point::new(sx, sy), Point::new(ex, ey), false, mils);
            let rotated = Line::new(Point::new(sx, sy), Point::new(ex, ey), true, mils);
            prop_assert!((plain.length() - rotated.length()).abs() < 1e-6);
            prop_assert_eq!(plain.start, rotated.start);
        }

        #[test]
        fn prop_scale_multiplies_coordinates(
            sx in -1e3f64..1e3, sy in -1e3f64..1e3,
            ex in -1e3f64..1e3, ey in -1e3f64..1e3,
            factor in -10.0f64..10.0,
        ) {
            let mut line = Line::new(Point::new(sx, sy), Point::new(ex, ey), false, 0.0);
            line.scale(factor);
            prop_assert_eq!(line.start, Point::new(sx * factor, sy * factor));
            prop_assert_eq!(line.end, Point::new(ex * factor, ey * factor));
        }
    }
}
