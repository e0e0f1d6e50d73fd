// Parallele Linie im senkrechten Abstand

use super::types::{Line, Point};
use crate::error::GeometryError;

/// Erzeugt eine Parallele zu `line` im Abstand `distance`.
///
/// Die Verschiebung erfolgt entlang des normierten Lotvektors `(-dy, dx)`,
/// bei positivem Abstand also links der Laufrichtung. Das Ergebnis hat
/// keinen Winkel.
///
/// Voraussetzung: `line` hat Länge > 0, sonst sind alle Koordinaten NaN.
/// Mit Prüfung: [`try_parallel_line`].
pub fn parallel_line(line: &Line, distance: f64) -> Line {
    let d = line.direction();
    let perpendicular = Point::new(-d.y, d.x);
    let length = (perpendicular.x * perpendicular.x + perpendicular.y * perpendicular.y).sqrt();
    let unit = Point::new(perpendicular.x / length, perpendicular.y / length);
    let offset = unit * distance;

    Line::without_angle(line.start + offset, line.end + offset)
}

/// Wie [`parallel_line`], meldet aber eine entartete Strecke als Fehler
pub fn try_parallel_line(line: &Line, distance: f64) -> Result<Line, GeometryError> {
    if line.is_degenerate() {
        return Err(GeometryError::DegenerateSegment {
            x: line.start.x,
            y: line.start.y,
        });
    }
    Ok(parallel_line(line, distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parallel_horizontal() {
        let base = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), false, 0.0);
        let par = parallel_line(&base, 5.0);
        // (-dy, dx) = (0, 10) -> nach oben
        assert_eq!(par.start, Point::new(0.0, 5.0));
        assert_eq!(par.end, Point::new(10.0, 5.0));
        assert_eq!(par.angle, None);
        assert_eq!(par.length(), base.length());
    }

    #[test]
    fn test_negative_distance_other_side() {
        let base = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), false, 0.0);
        let par = parallel_line(&base, -5.0);
        assert_eq!(par.start, Point::new(0.0, -5.0));
        assert_eq!(par.end, Point::new(10.0, -5.0));
    }

    #[test]
    fn test_sign_follows_direction() {
        // Umgekehrte Laufrichtung -> andere Seite
        let base = Line::new(Point::new(10.0, 0.0), Point::new(0.0, 0.0), false, 0.0);
        let par = parallel_line(&base, 5.0);
        assert_eq!(par.start, Point::new(10.0, -5.0));
        assert_eq!(par.end, Point::new(0.0, -5.0));
    }

    #[test]
    fn test_degenerate_produces_nan() {
        let base = Line::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0), false, 0.0);
        let par = parallel_line(&base, 5.0);
        assert!(par.start.x.is_nan() && par.end.y.is_nan());
    }

    #[test]
    fn test_try_parallel_rejects_degenerate() {
        let base = Line::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0), false, 0.0);
        assert_eq!(
            try_parallel_line(&base, 5.0),
            Err(GeometryError::DegenerateSegment { x: 3.0, y: 3.0 })
        );
        let ok = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 4.0), false, 0.0);
        let par = try_parallel_line(&ok, 2.0).unwrap();
        assert_eq!(par.start, Point::new(-2.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_offset_is_identical_for_both_ends(
            sx in -1e3f64..1e3, sy in -1e3f64..1e3,
            dx in 1.0f64..1e3, dy in -1e3f64..1e3,
            distance in -100.0f64..100.0,
        ) {
            let base = Line::new(Point::new(sx, sy), Point::new(sx + dx, sy + dy), false, 0.0);
            let par = parallel_line(&base, distance);
            let shift_start = par.start - base.start;
            let shift_end = par.end - base.end;
            prop_assert!((shift_start.x - shift_end.x).abs() < 1e-9);
            prop_assert!((shift_start.y - shift_end.y).abs() < 1e-9);
            prop_assert!((shift_start.length() - distance.abs()).abs() < 1e-9);
            prop_assert!((par.length() - base.length()).abs() < 1e-6);
        }
    }
}
