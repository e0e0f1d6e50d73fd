// Schnittpunkt zweier Geraden (parametrisch)

use super::types::{Line, Point};
use serde::{Deserialize, Serialize};

/// Toleranzen für die Schnittpunktberechnung
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct IntersectCfg {
    /// Ab welchem |Nenner| zwei Geraden als parallel gelten.
    /// 0.0 bedeutet exakter Vergleich auf Null.
    pub eps_parallel: f64,
}

/// Schnittpunkt zweier Linien, jeweils als unendliche Gerade durch ihre
/// beiden Endpunkte betrachtet. Der Punkt kann außerhalb beider Strecken liegen.
///
/// Gibt `None` zurück, wenn der Nenner exakt 0 ist. Fast parallele Geraden
/// liefern einen numerisch instabilen, aber vorhandenen Punkt.
pub fn intersect(line1: &Line, line2: &Line) -> Option<Point> {
    intersect_with(line1, line2, &IntersectCfg::default())
}

/// Wie [`intersect`], aber mit konfigurierbarer Parallel-Toleranz
pub fn intersect_with(line1: &Line, line2: &Line, cfg: &IntersectCfg) -> Option<Point> {
    let (x1, y1) = (line1.start.x, line1.start.y);
    let (x2, y2) = (line1.end.x, line1.end.y);
    let (x3, y3) = (line2.start.x, line2.start.y);
    let (x4, y4) = (line2.end.x, line2.end.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);

    let parallel = if cfg.eps_parallel > 0.0 {
        denom.abs() <= cfg.eps_parallel
    } else {
        denom == 0.0
    };
    if parallel {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;

    Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}
