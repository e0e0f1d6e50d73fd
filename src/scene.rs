// Aufbau einer Szene: Grundlinie, zwei gedrehte Strahlen und deren
// Begrenzung durch parallele Linien im seitlichen Abstand

use crate::error::{GeometryError, SceneError};
use crate::geometry::{
    calculate_x_from_angle, try_parallel_line, IntersectCfg, IntersectionFallback, Line, Point,
};
use serde::{Deserialize, Serialize};

/// Eingabewerte einer Szene. Winkel in Strich, Längen in Welteinheiten.
///
/// Bildschirm-y zeigt nach unten: ein positiver Winkel dreht in Blickrichtung
/// +x nach rechts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneParams {
    pub origin: Point,
    pub length: f64,
    pub angle_left: f64,
    pub angle_right: f64,
    pub offset: f64,
    pub scale: f64,
    pub fallback: IntersectionFallback,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            length: 1000.0,
            angle_left: -400.0,
            angle_right: 300.0,
            offset: 250.0,
            scale: 1.0,
            fallback: IntersectionFallback::Reject,
        }
    }
}

/// Berechnete Szene, alle Linien bereits skaliert
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub base: Line,
    pub left: Line,
    pub right: Line,
    pub boundary_left: Line,
    pub boundary_right: Line,
    /// Seitliche Ablage der Strahlen am Ende der Grundlinie (vorzeichenbehaftet)
    pub width_left: f64,
    pub width_right: f64,
}

impl Scene {
    pub fn lines(&self) -> [&Line; 5] {
        [
            &self.base,
            &self.left,
            &self.right,
            &self.boundary_left,
            &self.boundary_right,
        ]
    }

    pub fn points(&self) -> Vec<Point> {
        self.lines()
            .iter()
            .flat_map(|l| [l.start, l.end])
            .collect()
    }
}

/// Baut die Szene auf
pub fn build(params: &SceneParams, cfg: &IntersectCfg) -> Result<Scene, SceneError> {
    validate(params)?;

    let origin = params.origin;
    let mut base = Line::new(origin, origin + Point::new(params.length, 0.0), false, 0.0);

    let mut left = Line::new(origin, base.end, true, params.angle_left);
    let mut right = Line::new(origin, base.end, true, params.angle_right);

    let mut boundary_left = try_parallel_line(&base, -params.offset).map_err(context("Begrenzung links"))?;
    let mut boundary_right = try_parallel_line(&base, params.offset).map_err(context("Begrenzung rechts"))?;

    left.clamp_end(&boundary_left, cfg, params.fallback)
        .map_err(context("Strahl links"))?;
    right.clamp_end(&boundary_right, cfg, params.fallback)
        .map_err(context("Strahl rechts"))?;

    for line in [
        &mut base,
        &mut left,
        &mut right,
        &mut boundary_left,
        &mut boundary_right,
    ] {
        line.scale(params.scale);
    }

    let width_left = calculate_x_from_angle(params.length, params.angle_left) * params.scale;
    let width_right = calculate_x_from_angle(params.length, params.angle_right) * params.scale;

    tracing::debug!(
        ?left,
        ?right,
        width_left,
        width_right,
        "Szene berechnet"
    );

    Ok(Scene {
        base,
        left,
        right,
        boundary_left,
        boundary_right,
        width_left,
        width_right,
    })
}

fn context(what: &'static str) -> impl Fn(GeometryError) -> SceneError {
    move |source| SceneError::Geometry {
        context: what,
        source,
    }
}

/// Prüft die Eingaben vor der Konstruktion
fn validate(params: &SceneParams) -> Result<(), SceneError> {
    let values = [
        params.origin.x,
        params.origin.y,
        params.length,
        params.angle_left,
        params.angle_right,
        params.offset,
        params.scale,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SceneError::InvalidInput("Alle Werte müssen endliche Zahlen sein".to_string()));
    }
    if params.length <= 0.0 {
        return Err(SceneError::InvalidInput(format!(
            "Länge muss größer 0 sein (ist {})",
            params.length
        )));
    }
    if params.offset <= 0.0 {
        return Err(SceneError::InvalidInput(format!(
            "Seitlicher Abstand muss größer 0 sein (ist {})",
            params.offset
        )));
    }
    if params.scale == 0.0 {
        return Err(SceneError::InvalidInput("Maßstab darf nicht 0 sein".to_string()));
    }
    // Strahlen müssen ihre Begrenzung vorwärts treffen, 1600 Strich ist die Polstelle
    if !(params.angle_left < 0.0 && params.angle_left > -1599.0) {
        return Err(SceneError::InvalidInput(format!(
            "Winkel links muss zwischen -1599 und 0 Strich liegen (ist {})",
            params.angle_left
        )));
    }
    if !(params.angle_right > 0.0 && params.angle_right < 1599.0) {
        return Err(SceneError::InvalidInput(format!(
            "Winkel rechts muss zwischen 0 und 1599 Strich liegen (ist {})",
            params.angle_right
        )));
    }
    Ok(())
}
