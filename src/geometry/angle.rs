// Umrechnungen zwischen Strich (mil), Grad und Bogenmaß
// 6400 Strich entsprechen einem Vollkreis

/// Strich pro Vollkreis
pub const MILS_PER_TURN: f64 = 6400.0;

/// Grad pro Strich (360 / 6400, exakt)
pub const DEGREE_PER_MIL: f64 = 0.05625;

/// Bogenmaß pro Strich.
/// Bewusst die Näherung 0.000982 statt π/3200 (≈0.00098175), alle
/// winkelabhängigen Werte bauen auf genau dieser Konstante auf.
pub const RADIANS_PER_MIL: f64 = 0.000982;

/// Konvertiert Strich zu Grad
pub fn mils_to_degree(mils: f64) -> f64 {
    mils * DEGREE_PER_MIL
}

/// Konvertiert Grad zu Strich
pub fn degree_to_mils(degree: f64) -> f64 {
    degree / DEGREE_PER_MIL
}

/// Konvertiert Strich zu Bogenmaß (mit der festen Näherung)
pub fn mils_to_radians(mils: f64) -> f64 {
    mils * RADIANS_PER_MIL
}

/// Gegenkathete eines rechtwinkligen Dreiecks aus Ankathete `width`
/// und Winkel `angle` in Strich.
///
/// Keine Prüfung: bei 1600 / 4800 Strich liegt die Polstelle des Tangens,
/// der Aufrufer muss solche Winkel vermeiden.
pub fn calculate_x_from_angle(width: f64, angle: f64) -> f64 {
    width * mils_to_radians(angle).tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mils_to_degree() {
        assert_eq!(mils_to_degree(6400.0), 360.0);
        assert_eq!(mils_to_degree(1600.0), 90.0);
        assert_eq!(mils_to_degree(0.0), 0.0);
        assert_eq!(mils_to_degree(-3200.0), -180.0);
    }

    #[test]
    fn test_degree_round_trip() {
        assert_eq!(degree_to_mils(90.0), 1600.0);
        assert!((degree_to_mils(mils_to_degree(1234.5)) - 1234.5).abs() < 1e-9);
    }

    #[test]
    fn test_mils_to_radians_uses_fixed_constant() {
        assert_eq!(mils_to_radians(1000.0), 1000.0 * 0.000982);
        // Abweichung zu π/2 ist klein, aber vorhanden
        let quarter = mils_to_radians(1600.0);
        assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1e-3);
        assert_ne!(quarter, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_calculate_x_from_angle() {
        let expected = 100.0 * (800.0_f64 * 0.000982).tan();
        assert_eq!(calculate_x_from_angle(100.0, 800.0), expected);
        assert_eq!(calculate_x_from_angle(100.0, 0.0), 0.0);
        assert!(calculate_x_from_angle(100.0, -800.0) < 0.0);
    }

    #[test]
    fn test_calculate_x_near_singularity_is_large() {
        assert!(calculate_x_from_angle(1.0, 1599.0).abs() > 100.0);
    }
}
