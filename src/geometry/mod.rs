// Haupt-Geometrie-Modul
// Reine Berechnungen ohne Abhängigkeit zur Darstellung

pub mod angle;
pub mod intersection;
pub mod line;
pub mod parallel;
pub mod types;

// Re-exports für einfachen Zugriff
pub use angle::{
    calculate_x_from_angle,
    degree_to_mils,
    mils_to_degree,
    mils_to_radians,
    MILS_PER_TURN,
};
pub use intersection::{intersect, intersect_with, IntersectCfg};
pub use line::rotate_around;
pub use parallel::{parallel_line, try_parallel_line};
pub use types::{IntersectionFallback, Line, Point};
