//! Core-Domänentypen: Routen-Punkte, Metriken, Schwierigkeit.

/// Schwierigkeits-Klassifikation (technische Stufe × Höhenmeter pro Distanz)
pub mod difficulty;
pub mod draw_mode;
pub mod metrics;
pub mod route_point;

pub use difficulty::{classify, difficulty_score, Difficulty, DifficultyThresholds, TechnicalTier};
pub use draw_mode::DrawMode;
pub use metrics::{
    compute_distance, compute_elevation_gain, DistanceModel, RouteMetrics, DEFAULT_SEGMENT_LENGTH,
};
pub use route_point::RoutePoint;
