//! Trail Route Editor Library.
//! Engine für die interaktive Routen-Konstruktion: Punkte setzen, Undo/Redo,
//! Quick-Draw, Distanz/Anstieg und Schwierigkeits-Klassifikation.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, DrawState, EditHistory, QuickDrawSynthesizer,
    RouteDraft, Snapshot,
};
pub use crate::core::{
    classify, compute_distance, compute_elevation_gain, Difficulty, DifficultyThresholds,
    DistanceModel, DrawMode, RouteMetrics, RoutePoint, TechnicalTier,
};
pub use shared::{EngineOptions, RouteSummary};
