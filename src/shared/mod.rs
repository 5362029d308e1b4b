//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod route_summary;

pub use options::EngineOptions;
pub use options::{
    QUICK_DRAW_HILL_MAGNITUDE, QUICK_DRAW_JITTER, QUICK_DRAW_MAX_POINTS, QUICK_DRAW_POINTS,
};
pub use route_summary::RouteSummary;
