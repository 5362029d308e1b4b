//! Builder für Routen-Zusammenfassungen aus dem RouteDraft.

use crate::app::RouteDraft;
use crate::shared::RouteSummary;

/// Baut eine RouteSummary aus dem aktuellen Entwurf.
///
/// Metriken und Schwierigkeit werden bei jedem Aufruf neu berechnet.
pub fn build(state: &RouteDraft) -> RouteSummary {
    let metrics = state.metrics();

    RouteSummary {
        points: state.points().to_vec(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
        draw_mode: state.draw.mode(),
        quick_draw_pending: state.draw.pending().copied(),
        distance: metrics.distance,
        elevation_gain: metrics.elevation_gain,
        technical_tier: state.technical_tier,
        difficulty_score: state.difficulty_score(),
        difficulty: state.difficulty(),
    }
}
