//! Handler für Undo/Redo-Operationen.

use crate::app::RouteDraft;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut RouteDraft) {
    if state.undo() {
        log::info!("Undo ausgeführt ({} Punkte)", state.point_count());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut RouteDraft) {
    if state.redo() {
        log::info!("Redo ausgeführt ({} Punkte)", state.point_count());
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Verwirft Route und History (erneuter Einstieg in die Bearbeitung).
pub fn clear(state: &mut RouteDraft) {
    state.clear();
    log::info!("Route zurückgesetzt");
}
