//! Handler für direktes Punkt-Editing, Zeichenmodus und technische Stufe.

use crate::app::RouteDraft;
use crate::core::{DrawMode, RoutePoint, TechnicalTier};

/// Hängt einen Punkt direkt an (Manual/Snap).
pub fn add_point(state: &mut RouteDraft, point: RoutePoint) {
    state.add_point(point);
    log::debug!(
        "Punkt hinzugefügt ({:.5}, {:.5}), gesamt {}",
        point.latitude,
        point.longitude,
        state.point_count()
    );
}

/// Entfernt den letzten Punkt, falls vorhanden.
pub fn remove_last_point(state: &mut RouteDraft) {
    if state.remove_last_point() {
        log::info!("Letzter Punkt entfernt, verbleibend {}", state.point_count());
    } else {
        log::debug!("Letzten Punkt entfernen: Route ist leer");
    }
}

/// Setzt den Zeichenmodus. Ein wartender Quick-Draw-Start wird verworfen.
pub fn set_draw_mode(state: &mut RouteDraft, mode: DrawMode) {
    if let Some(discarded) = state.draw.set_mode(mode) {
        log::info!(
            "Quick-Draw-Start ({:.5}, {:.5}) verworfen",
            discarded.latitude,
            discarded.longitude
        );
    }
    log::info!("Zeichenmodus: {:?}", mode);
}

/// Setzt die technische Stufe für die Schwierigkeits-Klassifikation.
pub fn set_technical_tier(state: &mut RouteDraft, tier: TechnicalTier) {
    state.technical_tier = tier;
    log::info!("Technische Stufe: {}", tier.label());
}
