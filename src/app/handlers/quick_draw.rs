//! Handler für den Quick-Draw-Ablauf (zwei Klicks → generierte Strecke).

use crate::app::tools::QuickDrawSynthesizer;
use crate::app::RouteDraft;
use crate::core::RoutePoint;
use rand::Rng;

/// Erster Klick: Startpunkt merken.
pub fn pick_start(state: &mut RouteDraft, point: RoutePoint) {
    if state.draw.pick_start(point) {
        log::debug!(
            "Quick-Draw: Start ({:.5}, {:.5}) gesetzt, warte auf Ende",
            point.latitude,
            point.longitude
        );
    } else {
        log::debug!("Quick-Draw: Startpunkt ignoriert (Zustand {:?})", state.draw);
    }
}

/// Zweiter Klick: Strecke generieren, als ein Undo-Schritt übernehmen, zurück zu Manual.
pub fn pick_end<R: Rng + ?Sized>(state: &mut RouteDraft, end: RoutePoint, rng: &mut R) {
    let Some(start) = state.draw.finish_quick_draw() else {
        log::debug!("Quick-Draw: Endpunkt ohne Startpunkt ignoriert");
        return;
    };

    let synthesizer = QuickDrawSynthesizer::from_options(&state.options);
    let points = synthesizer.synthesize(&start, &end, rng);
    let count = points.len();
    state.replace_points(points);

    log::info!("Quick-Draw: Strecke mit {} Punkten erzeugt", count);
}

/// Verwirft einen wartenden Startpunkt (Escape), Quick-Modus bleibt aktiv.
pub fn cancel(state: &mut RouteDraft) {
    if state.draw.cancel_pending().is_some() {
        log::info!("Quick-Draw abgebrochen");
    }
}
