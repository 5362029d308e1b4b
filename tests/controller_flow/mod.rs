mod drawing;
mod quick_draw;

use trail_route_editor::{AppController, AppIntent, DrawMode, RouteDraft, RoutePoint};

/// Controller mit festem Seed und leerem Entwurf.
pub fn setup() -> (AppController, RouteDraft) {
    (AppController::with_seed(1234), RouteDraft::new())
}

/// Sendet einen Intent und erwartet Erfolg.
pub fn send(controller: &mut AppController, state: &mut RouteDraft, intent: AppIntent) {
    controller
        .handle_intent(state, intent.clone())
        .unwrap_or_else(|e| panic!("{intent:?} sollte ohne Fehler durchlaufen: {e}"));
}

/// Klick auf die Zeichenfläche.
pub fn click(controller: &mut AppController, state: &mut RouteDraft, point: RoutePoint) {
    send(controller, state, AppIntent::PointAddRequested { point });
}

/// Zeichenmodus wechseln.
pub fn set_mode(controller: &mut AppController, state: &mut RouteDraft, mode: DrawMode) {
    send(controller, state, AppIntent::DrawModeChangeRequested { mode });
}
