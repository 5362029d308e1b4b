use crate::core::{DrawMode, RoutePoint, TechnicalTier};
use serde::{Deserialize, Serialize};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Koordinaten bereits transformiert)
    PointAddRequested { point: RoutePoint },
    /// Zeichenmodus in der Toolbar gewechselt
    DrawModeChangeRequested { mode: DrawMode },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Letzten Punkt entfernen
    RemoveLastPointRequested,
    /// Route verwerfen (erneuter Einstieg in die Bearbeitung)
    ClearRouteRequested,
    /// Technische Stufe im Formular geändert
    TechnicalTierChanged { tier: TechnicalTier },
    /// Quick-Draw: Startpunkt verwerfen (Escape)
    QuickDrawCancelled,
}
