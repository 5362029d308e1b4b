use crate::core::{DrawMode, RoutePoint, TechnicalTier};

/// Mutierende Commands, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt direkt anhängen (Manual/Snap)
    AddPoint { point: RoutePoint },
    /// Quick-Draw: Startpunkt merken
    QuickDrawPickStart { point: RoutePoint },
    /// Quick-Draw: Endpunkt setzen und Strecke generieren
    QuickDrawPickEnd { point: RoutePoint },
    /// Quick-Draw: wartenden Startpunkt verwerfen
    CancelQuickDraw,
    /// Zeichenmodus setzen
    SetDrawMode { mode: DrawMode },
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,
    /// Letzten Punkt entfernen
    RemoveLastPoint,
    /// Punkte und History zurücksetzen
    ClearRoute,
    /// Technische Stufe setzen
    SetTechnicalTier { tier: TechnicalTier },
}
