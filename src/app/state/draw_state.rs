//! Zustandsautomat des Zeichenmodus (inkl. Quick-Draw-Unterzustände).

use crate::core::{DrawMode, RoutePoint};

/// Interner Zeichen-Zustand.
///
/// Die beiden Quick-Unterzustände sind explizit getrennt; der Startpunkt
/// existiert nur im Zustand `QuickAwaitingEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    /// Klick fügt Punkt direkt hinzu
    #[default]
    Manual,
    /// Wie `Manual` (Einrasten auf Trail-Geometrie nicht umgesetzt)
    Snap,
    /// Quick-Draw aktiv, erster Klick erwartet
    QuickAwaitingStart,
    /// Quick-Draw aktiv, Startpunkt gesetzt, zweiter Klick erwartet
    QuickAwaitingEnd {
        /// Erster Klick
        start: RoutePoint,
    },
}

impl DrawState {
    /// Einstiegszustand für einen extern gewählten Modus.
    pub fn from_mode(mode: DrawMode) -> Self {
        match mode {
            DrawMode::Manual => DrawState::Manual,
            DrawMode::Snap => DrawState::Snap,
            DrawMode::Quick => DrawState::QuickAwaitingStart,
        }
    }

    /// Extern sichtbarer Modus (beide Quick-Unterzustände → `Quick`).
    pub fn mode(&self) -> DrawMode {
        match self {
            DrawState::Manual => DrawMode::Manual,
            DrawState::Snap => DrawMode::Snap,
            DrawState::QuickAwaitingStart | DrawState::QuickAwaitingEnd { .. } => DrawMode::Quick,
        }
    }

    /// Wartender Quick-Draw-Startpunkt.
    pub fn pending(&self) -> Option<&RoutePoint> {
        match self {
            DrawState::QuickAwaitingEnd { start } => Some(start),
            _ => None,
        }
    }

    /// Wechselt den Modus. Ein wartender Startpunkt wird verworfen und zurückgegeben.
    ///
    /// Auch ein erneutes Aktivieren von `Quick` setzt auf "wartet auf Start" zurück.
    pub fn set_mode(&mut self, mode: DrawMode) -> Option<RoutePoint> {
        let discarded = self.pending().copied();
        *self = DrawState::from_mode(mode);
        discarded
    }

    /// Erster Quick-Draw-Klick. Nur in `QuickAwaitingStart` wirksam.
    pub fn pick_start(&mut self, point: RoutePoint) -> bool {
        if *self != DrawState::QuickAwaitingStart {
            return false;
        }
        *self = DrawState::QuickAwaitingEnd { start: point };
        true
    }

    /// Zweiter Quick-Draw-Klick: liefert den Startpunkt und kehrt zu `Manual` zurück.
    ///
    /// Quick-Draw ist eine einmalige Aktion pro Aktivierung.
    pub fn finish_quick_draw(&mut self) -> Option<RoutePoint> {
        let start = self.pending().copied()?;
        *self = DrawState::Manual;
        Some(start)
    }

    /// Verwirft einen wartenden Startpunkt, bleibt aber im Quick-Modus.
    pub fn cancel_pending(&mut self) -> Option<RoutePoint> {
        let discarded = self.pending().copied()?;
        *self = DrawState::QuickAwaitingStart;
        Some(discarded)
    }
}
