//! Routen-Zusammenfassung als expliziter Übergabevertrag an den Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und Formular-/Speicher-Schicht
//! des Hosts sie konsumieren.

use crate::core::{Difficulty, DrawMode, RoutePoint, TechnicalTier};
use serde::{Deserialize, Serialize};

/// Read-only Sicht auf den aktuellen Routen-Entwurf inkl. abgeleiteter Werte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Aktuelle Punktfolge (Reihenfolge = Pfad)
    pub points: Vec<RoutePoint>,
    /// Undo-Button aktivierbar
    pub can_undo: bool,
    /// Redo-Button aktivierbar
    pub can_redo: bool,
    /// Aktiver Zeichenmodus
    pub draw_mode: DrawMode,
    /// Erster Quick-Draw-Klick, falls noch kein zweiter erfolgt ist
    pub quick_draw_pending: Option<RoutePoint>,
    /// Gesamtdistanz
    pub distance: f64,
    /// Kumulierter Anstieg in Metern
    pub elevation_gain: f64,
    /// Gewählte technische Stufe
    pub technical_tier: TechnicalTier,
    /// Score (None bei zu wenig Daten)
    pub difficulty_score: Option<f64>,
    /// Resultierende Schwierigkeit
    pub difficulty: Difficulty,
}

impl RouteSummary {
    /// Speichern braucht mindestens zwei Punkte für eine sinnvolle Distanz.
    pub fn is_saveable(&self) -> bool {
        self.points.len() >= 2
    }
}
