//! Extern sichtbarer Zeichenmodus des Routen-Editors.

use serde::{Deserialize, Serialize};

/// Zeichenmodus, wie ihn die Toolbar anzeigt.
///
/// Intern wird `Quick` in "wartet auf Start" und "wartet auf Ende" aufgeteilt
/// (siehe `DrawState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Klick setzt direkt einen Punkt
    #[default]
    Manual,
    /// Klick setzt einen Punkt (Einrasten auf Trails noch nicht umgesetzt)
    Snap,
    /// Zwei Klicks: Start und Ende, dazwischen wird eine Strecke generiert
    Quick,
}
