//! Schwierigkeits-Klassifikation aus Höhenmetern pro Distanz und technischer Stufe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score-Schwelle ab der eine Route als `Moderate` gilt.
pub const MODERATE_THRESHOLD: f64 = 50.0;
/// Score-Schwelle ab der eine Route als `Hard` gilt.
pub const HARD_THRESHOLD: f64 = 100.0;

/// Subjektive technische Schwierigkeit des Untergrunds (S0–S5).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum TechnicalTier {
    /// Breite, gut definierte Wege ohne Hindernisse
    S0,
    /// Einfache Trails mit kleinen Wurzeln und Steinen
    S1,
    /// Häufige Hindernisse, lose Steine
    #[default]
    S2,
    /// Große Hindernisse, Stufen und Absätze
    S3,
    /// Sehr technisch, abrupte Absätze und große Felsen
    S4,
    /// Extrem schwierig und gefährlich
    S5,
}

impl TechnicalTier {
    /// Alle Stufen in aufsteigender Reihenfolge.
    pub const ALL: [TechnicalTier; 6] = [
        TechnicalTier::S0,
        TechnicalTier::S1,
        TechnicalTier::S2,
        TechnicalTier::S3,
        TechnicalTier::S4,
        TechnicalTier::S5,
    ];

    /// Multiplikativer Faktor für den Schwierigkeits-Score (streng monoton steigend).
    pub fn factor(self) -> f64 {
        match self {
            TechnicalTier::S0 => 0.70,
            TechnicalTier::S1 => 0.85,
            TechnicalTier::S2 => 1.00,
            TechnicalTier::S3 => 1.15,
            TechnicalTier::S4 => 1.30,
            TechnicalTier::S5 => 1.50,
        }
    }

    /// Anzeigename für Auswahllisten.
    pub fn label(self) -> &'static str {
        match self {
            TechnicalTier::S0 => "S0 - Leicht",
            TechnicalTier::S1 => "S1 - Einfach",
            TechnicalTier::S2 => "S2 - Mittel",
            TechnicalTier::S3 => "S3 - Anspruchsvoll",
            TechnicalTier::S4 => "S4 - Schwer",
            TechnicalTier::S5 => "S5 - Extrem",
        }
    }

    /// Tooltip-Beschreibung der Stufe.
    pub fn description(self) -> &'static str {
        match self {
            TechnicalTier::S0 => {
                "Breite, gut definierte Wege ohne Hindernisse. Ideal für Einsteiger."
            }
            TechnicalTier::S1 => {
                "Einfache Trails mit kleinen Wurzeln und Steinen. Grundkenntnisse nötig."
            }
            TechnicalTier::S2 => {
                "Trails mit häufigen Hindernissen wie Wurzeln und losem Geröll. Technik nötig."
            }
            TechnicalTier::S3 => {
                "Technisches Gelände mit großen Hindernissen, Stufen und Absätzen. Für Erfahrene."
            }
            TechnicalTier::S4 => {
                "Sehr technische Trails mit abrupten Absätzen, Felsen und großen Wurzeln."
            }
            TechnicalTier::S5 => "Extrem schwierige und gefährliche Trails. Nur für Profis.",
        }
    }
}

impl fmt::Display for TechnicalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for TechnicalTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechnicalTier::ALL
            .into_iter()
            .find(|tier| tier.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unbekannte technische Stufe: {s:?}"))
    }
}

/// Dreistufige Gesamt-Schwierigkeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Leicht (auch bei fehlenden Daten)
    Easy,
    /// Mittel
    Moderate,
    /// Schwer
    Hard,
}

/// Konfigurierbare Score-Schwellen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyThresholds {
    /// Ab diesem Score: `Moderate`
    pub moderate: f64,
    /// Ab diesem Score: `Hard`
    pub hard: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            moderate: MODERATE_THRESHOLD,
            hard: HARD_THRESHOLD,
        }
    }
}

/// Score = Höhenmeter pro Distanz × technischer Faktor.
///
/// Gibt `None` zurück, wenn Distanz oder Anstieg null sind (zu wenig Daten).
pub fn difficulty_score(distance: f64, elevation_gain: f64, tier: TechnicalTier) -> Option<f64> {
    if distance <= 0.0 || elevation_gain <= 0.0 {
        return None;
    }
    Some(elevation_gain / distance * tier.factor())
}

/// Klassifiziert eine Route. Fehlende Daten ergeben `Easy`.
pub fn classify(
    distance: f64,
    elevation_gain: f64,
    tier: TechnicalTier,
    thresholds: &DifficultyThresholds,
) -> Difficulty {
    match difficulty_score(distance, elevation_gain, tier) {
        Some(score) if score >= thresholds.hard => Difficulty::Hard,
        Some(score) if score >= thresholds.moderate => Difficulty::Moderate,
        _ => Difficulty::Easy,
    }
}
