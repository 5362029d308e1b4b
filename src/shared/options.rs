//! Zentrale Konfiguration für die Routen-Konstruktion.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::difficulty::{HARD_THRESHOLD, MODERATE_THRESHOLD};
use crate::core::{DifficultyThresholds, DistanceModel, TechnicalTier, DEFAULT_SEGMENT_LENGTH};
use serde::{Deserialize, Serialize};

// ── Quick-Draw ──────────────────────────────────────────────────────

/// Anzahl der Zwischenpunkte zwischen Start und Ende.
pub const QUICK_DRAW_POINTS: usize = 6;
/// Maximaler Koordinaten-Jitter pro Zwischenpunkt (±).
pub const QUICK_DRAW_JITTER: f64 = 0.005;
/// Höhe des simulierten Hügels in Metern (Peak bei f = 0.5).
pub const QUICK_DRAW_HILL_MAGNITUDE: f64 = 100.0;
/// Obergrenze für `quick_draw_points` aus der Optionen-Datei.
pub const QUICK_DRAW_MAX_POINTS: usize = 10_000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `trail_route_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    // ── Metriken ────────────────────────────────────────────────
    /// Distanz pro Segment im Modell `FixedSegment`
    pub segment_length: f64,
    /// Distanzmodell (fester Segmentabstand oder Haversine)
    pub distance_model: DistanceModel,

    // ── Quick-Draw ──────────────────────────────────────────────
    /// Anzahl generierter Zwischenpunkte
    pub quick_draw_points: usize,
    /// Jitter-Amplitude in Koordinaten-Einheiten
    pub quick_draw_jitter: f64,
    /// Hügel-Amplitude in Metern
    pub quick_draw_hill_magnitude: f64,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe (None = unbegrenzt)
    pub history_max_depth: Option<usize>,

    // ── Schwierigkeit ───────────────────────────────────────────
    /// Score-Schwelle für `Moderate`
    pub difficulty_moderate_threshold: f64,
    /// Score-Schwelle für `Hard`
    pub difficulty_hard_threshold: f64,
    /// Technische Stufe beim Betreten des Editors
    pub default_technical_tier: TechnicalTier,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            segment_length: DEFAULT_SEGMENT_LENGTH,
            distance_model: DistanceModel::FixedSegment,

            quick_draw_points: QUICK_DRAW_POINTS,
            quick_draw_jitter: QUICK_DRAW_JITTER,
            quick_draw_hill_magnitude: QUICK_DRAW_HILL_MAGNITUDE,

            history_max_depth: None,

            difficulty_moderate_threshold: MODERATE_THRESHOLD,
            difficulty_hard_threshold: HARD_THRESHOLD,
            default_technical_tier: TechnicalTier::default(),
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder bekommen Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        let opts = opts.sanitized();
        log::info!("Optionen geladen ({:?})", opts.distance_model);
        Ok(opts)
    }

    /// Ersetzt ungültige Werte feldweise durch den Standardwert.
    ///
    /// Ungültig sind nicht-endliche oder negative Längen/Amplituden,
    /// nicht-endliche Schwellen und zu viele Quick-Draw-Punkte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn check(name: &str, value: &mut f64, default: f64, valid: fn(f64) -> bool) {
            if !valid(*value) {
                log::warn!(
                    "Option '{}' ungültig ({}), verwende Standardwert {}",
                    name,
                    value,
                    default
                );
                *value = default;
            }
        }

        let non_negative: fn(f64) -> bool = |v| v.is_finite() && v >= 0.0;
        let finite: fn(f64) -> bool = f64::is_finite;

        check(
            "segment_length",
            &mut self.segment_length,
            defaults.segment_length,
            non_negative,
        );
        check(
            "quick_draw_jitter",
            &mut self.quick_draw_jitter,
            defaults.quick_draw_jitter,
            non_negative,
        );
        check(
            "quick_draw_hill_magnitude",
            &mut self.quick_draw_hill_magnitude,
            defaults.quick_draw_hill_magnitude,
            non_negative,
        );
        check(
            "difficulty_moderate_threshold",
            &mut self.difficulty_moderate_threshold,
            defaults.difficulty_moderate_threshold,
            finite,
        );
        check(
            "difficulty_hard_threshold",
            &mut self.difficulty_hard_threshold,
            defaults.difficulty_hard_threshold,
            finite,
        );

        if self.quick_draw_points > QUICK_DRAW_MAX_POINTS {
            log::warn!(
                "Option 'quick_draw_points' zu groß ({}), verwende Standardwert {}",
                self.quick_draw_points,
                defaults.quick_draw_points
            );
            self.quick_draw_points = defaults.quick_draw_points;
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("trail_route_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("trail_route_editor.toml")
    }

    /// Schwellen für den Klassifizierer.
    pub fn difficulty_thresholds(&self) -> DifficultyThresholds {
        DifficultyThresholds {
            moderate: self.difficulty_moderate_threshold,
            hard: self.difficulty_hard_threshold,
        }
    }
}
