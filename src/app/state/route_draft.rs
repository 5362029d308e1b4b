use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{classify, difficulty_score, Difficulty, RouteMetrics, RoutePoint, TechnicalTier};
use crate::shared::EngineOptions;

use super::DrawState;

/// Hauptzustand einer Routen-Bearbeitung.
///
/// Die Punktfolge ist nur über die Methoden mutierbar, damit jede Änderung
/// vorher einen Undo-Snapshot aufzeichnet.
pub struct RouteDraft {
    /// Aktuelle Punktfolge (Punkt i ist mit Punkt i+1 verbunden)
    points: Vec<RoutePoint>,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Zeichenmodus inkl. Quick-Draw-Unterzustand
    pub draw: DrawState,
    /// Vom Nutzer gewählte technische Stufe
    pub technical_tier: TechnicalTier,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EngineOptions,
}

impl RouteDraft {
    /// Erstellt einen leeren Entwurf mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Erstellt einen leeren Entwurf mit den gegebenen Optionen.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            points: Vec::new(),
            history: EditHistory::with_max_depth(options.history_max_depth),
            draw: DrawState::default(),
            technical_tier: options.default_technical_tier,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuelle Punktfolge.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_draft(self);
        self.history.record_snapshot(snap);
    }

    /// Hängt einen Punkt an. Koordinaten werden nicht validiert.
    pub fn add_point(&mut self, point: RoutePoint) {
        self.record_undo_snapshot();
        self.points.push(point);
    }

    /// Ersetzt die gesamte Punktfolge als einen einzigen Undo-Schritt.
    pub fn replace_points(&mut self, points: Vec<RoutePoint>) {
        self.record_undo_snapshot();
        self.points = points;
    }

    /// Entfernt den letzten Punkt. Gibt `false` zurück, wenn die Route leer ist.
    pub fn remove_last_point(&mut self) -> bool {
        if self.points.is_empty() {
            return false;
        }
        self.record_undo_snapshot();
        self.points.pop();
        true
    }

    /// Macht die letzte Mutation rückgängig. Gibt `false` zurück, wenn nichts zu tun war.
    pub fn undo(&mut self) -> bool {
        let current = Snapshot::from_draft(self);
        match self.history.pop_undo_with_current(current) {
            Some(prev) => {
                prev.apply_to(self);
                true
            }
            None => false,
        }
    }

    /// Stellt die zuletzt rückgängig gemachte Mutation wieder her.
    pub fn redo(&mut self) -> bool {
        let current = Snapshot::from_draft(self);
        match self.history.pop_redo_with_current(current) {
            Some(next) => {
                next.apply_to(self);
                true
            }
            None => false,
        }
    }

    /// Setzt Punkte und beide History-Stacks zurück.
    pub fn clear(&mut self) {
        self.points.clear();
        self.history.clear();
    }

    /// Setzt die Punktfolge ohne Snapshot (nur für Undo/Redo).
    pub(crate) fn set_points_unrecorded(&mut self, points: Vec<RoutePoint>) {
        self.points = points;
    }

    /// Distanz und Anstieg, bei jedem Aufruf frisch berechnet.
    pub fn metrics(&self) -> RouteMetrics {
        RouteMetrics::compute(
            &self.points,
            self.options.distance_model,
            self.options.segment_length,
        )
    }

    /// Schwierigkeits-Score der aktuellen Route (None bei zu wenig Daten).
    pub fn difficulty_score(&self) -> Option<f64> {
        let metrics = self.metrics();
        difficulty_score(metrics.distance, metrics.elevation_gain, self.technical_tier)
    }

    /// Schwierigkeit der aktuellen Route.
    pub fn difficulty(&self) -> Difficulty {
        let metrics = self.metrics();
        classify(
            metrics.distance,
            metrics.elevation_gain,
            self.technical_tier,
            &self.options.difficulty_thresholds(),
        )
    }
}

impl Default for RouteDraft {
    fn default() -> Self {
        Self::new()
    }
}
