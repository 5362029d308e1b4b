use super::RouteDraft;
use crate::core::RoutePoint;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Vollständige Kopie der Punktfolge (kein Diff). Bei erwarteten Punktzahlen
/// im Bereich von Dutzenden ist das billig genug.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Punktfolge zum Zeitpunkt des Snapshots
    pub points: Vec<RoutePoint>,
}

impl Snapshot {
    /// Erstellt einen Snapshot der aktuellen Punktfolge.
    pub fn from_draft(draft: &RouteDraft) -> Self {
        Self {
            points: draft.points().to_vec(),
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, draft: &mut RouteDraft) {
        draft.set_points_unrecorded(self.points);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// None = unbegrenzt
    max_depth: Option<usize>,
}

impl EditHistory {
    /// Erstellt einen History-Manager ohne Tiefenbegrenzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    /// Die Stacks wachsen bei Bedarf, `max_depth` ist nur die Obergrenze.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: Some(max_depth),
        }
    }

    /// Erstellt einen History-Manager passend zur Option `history_max_depth`.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        match max_depth {
            Some(depth) => Self::new_with_capacity(depth),
            None => Self::new(),
        }
    }

    /// Zeichnet einen Snapshot vor einer neuen Mutation auf.
    /// Eine neue Mutation verwirft immer den Redo-Verlauf.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl verfügbarer Redo-Schritte.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Verwirft beide Stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, max_depth: Option<usize>) {
        if let Some(max) = max_depth {
            if max == 0 {
                return;
            }
            if stack.len() >= max {
                stack.remove(0);
            }
        }
        stack.push(snap);
    }
}
