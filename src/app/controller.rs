//! Application Controller für zentrale Event-Verarbeitung.

use super::{route_summary, AppCommand, AppIntent, RouteDraft};
use crate::shared::RouteSummary;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Orchestriert Host-Events und Handler auf dem RouteDraft.
///
/// Besitzt die Zufallsquelle für den Quick-Draw-Jitter; mit
/// [`AppController::with_seed`] sind Abläufe reproduzierbar.
pub struct AppController {
    rng: StdRng,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen neuen Controller mit zufälligem Seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Erstellt einen Controller mit festem Seed (Tests, Replays).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut RouteDraft,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem RouteDraft aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut RouteDraft,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte ===
            AppCommand::AddPoint { point } => handlers::drawing::add_point(state, point),
            AppCommand::RemoveLastPoint => handlers::drawing::remove_last_point(state),
            AppCommand::SetDrawMode { mode } => handlers::drawing::set_draw_mode(state, mode),
            AppCommand::SetTechnicalTier { tier } => {
                handlers::drawing::set_technical_tier(state, tier)
            }

            // === Quick-Draw ===
            AppCommand::QuickDrawPickStart { point } => {
                handlers::quick_draw::pick_start(state, point)
            }
            AppCommand::QuickDrawPickEnd { point } => {
                handlers::quick_draw::pick_end(state, point, &mut self.rng)
            }
            AppCommand::CancelQuickDraw => handlers::quick_draw::cancel(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
            AppCommand::ClearRoute => handlers::history::clear(state),
        }

        Ok(())
    }

    /// Baut die Zusammenfassung für Formular- und Speicher-Schicht des Hosts.
    pub fn build_summary(&self, state: &RouteDraft) -> RouteSummary {
        route_summary::build(state)
    }
}
