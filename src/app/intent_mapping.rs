//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier entscheidet der Zeichen-Zustand, welcher Erzeuger einen Klick erhält.

use super::{AppCommand, AppIntent, DrawState, RouteDraft};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &RouteDraft, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointAddRequested { point } => {
            let command = match state.draw {
                DrawState::Manual | DrawState::Snap => AppCommand::AddPoint { point },
                DrawState::QuickAwaitingStart => AppCommand::QuickDrawPickStart { point },
                DrawState::QuickAwaitingEnd { .. } => AppCommand::QuickDrawPickEnd { point },
            };
            vec![command]
        }
        AppIntent::DrawModeChangeRequested { mode } => vec![AppCommand::SetDrawMode { mode }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::RemoveLastPointRequested => vec![AppCommand::RemoveLastPoint],
        AppIntent::ClearRouteRequested => vec![AppCommand::ClearRoute],
        AppIntent::TechnicalTierChanged { tier } => vec![AppCommand::SetTechnicalTier { tier }],
        AppIntent::QuickDrawCancelled => {
            if state.draw.pending().is_some() {
                vec![AppCommand::CancelQuickDraw]
            } else {
                Vec::new()
            }
        }
    }
}
