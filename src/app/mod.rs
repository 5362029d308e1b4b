//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod route_summary;
/// Application State einer Routen-Bearbeitung
///
/// Dieses Modul verwaltet Punktfolge, History und Zeichen-Zustand.
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use route_summary::build as build_route_summary;
pub use state::{DrawState, RouteDraft};
pub use tools::QuickDrawSynthesizer;
