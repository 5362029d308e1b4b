//! Application State — zentrale Datenhaltung einer Routen-Bearbeitung.

mod draw_state;
mod route_draft;

pub use draw_state::DrawState;
pub use route_draft::RouteDraft;
