//! Routen-Werkzeuge, die ganze Punktfolgen erzeugen.
//!
//! Tools erzeugen reine Daten (Punktfolgen); die Mutation des Entwurfs
//! erfolgt zentral in den Handlern.

/// Quick-Draw: Strecke zwischen zwei Klicks generieren.
pub mod quick_draw;

pub use quick_draw::QuickDrawSynthesizer;
