//! Quick-Draw: generiert aus zwei Klicks eine vollständige Strecke.
//!
//! Zwischen Start und Ende werden gleichmäßig verteilte Punkte linear
//! interpoliert, leicht verrauscht und mit einem simulierten Höhenprofil
//! (Anstieg, dann Abfahrt) versehen.

mod geometry;

pub use geometry::{interpolate_position, interpolation_fractions, synthesized_elevation};

use crate::core::RoutePoint;
use crate::shared::{
    EngineOptions, QUICK_DRAW_HILL_MAGNITUDE, QUICK_DRAW_JITTER, QUICK_DRAW_MAX_POINTS,
    QUICK_DRAW_POINTS,
};
use rand::Rng;

/// Parameter der Strecken-Synthese.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickDrawSynthesizer {
    /// Anzahl der Zwischenpunkte (ohne Start/Ende)
    pub intermediate_points: usize,
    /// Maximaler Jitter pro Koordinate (±)
    pub jitter: f64,
    /// Hügel-Amplitude in Metern
    pub hill_magnitude: f64,
}

impl QuickDrawSynthesizer {
    /// Erstellt einen Synthesizer mit Referenzwerten.
    pub fn new() -> Self {
        Self {
            intermediate_points: QUICK_DRAW_POINTS,
            jitter: QUICK_DRAW_JITTER,
            hill_magnitude: QUICK_DRAW_HILL_MAGNITUDE,
        }
    }

    /// Übernimmt die Quick-Draw-Werte aus den Laufzeit-Optionen.
    pub fn from_options(options: &EngineOptions) -> Self {
        Self {
            intermediate_points: options.quick_draw_points,
            jitter: options.quick_draw_jitter,
            hill_magnitude: options.quick_draw_hill_magnitude,
        }
    }

    /// Erzeugt `[start, interp_1, …, interp_N, end]`.
    ///
    /// Start und Ende werden unverändert übernommen. Fehlende Endpunkt-Höhen
    /// zählen für die Interpolation als 0 m. Nicht-endlicher Jitter wird
    /// ignoriert, die Punktzahl ist auf `QUICK_DRAW_MAX_POINTS` begrenzt.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        start: &RoutePoint,
        end: &RoutePoint,
        rng: &mut R,
    ) -> Vec<RoutePoint> {
        let start_pos = start.position();
        let end_pos = end.position();
        let start_elevation = start.elevation.unwrap_or(0.0);
        let end_elevation = end.elevation.unwrap_or(0.0);
        let jitter = if self.jitter.is_finite() {
            self.jitter.abs()
        } else {
            0.0
        };
        let count = self.intermediate_points.min(QUICK_DRAW_MAX_POINTS);

        let mut points = Vec::with_capacity(count + 2);
        points.push(*start);
        for fraction in interpolation_fractions(count) {
            let mut pos = interpolate_position(start_pos, end_pos, fraction);
            if jitter > 0.0 {
                pos.x += rng.gen_range(-jitter..=jitter);
                pos.y += rng.gen_range(-jitter..=jitter);
            }
            let elevation = synthesized_elevation(
                start_elevation,
                end_elevation,
                fraction,
                self.hill_magnitude,
            );
            points.push(RoutePoint::from_position(pos, Some(elevation)));
        }
        points.push(*end);
        points
    }
}

impl Default for QuickDrawSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
