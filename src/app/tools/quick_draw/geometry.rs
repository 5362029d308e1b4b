//! Geometrie- und Höhenberechnung für Quick-Draw.

use glam::DVec2;
use std::f64::consts::PI;

/// Gleichmäßig verteilte Interpolations-Anteile im offenen Intervall (0, 1).
///
/// Für `count = 6` ergibt das 1/7, 2/7, …, 6/7.
pub fn interpolation_fractions(count: usize) -> Vec<f64> {
    let divisor = count as f64 + 1.0;
    (1..=count).map(|i| i as f64 / divisor).collect()
}

/// Lineare Interpolation der Position.
pub fn interpolate_position(start: DVec2, end: DVec2, fraction: f64) -> DVec2 {
    start.lerp(end, fraction)
}

/// Höhe an Anteil `fraction`: lineare Interpolation plus `sin(f·π)·hill_magnitude`.
///
/// Der Sinus-Term erzeugt genau einen Hügel mit Scheitel bei f = 0.5,
/// unabhängig von Start- und Endhöhe.
pub fn synthesized_elevation(
    start_elevation: f64,
    end_elevation: f64,
    fraction: f64,
    hill_magnitude: f64,
) -> f64 {
    let base = start_elevation + (end_elevation - start_elevation) * fraction;
    base + (fraction * PI).sin() * hill_magnitude
}
