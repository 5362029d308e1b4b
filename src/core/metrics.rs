//! Abgeleitete Routen-Metriken: Gesamtdistanz und kumulierter Anstieg.
//!
//! Alle Funktionen sind rein und werden bei jeder Änderung der Punktfolge neu
//! ausgewertet (Punktzahlen im Bereich von Dutzenden, nicht Tausenden).

use super::RoutePoint;
use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// Referenz-Abstand pro Segment (Distanz-Einheiten).
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.5;

/// Wie die Distanz zwischen aufeinanderfolgenden Punkten bestimmt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceModel {
    /// Jedes Segment zählt mit fester Länge (synthetische Koordinaten)
    #[default]
    FixedSegment,
    /// Großkreis-Distanz in Kilometern (echte WGS84-Koordinaten)
    Haversine,
}

/// Ergebnis einer Metrik-Auswertung.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Gesamtdistanz
    pub distance: f64,
    /// Kumulierter Anstieg in Metern (nur positive Höhendeltas)
    pub elevation_gain: f64,
}

impl RouteMetrics {
    /// Wertet beide Metriken für die gegebene Punktfolge aus.
    pub fn compute(points: &[RoutePoint], model: DistanceModel, segment_length: f64) -> Self {
        Self {
            distance: compute_distance(points, model, segment_length),
            elevation_gain: compute_elevation_gain(points),
        }
    }
}

/// Gesamtdistanz der Punktfolge.
///
/// `FixedSegment`: `(n - 1) * segment_length` für `n > 1`, sonst 0.
/// `Haversine`: Summe der Großkreis-Abstände in Kilometern.
pub fn compute_distance(points: &[RoutePoint], model: DistanceModel, segment_length: f64) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    match model {
        DistanceModel::FixedSegment => (points.len() - 1) as f64 * segment_length,
        DistanceModel::Haversine => points
            .windows(2)
            .map(|pair| haversine_km(&pair[0], &pair[1]))
            .sum(),
    }
}

/// Kumulierter Anstieg: `Σ max(0, elevation[i] - elevation[i-1])`.
///
/// Abfahrten zählen nicht negativ. Segmente, bei denen einem Endpunkt die
/// Höhe fehlt, tragen 0 bei.
pub fn compute_elevation_gain(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .filter_map(|pair| match (pair[0].elevation, pair[1].elevation) {
            (Some(prev), Some(next)) => Some((next - prev).max(0.0)),
            _ => None,
        })
        .sum()
}

fn haversine_km(a: &RoutePoint, b: &RoutePoint) -> f64 {
    let from = Point::new(a.longitude, a.latitude);
    let to = Point::new(b.longitude, b.latitude);
    Haversine::distance(from, to) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points_with_elevations(elevations: &[f64]) -> Vec<RoutePoint> {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &e)| RoutePoint::with_elevation(0.0, i as f64 * 0.01, e))
            .collect()
    }

    #[test]
    fn distance_is_zero_for_empty_and_single_point() {
        assert_eq!(
            compute_distance(&[], DistanceModel::FixedSegment, DEFAULT_SEGMENT_LENGTH),
            0.0
        );
        let single = points_with_elevations(&[100.0]);
        assert_eq!(
            compute_distance(&single, DistanceModel::FixedSegment, DEFAULT_SEGMENT_LENGTH),
            0.0
        );
        assert_eq!(
            compute_distance(&single, DistanceModel::Haversine, DEFAULT_SEGMENT_LENGTH),
            0.0
        );
    }

    #[test]
    fn fixed_segment_distance_counts_segments() {
        for n in 2..12 {
            let points = points_with_elevations(&vec![0.0; n]);
            let distance =
                compute_distance(&points, DistanceModel::FixedSegment, DEFAULT_SEGMENT_LENGTH);
            assert_abs_diff_eq!(distance, (n - 1) as f64 * 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn elevation_gain_ignores_descents() {
        let points = points_with_elevations(&[100.0, 80.0, 150.0]);
        assert_abs_diff_eq!(compute_elevation_gain(&points), 70.0, epsilon = 1e-12);
    }

    #[test]
    fn elevation_gain_skips_segments_without_elevation() {
        let mut points = points_with_elevations(&[100.0, 120.0, 140.0]);
        points[1].elevation = None;
        assert_eq!(compute_elevation_gain(&points), 0.0);
        assert_eq!(compute_elevation_gain(&points[..1]), 0.0);
    }

    #[test]
    fn haversine_distance_one_degree_latitude() {
        let points = vec![RoutePoint::new(0.0, 0.0), RoutePoint::new(1.0, 0.0)];
        let km = compute_distance(&points, DistanceModel::Haversine, DEFAULT_SEGMENT_LENGTH);
        // ~111.2 km pro Breitengrad
        assert!((km - 111.2).abs() < 0.5, "unerwartete Distanz: {km}");
    }

    #[test]
    fn compute_combines_both_metrics() {
        let points = points_with_elevations(&[800.0, 820.0, 780.0]);
        let metrics = RouteMetrics::compute(&points, DistanceModel::FixedSegment, 0.5);
        assert_abs_diff_eq!(metrics.distance, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.elevation_gain, 20.0, epsilon = 1e-12);
    }
}
