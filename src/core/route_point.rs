//! Einzelner Routen-Punkt (Koordinate + optionale Höhe).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Stützpunkt der Route.
///
/// Koordinaten sind synthetische Ebenen-Koordinaten und werden nicht gegen
/// reale Grenzen validiert. Ein Punkt wird nie in-place verändert: ein
/// "Verschieben" ersetzt den Punkt in der Sequenz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Breitengrad bzw. Y-Koordinate
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Längengrad bzw. X-Koordinate
    #[serde(alias = "lng")]
    pub longitude: f64,
    /// Höhe in Metern (None nur vor der Höhen-Synthese)
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl RoutePoint {
    /// Erstellt einen Punkt ohne Höhenangabe.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Erstellt einen Punkt mit Höhenangabe.
    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: Some(elevation),
        }
    }

    /// Position als 2D-Vektor (x = Längengrad, y = Breitengrad).
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Erstellt einen Punkt aus einer 2D-Position und optionaler Höhe.
    pub fn from_position(position: DVec2, elevation: Option<f64>) -> Self {
        Self {
            latitude: position.y,
            longitude: position.x,
            elevation,
        }
    }
}
