//! Initial bearing and compass octants

use crate::constants::geo::OCTANT_DEGREES;
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// One of the eight compass octants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    /// Octants in clockwise order starting at north
    pub const ALL: [CompassDirection; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Bucket a bearing in degrees into an octant
    ///
    /// The bearing is normalized to [0, 360) first. A bearing exactly on a
    /// boundary (22.5, 67.5, ...) rounds up into the clockwise octant.
    pub fn from_bearing(degrees: f64) -> Self {
        let bearing = normalize_degrees(degrees);
        // bearing is non-negative, so round() is round-half-up here
        let index = (bearing / OCTANT_DEGREES).round() as usize % Self::ALL.len();
        Self::ALL[index]
    }

    /// Short label ("N", "NE", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial great-circle bearing from `from` toward `to`, in degrees [0, 360)
///
/// 0 is north, 90 is east. Identical points yield 0.
pub fn initial_bearing(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
