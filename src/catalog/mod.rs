//! Location catalog
//!
//! The catalog is the fixed, ordered list of guessable locations. It is
//! loaded once (from the embedded country list or a JSON file) and never
//! mutated afterwards.
//!
//! Two record shapes are accepted:
//! - flat: `{"name": "France", "lat": 46.2, "lon": 2.2}`
//! - with locations: `{"name": "France", "locations": [{"label": "Paris", "lat": .., "lon": ..}]}`
//!
//! When a record carries both, the top-level `lat`/`lon` is authoritative.
//! Otherwise the first listed location is used for scoring.

pub mod search;

use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_COUNTRIES: &str = include_str!("../../data/countries.json");

/// A named sub-point of a location (capital, landmark, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPoint {
    pub label: String,
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl SubPoint {
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// A named point on Earth's surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Display name, preserved verbatim
    pub name: String,
    /// Authoritative latitude used for scoring
    pub lat: f64,
    /// Authoritative longitude used for scoring
    pub lon: f64,
    /// Optional sub-points for map centering
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SubPoint>,
}

impl Location {
    /// Create a location with a single authoritative point
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            locations: Vec::new(),
        }
    }

    /// Attach a named sub-point
    pub fn with_sub_point(mut self, label: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.locations.push(SubPoint {
            label: label.into(),
            lat,
            lon,
        });
        self
    }

    /// Coordinates used for distance and bearing
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive name equality used everywhere names are compared
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Raw catalog record as found in data files
#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    lat: Option<f64>,
    #[serde(alias = "lng")]
    lon: Option<f64>,
    #[serde(default)]
    locations: Vec<SubPoint>,
}

impl TryFrom<LocationRecord> for Location {
    type Error = Error;

    fn try_from(record: LocationRecord) -> Result<Self> {
        let (lat, lon) = match (record.lat, record.lon, record.locations.first()) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (None, None, Some(first)) => (first.lat, first.lon),
            _ => {
                return Err(Error::Catalog(format!(
                    "Location '{}' needs lat/lon or at least one sub-location",
                    record.name
                )))
            }
        };

        Ok(Location {
            name: record.name,
            lat,
            lon,
            locations: record.locations,
        })
    }
}

/// Immutable, ordered collection of locations, unique by name
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Build a catalog, validating names and coordinates
    ///
    /// An empty catalog is accepted here; target selection reports it.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(locations.len());

        for location in &locations {
            if location.name.trim().is_empty() {
                return Err(Error::Catalog("Location with empty name".to_string()));
            }
            location.coords().validate().map_err(|e| {
                Error::InvalidCoordinates(format!("{}: {}", location.name, e))
            })?;
            for point in &location.locations {
                point.coords().validate().map_err(|e| {
                    Error::InvalidCoordinates(format!(
                        "{} / {}: {}",
                        location.name, point.label, e
                    ))
                })?;
            }
            if !seen.insert(location.name.trim().to_lowercase()) {
                return Err(Error::Catalog(format!(
                    "Duplicate location name: {}",
                    location.name
                )));
            }
        }

        Ok(Self { locations })
    }

    /// The embedded country catalog
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_COUNTRIES)
    }

    /// Parse a JSON array of location records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<LocationRecord> = serde_json::from_str(json)
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog: {}", e)))?;

        let locations = records
            .into_iter()
            .map(Location::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(locations)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Load from `path` when given and non-empty, otherwise the built-in list
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the catalog has no locations
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in catalog order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at a catalog index
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// Resolve free text to a location by case-insensitive exact name
    pub fn resolve(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.is_named(name))
    }
}
