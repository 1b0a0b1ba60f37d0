//! Real Lisbon-area points of interest for realistic test fixtures.
//!
//! Coordinates taken from OpenStreetMap, rounded to four decimals.

use itinerary_planner::{Activity, Coordinate, Rating};

/// A named location with coordinates and a popularity rating.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub rating: u8,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64, rating: u8) -> Self {
        Self {
            name,
            lat,
            lng,
            rating,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Activity with an id derived from the name, e.g. "belem-tower".
    pub fn activity(&self) -> Activity {
        Activity {
            id: slug(self.name),
            name: self.name.to_string(),
            description: format!("Visit {}", self.name),
            rating: Rating::try_from(self.rating).unwrap(),
            location: self.coordinate(),
            image_url: None,
        }
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

// ============================================================================
// Belém (west riverside)
// ============================================================================

pub const BELEM: &[Location] = &[
    Location::new("Jeronimos Monastery", 38.6979, -9.2068, 3),
    Location::new("Belem Tower", 38.6916, -9.2160, 3),
    Location::new("Padrao dos Descobrimentos", 38.6936, -9.2057, 2),
    Location::new("Pasteis de Belem", 38.6975, -9.2032, 2),
    Location::new("MAAT", 38.6958, -9.1937, 1),
];

// ============================================================================
// Baixa / Alfama (historic center)
// ============================================================================

pub const HISTORIC_CENTER: &[Location] = &[
    Location::new("Praca do Comercio", 38.7075, -9.1364, 2),
    Location::new("Lisbon Cathedral", 38.7099, -9.1334, 2),
    Location::new("Sao Jorge Castle", 38.7139, -9.1335, 3),
    Location::new("Miradouro de Santa Luzia", 38.7118, -9.1302, 1),
    Location::new("Santa Justa Lift", 38.7121, -9.1394, 1),
];

// ============================================================================
// Sintra (day trip, ~25 km north-west)
// ============================================================================

pub const SINTRA: &[Location] = &[
    Location::new("Pena Palace", 38.7876, -9.3906, 3),
    Location::new("Quinta da Regaleira", 38.7963, -9.3961, 3),
    Location::new("Moorish Castle", 38.7923, -9.3894, 2),
    Location::new("Sintra National Palace", 38.7976, -9.3906, 2),
];

pub fn activities(locations: &[Location]) -> Vec<Activity> {
    locations.iter().map(Location::activity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut ids: Vec<String> = BELEM
            .iter()
            .chain(HISTORIC_CENTER)
            .chain(SINTRA)
            .map(|l| l.activity().id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_coordinates_in_lisbon_area() {
        for loc in BELEM.iter().chain(HISTORIC_CENTER).chain(SINTRA) {
            assert!(loc.lat > 38.6 && loc.lat < 38.9, "{} lat out of range", loc.name);
            assert!(loc.lng > -9.5 && loc.lng < -9.0, "{} lng out of range", loc.name);
        }
    }
}
