//! Galaxy route map shared by the search engine and its providers
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mission::ValidationError;

/// A single undirected route record as stored by a route provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    /// Days needed to traverse the route in either direction.
    pub travel_time: i64,
}

impl Route {
    /// Convenience constructor used by fixtures and providers.
    #[must_use]
    pub fn new(origin: &str, destination: &str, travel_time: i64) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            travel_time,
        }
    }
}

/// Symmetric map of planets to their neighbors and travel times in days.
///
/// Every route is usable in both directions with the same cost; planets
/// listed in `must_include` at construction are present even when no route
/// touches them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Galaxy {
    planets: HashMap<String, HashMap<String, u32>>,
}

impl Galaxy {
    /// Build the galaxy from raw route records.
    ///
    /// Later records between the same pair of planets override earlier ones,
    /// matching the provider's row order semantics.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTravelTime` when any record carries a
    /// travel time outside `0..=u32::MAX`.
    pub fn from_routes(routes: &[Route], must_include: &[&str]) -> Result<Self, ValidationError> {
        let mut planets: HashMap<String, HashMap<String, u32>> = HashMap::new();
        for route in routes {
            let travel_time = u32::try_from(route.travel_time).map_err(|_| {
                ValidationError::InvalidTravelTime {
                    origin: route.origin.clone(),
                    destination: route.destination.clone(),
                    value: route.travel_time,
                }
            })?;
            planets
                .entry(route.origin.clone())
                .or_default()
                .insert(route.destination.clone(), travel_time);
            planets
                .entry(route.destination.clone())
                .or_default()
                .insert(route.origin.clone(), travel_time);
        }
        for planet in must_include {
            planets.entry((*planet).to_string()).or_default();
        }
        Ok(Self { planets })
    }

    /// Whether the planet appears in the map at all.
    #[must_use]
    pub fn contains(&self, planet: &str) -> bool {
        self.planets.contains_key(planet)
    }

    /// Iterate over every planet name in the map.
    pub fn planets(&self) -> impl Iterator<Item = &str> {
        self.planets.keys().map(String::as_str)
    }

    /// Iterate over the neighbors of a planet with their travel times.
    /// Unknown planets yield nothing.
    pub fn neighbors(&self, planet: &str) -> impl Iterator<Item = (&str, u32)> {
        self.planets
            .get(planet)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(name, &days)| (name.as_str(), days)))
    }

    /// Number of planets in the map.
    #[must_use]
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_routes() -> Vec<Route> {
        vec![
            Route::new("Tatooine", "Dagobah", 6),
            Route::new("Dagobah", "Endor", 4),
            Route::new("Dagobah", "Hoth", 1),
            Route::new("Hoth", "Endor", 1),
            Route::new("Tatooine", "Hoth", 6),
        ]
    }

    #[test]
    fn routes_are_usable_in_both_directions() {
        let galaxy = Galaxy::from_routes(&canonical_routes(), &[]).expect("valid routes");
        let forward: Vec<_> = galaxy.neighbors("Dagobah").collect();
        assert!(forward.contains(&("Tatooine", 6)));
        assert!(forward.contains(&("Endor", 4)));
        assert!(forward.contains(&("Hoth", 1)));
        let back: Vec<_> = galaxy.neighbors("Endor").collect();
        assert!(back.contains(&("Dagobah", 4)));
        assert!(back.contains(&("Hoth", 1)));
    }

    #[test]
    fn must_include_planets_exist_without_routes() {
        let galaxy = Galaxy::from_routes(&[], &["Endor"]).expect("empty routes are valid");
        assert!(galaxy.contains("Endor"));
        assert_eq!(galaxy.neighbors("Endor").count(), 0);
        assert_eq!(galaxy.planet_count(), 1);
    }

    #[test]
    fn negative_travel_time_is_rejected() {
        let routes = vec![Route::new("Tatooine", "Hoth", -2)];
        let err = Galaxy::from_routes(&routes, &[]).expect_err("negative cost must fail");
        assert_eq!(
            err,
            ValidationError::InvalidTravelTime {
                origin: "Tatooine".into(),
                destination: "Hoth".into(),
                value: -2,
            }
        );
    }

    #[test]
    fn later_records_override_earlier_ones() {
        let routes = vec![
            Route::new("Tatooine", "Hoth", 6),
            Route::new("Hoth", "Tatooine", 4),
        ];
        let galaxy = Galaxy::from_routes(&routes, &[]).expect("valid routes");
        let neighbors: Vec<_> = galaxy.neighbors("Tatooine").collect();
        assert_eq!(neighbors, vec![("Hoth", 4)]);
    }

    #[test]
    fn unknown_planet_has_no_neighbors() {
        let galaxy = Galaxy::from_routes(&canonical_routes(), &[]).expect("valid routes");
        assert_eq!(galaxy.neighbors("Alderaan").count(), 0);
        assert!(!galaxy.contains("Alderaan"));
    }
}
