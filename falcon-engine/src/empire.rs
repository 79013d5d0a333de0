//! Empire intelligence: countdown and bounty hunter sightings
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::mission::ValidationError;

/// One reported bounty hunter presence on a planet for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sighting {
    pub planet: String,
    /// Elapsed days since departure, 0-based.
    pub day: i64,
}

impl Sighting {
    /// Convenience constructor used by fixtures.
    #[must_use]
    pub fn new(planet: &str, day: i64) -> Self {
        Self {
            planet: planet.to_string(),
            day,
        }
    }
}

/// Intercepted Empire data as shipped in `empire.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmpireIntel {
    pub countdown: i64,
    #[serde(default)]
    pub bounty_hunters: Vec<Sighting>,
}

impl EmpireIntel {
    /// Parse intercepted data from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid intel.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate and return the countdown as a day budget.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCountdown` when the countdown is
    /// negative or does not fit the engine's day range.
    pub fn countdown(&self) -> Result<u32, ValidationError> {
        u32::try_from(self.countdown).map_err(|_| ValidationError::InvalidCountdown {
            value: self.countdown,
        })
    }

    /// Build the day-indexed hunter schedule from the sighting records.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSightingDay` when a record carries a
    /// day outside `0..=u32::MAX`.
    pub fn schedule(&self) -> Result<HunterSchedule, ValidationError> {
        HunterSchedule::from_sightings(&self.bounty_hunters)
    }
}

/// Day-indexed bounty hunter presence per planet.
///
/// Duplicate sightings for the same planet and day collapse to a single
/// entry; planets with no sightings answer `false` for every day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HunterSchedule {
    days: HashMap<String, HashSet<u32>>,
}

impl HunterSchedule {
    /// Build a schedule from raw sighting records.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSightingDay` when a record carries a
    /// day outside `0..=u32::MAX`.
    pub fn from_sightings(sightings: &[Sighting]) -> Result<Self, ValidationError> {
        let mut days: HashMap<String, HashSet<u32>> = HashMap::new();
        for sighting in sightings {
            let day = u32::try_from(sighting.day).map_err(|_| {
                ValidationError::InvalidSightingDay {
                    planet: sighting.planet.clone(),
                    value: sighting.day,
                }
            })?;
            days.entry(sighting.planet.clone()).or_default().insert(day);
        }
        Ok(Self { days })
    }

    /// Whether bounty hunters are present on the planet on the given day.
    #[must_use]
    pub fn present_on(&self, planet: &str, day: u32) -> bool {
        self.days
            .get(planet)
            .is_some_and(|days| days.contains(&day))
    }

    /// Total number of distinct (planet, day) presences retained.
    #[must_use]
    pub fn sighting_count(&self) -> usize {
        self.days.values().map(HashSet::len).sum()
    }
}
