//! Mission input models and validation
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when mission or intel records violate their documented bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route {origin}-{destination} travel time must be a non-negative integer (got {value})")]
    InvalidTravelTime {
        origin: String,
        destination: String,
        value: i64,
    },
    #[error("autonomy must be a non-negative integer (got {value})")]
    InvalidAutonomy { value: i64 },
    #[error("countdown must be a non-negative integer (got {value})")]
    InvalidCountdown { value: i64 },
    #[error("bounty hunter sighting on {planet} has an invalid day (got {value})")]
    InvalidSightingDay { planet: String, value: i64 },
    #[error("departure planet {planet} is not part of the galaxy map")]
    UnknownDeparture { planet: String },
}

/// Millennium Falcon configuration as shipped in `millennium-falcon.json`.
///
/// `autonomy` is kept signed here so malformed files are rejected with a
/// field-level error instead of a bare deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FalconConfig {
    /// Location of the route database, relative to the configuration file.
    pub routes_db: String,
    pub departure: String,
    pub arrival: String,
    pub autonomy: i64,
}

impl FalconConfig {
    /// Parse a configuration from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the mission parameters carried by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAutonomy` when the autonomy is negative
    /// or does not fit the engine's fuel range.
    pub fn plan(&self) -> Result<MissionPlan, ValidationError> {
        MissionPlan::new(self.departure.clone(), self.arrival.clone(), self.autonomy)
    }
}

/// Validated, immutable mission parameters consumed by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPlan {
    pub departure: String,
    pub arrival: String,
    /// Fuel capacity in travel days; a full rest restores this amount.
    pub autonomy: u32,
}

impl MissionPlan {
    /// Build a plan, validating the autonomy bound.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAutonomy` when `autonomy` is outside
    /// `0..=u32::MAX`.
    pub fn new(departure: String, arrival: String, autonomy: i64) -> Result<Self, ValidationError> {
        let autonomy =
            u32::try_from(autonomy).map_err(|_| ValidationError::InvalidAutonomy { value: autonomy })?;
        Ok(Self {
            departure,
            arrival,
            autonomy,
        })
    }
}
