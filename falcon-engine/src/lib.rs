//! Millennium Falcon Odds Engine
//!
//! Platform-agnostic core for answering one question: what are the odds that
//! the Falcon reaches its destination before the countdown expires, crossing
//! paths with as few bounty hunters as possible along the way?
//!
//! The crate loads a symmetric route map from a provider, folds intercepted
//! Empire data into a day-indexed hunter schedule, searches the
//! (day, planet, fuel) state space for the route with the fewest exposures,
//! and converts that count into a success percentage. No UI or
//! platform-specific dependencies; the only I/O is the route provider read.

pub mod empire;
pub mod galaxy;
pub mod mission;
pub mod odds;
pub mod runner;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use empire::{EmpireIntel, HunterSchedule, Sighting};
pub use galaxy::{Galaxy, Route};
pub use mission::{FalconConfig, MissionPlan, ValidationError};
pub use odds::{CAPTURE_CHANCE, odds_percentage, success_probability};
pub use runner::{MissionError, MissionOutcome, MissionRunner};
pub use search::{Interrupt, SearchOutcome, minimum_exposures};
pub use store::{DataError, MemoryRoutes, RouteSource, SqliteRoutes};
