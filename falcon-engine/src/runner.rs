//! Single-pass mission orchestration
use log::{debug, info};
use thiserror::Error;

use crate::empire::EmpireIntel;
use crate::galaxy::Galaxy;
use crate::mission::{MissionPlan, ValidationError};
use crate::odds::odds_percentage;
use crate::search::{Interrupt, SearchOutcome, minimum_exposures};
use crate::store::{DataError, RouteSource};

/// Errors surfaced by a mission run.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Outcome of one mission query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionOutcome {
    /// Success odds as an integer percentage in `0..=100`.
    pub odds: u8,
    pub search: SearchOutcome,
}

/// Runs one mission query end to end: routes in, percentage out.
///
/// A single deterministic pass with no retries and no partial results; an
/// unreachable arrival is a normal 0% outcome, not an error.
#[derive(Debug, Clone)]
pub struct MissionRunner<S> {
    source: S,
}

impl<S: RouteSource> MissionRunner<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run the query to completion.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::Data` when the route source cannot be read and
    /// `MissionError::Invalid` when the mission or intel records are
    /// malformed.
    pub fn run(&self, plan: &MissionPlan, intel: &EmpireIntel) -> Result<MissionOutcome, MissionError> {
        self.run_with_interrupt(plan, intel, &Interrupt::new())
    }

    /// Run the query with a cooperative stop flag checked at day boundaries.
    ///
    /// # Errors
    ///
    /// Same as [`MissionRunner::run`].
    pub fn run_with_interrupt(
        &self,
        plan: &MissionPlan,
        intel: &EmpireIntel,
        interrupt: &Interrupt,
    ) -> Result<MissionOutcome, MissionError> {
        let routes = self.source.load_routes()?;
        debug!("loaded {} route records", routes.len());

        let galaxy = Galaxy::from_routes(&routes, &[plan.arrival.as_str()])?;
        if !galaxy.contains(&plan.departure) {
            return Err(ValidationError::UnknownDeparture {
                planet: plan.departure.clone(),
            }
            .into());
        }

        let countdown = intel.countdown()?;
        let schedule = intel.schedule()?;
        debug!(
            "searching {} -> {} across {} planets, countdown {countdown}, autonomy {}",
            plan.departure,
            plan.arrival,
            galaxy.planet_count(),
            plan.autonomy
        );

        let search = minimum_exposures(&galaxy, &schedule, plan, countdown, interrupt);
        let odds = odds_percentage(search.exposures);
        info!(
            "mission {} -> {}: exposures {:?}, odds {odds}% ({} states over {} days)",
            plan.departure, plan.arrival, search.exposures, search.states_expanded, search.days_processed
        );
        Ok(MissionOutcome { odds, search })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::empire::Sighting;
    use crate::galaxy::Route;
    use crate::store::MemoryRoutes;

    fn canonical_source() -> MemoryRoutes {
        MemoryRoutes::new(vec![
            Route::new("Tatooine", "Dagobah", 6),
            Route::new("Dagobah", "Endor", 4),
            Route::new("Dagobah", "Hoth", 1),
            Route::new("Hoth", "Endor", 1),
            Route::new("Tatooine", "Hoth", 6),
        ])
    }

    fn plan() -> MissionPlan {
        MissionPlan::new("Tatooine".into(), "Endor".into(), 6).expect("valid plan")
    }

    #[test]
    fn canonical_mission_reports_eighty_one_percent() {
        let runner = MissionRunner::new(canonical_source());
        let intel = EmpireIntel {
            countdown: 8,
            bounty_hunters: vec![
                Sighting::new("Hoth", 6),
                Sighting::new("Hoth", 7),
                Sighting::new("Hoth", 8),
            ],
        };
        let outcome = runner.run(&plan(), &intel).expect("mission runs");
        assert_eq!(outcome.search.exposures, Some(2));
        assert_eq!(outcome.odds, 81);
    }

    #[test]
    fn unknown_departure_is_rejected_before_searching() {
        let runner = MissionRunner::new(canonical_source());
        let bad_plan = MissionPlan::new("Alderaan".into(), "Endor".into(), 6).expect("valid plan");
        let err = runner
            .run(&bad_plan, &EmpireIntel::default())
            .expect_err("unknown departure must fail");
        assert!(matches!(
            err,
            MissionError::Invalid(ValidationError::UnknownDeparture { .. })
        ));
    }

    #[test]
    fn arrival_missing_from_routes_is_a_normal_zero_percent() {
        let runner = MissionRunner::new(MemoryRoutes::new(vec![Route::new(
            "Tatooine", "Hoth", 6,
        )]));
        let lonely = MissionPlan::new("Tatooine".into(), "Endor".into(), 6).expect("valid plan");
        let outcome = runner
            .run(&lonely, &EmpireIntel { countdown: 20, bounty_hunters: Vec::new() })
            .expect("unreachable arrival is not an error");
        assert_eq!(outcome.search.exposures, None);
        assert_eq!(outcome.odds, 0);
    }
}
