//! Risk-minimizing route search over the (day, planet, fuel) state space
//!
//! The search walks the mission days level by level. Each reached state is a
//! (day, planet, fuel) triple scored by the fewest bounty hunter exposures
//! known to reach it. Two moves exist: traveling a route, which consumes fuel
//! and days equal to the route's travel time, and waiting one day in place,
//! which refills the tanks. Every arrival on a planet whose schedule lists a
//! hunter for that day costs one exposure.
//!
//! Per (day, planet) the engine keeps only the Pareto frontier of
//! (fuel, exposures) pairs: a state is dropped as soon as another state with
//! at least as much fuel and no more exposures exists. The frontier is stored
//! sorted by fuel descending, so exposures strictly decrease down the list
//! and propagation always sweeps candidates in fuel order. A per-day worklist
//! of dirty planets bounds re-expansion, and the best exposure count recorded
//! at the arrival planet prunes candidates that can no longer improve on it.
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::empire::HunterSchedule;
use crate::galaxy::Galaxy;
use crate::mission::MissionPlan;

/// Cooperative stop flag checked once per day boundary.
///
/// Tripping the flag from another thread makes the search return early with
/// the best answer found so far and `interrupted` set on the outcome.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the search stops at the next day boundary.
    pub fn trip(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_tripped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Fewest exposures over any route reaching the arrival planet within
    /// the countdown, or `None` when it cannot be reached at all.
    pub exposures: Option<u32>,
    /// Days that had at least one dirty planet to expand.
    pub days_processed: u32,
    /// Planet expansions performed across the whole run.
    pub states_expanded: u64,
    /// Whether the run stopped early on a tripped [`Interrupt`]. The
    /// exposure count is then a bound on the answer, not the answer.
    pub interrupted: bool,
}

impl SearchOutcome {
    fn settled(exposures: Option<u32>) -> Self {
        Self {
            exposures,
            days_processed: 0,
            states_expanded: 0,
            interrupted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FuelEntry {
    fuel: u32,
    exposures: u32,
}

/// Pareto frontier of (fuel, exposures) pairs for one (day, planet) cell.
///
/// Invariant: entries are sorted by fuel strictly descending and exposures
/// strictly descending, so no entry dominates another.
#[derive(Debug, Clone, Default)]
struct FuelLedger {
    entries: SmallVec<[FuelEntry; 4]>,
}

impl FuelLedger {
    fn seeded(fuel: u32, exposures: u32) -> Self {
        let mut ledger = Self::default();
        ledger.admit(fuel, exposures);
        ledger
    }

    /// Insert a candidate unless an existing entry dominates it; evict the
    /// entries it dominates. Returns whether the ledger changed.
    fn admit(&mut self, fuel: u32, exposures: u32) -> bool {
        for entry in &self.entries {
            if entry.fuel >= fuel && entry.exposures <= exposures {
                return false;
            }
        }
        self.entries
            .retain(|entry| !(entry.fuel <= fuel && entry.exposures >= exposures));
        let position = self
            .entries
            .iter()
            .position(|entry| entry.fuel < fuel)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, FuelEntry { fuel, exposures });
        debug_assert!(self.is_dominance_reduced());
        true
    }

    fn snapshot(&self) -> SmallVec<[FuelEntry; 4]> {
        self.entries.clone()
    }

    /// Fewest exposures over all retained fuel levels.
    fn fewest_exposures(&self) -> Option<u32> {
        self.entries.last().map(|entry| entry.exposures)
    }

    fn is_dominance_reduced(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].fuel > pair[1].fuel && pair[0].exposures > pair[1].exposures)
    }
}

/// Per-day sets of planets whose state changed and must be expanded.
#[derive(Debug, Default)]
struct Frontier {
    days: HashMap<u32, BTreeSet<usize>>,
    pending: usize,
}

impl Frontier {
    fn mark(&mut self, day: u32, planet: usize) {
        if self.days.entry(day).or_default().insert(planet) {
            self.pending += 1;
        }
    }

    fn take_day(&mut self, day: u32) -> Option<BTreeSet<usize>> {
        let planets = self.days.remove(&day)?;
        self.pending -= planets.len();
        Some(planets)
    }

    fn is_drained(&self) -> bool {
        self.pending == 0
    }
}

fn beats(incumbent: Option<u32>, candidate: u32) -> bool {
    incumbent.is_none_or(|best| candidate < best)
}

/// Compute the fewest bounty hunter exposures over any route from the plan's
/// departure to its arrival that completes within `countdown` days.
///
/// Total over well-formed inputs: an arrival that cannot be reached yields
/// `exposures: None`, never an error.
#[must_use]
pub fn minimum_exposures(
    galaxy: &Galaxy,
    hunters: &HunterSchedule,
    plan: &MissionPlan,
    countdown: u32,
    interrupt: &Interrupt,
) -> SearchOutcome {
    let departure_hazard = u32::from(hunters.present_on(&plan.departure, 0));
    if plan.departure == plan.arrival {
        return SearchOutcome::settled(Some(departure_hazard));
    }

    // Planets are interned in sorted order so expansion is deterministic
    // regardless of map iteration order.
    let mut names: Vec<&str> = galaxy.planets().collect();
    names.sort_unstable();
    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(position, name)| (*name, position))
        .collect();
    let (Some(&departure), Some(&arrival)) = (
        index.get(plan.departure.as_str()),
        index.get(plan.arrival.as_str()),
    ) else {
        return SearchOutcome::settled(None);
    };
    let adjacency: Vec<Vec<(usize, u32)>> = names
        .iter()
        .map(|name| {
            let mut routes: Vec<(usize, u32)> = galaxy
                .neighbors(name)
                .map(|(neighbor, days)| (index[neighbor], days))
                .collect();
            routes.sort_unstable();
            routes
        })
        .collect();
    let hazard = |planet: usize, day: u32| u32::from(hunters.present_on(names[planet], day));

    let mut table: HashMap<(u32, usize), FuelLedger> = HashMap::new();
    table.insert(
        (0, departure),
        FuelLedger::seeded(plan.autonomy, departure_hazard),
    );
    let mut frontier = Frontier::default();
    frontier.mark(0, departure);

    let mut incumbent: Option<u32> = None;
    let mut days_processed = 0u32;
    let mut states_expanded = 0u64;
    let mut interrupted = false;

    for day in 0..=countdown {
        if frontier.is_drained() {
            break;
        }
        if interrupt.is_tripped() {
            interrupted = true;
            break;
        }
        let Some(mut dirty) = frontier.take_day(day) else {
            continue;
        };
        days_processed += 1;

        // Zero-cost routes re-mark planets for the current day, so the set
        // is drained until empty rather than iterated once.
        while let Some(planet) = dirty.pop_first() {
            states_expanded += 1;
            let Some(entries) = table.get(&(day, planet)).map(FuelLedger::snapshot) else {
                continue;
            };

            // Wait one day in place: tanks refill, only the cheapest
            // exposure count matters since every fuel level collapses
            // to full autonomy.
            if day < countdown {
                if let Some(fewest) = entries.last() {
                    let candidate = fewest.exposures + hazard(planet, day + 1);
                    if beats(incumbent, candidate)
                        && table
                            .entry((day + 1, planet))
                            .or_default()
                            .admit(plan.autonomy, candidate)
                    {
                        frontier.mark(day + 1, planet);
                    }
                }
            }

            for &(neighbor, travel_time) in &adjacency[planet] {
                let Some(arrive) = day
                    .checked_add(travel_time)
                    .filter(|reached| *reached <= countdown)
                else {
                    continue;
                };
                let arrival_hazard = hazard(neighbor, arrive);
                for entry in &entries {
                    if entry.fuel < travel_time {
                        // Entries are sorted by fuel descending; the rest
                        // cannot afford this route either.
                        break;
                    }
                    let candidate = entry.exposures + arrival_hazard;
                    if !beats(incumbent, candidate) {
                        continue;
                    }
                    if table
                        .entry((arrive, neighbor))
                        .or_default()
                        .admit(entry.fuel - travel_time, candidate)
                    {
                        if neighbor == arrival {
                            incumbent = Some(candidate);
                        }
                        if arrive == day {
                            dirty.insert(neighbor);
                        } else {
                            frontier.mark(arrive, neighbor);
                        }
                    }
                }
            }
        }
    }

    SearchOutcome {
        exposures: incumbent,
        days_processed,
        states_expanded,
        interrupted,
    }
}
