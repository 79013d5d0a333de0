//! Conversion from hazard exposures to mission success odds

/// Chance that a single bounty hunter encounter ends the mission.
pub const CAPTURE_CHANCE: f64 = 0.1;

/// Probability of evading every encountered bounty hunter.
///
/// Each exposure is survived independently with probability
/// `1 - CAPTURE_CHANCE`, so `k` exposures succeed with `0.9^k`. An
/// unreachable arrival (`None`) maps to zero.
#[must_use]
pub fn success_probability(exposures: Option<u32>) -> f64 {
    match exposures {
        Some(count) => (1.0 - CAPTURE_CHANCE).powf(f64::from(count)),
        None => 0.0,
    }
}

/// Success probability as an integer percentage, rounded to nearest.
#[must_use]
pub fn odds_percentage(exposures: Option<u32>) -> u8 {
    let percent = (success_probability(exposures) * 100.0)
        .round()
        .clamp(0.0, 100.0);
    percent as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn known_percentages() {
        assert_eq!(odds_percentage(Some(0)), 100);
        assert_eq!(odds_percentage(Some(1)), 90);
        assert_eq!(odds_percentage(Some(2)), 81);
        assert_eq!(odds_percentage(Some(3)), 73);
        assert_eq!(odds_percentage(None), 0);
    }

    #[test]
    fn probability_follows_the_decay_law() {
        assert!((success_probability(Some(0)) - 1.0).abs() < TOLERANCE);
        assert!((success_probability(Some(1)) - 0.9).abs() < TOLERANCE);
        assert!((success_probability(Some(2)) - 0.81).abs() < TOLERANCE);
        assert!((success_probability(None)).abs() < TOLERANCE);
    }

    #[test]
    fn probability_strictly_decreases_with_exposures() {
        let mut previous = success_probability(Some(0));
        for count in 1..40 {
            let current = success_probability(Some(count));
            assert!(
                current < previous,
                "probability must strictly decrease (k = {count})"
            );
            previous = current;
        }
    }
}
