use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use falcon_engine::{EmpireIntel, FalconConfig, MissionOutcome, MissionPlan, MissionRunner, SqliteRoutes};

#[derive(Debug, Parser)]
#[command(name = "give-me-the-odds", version)]
#[command(
    about = "Compute the odds that the Millennium Falcon reaches its destination before the countdown expires"
)]
struct Args {
    /// Millennium Falcon configuration JSON (routes db, departure, arrival, autonomy)
    falcon: PathBuf,

    /// Intercepted Empire data JSON (countdown, bounty hunter sightings)
    empire: PathBuf,

    /// Log at debug level and print a mission summary to stderr;
    /// the odds on stdout stay machine readable
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose && std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let falcon_json = fs::read_to_string(&args.falcon)
        .with_context(|| format!("reading {}", args.falcon.display()))?;
    let config = FalconConfig::from_json(&falcon_json)
        .with_context(|| format!("parsing {}", args.falcon.display()))?;
    let plan = config.plan()?;

    let empire_json = fs::read_to_string(&args.empire)
        .with_context(|| format!("reading {}", args.empire.display()))?;
    let intel = EmpireIntel::from_json(&empire_json)
        .with_context(|| format!("parsing {}", args.empire.display()))?;

    let routes_db = resolve_routes_db(&args.falcon, &config.routes_db);
    debug!("route database resolved to {}", routes_db.display());

    let runner = MissionRunner::new(SqliteRoutes::new(routes_db));
    let outcome = runner.run(&plan, &intel)?;

    if args.verbose {
        print_summary(&plan, &intel, &outcome);
    }
    println!("{}", outcome.odds);
    Ok(())
}

/// A relative routes db path is taken relative to the falcon configuration
/// file, so the pair can be shipped together as a bundle.
fn resolve_routes_db(config_path: &Path, routes_db: &str) -> PathBuf {
    let raw = Path::new(routes_db);
    if raw.is_absolute() {
        return raw.to_path_buf();
    }
    config_path
        .parent()
        .map_or_else(|| raw.to_path_buf(), |dir| dir.join(raw))
}

fn print_summary(plan: &MissionPlan, intel: &EmpireIntel, outcome: &MissionOutcome) {
    eprintln!(
        "{} {} -> {} (autonomy {}, countdown {})",
        "mission".bold(),
        plan.departure,
        plan.arrival,
        plan.autonomy,
        intel.countdown
    );
    match outcome.search.exposures {
        Some(exposures) => eprintln!(
            "{} {exposures} bounty hunter exposure(s) on the best route",
            "route ".bold()
        ),
        None => eprintln!("{} no route reaches the arrival in time", "route ".bold()),
    }
    let odds_line = format!("{}%", outcome.odds);
    let colored_odds = if outcome.odds == 0 {
        odds_line.red()
    } else if outcome.odds == 100 {
        odds_line.green()
    } else {
        odds_line.yellow()
    };
    eprintln!("{} {colored_odds}", "odds   ".bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_routes_db_resolves_next_to_the_config() {
        let resolved = resolve_routes_db(Path::new("/data/mission/falcon.json"), "universe.db");
        assert_eq!(resolved, PathBuf::from("/data/mission/universe.db"));
    }

    #[test]
    fn absolute_routes_db_is_kept_as_is() {
        let resolved = resolve_routes_db(Path::new("falcon.json"), "/var/db/universe.db");
        assert_eq!(resolved, PathBuf::from("/var/db/universe.db"));
    }
}
