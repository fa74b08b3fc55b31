//! Per-month training aggregates for chart views.
//!
//! These are pure derivations over a user's records: grouping by calendar
//! month, distance totals and averages, and mean pace. Pace strings are
//! "minutes:seconds" per kilometer; records with unparseable paces still
//! count toward distance but are left out of the pace average.

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Training;

/// Aggregates for one calendar month of training.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Month key in "YYYY-MM" format
    pub month: String,
    /// Number of runs in the month
    pub runs: u32,
    /// Total distance in kilometers
    pub total_kilometers: f64,
    /// Mean distance per run in kilometers
    pub average_kilometers: f64,
    /// Mean pace as "minutes:seconds" per kilometer, if any pace parsed
    pub average_pace: Option<String>,
}

/// Group a user's trainings by calendar month, oldest month first.
pub fn monthly_summaries(trainings: &[Training]) -> Vec<MonthlySummary> {
    #[derive(Default)]
    struct Acc {
        runs: u32,
        kilometers: f64,
        pace_minutes: f64,
        paced_runs: u32,
    }

    let mut months: BTreeMap<String, Acc> = BTreeMap::new();

    for t in trainings {
        let key = format!("{:04}-{:02}", t.date.year(), t.date.month());
        let acc = months.entry(key).or_default();
        acc.runs += 1;
        acc.kilometers += t.kilometers;
        if let Some(pace) = parse_pace_minutes(&t.pace) {
            acc.pace_minutes += pace;
            acc.paced_runs += 1;
        }
    }

    months
        .into_iter()
        .map(|(month, acc)| MonthlySummary {
            month,
            runs: acc.runs,
            total_kilometers: acc.kilometers,
            average_kilometers: acc.kilometers / acc.runs as f64,
            average_pace: (acc.paced_runs > 0)
                .then(|| format_pace_minutes(acc.pace_minutes / acc.paced_runs as f64)),
        })
        .collect()
}

/// Parse a "minutes:seconds" pace string into decimal minutes.
pub fn parse_pace_minutes(pace: &str) -> Option<f64> {
    let (minutes, seconds) = pace.split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes as f64 + seconds as f64 / 60.0)
}

/// Format decimal minutes back into a "minutes:seconds" string.
pub fn format_pace_minutes(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
