//! Totals calculation for a logsheet submission.
//!
//! Derives the hour buckets, the HMR/KMR run and the production quantity from
//! what the operator entered in the working and production sections of the
//! form. The calculation never fails: missing or malformed input leaves the
//! affected field as it was.
//!
//! ## Rules
//!
//! ```text
//! elapsed  = completed - commenced            (+24h when completed < commenced)
//! hours    = round_half_up(elapsed, 0.1)
//! bucket   = working | idle | breakdown        (the other two are zeroed)
//! run      = completed_reading - commenced_reading   (only when >= 0)
//!            shown with the decimals of the more precise reading
//! qty      = quantity_produced                 (only when > 0)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use logsheet::libs::totals::{MeterReadingPair, Totals, WorkStatus, WorkingInterval};
//!
//! let interval = WorkingInterval::parse("22:00", "06:00");
//! let readings = MeterReadingPair::parse("100", "145");
//! let totals = Totals::default().recompute(&interval, WorkStatus::Idle, &readings, 0.0);
//!
//! assert_eq!(totals.idle_hours, 8.0);
//! assert_eq!(totals.hmr_or_kmr_run, "45");
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_TENTH_HOUR: i64 = 360;

/// Accepted time-of-day layouts, the second one is what some browsers and
/// spreadsheets emit for `<input type="time">` values.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Classification of a shift interval.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    #[default]
    Working,
    Idle,
    Breakdown,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 3] = [WorkStatus::Working, WorkStatus::Idle, WorkStatus::Breakdown];
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WorkStatus::Working => "working",
            WorkStatus::Idle => "idle",
            WorkStatus::Breakdown => "breakdown",
        };
        write!(f, "{}", text)
    }
}

impl FromStr for WorkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "working" => Ok(WorkStatus::Working),
            "idle" => Ok(WorkStatus::Idle),
            "breakdown" => Ok(WorkStatus::Breakdown),
            other => Err(format!("unknown work status '{}'", other)),
        }
    }
}

/// Parses a wall-clock time of day, `None` for blank or malformed input.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    TIME_FORMATS.iter().find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Parses a meter reading, `None` for blank, non-numeric or non-finite input.
pub fn parse_reading(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|reading| reading.is_finite())
}

/// Digits after the decimal point in the shortest rendering of `value`.
fn decimal_places(value: f64) -> usize {
    value.to_string().split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// Renders a meter delta the way it is stored on the logsheet: `decimals`
/// fraction digits at most, trailing zeros trimmed.
pub fn format_run(run: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, run);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// A single shift segment between two times of day.
///
/// There is no date component. A completed time earlier than the commenced
/// time means the shift ran past midnight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkingInterval {
    pub commenced: Option<NaiveTime>,
    pub completed: Option<NaiveTime>,
}

impl WorkingInterval {
    pub fn new(commenced: Option<NaiveTime>, completed: Option<NaiveTime>) -> Self {
        Self { commenced, completed }
    }

    pub fn parse(commenced: &str, completed: &str) -> Self {
        Self::new(parse_time_of_day(commenced), parse_time_of_day(completed))
    }

    /// Elapsed time in tenths of an hour, rounded half-up.
    ///
    /// Returns `None` when either end is missing. The result is always within
    /// `0..240`: one midnight wraparound at most.
    pub fn elapsed_tenths(&self) -> Option<i64> {
        let (commenced, completed) = (self.commenced?, self.completed?);
        let mut seconds = (completed - commenced).num_seconds();
        if seconds < 0 {
            seconds += SECONDS_PER_DAY;
        }
        Some((seconds + SECONDS_PER_TENTH_HOUR / 2) / SECONDS_PER_TENTH_HOUR)
    }

    /// Elapsed hours rounded to one decimal place.
    pub fn elapsed_hours(&self) -> Option<f64> {
        self.elapsed_tenths().map(|tenths| tenths as f64 / 10.0)
    }
}

/// Hour-meter or kilometer-meter readings at the start and end of the shift.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeterReadingPair {
    pub commenced: Option<f64>,
    pub completed: Option<f64>,
    decimals: usize,
}

impl MeterReadingPair {
    pub fn new(commenced: Option<f64>, completed: Option<f64>) -> Self {
        let decimals = [commenced, completed].into_iter().flatten().map(decimal_places).max().unwrap_or(0);
        Self {
            commenced,
            completed,
            decimals,
        }
    }

    pub fn parse(commenced: &str, completed: &str) -> Self {
        Self::new(parse_reading(commenced), parse_reading(completed))
    }

    /// Meter delta, `None` when a reading is missing or the meter went backwards.
    pub fn run(&self) -> Option<f64> {
        let (commenced, completed) = (self.commenced?, self.completed?);
        (completed >= commenced).then(|| completed - commenced)
    }

    /// Precision of the more precise reading, the precision of the run.
    pub fn decimals(&self) -> usize {
        self.decimals
    }
}

/// Totals section of a logsheet.
///
/// Serialized with the field names the logsheet API expects. `hmr_or_kmr_run`
/// is text on the wire and stays empty until a run has been derived or typed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    #[serde(default)]
    pub working_hours: f64,
    #[serde(default)]
    pub idle_hours: f64,
    #[serde(default)]
    pub breakdown_hours: f64,
    #[serde(default)]
    pub production_qty: f64,
    #[serde(default)]
    pub hmr_or_kmr_run: String,
    #[serde(default)]
    pub fuel_in_liters: f64,
}

impl Totals {
    /// Rebuilds the derived fields from the current form inputs.
    ///
    /// `self` is the previous state: fields whose inputs are missing or
    /// invalid are carried over from it untouched. `fuel_in_liters` is never
    /// derived.
    pub fn recompute(&self, interval: &WorkingInterval, status: WorkStatus, readings: &MeterReadingPair, quantity_produced: f64) -> Totals {
        let mut totals = self.clone();

        if let Some(hours) = interval.elapsed_hours() {
            let (working, idle, breakdown) = match status {
                WorkStatus::Working => (hours, 0.0, 0.0),
                WorkStatus::Idle => (0.0, hours, 0.0),
                WorkStatus::Breakdown => (0.0, 0.0, hours),
            };
            totals.working_hours = working;
            totals.idle_hours = idle;
            totals.breakdown_hours = breakdown;
        }

        if let Some(run) = readings.run() {
            totals.hmr_or_kmr_run = format_run(run, readings.decimals());
        }

        if quantity_produced > 0.0 {
            totals.production_qty = quantity_produced;
        }

        totals
    }

    /// Sum of the three hour buckets.
    pub fn total_hours(&self) -> f64 {
        self.working_hours + self.idle_hours + self.breakdown_hours
    }
}
