//! Random process-set generation.
//!
//! Draws arrival, burst, and (optionally) priority values uniformly from
//! inclusive ranges. Pass a seeded RNG for reproducible sets.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpu_schedule::generator::ProcessGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = ProcessGenerator::default()
//!     .with_count(6)
//!     .with_priority_range(1, 5)
//!     .generate(&mut rng)
//!     .unwrap();
//! assert_eq!(processes.len(), 6);
//! assert_eq!(processes[0].id, "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, Time};
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Configuration for random process sets.
///
/// Ranges are inclusive `(low, high)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrival time range.
    pub arrival_range: (Time, Time),
    /// Burst time range.
    pub burst_range: (Time, Time),
    /// Priority range. `None` = processes carry no priority.
    pub priority_range: Option<(i64, i64)>,
    /// Whether to return processes sorted by arrival time.
    pub sort_by_arrival: bool,
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self {
            count: 4,
            arrival_range: (0, 10),
            burst_range: (1, 10),
            priority_range: None,
            sort_by_arrival: false,
        }
    }
}

impl ProcessGenerator {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, low: Time, high: Time) -> Self {
        self.arrival_range = (low, high);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, low: Time, high: Time) -> Self {
        self.burst_range = (low, high);
        self
    }

    /// Enables priorities drawn from the given range.
    pub fn with_priority_range(mut self, low: i64, high: i64) -> Self {
        self.priority_range = Some((low, high));
        self
    }

    /// Sorts generated processes by arrival time (stable).
    pub fn sorted_by_arrival(mut self) -> Self {
        self.sort_by_arrival = true;
        self
    }

    /// Checks that every range is non-empty and produces valid processes.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let (lo, hi) = self.arrival_range;
        if lo < 0 || lo > hi {
            errors.push(range_error("arrival", lo, hi));
        }
        let (lo, hi) = self.burst_range;
        if lo <= 0 || lo > hi {
            errors.push(range_error("burst", lo, hi));
        }
        if let Some((lo, hi)) = self.priority_range {
            if lo > hi {
                errors.push(range_error("priority", lo, hi));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Generates processes `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>, SimulationError> {
        self.validate()?;

        let mut processes: Vec<Process> = (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(self.arrival_range.0..=self.arrival_range.1);
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let process = Process::new(format!("P{i}"), arrival, burst);
                match self.priority_range {
                    Some((lo, hi)) => process.with_priority(rng.random_range(lo..=hi)),
                    None => process,
                }
            })
            .collect();

        if self.sort_by_arrival {
            processes.sort_by_key(|p| p.arrival_time);
        }
        Ok(processes)
    }
}

fn range_error(what: &str, lo: i64, hi: i64) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::InvalidRange,
        format!("Invalid {what} range: {lo}..={hi}"),
    )
}
