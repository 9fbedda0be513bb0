//! Side-by-side comparison of algorithms on one process set.
//!
//! Each algorithm gets its own clone of the input, so runs share no
//! mutable state and execute on scoped threads.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::compare::compare;
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::policy::Algorithm;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let result = compare(&processes, &[Algorithm::Fcfs, Algorithm::Sjf]);
//! assert_eq!(result.entries.len(), 2);
//! assert_eq!(result.best_by_waiting().unwrap().algorithm, Algorithm::Fcfs);
//! ```

use std::thread;

use log::debug;

use crate::error::SimulationError;
use crate::metrics::SimulationKpi;
use crate::models::Process;
use crate::policy::{Algorithm, Simulation};

/// One algorithm's simulation and its KPIs.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Full simulation record.
    pub simulation: Simulation,
    /// Derived indicators.
    pub kpi: SimulationKpi,
}

impl Report {
    /// Runs `algorithm` on `processes` and computes its KPIs.
    pub fn generate(
        algorithm: Algorithm,
        processes: Vec<Process>,
    ) -> Result<Self, SimulationError> {
        let simulation = algorithm.run_traced(processes)?;
        let kpi = SimulationKpi::calculate(&simulation)?;
        Ok(Self {
            algorithm,
            simulation,
            kpi,
        })
    }
}

/// Outcome of one algorithm in a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// Algorithm that was run.
    pub algorithm: Algorithm,
    /// Its report, or why it was refused.
    pub outcome: Result<Report, SimulationError>,
}

/// Results of [`compare`], in the order the algorithms were given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    /// One entry per requested algorithm.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Successful reports, in request order.
    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().ok())
    }

    /// Report with the lowest average waiting time. First wins on ties.
    pub fn best_by_waiting(&self) -> Option<&Report> {
        self.best_by(|r| r.kpi.avg_waiting_time)
    }

    /// Report with the lowest average turnaround time. First wins on ties.
    pub fn best_by_turnaround(&self) -> Option<&Report> {
        self.best_by(|r| r.kpi.avg_turnaround_time)
    }

    fn best_by<F: Fn(&Report) -> f64>(&self, score: F) -> Option<&Report> {
        self.reports().fold(None, |best, r| match best {
            Some(b) if score(b) <= score(r) => Some(b),
            _ => Some(r),
        })
    }
}

/// Runs every algorithm on an independent copy of `processes`.
pub fn compare(processes: &[Process], algorithms: &[Algorithm]) -> Comparison {
    let entries: Vec<ComparisonEntry> = thread::scope(|scope| {
        let handles: Vec<_> = algorithms
            .iter()
            .map(|&algorithm| {
                let input = processes.to_vec();
                let handle = scope.spawn(move || Report::generate(algorithm, input));
                (algorithm, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(algorithm, handle)| {
                let outcome = match handle.join() {
                    Ok(outcome) => outcome,
                    Err(panic) => std::panic::resume_unwind(panic),
                };
                ComparisonEntry { algorithm, outcome }
            })
            .collect()
    });

    debug!(
        "compared {} algorithms on {} processes",
        algorithms.len(),
        processes.len()
    );
    Comparison { entries }
}
