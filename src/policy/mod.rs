//! CPU scheduling policies.
//!
//! Five interchangeable single-processor disciplines share one contract,
//! [`SchedulingPolicy`]: take ownership of a process set, simulate it, and
//! return the processes in completion order.
//!
//! | Policy | Preemptive | Selection key |
//! |--------|------------|---------------|
//! | [`Fcfs`] | no | input order |
//! | [`Sjf`] | no | (burst, arrival) |
//! | [`Priority`] | no | (priority, arrival) |
//! | [`RoundRobin`] | yes | FIFO, fixed quantum |
//! | [`Srtf`] | yes | (remaining, arrival) |
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::policy::{Fcfs, SchedulingPolicy};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let completed = Fcfs.run(processes).unwrap();
//! assert_eq!(completed[1].start_time, Some(5));
//! ```
//!
//! # Simplifications
//!
//! SJF, Priority, and SRTF choose among *all* unfinished processes, including
//! ones that have not yet arrived relative to the clock. Round-robin queues
//! every process up front in input order. Both match the classic textbook
//! simplification and change timings relative to an online scheduler.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod fcfs;
mod priority;
mod processor;
mod round_robin;
mod sjf;
mod srtf;

pub use algorithm::{Algorithm, ParseAlgorithmError, DEFAULT_QUANTUM};
pub use fcfs::Fcfs;
pub use priority::Priority;
pub use processor::Simulation;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use log::debug;
use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::Process;
use crate::validation::{validate_processes, ValidationResult};

/// A single-processor scheduling discipline.
///
/// Implementors provide [`simulate`](Self::simulate); callers should use
/// [`run`](Self::run) or [`run_traced`](Self::run_traced), which validate
/// first and reset any fields left over from a previous run.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether a dispatched process may be interrupted before it completes.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Checks that the process set is acceptable to this policy.
    fn validate(&self, processes: &[Process]) -> ValidationResult {
        validate_processes(processes)
    }

    /// Simulates validated, freshly reset processes.
    fn simulate(&self, processes: Vec<Process>) -> Simulation;

    /// Validates, simulates, and returns the full simulation record.
    fn run_traced(&self, mut processes: Vec<Process>) -> Result<Simulation, SimulationError> {
        self.validate(&processes)?;
        processes.iter_mut().for_each(Process::reset);

        let count = processes.len();
        let simulation = self.simulate(processes);
        debug!(
            "{}: {} processes, makespan {}",
            self.name(),
            count,
            simulation.timeline.makespan()
        );
        Ok(simulation)
    }

    /// Validates, simulates, and returns the processes in completion order.
    fn run(&self, processes: Vec<Process>) -> Result<Vec<Process>, SimulationError> {
        self.run_traced(processes).map(Simulation::into_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use std::collections::BTreeSet;

    fn mixed_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 7).with_priority(3),
            Process::new("P2", 2, 4).with_priority(1),
            Process::new("P3", 4, 1).with_priority(4),
            Process::new("P4", 5, 4).with_priority(2),
            Process::new("P5", 15, 2).with_priority(1),
        ]
    }

    fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(Priority),
            Box::new(RoundRobin::new(2).unwrap()),
            Box::new(Srtf),
        ]
    }

    #[test]
    fn test_output_is_permutation() {
        let input = mixed_processes();
        let ids: BTreeSet<_> = input.iter().map(|p| p.id.clone()).collect();

        for policy in all_policies() {
            let out = policy.run(input.clone()).unwrap();
            assert_eq!(out.len(), input.len(), "{}", policy.name());
            let out_ids: BTreeSet<_> = out.iter().map(|p| p.id.clone()).collect();
            assert_eq!(out_ids, ids, "{}", policy.name());
        }
    }

    #[test]
    fn test_time_ordering_invariants() {
        for policy in all_policies() {
            for p in policy.run(mixed_processes()).unwrap() {
                let start = p.start_time.unwrap();
                let completion = p.completion_time.unwrap();
                assert!(start >= p.arrival_time, "{} {}", policy.name(), p.id);
                assert!(completion >= start, "{} {}", policy.name(), p.id);
                assert_eq!(p.remaining_time, 0);
            }
        }
    }

    #[test]
    fn test_non_preemptive_runs_whole_burst() {
        for policy in all_policies().into_iter().filter(|p| !p.is_preemptive()) {
            for p in policy.run(mixed_processes()).unwrap() {
                assert_eq!(
                    p.completion_time.unwrap(),
                    p.start_time.unwrap() + p.burst_time,
                    "{} {}",
                    policy.name(),
                    p.id
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for policy in all_policies() {
            let a = policy.run_traced(mixed_processes()).unwrap();
            let b = policy.run_traced(mixed_processes()).unwrap();
            assert_eq!(a, b, "{}", policy.name());
        }
    }

    #[test]
    fn test_rerun_resets_previous_results() {
        for policy in all_policies() {
            let first = policy.run(mixed_processes()).unwrap();
            let mut cleared = first.clone();
            cleared.iter_mut().for_each(Process::reset);

            let rerun = policy.run(first).unwrap();
            let fresh = policy.run(cleared).unwrap();
            assert_eq!(rerun, fresh, "{}", policy.name());
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        let input = vec![Process::new("P1", -1, 3).with_priority(1)];
        for policy in all_policies() {
            match policy.run(input.clone()) {
                Err(SimulationError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival)
                }
                other => panic!("{}: expected rejection, got {other:?}", policy.name()),
            }
        }
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let huge = i64::MAX / 2 + 1;
        let input = vec![
            Process::new("A", 0, huge).with_priority(1),
            Process::new("B", 0, huge).with_priority(1),
        ];
        for policy in all_policies() {
            match policy.run(input.clone()) {
                Err(SimulationError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::Overflow)
                }
                other => panic!("{}: expected rejection, got {other:?}", policy.name()),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for policy in all_policies() {
            let sim = policy.run_traced(Vec::new()).unwrap();
            assert!(sim.completed.is_empty());
            assert!(sim.timeline.is_empty());
        }
    }
}
