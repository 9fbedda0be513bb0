//! Scheduling performance metrics.
//!
//! Computes waiting and turnaround statistics from a completed process
//! sequence, plus whole-run indicators from a [`Simulation`](crate::policy::Simulation).
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | start - arrival |
//! | Turnaround time | completion - arrival |
//! | Makespan | End of the last CPU slice |
//! | CPU utilization | busy / makespan |
//! | Throughput | processes / makespan |
//!
//! Every metric is undefined on zero processes and reports
//! [`SimulationError::EmptyInput`] instead of dividing by zero.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

mod kpi;

pub use kpi::{ProcessStats, SimulationKpi};

use crate::error::SimulationError;
use crate::models::{Process, Time};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Mean of (start - arrival) over completed processes.
///
/// # Example
/// ```
/// use u_cpu_schedule::metrics::average_waiting_time;
/// use u_cpu_schedule::policy::{Fcfs, SchedulingPolicy};
/// use u_cpu_schedule::models::Process;
///
/// let done = Fcfs.run(vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)]).unwrap();
/// assert_eq!(average_waiting_time(&done).unwrap(), 2.0);
/// ```
pub fn average_waiting_time(processes: &[Process]) -> Result<f64, SimulationError> {
    mean_of(processes, Process::waiting_time)
}

/// Mean of (completion - arrival) over completed processes.
pub fn average_turnaround_time(processes: &[Process]) -> Result<f64, SimulationError> {
    mean_of(processes, Process::turnaround_time)
}

fn mean_of<F>(processes: &[Process], metric: F) -> Result<f64, SimulationError>
where
    F: Fn(&Process) -> Option<Time>,
{
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    let mut total: i128 = 0;
    for p in processes {
        total += i128::from(metric(p).ok_or_else(|| incomplete(p))?);
    }
    Ok(total as f64 / processes.len() as f64)
}

pub(crate) fn incomplete(p: &Process) -> SimulationError {
    SimulationError::InvalidInput(vec![ValidationError::new(
        ValidationErrorKind::Incomplete,
        format!("Process '{}' has not been simulated", p.id),
    )])
}
