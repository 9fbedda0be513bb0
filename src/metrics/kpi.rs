//! Whole-run performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of start - arrival |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Makespan | End of the last CPU slice |
//! | Busy / Idle | CPU units running / idle before the makespan |
//! | CPU Utilization | busy / makespan (0.0..1.0) |
//! | Throughput | processes per time unit |

use serde::{Deserialize, Serialize};

use super::{average_turnaround_time, average_waiting_time, incomplete};
use crate::error::SimulationError;
use crate::models::Time;
use crate::policy::Simulation;

/// Per-process timing, in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: String,
    /// First dispatch.
    pub start_time: Time,
    /// Completion instant.
    pub completion_time: Time,
    /// start - arrival.
    pub waiting_time: Time,
    /// completion - arrival.
    pub turnaround_time: Time,
}

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// One row per process, in completion order.
    pub processes: Vec<ProcessStats>,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// End of the last CPU slice.
    pub makespan: Time,
    /// Units the CPU spent running processes.
    pub busy_time: Time,
    /// Units the CPU sat idle before the makespan.
    pub idle_time: Time,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    ///
    /// Fails with [`SimulationError::EmptyInput`] if no process was simulated.
    pub fn calculate(simulation: &Simulation) -> Result<Self, SimulationError> {
        let completed = &simulation.completed;
        let avg_waiting_time = average_waiting_time(completed)?;
        let avg_turnaround_time = average_turnaround_time(completed)?;

        let processes = completed
            .iter()
            .map(|p| -> Result<ProcessStats, SimulationError> {
                let (start, completion) = p
                    .start_time
                    .zip(p.completion_time)
                    .ok_or_else(|| incomplete(p))?;
                Ok(ProcessStats {
                    id: p.id.clone(),
                    start_time: start,
                    completion_time: completion,
                    waiting_time: start - p.arrival_time,
                    turnaround_time: completion - p.arrival_time,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let timeline = &simulation.timeline;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                completed.len() as f64 / makespan as f64,
            )
        };

        Ok(Self {
            processes,
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
        })
    }
}
