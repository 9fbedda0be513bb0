//! First-Come-First-Served.

use super::processor::Processor;
use super::{SchedulingPolicy, Simulation};
use crate::models::Process;

/// First-Come-First-Served.
///
/// Runs processes to completion strictly in the order given. The caller is
/// responsible for presenting them in arrival order; no re-sorting happens.
///
/// # Complexity
/// O(n)
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn simulate(&self, processes: Vec<Process>) -> Simulation {
        let mut cpu = Processor::new(processes);
        for index in 0..cpu.len() {
            cpu.run_to_completion(index);
        }
        cpu.into_simulation()
    }
}
