//! Priority scheduling (non-preemptive).

use super::processor::{select_min, Processor};
use super::{SchedulingPolicy, Simulation};
use crate::models::Process;
use crate::validation::{merge, validate_priorities, validate_processes, ValidationResult};

/// Non-preemptive priority scheduling.
///
/// Same structure as [`Sjf`](super::Sjf) with the key
/// (priority ascending, arrival ascending). Lower priority values run first.
/// Every process must carry a priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }

    fn validate(&self, processes: &[Process]) -> ValidationResult {
        merge([validate_processes(processes), validate_priorities(processes)])
    }

    fn simulate(&self, processes: Vec<Process>) -> Simulation {
        let mut cpu = Processor::new(processes);
        let mut ready: Vec<usize> = (0..cpu.len()).collect();

        while let Some(pos) = select_min(&ready, |i| {
            let p = cpu.process(i);
            (p.priority, p.arrival_time)
        }) {
            let index = ready.remove(pos);
            cpu.run_to_completion(index);
        }

        cpu.into_simulation()
    }
}
