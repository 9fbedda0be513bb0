//! Shortest-Job-First (non-preemptive).

use super::processor::{select_min, Processor};
use super::{SchedulingPolicy, Simulation};
use crate::models::Process;

/// Shortest-Job-First.
///
/// Repeatedly picks the unfinished process with the smallest burst time,
/// breaking ties by earlier arrival, and runs it to completion. Selection
/// looks at every unfinished process, arrived or not: a short job arriving
/// late can be chosen over a longer one already waiting, and the CPU idles
/// until it arrives.
///
/// # Complexity
/// O(n²)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First"
    }

    fn simulate(&self, processes: Vec<Process>) -> Simulation {
        let mut cpu = Processor::new(processes);
        let mut ready: Vec<usize> = (0..cpu.len()).collect();

        while let Some(pos) = select_min(&ready, |i| {
            let p = cpu.process(i);
            (p.burst_time, p.arrival_time)
        }) {
            let index = ready.remove(pos);
            cpu.run_to_completion(index);
        }

        cpu.into_simulation()
    }
}
