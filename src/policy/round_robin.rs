//! Round-Robin with a fixed time quantum.

use std::collections::VecDeque;

use super::processor::Processor;
use super::{SchedulingPolicy, Simulation};
use crate::error::SimulationError;
use crate::models::{Process, Time};
use crate::validation::validate_quantum;

/// Round-Robin.
///
/// Every process is queued up front in input order. The front process is
/// dispatched for at most one quantum; if it still needs service it goes to
/// the back of the queue. A process that has not arrived yet when it reaches
/// the front makes the CPU idle until its arrival; it is never skipped.
///
/// # Example
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::policy::{RoundRobin, SchedulingPolicy};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let out = rr.run(vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)]).unwrap();
/// assert_eq!(out[0].id, "P2");
/// assert_eq!(out[0].completion_time, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates a round-robin policy. The quantum must be positive.
    pub fn new(quantum: Time) -> Result<Self, SimulationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Maximum contiguous units granted per dispatch.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn simulate(&self, processes: Vec<Process>) -> Simulation {
        let mut cpu = Processor::new(processes);
        let mut queue: VecDeque<usize> = (0..cpu.len()).collect();

        while let Some(index) = queue.pop_front() {
            if !cpu.run_for(index, self.quantum) {
                queue.push_back(index);
            }
        }

        cpu.into_simulation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dispatch;
    use crate::policy::Fcfs;

    #[test]
    fn test_rr_textbook() {
        let input = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let sim = RoundRobin::new(2).unwrap().run_traced(input).unwrap();

        assert_eq!(
            sim.timeline.dispatches,
            vec![
                Dispatch::new("P1", 0, 2),
                Dispatch::new("P2", 2, 4),
                Dispatch::new("P1", 4, 6),
                Dispatch::new("P2", 6, 7),
                Dispatch::new("P1", 7, 8),
            ]
        );

        assert_eq!(sim.completion_order(), vec!["P2", "P1"]);
        let p1 = sim.process("P1").unwrap();
        let p2 = sim.process("P2").unwrap();
        assert_eq!(p1.start_time, Some(0));
        assert_eq!(p2.start_time, Some(2));
        assert_eq!(p2.completion_time, Some(7));
        assert_eq!(p1.completion_time, Some(8));
    }

    #[test]
    fn test_rr_slices_sum_to_burst() {
        let input = vec![
            Process::new("A", 0, 7),
            Process::new("B", 0, 3),
            Process::new("C", 2, 9),
            Process::new("D", 30, 4),
        ];
        let q = 3;
        let sim = RoundRobin::new(q).unwrap().run_traced(input.clone()).unwrap();

        for p in &input {
            let slices: Vec<_> = sim.timeline.for_process(&p.id).collect();
            assert_eq!(sim.timeline.service_rendered(&p.id), p.burst_time);

            let (last, rest) = slices.split_last().unwrap();
            assert!(rest.iter().all(|d| d.duration() == q), "{}", p.id);
            assert!(last.duration() <= q && last.duration() > 0);
        }
    }

    #[test]
    fn test_rr_quantum_larger_than_bursts_is_fcfs() {
        let input = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let rr = RoundRobin::new(100).unwrap().run(input.clone()).unwrap();
        let fcfs = Fcfs.run(input).unwrap();
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_unarrived_front_idles() {
        let input = vec![Process::new("late", 10, 2), Process::new("now", 0, 2)];
        let out = RoundRobin::new(1).unwrap().run(input).unwrap();

        // "late" is at the front, so the CPU waits for it
        assert_eq!(out[0].id, "late");
        assert_eq!(out[0].start_time, Some(10));
        assert_eq!(out[1].start_time, Some(11));
        assert_eq!(out[1].completion_time, Some(14));
    }

    #[test]
    fn test_rr_invalid_quantum() {
        assert!(matches!(
            RoundRobin::new(0),
            Err(SimulationError::InvalidInput(_))
        ));
        assert_eq!(RoundRobin::new(4).unwrap().quantum(), 4);
    }
}
