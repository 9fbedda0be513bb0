//! Shortest-Remaining-Time-First.

use super::processor::{select_min, Processor};
use super::{SchedulingPolicy, Simulation};
use crate::models::Process;

/// Shortest-Remaining-Time-First.
///
/// Picks the unfinished process with the least *remaining* time (ties by
/// earlier arrival) and runs it to completion. Preemption is approximated
/// after the fact: once the chosen process finishes, the units it consumed
/// are subtracted from the remaining time of every other unfinished process
/// that has arrived by the new clock value. Processes not yet arrived are
/// left alone.
///
/// A process whose remaining time reaches zero through that subtraction is
/// completed at the current clock without a dispatch of its own. It is still
/// returned, and its ID is listed in [`Simulation::absorbed`].
///
/// # Complexity
/// O(n²)
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn simulate(&self, processes: Vec<Process>) -> Simulation {
        let mut cpu = Processor::new(processes);
        let mut ready: Vec<usize> = (0..cpu.len()).collect();

        while let Some(pos) = select_min(&ready, |i| {
            let p = cpu.process(i);
            (p.remaining_time, p.arrival_time)
        }) {
            let index = ready.remove(pos);
            let rendered = cpu.process(index).remaining_time;
            cpu.run_to_completion(index);

            let now = cpu.now();
            ready.retain(|&other| {
                cpu.process(other).arrival_time > now || !cpu.discount(other, rendered)
            });
        }

        cpu.into_simulation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(out: &[Process]) -> Vec<(&str, i64, i64)> {
        out.iter()
            .map(|p| (p.id.as_str(), p.start_time.unwrap(), p.completion_time.unwrap()))
            .collect()
    }

    #[test]
    fn test_srtf_textbook() {
        let input = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
        ];
        let out = Srtf.run(input).unwrap();

        // P2 (3) runs 1→4; P1 5-3=2, P3 8-3=5
        // P1 (2) runs 4→6; P3 5-2=3
        // P3 (3) runs 6→9
        assert_eq!(spans(&out), vec![("P2", 1, 4), ("P1", 4, 6), ("P3", 6, 9)]);
    }

    #[test]
    fn test_srtf_unarrived_not_discounted() {
        let input = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 3)];
        let sim = Srtf.run_traced(input).unwrap();

        assert_eq!(spans(&sim.completed), vec![("P1", 0, 2), ("P2", 5, 8)]);
        assert!(sim.absorbed.is_empty());
        assert_eq!(sim.timeline.service_rendered("P2"), 3);
    }

    #[test]
    fn test_srtf_absorbed_process_reported() {
        let input = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 0, 4),
            Process::new("P3", 0, 9),
        ];
        let sim = Srtf.run_traced(input).unwrap();

        // P1 runs 0→4 and its 4 units drive P2 to zero
        assert_eq!(sim.absorbed, vec!["P2".to_string()]);
        assert_eq!(sim.completion_order(), vec!["P1", "P2", "P3"]);

        let p2 = sim.process("P2").unwrap();
        assert_eq!(p2.start_time, Some(4));
        assert_eq!(p2.completion_time, Some(4));
        assert_eq!(p2.remaining_time, 0);
        assert_eq!(sim.timeline.for_process("P2").count(), 0);

        // P3: 9-4=5 remaining, runs 4→9
        let p3 = sim.process("P3").unwrap();
        assert_eq!(p3.start_time, Some(4));
        assert_eq!(p3.completion_time, Some(9));
    }

    #[test]
    fn test_srtf_discount_shortens_remaining() {
        let input = vec![Process::new("big", 0, 6), Process::new("small", 0, 2)];
        let sim = Srtf.run_traced(input).unwrap();

        // "small" runs 0→2, "big" keeps 4 and runs 2→6
        assert_eq!(spans(&sim.completed), vec![("small", 0, 2), ("big", 2, 6)]);
        assert!(sim.completed.iter().all(|p| p.remaining_time == 0));
    }

    #[test]
    fn test_srtf_selects_unarrived_short_job() {
        let input = vec![Process::new("long", 0, 10), Process::new("short", 20, 1)];
        let out = Srtf.run(input).unwrap();

        // "short" first at t=20; then "long" (arrived) loses 1 unit
        assert_eq!(spans(&out), vec![("short", 20, 21), ("long", 21, 30)]);
    }
}
