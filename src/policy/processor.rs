//! Single-processor simulation state shared by every policy.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::models::{Dispatch, Process, Time, Timeline};

/// Output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    /// Processes in the order they completed.
    pub completed: Vec<Process>,
    /// CPU slices in the order they were granted.
    pub timeline: Timeline,
    /// IDs of processes completed by remaining-time bookkeeping rather than
    /// a dispatch of their own (SRTF only).
    pub absorbed: Vec<String>,
}

impl Simulation {
    /// Consumes the simulation, keeping only the completed processes.
    pub fn into_completed(self) -> Vec<Process> {
        self.completed
    }

    /// Completed process with the given ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.completed.iter().find(|p| p.id == id)
    }

    /// IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|p| p.id.as_str()).collect()
    }
}

/// The simulated CPU: a clock plus the process arena it serves.
///
/// Processes are addressed by their index in the input. The clock only
/// moves forward.
#[derive(Debug)]
pub(crate) struct Processor {
    clock: Time,
    processes: Vec<Process>,
    finish_order: Vec<usize>,
    timeline: Timeline,
    absorbed: Vec<String>,
}

impl Processor {
    pub(crate) fn new(processes: Vec<Process>) -> Self {
        Self {
            clock: 0,
            finish_order: Vec::with_capacity(processes.len()),
            processes,
            timeline: Timeline::new(),
            absorbed: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn now(&self) -> Time {
        self.clock
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub(crate) fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    /// Runs process `index` for up to `units`, idling until its arrival first.
    ///
    /// Returns `true` if the process completed.
    pub(crate) fn run_for(&mut self, index: usize, units: Time) -> bool {
        let process = &mut self.processes[index];
        self.clock = self.clock.max(process.arrival_time);
        process.dispatch_at(self.clock);

        let units = units.min(process.remaining_time);
        let start = self.clock;
        self.clock += units;
        process.render(units);
        trace!("{} runs {}..{}", process.id, start, self.clock);
        self.timeline
            .record(Dispatch::new(process.id.clone(), start, self.clock));

        if process.is_completed() {
            process.complete_at(self.clock);
            self.finish_order.push(index);
            true
        } else {
            false
        }
    }

    /// Runs process `index` until it has no remaining service.
    pub(crate) fn run_to_completion(&mut self, index: usize) {
        let units = self.processes[index].remaining_time;
        self.run_for(index, units);
    }

    /// Takes `units` of remaining time away from process `index` without
    /// dispatching it. A process driven to zero completes at the current clock.
    ///
    /// Returns `true` if the process completed.
    pub(crate) fn discount(&mut self, index: usize, units: Time) -> bool {
        let now = self.clock;
        let process = &mut self.processes[index];
        process.render(units);
        if !process.is_completed() {
            return false;
        }

        process.dispatch_at(now);
        process.complete_at(now);
        trace!("{} absorbed at {}", process.id, now);
        self.absorbed.push(process.id.clone());
        self.finish_order.push(index);
        true
    }

    /// Finishes the run, moving processes out in completion order.
    pub(crate) fn into_simulation(self) -> Simulation {
        let mut slots: Vec<Option<Process>> = self.processes.into_iter().map(Some).collect();
        let completed = self
            .finish_order
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();

        Simulation {
            completed,
            timeline: self.timeline,
            absorbed: self.absorbed,
        }
    }
}

/// Position in `ready` of the entry with the smallest key.
///
/// Ties on `key` go to the lowest input index, so the first-listed process
/// wins among exact ties.
pub(crate) fn select_min<K, F>(ready: &[usize], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(usize) -> K,
{
    ready
        .iter()
        .enumerate()
        .min_by_key(|&(_, &index)| (key(index), index))
        .map(|(pos, _)| pos)
}
