//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU slices granted during one
//! simulation. Round-robin produces several slices per process; the
//! non-preemptive policies produce exactly one.

use serde::{Deserialize, Serialize};

use super::Time;

/// One contiguous stretch of CPU time granted to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Process that held the CPU.
    pub process_id: String,
    /// Slice start.
    pub start: Time,
    /// Slice end (exclusive).
    pub end: Time,
}

impl Dispatch {
    /// Creates a new dispatch slice.
    pub fn new(process_id: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Dispatch slices in the order they were granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices, ordered by start time.
    pub dispatches: Vec<Dispatch>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn record(&mut self, dispatch: Dispatch) {
        self.dispatches.push(dispatch);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    /// Slices granted to one process, in order.
    pub fn for_process<'a>(&'a self, process_id: &'a str) -> impl Iterator<Item = &'a Dispatch> {
        self.dispatches
            .iter()
            .filter(move |d| d.process_id == process_id)
    }

    /// Total CPU units rendered to one process.
    pub fn service_rendered(&self, process_id: &str) -> Time {
        self.for_process(process_id).map(Dispatch::duration).sum()
    }

    /// End of the last slice, or 0 if nothing ran.
    pub fn makespan(&self) -> Time {
        self.dispatches.iter().map(|d| d.end).max().unwrap_or(0)
    }

    /// Total CPU units spent running processes.
    pub fn busy_time(&self) -> Time {
        self.dispatches.iter().map(Dispatch::duration).sum()
    }

    /// Units between t=0 and the makespan with the CPU idle.
    pub fn idle_time(&self) -> Time {
        self.makespan() - self.busy_time()
    }
}
