//! Process (job) model.
//!
//! A process is a unit of CPU work with an arrival time and a burst
//! (service) time. Policies fill in the start and completion times as
//! simulated time advances.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::Time;

/// A process to be scheduled on the single simulated CPU.
///
/// The static attributes (`id`, `arrival_time`, `burst_time`, `priority`)
/// are supplied by the caller. The remaining fields are written by the
/// policy that runs the process.
///
/// # Time Representation
/// All times are abstract integer units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within one simulation.
    pub id: String,
    /// Earliest instant the process may begin.
    pub arrival_time: Time,
    /// Total CPU units required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more urgent). Required by priority scheduling.
    pub priority: Option<i64>,
    /// Instant of the first dispatch. `None` until dispatched.
    pub start_time: Option<Time>,
    /// Instant all service was rendered. `None` until completed.
    pub completion_time: Option<Time>,
    /// CPU units still owed to the process.
    pub remaining_time: Time,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
            start_time: None,
            completion_time: None,
            remaining_time: burst_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether all required service has been rendered.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    /// Waiting time: start - arrival.
    pub fn waiting_time(&self) -> Option<Time> {
        self.start_time.map(|s| s - self.arrival_time)
    }

    /// Turnaround time: completion - arrival.
    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Clears everything a previous simulation wrote.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.completion_time = None;
        self.remaining_time = self.burst_time;
    }

    /// Records a dispatch at `now`. Only the first dispatch sets the start time.
    pub(crate) fn dispatch_at(&mut self, now: Time) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Renders `units` of service. Saturates at zero.
    pub(crate) fn render(&mut self, units: Time) {
        self.remaining_time = (self.remaining_time - units).max(0);
    }

    /// Marks the process complete at `now`.
    pub(crate) fn complete_at(&mut self, now: Time) {
        self.remaining_time = 0;
        self.completion_time = Some(now);
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Process {}", self.id)
    }
}
