//! Algorithm selection by value.
//!
//! [`Algorithm`] names one of the built-in policies together with its
//! parameters, so drivers can pick a policy from configuration or a
//! command-line string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Fcfs, Priority, RoundRobin, SchedulingPolicy, Simulation, Sjf, Srtf};
use crate::error::SimulationError;
use crate::models::{Process, Time};

/// Quantum used when a round-robin name is given without one.
pub const DEFAULT_QUANTUM: Time = 2;

/// A built-in scheduling policy and its parameters.
///
/// # Example
/// ```
/// use u_cpu_schedule::policy::Algorithm;
///
/// let rr: Algorithm = "rr:4".parse().unwrap();
/// assert_eq!(rr, Algorithm::RoundRobin { quantum: 4 });
/// assert_eq!(rr.to_string(), "rr:4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Non-preemptive priority.
    Priority,
    /// Round-Robin with the given quantum.
    RoundRobin {
        /// Time quantum (> 0).
        quantum: Time,
    },
    /// Shortest-Remaining-Time-First.
    Srtf,
}

impl Algorithm {
    /// All five algorithms, round-robin using `quantum`.
    pub fn all(quantum: Time) -> Vec<Self> {
        vec![
            Self::Fcfs,
            Self::Sjf,
            Self::Priority,
            Self::RoundRobin { quantum },
            Self::Srtf,
        ]
    }

    /// Builds the policy. Fails if the round-robin quantum is not positive.
    pub fn policy(&self) -> Result<Box<dyn SchedulingPolicy>, SimulationError> {
        let policy: Box<dyn SchedulingPolicy> = match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Priority => Box::new(Priority),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
            Self::Srtf => Box::new(Srtf),
        };
        Ok(policy)
    }

    /// Whether the algorithm needs every process to carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority)
    }

    /// Runs the algorithm, returning processes in completion order.
    pub fn run(&self, processes: Vec<Process>) -> Result<Vec<Process>, SimulationError> {
        self.policy()?.run(processes)
    }

    /// Runs the algorithm, returning the full simulation record.
    pub fn run_traced(&self, processes: Vec<Process>) -> Result<Simulation, SimulationError> {
        self.policy()?.run_traced(processes)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fcfs => write!(f, "fcfs"),
            Self::Sjf => write!(f, "sjf"),
            Self::Priority => write!(f, "priority"),
            Self::RoundRobin { quantum } => write!(f, "rr:{quantum}"),
            Self::Srtf => write!(f, "srtf"),
        }
    }
}

/// Error returned when an algorithm name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl std::fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown scheduling algorithm: '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `fcfs`, `sjf`, `priority`, `srtf`, and `rr` / `round-robin`
    /// with an optional `:<quantum>` suffix. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, param) = match lower.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (lower.as_str(), None),
        };
        let err = || ParseAlgorithmError(s.to_string());

        match (name, param) {
            ("fcfs", None) => Ok(Self::Fcfs),
            ("sjf", None) => Ok(Self::Sjf),
            ("priority", None) => Ok(Self::Priority),
            ("srtf", None) => Ok(Self::Srtf),
            ("rr" | "round-robin", None) => Ok(Self::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            ("rr" | "round-robin", Some(q)) => q
                .parse()
                .map(|quantum| Self::RoundRobin { quantum })
                .map_err(|_| err()),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!(" priority ".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!("srtf".parse::<Algorithm>(), Ok(Algorithm::Srtf));
        assert_eq!(
            "rr".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin {
                quantum: DEFAULT_QUANTUM
            })
        );
        assert_eq!(
            "Round-Robin:5".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin { quantum: 5 })
        );
    }

    #[test]
    fn test_parse_rejects() {
        assert!("lottery".parse::<Algorithm>().is_err());
        assert!("rr:abc".parse::<Algorithm>().is_err());
        assert!("fcfs:2".parse::<Algorithm>().is_err());
        let err = "edf".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scheduling algorithm: 'edf'");
    }

    #[test]
    fn test_display_roundtrip() {
        for algo in Algorithm::all(3) {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn test_policy_names() {
        let names: Vec<_> = Algorithm::all(2)
            .iter()
            .map(|a| a.policy().unwrap().name())
            .collect();
        assert_eq!(names, vec!["FCFS", "SJF", "PRIORITY", "RR", "SRTF"]);
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let algo = Algorithm::RoundRobin { quantum: 0 };
        assert!(matches!(
            algo.run(vec![Process::new("P1", 0, 1)]),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_run_dispatches_to_policy() {
        let input = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let out = Algorithm::RoundRobin { quantum: 2 }.run(input).unwrap();
        assert_eq!(out[0].id, "P2");
        assert_eq!(out[0].completion_time, Some(7));
        assert_eq!(out[1].completion_time, Some(8));
    }

    #[test]
    fn test_requires_priority() {
        assert!(Algorithm::Priority.requires_priority());
        assert!(!Algorithm::Srtf.requires_priority());
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":3}"#);
        let back: Algorithm = serde_json::from_str(r#"{"kind":"srtf"}"#).unwrap();
        assert_eq!(back, Algorithm::Srtf);
    }
}
