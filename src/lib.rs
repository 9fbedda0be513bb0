//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a single processor serving a fixed set of processes under one
//! of five classic disciplines and reports waiting and turnaround metrics.
//! Time is an abstract integer unit counter; the simulation is deterministic.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `Dispatch`, `Timeline`
//! - **`policy`**: `SchedulingPolicy` trait, the five policies
//!   (FCFS, SJF, Priority, Round-Robin, SRTF), and `Algorithm` selection
//! - **`metrics`**: average waiting/turnaround time and `SimulationKpi`
//! - **`validation`**: input checks (IDs, arrival/burst domains, priorities, quantum)
//! - **`generator`**: seeded random process sets
//! - **`compare`**: run several algorithms on independent copies of one set
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::metrics::{average_turnaround_time, average_waiting_time};
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::policy::Algorithm;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let done = Algorithm::Fcfs.run(processes).unwrap();
//! assert_eq!(done[2].completion_time, Some(16));
//! assert!((average_waiting_time(&done).unwrap() - 10.0 / 3.0).abs() < 1e-10);
//! assert!((average_turnaround_time(&done).unwrap() - 26.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod compare;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;

pub use error::SimulationError;
