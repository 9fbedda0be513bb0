//! CPU scheduling domain models.
//!
//! Provides the process record that policies mutate and the execution
//! timeline they produce.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | Operating system | Batch queue | Service desk |
//! |----------------|------------------|-------------|--------------|
//! | Process | Process/Thread | Job | Ticket |
//! | Dispatch | Time slice | Run segment | Work session |
//! | Timeline | Gantt chart | Job log | Agent calendar |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Dispatch, Timeline};

/// Abstract simulated time unit.
pub type Time = i64;
