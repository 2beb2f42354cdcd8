//! Replication fork simulation.
//!
//! [`ForkCoordinator`] is the entry point. It composes a [`Replisome`] (fork
//! plus helicase), a [`LeadingStrandSynthesis`] manager and a
//! [`LaggingStrandSynthesis`] manager and records every event they produce.

mod coordinator;
mod fork;
mod lagging;
mod leading;
mod replisome;
mod state;

pub use coordinator::{ForkCoordinator, DEFAULT_MAX_STEPS};
pub use fork::ReplicationFork;
pub use lagging::LaggingStrandSynthesis;
pub use leading::{LeadingStrandSynthesis, PROOFREADING_THRESHOLD};
pub use replisome::Replisome;
pub use state::{EventCounts, ForkSummary, RuntimeState, Statistics, StrandState};
