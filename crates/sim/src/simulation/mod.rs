//! Run configuration and construction.

mod builder;
mod configs;

pub use builder::ReplicationBuilder;
pub use configs::{OrganismSpec, ReplicationConfig};
