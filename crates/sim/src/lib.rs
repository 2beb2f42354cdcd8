//! # Replication Simulation Crate
//!
//! The `sim` crate models semi-discontinuous DNA replication: continuous
//! synthesis on the leading strand and Okazaki fragment synthesis on the
//! lagging strand, driven by a single replication fork.
//!
//! It includes organism profiles, the replication enzymes, the fragment
//! lifecycle, the fork coordinator that records every event, and a builder
//! for assembling runs from code or a JSON configuration.

pub mod base;
pub mod enzyme;
pub mod errors;
pub mod event;
pub mod fragment;
pub mod prelude;
pub mod replication;
pub mod simulation;

pub use base::{DnaSequence, Nucleotide, OrganismProfile, SequenceSource};
pub use event::{EventType, ReplicationEvent, Strand};
pub use replication::{ForkCoordinator, RuntimeState, Statistics};
