//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use replisome_sim::prelude::*;
//!
//! let mut coordinator = ReplicationBuilder::new()
//!     .organism(OrganismProfile::human())
//!     .sequence("ACGT".repeat(100).as_str())
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let state = coordinator.run().unwrap();
//! assert!(state.is_complete);
//! ```

pub use crate::base::{
    DnaSequence, FixedUniform, Nucleotide, OrganismClass, OrganismProfile, SeededUniform,
    SequenceSource, SizeRange, UniformSource,
};
pub use crate::enzyme::{Enzyme, EnzymeFactory, EnzymeType, PolymeraseVariant};
pub use crate::errors;
pub use crate::event::{EventType, ReplicationEvent, Strand};
pub use crate::fragment::{OkazakiFragment, RnaPrimer};
pub use crate::replication::{ForkCoordinator, RuntimeState, Statistics};
pub use crate::simulation::{ReplicationBuilder, ReplicationConfig};
