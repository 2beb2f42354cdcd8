//! Base types shared by the replication model.
//!
//! Nucleotides, the read-only template accessor, organism profiles and the
//! injectable random source.

mod nucleotide;
mod organism;
mod random;
mod sequence;

pub use nucleotide::Nucleotide;
pub use organism::{OrganismClass, OrganismProfile, SizeRange};
pub use random::{FixedUniform, SeededUniform, UniformSource};
pub use sequence::{complement_str, DnaSequence, SequenceSource};
