use super::{Enzyme, EnzymeState, EnzymeType};
use crate::errors::EnzymeError;
use crate::event::{EventType, ReplicationEvent, Strand};

/// Shortest primer primase lays down.
pub const MIN_PRIMER_LENGTH: i64 = 3;
/// Longest primer primase lays down.
pub const MAX_PRIMER_LENGTH: i64 = 10;

/// Synthesizes the short RNA primers that polymerase extends.
#[derive(Debug, Clone, PartialEq)]
pub struct Primase {
    state: EnzymeState,
}

impl Primase {
    pub fn new(position: i64) -> Result<Self, EnzymeError> {
        Ok(Self {
            state: EnzymeState::new(position)?,
        })
    }

    /// Enzyme parked at position 0.
    pub fn at_origin() -> Self {
        Self {
            state: EnzymeState::origin(),
        }
    }

    /// Lay down a primer of `length` nucleotides at the current position.
    ///
    /// Primase does not move while priming.
    pub fn synthesize_primer(
        &self,
        length: i64,
        strand: Strand,
    ) -> Result<ReplicationEvent, EnzymeError> {
        if !(MIN_PRIMER_LENGTH..=MAX_PRIMER_LENGTH).contains(&length) {
            return Err(EnzymeError::InvalidPrimerLength(length));
        }
        Ok(ReplicationEvent::new(
            EventType::PrimerSynthesis,
            self.position(),
            EnzymeType::Primase,
            strand,
        )
        .with_base_pairs(length))
    }
}

impl Enzyme for Primase {
    fn enzyme_type(&self) -> EnzymeType {
        EnzymeType::Primase
    }

    fn state(&self) -> &EnzymeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EnzymeState {
        &mut self.state
    }

    fn speed_factor(&self) -> f64 {
        0.1
    }
}
