use super::{Enzyme, EnzymeState, EnzymeType};
use crate::errors::EnzymeError;
use crate::event::{EventType, ReplicationEvent, Strand};

/// Unwinds the double helix ahead of the fork.
#[derive(Debug, Clone, PartialEq)]
pub struct Helicase {
    state: EnzymeState,
}

impl Helicase {
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

    /// Unwind `base_pairs` of template and move forward by the same amount.
    pub fn unwind(&mut self, base_pairs: i64) -> Result<ReplicationEvent, EnzymeError> {
        self.advance(base_pairs)?;
        Ok(ReplicationEvent::new(
            EventType::Unwind,
            self.position(),
            EnzymeType::Helicase,
            Strand::Leading,
        )
        .with_base_pairs(base_pairs))
    }
}

impl Enzyme for Helicase {
    fn enzyme_type(&self) -> EnzymeType {
        EnzymeType::Helicase
    }

    fn state(&self) -> &EnzymeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EnzymeState {
        &mut self.state
    }

    fn speed_factor(&self) -> f64 {
        1.0
    }
}
