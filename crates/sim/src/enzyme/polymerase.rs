use super::{Enzyme, EnzymeState, EnzymeType, PolymeraseVariant};
use crate::errors::EnzymeError;
use crate::event::{EventType, ReplicationEvent, Strand};

/// DNA polymerase.
#[derive(Debug, Clone, PartialEq)]
pub struct Polymerase {
    state: EnzymeState,
    variant: PolymeraseVariant,
}

impl Polymerase {
    pub fn new(position: i64, variant: PolymeraseVariant) -> Result<Self, EnzymeError> {
        Ok(Self {
            state: EnzymeState::new(position)?,
            variant,
        })
    }

    /// Polymerase parked at position 0.
    pub fn at_origin(variant: PolymeraseVariant) -> Self {
        Self {
            state: EnzymeState::origin(),
            variant,
        }
    }

    pub fn variant(&self) -> PolymeraseVariant {
        self.variant
    }

    /// Extend the nascent strand by `base_pairs`, moving along the template.
    pub fn synthesize(
        &mut self,
        base_pairs: i64,
        strand: Strand,
    ) -> Result<ReplicationEvent, EnzymeError> {
        if base_pairs <= 0 {
            return Err(EnzymeError::NonPositiveSynthesis {
                variant: self.variant,
                base_pairs,
            });
        }
        self.advance(base_pairs)?;
        Ok(ReplicationEvent::new(
            EventType::DnaSynthesis,
            self.position(),
            EnzymeType::Polymerase,
            strand,
        )
        .with_base_pairs(base_pairs)
        .with_metadata("variant", self.variant))
    }

    /// Check the bases just synthesized. Does not move.
    pub fn proofread(&self, strand: Strand) -> ReplicationEvent {
        ReplicationEvent::new(
            EventType::Proofreading,
            self.position(),
            EnzymeType::Polymerase,
            strand,
        )
        .with_metadata("variant", self.variant)
    }
}

impl Enzyme for Polymerase {
    fn enzyme_type(&self) -> EnzymeType {
        EnzymeType::Polymerase
    }

    fn state(&self) -> &EnzymeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EnzymeState {
        &mut self.state
    }

    fn speed_factor(&self) -> f64 {
        self.variant.speed_factor()
    }

    fn label(&self) -> String {
        format!("polymerase ({})", self.variant)
    }
}
