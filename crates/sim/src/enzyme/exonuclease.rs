use super::{Enzyme, EnzymeState, EnzymeType};
use crate::errors::EnzymeError;
use crate::event::{EventType, ReplicationEvent, Strand};

/// Removes RNA primers from finished Okazaki fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Exonuclease {
    state: EnzymeState,
}

impl Exonuclease {
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

    /// Excise a primer of `primer_length` nucleotides. Reported as a negative
    /// base-pair change on the lagging strand.
    pub fn remove_primer(&self, primer_length: i64, fragment_id: &str) -> ReplicationEvent {
        ReplicationEvent::new(
            EventType::PrimerRemoval,
            self.position(),
            EnzymeType::Exonuclease,
            Strand::Lagging,
        )
        .with_base_pairs(-primer_length)
        .with_fragment(fragment_id)
    }
}

impl Enzyme for Exonuclease {
    fn enzyme_type(&self) -> EnzymeType {
        EnzymeType::Exonuclease
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_primer_is_negative() {
        let exo = Exonuclease::new(1000).unwrap();
        let event = exo.remove_primer(7, "okazaki_1");
        assert_eq!(event.kind, EventType::PrimerRemoval);
        assert_eq!(event.base_pairs_added, Some(-7));
        assert_eq!(event.strand, Strand::Lagging);
        assert_eq!(event.fragment_id.as_deref(), Some("okazaki_1"));
    }
}
