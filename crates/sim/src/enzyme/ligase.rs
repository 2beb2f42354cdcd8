use super::{Enzyme, EnzymeState, EnzymeType};
use crate::errors::EnzymeError;
use crate::event::{EventType, ReplicationEvent, Strand};

/// Seals the nick between adjacent Okazaki fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Ligase {
    state: EnzymeState,
}

impl Ligase {
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

    /// Ligation only ever happens on the lagging strand.
    pub fn ligate(&self, fragment_id: &str) -> ReplicationEvent {
        ReplicationEvent::new(
            EventType::Ligation,
            self.position(),
            EnzymeType::Ligase,
            Strand::Lagging,
        )
        .with_fragment(fragment_id)
    }
}

impl Enzyme for Ligase {
    fn enzyme_type(&self) -> EnzymeType {
        EnzymeType::Ligase
    }

    fn state(&self) -> &EnzymeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EnzymeState {
        &mut self.state
    }

    fn speed_factor(&self) -> f64 {
        2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ligate_is_lagging() {
        let ligase = Ligase::new(2000).unwrap();
        let event = ligase.ligate("okazaki_3");
        assert_eq!(event.kind, EventType::Ligation);
        assert_eq!(event.strand, Strand::Lagging);
        assert_eq!(event.position, 2000);
        assert_eq!(event.fragment_id.as_deref(), Some("okazaki_3"));
    }
}
