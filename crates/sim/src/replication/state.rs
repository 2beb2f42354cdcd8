//! Read-only snapshots reported by the coordinator.

use serde::{Deserialize, Serialize};

use crate::enzyme::EnzymeSummary;
use crate::event::{EventType, ReplicationEvent, Strand};
use crate::fragment::FragmentSummary;

/// Snapshot of the whole replication at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeState {
    pub fork_position: i64,
    pub total_length: i64,
    pub completion_percentage: f64,
    pub is_complete: bool,
    /// Bases synthesized on the leading strand.
    pub leading_strand_progress: i64,
    /// Bases synthesized on the lagging strand.
    pub lagging_strand_length: i64,
    pub active_fragments: Vec<FragmentSummary>,
    pub active_enzymes: Vec<EnzymeSummary>,
}

/// State of one strand manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandState {
    pub strand: Strand,
    pub active: bool,
    pub synthesized_length: i64,
    pub polymerase_position: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_fragment: Option<String>,
    pub active_fragments: usize,
    pub completed_fragments: usize,
}

/// Fork part of [`Statistics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForkSummary {
    pub organism: String,
    pub position: i64,
    pub total_length: i64,
    pub completion_percentage: f64,
    pub is_complete: bool,
}

/// Number of recorded events of each type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub unwind: usize,
    pub primer_synthesis: usize,
    pub dna_synthesis: usize,
    pub ligation: usize,
    pub proofreading: usize,
    pub primer_removal: usize,
}

impl EventCounts {
    pub fn from_events(events: &[ReplicationEvent]) -> Self {
        let mut counts = Self::default();
        for event in events {
            *counts.slot_mut(event.kind) += 1;
        }
        counts
    }

    pub fn get(&self, kind: EventType) -> usize {
        match kind {
            EventType::Unwind => self.unwind,
            EventType::PrimerSynthesis => self.primer_synthesis,
            EventType::DnaSynthesis => self.dna_synthesis,
            EventType::Ligation => self.ligation,
            EventType::Proofreading => self.proofreading,
            EventType::PrimerRemoval => self.primer_removal,
        }
    }

    pub fn total(&self) -> usize {
        EventType::ALL.iter().map(|&kind| self.get(kind)).sum()
    }

    fn slot_mut(&mut self, kind: EventType) -> &mut usize {
        match kind {
            EventType::Unwind => &mut self.unwind,
            EventType::PrimerSynthesis => &mut self.primer_synthesis,
            EventType::DnaSynthesis => &mut self.dna_synthesis,
            EventType::Ligation => &mut self.ligation,
            EventType::Proofreading => &mut self.proofreading,
            EventType::PrimerRemoval => &mut self.primer_removal,
        }
    }
}

/// Aggregate figures over the event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_events: usize,
    /// Number of successful `advance_fork` calls. One step usually records
    /// several events.
    pub actual_steps: usize,
    pub fork: ForkSummary,
    pub leading: StrandState,
    pub lagging: StrandState,
    pub event_counts: EventCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enzyme::EnzymeType;

    #[test]
    fn test_event_counts() {
        let events = vec![
            ReplicationEvent::new(EventType::Unwind, 10, EnzymeType::Helicase, Strand::Leading),
            ReplicationEvent::new(
                EventType::DnaSynthesis,
                10,
                EnzymeType::Polymerase,
                Strand::Leading,
            ),
            ReplicationEvent::new(
                EventType::DnaSynthesis,
                10,
                EnzymeType::Polymerase,
                Strand::Lagging,
            ),
        ];
        let counts = EventCounts::from_events(&events);
        assert_eq!(counts.unwind, 1);
        assert_eq!(counts.dna_synthesis, 2);
        assert_eq!(counts.get(EventType::Ligation), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_event_counts_serialize_by_type_name() {
        let json = serde_json::to_value(EventCounts::default()).unwrap();
        for kind in EventType::ALL {
            assert_eq!(json[kind.as_str()], 0);
        }
    }
}
