use tracing::debug;

use super::StrandState;
use crate::enzyme::{Enzyme, EnzymeSummary, Polymerase, PolymeraseVariant};
use crate::errors::SynthesisError;
use crate::event::{ReplicationEvent, Strand};

/// Synthesis steps of at least this many bases are followed by proofreading.
pub const PROOFREADING_THRESHOLD: i64 = 100;

/// Continuous synthesis on the leading strand.
///
/// A single PolIII polymerase follows the fork. The manager stays idle until
/// [`initiate_synthesis`](Self::initiate_synthesis) is called.
#[derive(Debug, Clone)]
pub struct LeadingStrandSynthesis {
    polymerase: Polymerase,
    synthesized_length: i64,
    active: bool,
}

impl LeadingStrandSynthesis {
    pub fn new() -> Self {
        let mut polymerase = Polymerase::at_origin(PolymeraseVariant::PolIII);
        polymerase.deactivate();
        Self {
            polymerase,
            synthesized_length: 0,
            active: false,
        }
    }

    /// Load the polymerase at `primer_position` and start synthesis.
    ///
    /// Produces no events; the primer for the leading strand is implicit.
    pub fn initiate_synthesis(
        &mut self,
        primer_position: i64,
    ) -> Result<Vec<ReplicationEvent>, SynthesisError> {
        if primer_position < 0 {
            return Err(SynthesisError::NegativePrimerPosition(primer_position));
        }
        self.polymerase.move_to(primer_position)?;
        self.polymerase.activate();
        self.synthesized_length = 0;
        self.active = true;
        debug!(primer_position, "leading strand synthesis started");
        Ok(Vec::new())
    }

    /// Extend the strand by `base_pairs`.
    ///
    /// Does nothing while inactive or for a non-positive amount.
    pub fn advance(&mut self, base_pairs: i64) -> Result<Vec<ReplicationEvent>, SynthesisError> {
        if !self.active || base_pairs <= 0 {
            return Ok(Vec::new());
        }

        let mut events = vec![self.polymerase.synthesize(base_pairs, Strand::Leading)?];
        self.synthesized_length += base_pairs;
        if base_pairs >= PROOFREADING_THRESHOLD {
            events.push(self.polymerase.proofread(Strand::Leading));
        }
        Ok(events)
    }

    /// Percentage of `total_length` synthesized, capped at 100.
    pub fn progress(&self, total_length: i64) -> f64 {
        if total_length <= 0 {
            return 100.0;
        }
        (self.synthesized_length as f64 / total_length as f64 * 100.0).min(100.0)
    }

    pub fn state(&self) -> StrandState {
        StrandState {
            strand: Strand::Leading,
            active: self.active,
            synthesized_length: self.synthesized_length,
            polymerase_position: self.polymerase.position(),
            current_fragment: None,
            active_fragments: 0,
            completed_fragments: 0,
        }
    }

    pub fn stop_synthesis(&mut self) {
        self.active = false;
        self.polymerase.deactivate();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn synthesized_length(&self) -> i64 {
        self.synthesized_length
    }

    pub fn polymerase(&self) -> &Polymerase {
        &self.polymerase
    }

    pub fn enzyme_summaries(&self) -> Vec<EnzymeSummary> {
        vec![self.polymerase.summary()]
    }
}

impl Default for LeadingStrandSynthesis {
    fn default() -> Self {
        Self::new()
    }
}
