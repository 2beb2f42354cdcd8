use tracing::trace;

use super::{LaggingStrandSynthesis, LeadingStrandSynthesis, ReplicationFork};
use crate::enzyme::{Enzyme, EnzymeFactory, EnzymeSummary, Helicase};
use crate::errors::ReplicationError;
use crate::event::ReplicationEvent;
use crate::fragment::FragmentSummary;

/// The enzyme assembly travelling with the fork.
///
/// The replisome drives the helicase that unwinds the template and keeps an
/// informational view of which enzymes and fragments are currently engaged.
/// The view is refreshed by [`Replisome::sync`]; the strand managers remain
/// the owners of the real fragment lists.
#[derive(Debug, Clone)]
pub struct Replisome {
    fork: ReplicationFork,
    helicase: Helicase,
    active_enzymes: Vec<EnzymeSummary>,
    active_fragments: Vec<FragmentSummary>,
}

impl Replisome {
    /// Assemble a replisome with its helicase loaded at the fork position.
    pub fn new(fork: ReplicationFork) -> Result<Self, ReplicationError> {
        let helicase = EnzymeFactory::helicase(fork.position())?;
        let active_enzymes = vec![helicase.summary()];
        Ok(Self {
            fork,
            helicase,
            active_enzymes,
            active_fragments: Vec::new(),
        })
    }

    pub fn fork(&self) -> &ReplicationFork {
        &self.fork
    }

    pub fn helicase(&self) -> &Helicase {
        &self.helicase
    }

    /// Unwind up to `base_pairs` of template.
    ///
    /// The amount is clamped to what is left of the template; the unwind event
    /// reports the clamped amount.
    pub fn advance_fork(
        &mut self,
        base_pairs: i64,
    ) -> Result<Vec<ReplicationEvent>, ReplicationError> {
        if base_pairs <= 0 {
            return Err(ReplicationError::NonPositiveAdvance(base_pairs));
        }
        if self.fork.is_complete() {
            return Err(ReplicationError::AlreadyComplete {
                position: self.fork.position(),
                total_length: self.fork.total_length(),
            });
        }

        let step = base_pairs.min(self.fork.remaining());
        let event = self.helicase.unwind(step)?;
        self.fork.advance(step);
        trace!(position = self.fork.position(), step, "fork unwound");
        Ok(vec![event])
    }

    /// Refresh the snapshot of engaged enzymes and fragments.
    pub fn sync(&mut self, leading: &LeadingStrandSynthesis, lagging: &LaggingStrandSynthesis) {
        let mut enzymes = vec![self.helicase.summary()];
        enzymes.extend(leading.enzyme_summaries());
        enzymes.extend(lagging.enzyme_summaries());
        enzymes.retain(|e| e.active);
        self.active_enzymes = enzymes;

        self.active_fragments = lagging
            .active_fragments()
            .iter()
            .map(|f| f.summary())
            .collect();
    }

    /// Enzymes active at the last sync.
    pub fn active_enzymes(&self) -> &[EnzymeSummary] {
        &self.active_enzymes
    }

    /// Fragments in flight at the last sync.
    pub fn active_fragments(&self) -> &[FragmentSummary] {
        &self.active_fragments
    }

    /// Stop the helicase once the template is exhausted.
    pub(crate) fn halt(&mut self) {
        self.helicase.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{OrganismProfile, SeededUniform};
    use crate::enzyme::EnzymeType;
    use crate::event::{EventType, Strand};

    fn replisome(total: i64) -> Replisome {
        let fork = ReplicationFork::new(0, total, OrganismProfile::e_coli()).unwrap();
        Replisome::new(fork).unwrap()
    }

    #[test]
    fn test_advance_unwinds() {
        let mut r = replisome(1000);
        let events = r.advance_fork(64).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventType::Unwind);
        assert_eq!(events[0].strand, Strand::Leading);
        assert_eq!(events[0].base_pairs_added, Some(64));
        assert_eq!(r.fork().position(), 64);
        assert_eq!(r.helicase().position(), 64);
    }

    #[test]
    fn test_advance_clamps_to_template() {
        let mut r = replisome(100);
        let events = r.advance_fork(250).unwrap();
        assert_eq!(events[0].base_pairs_added, Some(100));
        assert!(r.fork().is_complete());

        let err = r.advance_fork(1).unwrap_err();
        assert!(err.to_string().contains("already complete"));
    }

    #[test]
    fn test_advance_rejects_non_positive() {
        let mut r = replisome(100);
        assert_eq!(
            r.advance_fork(0),
            Err(ReplicationError::NonPositiveAdvance(0))
        );
        assert!(r.advance_fork(-5).is_err());
        assert_eq!(r.fork().position(), 0);
    }

    #[test]
    fn test_sync_reports_engaged_enzymes() {
        let mut r = replisome(5000);
        let mut rng = SeededUniform::from_seed(5);
        let mut leading = LeadingStrandSynthesis::new();
        let mut lagging = LaggingStrandSynthesis::new(OrganismProfile::e_coli());

        r.sync(&leading, &lagging);
        assert_eq!(r.active_enzymes().len(), 1);
        assert!(r.active_fragments().is_empty());

        leading.initiate_synthesis(0).unwrap();
        lagging.initiate_synthesis(0, &mut rng).unwrap();
        r.sync(&leading, &lagging);

        let kinds: Vec<_> = r.active_enzymes().iter().map(|e| e.enzyme).collect();
        assert!(kinds.contains(&EnzymeType::Helicase));
        assert!(kinds.contains(&EnzymeType::Polymerase));
        assert!(kinds.contains(&EnzymeType::Primase));
        assert_eq!(r.active_fragments().len(), 1);
        assert_eq!(r.active_fragments()[0].id, "okazaki_1");
    }
}
