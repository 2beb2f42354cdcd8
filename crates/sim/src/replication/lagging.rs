use std::sync::Arc;

use tracing::debug;

use super::{StrandState, PROOFREADING_THRESHOLD};
use crate::base::{complement_str, OrganismProfile, UniformSource};
use crate::enzyme::{
    Enzyme, EnzymeSummary, Exonuclease, Ligase, Polymerase, PolymeraseVariant, Primase,
};
use crate::errors::SynthesisError;
use crate::event::{ReplicationEvent, Strand};
use crate::fragment::OkazakiFragment;

/// Discontinuous synthesis on the lagging strand.
///
/// The lagging strand is built as a chain of Okazaki fragments. Each fragment
/// is primed, extended while the fork moves, and once the fork has passed its
/// planned end it has its primer removed and is ligated. The next fragment is
/// primed where the previous one ended.
///
/// This manager owns the fragment lists. A fragment moves from the active list
/// to the completed list only after both processing steps succeeded.
#[derive(Debug, Clone)]
pub struct LaggingStrandSynthesis {
    organism: OrganismProfile,
    template: Option<Arc<str>>,
    polymerase: Polymerase,
    primase: Primase,
    exonuclease: Exonuclease,
    ligase: Ligase,
    current_id: Option<String>,
    active_fragments: Vec<OkazakiFragment>,
    completed_fragments: Vec<OkazakiFragment>,
    synthesized_length: i64,
    active: bool,
    fragment_counter: usize,
}

impl LaggingStrandSynthesis {
    pub fn new(organism: OrganismProfile) -> Self {
        let mut polymerase = Polymerase::at_origin(PolymeraseVariant::PolIII);
        let mut primase = Primase::at_origin();
        let mut exonuclease = Exonuclease::at_origin();
        let mut ligase = Ligase::at_origin();
        polymerase.deactivate();
        primase.deactivate();
        exonuclease.deactivate();
        ligase.deactivate();

        Self {
            organism,
            template: None,
            polymerase,
            primase,
            exonuclease,
            ligase,
            current_id: None,
            active_fragments: Vec::new(),
            completed_fragments: Vec::new(),
            synthesized_length: 0,
            active: false,
            fragment_counter: 0,
        }
    }

    /// Attach the template so completed fragments carry their sequence.
    pub fn with_template(mut self, template: impl Into<Arc<str>>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Prime the first fragment at `fork_position`.
    pub fn initiate_synthesis<U: UniformSource + ?Sized>(
        &mut self,
        fork_position: i64,
        rng: &mut U,
    ) -> Result<Vec<ReplicationEvent>, SynthesisError> {
        if fork_position < 0 {
            return Err(SynthesisError::NegativeForkPosition(fork_position));
        }

        let mut events = Vec::new();
        self.start_fragment(fork_position, rng, &mut events)
            .map_err(|e| SynthesisError::FirstFragment(e.to_string()))?;

        self.synthesized_length = 0;
        self.active = true;
        self.polymerase.activate();
        self.primase.activate();
        self.exonuclease.activate();
        self.ligase.activate();
        Ok(events)
    }

    /// Extend the lagging strand by `base_pairs` with the fork now at
    /// `fork_position`.
    ///
    /// The bases are credited to the fragments they fall in, so a step that
    /// crosses fragment ends records one synthesis event per fragment. Every
    /// fragment whose planned end the fork has reached is completed and
    /// followed by a freshly primed one, unless that end is the end of the
    /// attached template. Does nothing while inactive or for a non-positive
    /// amount.
    pub fn advance<U: UniformSource + ?Sized>(
        &mut self,
        fork_position: i64,
        base_pairs: i64,
        rng: &mut U,
    ) -> Result<Vec<ReplicationEvent>, SynthesisError> {
        if !self.active || base_pairs <= 0 {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        let mut cursor = fork_position - base_pairs;
        loop {
            let end = self.current_end().ok_or(SynthesisError::MissingFragment)?;
            let span_end = end.min(fork_position);
            if span_end > cursor {
                self.extend_current(span_end - cursor, &mut events)?;
                cursor = span_end;
            }
            if fork_position < end {
                break;
            }

            self.complete_current(&mut events)?;
            if self.template_length().is_some_and(|length| end >= length) {
                break;
            }
            self.start_fragment(end, rng, &mut events)
                .map_err(|e| SynthesisError::NextFragment(e.to_string()))?;
        }
        self.synthesized_length += base_pairs;
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
            strand: Strand::Lagging,
            active: self.active,
            synthesized_length: self.synthesized_length,
            polymerase_position: self.polymerase.position(),
            current_fragment: self.current_id.clone(),
            active_fragments: self.active_fragments.len(),
            completed_fragments: self.completed_fragments.len(),
        }
    }

    /// Stop synthesis. Fragments in flight stay in the active list.
    pub fn stop_synthesis(&mut self) {
        self.active = false;
        self.polymerase.deactivate();
        self.primase.deactivate();
        self.exonuclease.deactivate();
        self.ligase.deactivate();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn synthesized_length(&self) -> i64 {
        self.synthesized_length
    }

    pub fn current_fragment(&self) -> Option<&OkazakiFragment> {
        let id = self.current_id.as_deref()?;
        self.active_fragments.iter().find(|f| f.id() == id)
    }

    pub fn active_fragments(&self) -> &[OkazakiFragment] {
        &self.active_fragments
    }

    pub fn completed_fragments(&self) -> &[OkazakiFragment] {
        &self.completed_fragments
    }

    pub fn enzyme_summaries(&self) -> Vec<EnzymeSummary> {
        vec![
            self.polymerase.summary(),
            self.primase.summary(),
            self.exonuclease.summary(),
            self.ligase.summary(),
        ]
    }

    fn current_end(&self) -> Option<i64> {
        self.current_fragment().map(OkazakiFragment::end_position)
    }

    fn template_length(&self) -> Option<i64> {
        self.template.as_deref().map(|t| t.len() as i64)
    }

    fn extend_current(
        &mut self,
        base_pairs: i64,
        events: &mut Vec<ReplicationEvent>,
    ) -> Result<(), SynthesisError> {
        let id = self
            .current_id
            .as_deref()
            .ok_or(SynthesisError::MissingFragment)?;
        events.push(
            self.polymerase
                .synthesize(base_pairs, Strand::Lagging)?
                .with_fragment(id),
        );
        if base_pairs >= PROOFREADING_THRESHOLD {
            events.push(self.polymerase.proofread(Strand::Lagging).with_fragment(id));
        }
        Ok(())
    }

    fn start_fragment<U: UniformSource + ?Sized>(
        &mut self,
        start: i64,
        rng: &mut U,
        events: &mut Vec<ReplicationEvent>,
    ) -> Result<(), SynthesisError> {
        let id = format!("okazaki_{}", self.fragment_counter + 1);
        let fragment = OkazakiFragment::generate_random(&id, start, &self.organism, rng)?;

        self.primase.move_to(start)?;
        events.push(
            self.primase
                .synthesize_primer(fragment.primer().len(), Strand::Lagging)?
                .with_fragment(&id),
        );
        self.polymerase.move_to(start)?;

        debug!(
            fragment = %id,
            start,
            end = fragment.end_position(),
            primer = fragment.primer().len(),
            "okazaki fragment primed"
        );
        self.fragment_counter += 1;
        self.active_fragments.push(fragment);
        self.current_id = Some(id);
        Ok(())
    }

    fn complete_current(
        &mut self,
        events: &mut Vec<ReplicationEvent>,
    ) -> Result<(), SynthesisError> {
        let index = self
            .current_id
            .as_deref()
            .and_then(|id| self.active_fragments.iter().position(|f| f.id() == id))
            .ok_or(SynthesisError::MissingFragment)?;
        let mut fragment = self.active_fragments.remove(index);

        let primer_length = fragment.remove_primer();
        self.exonuclease.move_to(fragment.start_position())?;
        events.push(self.exonuclease.remove_primer(primer_length, fragment.id()));

        fragment.ligate()?;
        self.ligase.move_to(fragment.end_position())?;
        events.push(self.ligase.ligate(fragment.id()));

        if let Some(template) = &self.template {
            let range = fragment.start_position() as usize..fragment.end_position() as usize;
            if let Some(bases) = template.get(range) {
                fragment.set_sequence(complement_str(bases))?;
            }
        }

        debug!(
            fragment = %fragment.id(),
            length = fragment.length(),
            "okazaki fragment completed"
        );
        self.completed_fragments.push(fragment);
        self.current_id = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FixedUniform;
    use crate::event::EventType;

    fn kinds(events: &[ReplicationEvent]) -> Vec<EventType> {
        events.iter().map(|e| e.kind).collect()
    }

    /// Fragments of `length` bases with 5 nt primers.
    fn fixed(length: i64) -> FixedUniform {
        // fragment length, primer length, then the primer bases
        FixedUniform::new(vec![length, 5, 0, 1, 2, 3, 0])
    }

    fn human() -> LaggingStrandSynthesis {
        LaggingStrandSynthesis::new(OrganismProfile::human())
    }

    #[test]
    fn test_initiate_primes_first_fragment() {
        let mut lagging = human();
        let mut rng = fixed(150);
        let events = lagging.initiate_synthesis(0, &mut rng).unwrap();

        assert_eq!(kinds(&events), vec![EventType::PrimerSynthesis]);
        assert_eq!(events[0].base_pairs_added, Some(5));
        assert_eq!(events[0].fragment_id.as_deref(), Some("okazaki_1"));
        assert_eq!(events[0].strand, Strand::Lagging);

        let current = lagging.current_fragment().unwrap();
        assert_eq!(current.start_position(), 0);
        assert_eq!(current.end_position(), 150);
        assert_eq!(current.primer().sequence(), "ACGUA");
        assert_eq!(lagging.active_fragments().len(), 1);
        assert!(lagging.is_active());
    }

    #[test]
    fn test_initiate_rejects_negative_fork_position() {
        let mut lagging = human();
        let mut rng = fixed(150);
        assert!(matches!(
            lagging.initiate_synthesis(-3, &mut rng),
            Err(SynthesisError::NegativeForkPosition(-3))
        ));
        assert!(!lagging.is_active());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_initiate_failure_is_wrapped() {
        let profile = OrganismProfile::new(
            "tiny",
            crate::base::OrganismClass::Prokaryote,
            10.0,
            crate::base::SizeRange::new(5, 8),
            crate::base::SizeRange::new(3, 3),
        )
        .unwrap();
        let mut lagging = LaggingStrandSynthesis::new(profile);
        let mut rng = FixedUniform::constant(5);
        let err = lagging.initiate_synthesis(0, &mut rng).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to initiate first fragment: Fragment too short: 5 bp"));
        assert!(!lagging.is_active());
        assert!(lagging.active_fragments().is_empty());
    }

    #[test]
    fn test_advance_inside_fragment() {
        let mut lagging = human();
        let mut rng = fixed(150);
        lagging.initiate_synthesis(0, &mut rng).unwrap();

        let events = lagging.advance(40, 40, &mut rng).unwrap();
        assert_eq!(kinds(&events), vec![EventType::DnaSynthesis]);
        assert_eq!(events[0].fragment_id.as_deref(), Some("okazaki_1"));
        assert_eq!(lagging.synthesized_length(), 40);
        assert!(lagging.completed_fragments().is_empty());
    }

    #[test]
    fn test_advance_completes_fragment_and_primes_next() {
        let mut lagging = human();
        let mut rng = fixed(150);
        lagging.initiate_synthesis(0, &mut rng).unwrap();
        lagging.advance(100, 100, &mut rng).unwrap();

        let events = lagging.advance(150, 50, &mut rng).unwrap();
        assert_eq!(
            kinds(&events),
            vec![
                EventType::DnaSynthesis,
                EventType::PrimerRemoval,
                EventType::Ligation,
                EventType::PrimerSynthesis,
            ]
        );
        assert_eq!(events[1].base_pairs_added, Some(-5));
        assert_eq!(events[1].fragment_id.as_deref(), Some("okazaki_1"));
        assert_eq!(events[2].fragment_id.as_deref(), Some("okazaki_1"));
        assert_eq!(events[3].fragment_id.as_deref(), Some("okazaki_2"));

        let done = &lagging.completed_fragments()[0];
        assert!(done.is_complete());
        let next = lagging.current_fragment().unwrap();
        assert_eq!(next.id(), "okazaki_2");
        assert_eq!(next.start_position(), 150);
        assert_eq!(next.end_position(), 300);
        assert_eq!(lagging.active_fragments().len(), 1);
    }

    #[test]
    fn test_large_step_passes_several_fragments() {
        let mut lagging = human();
        let mut rng = fixed(100);
        lagging.initiate_synthesis(0, &mut rng).unwrap();

        let events = lagging.advance(350, 350, &mut rng).unwrap();
        let ligations = events
            .iter()
            .filter(|e| e.kind == EventType::Ligation)
            .count();
        assert_eq!(ligations, 3);
        assert_eq!(lagging.completed_fragments().len(), 3);
        assert!(events.iter().any(|e| e.kind == EventType::Proofreading));

        let starts: Vec<_> = lagging
            .completed_fragments()
            .iter()
            .map(|f| f.start_position())
            .collect();
        assert_eq!(starts, vec![0, 100, 200]);
        assert_eq!(lagging.current_fragment().unwrap().start_position(), 300);
    }

    #[test]
    fn test_large_step_credits_each_fragment() {
        let mut lagging = human();
        let mut rng = fixed(100);
        lagging.initiate_synthesis(0, &mut rng).unwrap();

        let events = lagging.advance(350, 350, &mut rng).unwrap();
        let synthesis: Vec<_> = events
            .iter()
            .filter(|e| e.kind == EventType::DnaSynthesis)
            .map(|e| (e.fragment_id.as_deref().unwrap(), e.base_pairs_added.unwrap()))
            .collect();
        assert_eq!(
            synthesis,
            vec![
                ("okazaki_1", 100),
                ("okazaki_2", 100),
                ("okazaki_3", 100),
                ("okazaki_4", 50),
            ]
        );
        let proofread = events
            .iter()
            .filter(|e| e.kind == EventType::Proofreading)
            .count();
        assert_eq!(proofread, 3);
        assert_eq!(lagging.synthesized_length(), 350);
        assert_eq!(lagging.state().polymerase_position, 350);
    }

    #[test]
    fn test_fragment_ending_at_template_end_is_not_followed() {
        let mut lagging = human().with_template("ACGT".repeat(50));
        let mut rng = fixed(100);
        lagging.initiate_synthesis(0, &mut rng).unwrap();

        let events = lagging.advance(200, 200, &mut rng).unwrap();
        let primed = events
            .iter()
            .filter(|e| e.kind == EventType::PrimerSynthesis)
            .count();
        assert_eq!(primed, 1);
        assert_eq!(lagging.completed_fragments().len(), 2);
        assert!(lagging.active_fragments().is_empty());
        assert!(lagging.current_fragment().is_none());
        assert_eq!(lagging.state().current_fragment, None);
    }

    #[test]
    fn test_completed_fragment_carries_complement() {
        let template = "ACGT".repeat(40);
        let mut lagging = human().with_template(template.as_str());
        let mut rng = fixed(100);
        lagging.initiate_synthesis(0, &mut rng).unwrap();
        lagging.advance(100, 100, &mut rng).unwrap();

        let done = &lagging.completed_fragments()[0];
        let expected = "TGCA".repeat(25);
        assert_eq!(done.sequence(), Some(expected.as_str()));
    }

    #[test]
    fn test_fragment_past_template_end_has_no_sequence() {
        let mut lagging = human().with_template("ACGT".repeat(10));
        let mut rng = fixed(100);
        lagging.initiate_synthesis(0, &mut rng).unwrap();
        lagging.advance(100, 100, &mut rng).unwrap();
        assert_eq!(lagging.completed_fragments()[0].sequence(), None);
    }

    #[test]
    fn test_inactive_or_non_positive_is_noop() {
        let mut lagging = human();
        let mut rng = fixed(150);
        assert!(lagging.advance(10, 10, &mut rng).unwrap().is_empty());

        lagging.initiate_synthesis(0, &mut rng).unwrap();
        assert!(lagging.advance(10, 0, &mut rng).unwrap().is_empty());
        lagging.stop_synthesis();
        assert!(lagging.advance(10, 10, &mut rng).unwrap().is_empty());
        assert!(lagging
            .enzyme_summaries()
            .iter()
            .all(|summary| !summary.active));
    }

    #[test]
    fn test_state_and_progress() {
        let mut lagging = human();
        let mut rng = fixed(150);
        lagging.initiate_synthesis(0, &mut rng).unwrap();
        lagging.advance(160, 160, &mut rng).unwrap();

        let state = lagging.state();
        assert_eq!(state.strand, Strand::Lagging);
        assert_eq!(state.synthesized_length, 160);
        assert_eq!(state.current_fragment.as_deref(), Some("okazaki_2"));
        assert_eq!(state.active_fragments, 1);
        assert_eq!(state.completed_fragments, 1);
        assert_eq!(lagging.progress(320), 50.0);
        assert_eq!(lagging.progress(0), 100.0);
    }
}
