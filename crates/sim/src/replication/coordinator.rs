use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{
    EventCounts, ForkSummary, LaggingStrandSynthesis, LeadingStrandSynthesis, ReplicationFork,
    Replisome, RuntimeState, Statistics,
};
use crate::base::{OrganismProfile, SeededUniform, SequenceSource, UniformSource};
use crate::errors::ReplicationError;
use crate::event::{EventType, ReplicationEvent, Strand};
use crate::fragment::OkazakiFragment;

/// Step cap used by [`ForkCoordinator::run`] unless configured otherwise.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Drives one replication fork across a template.
///
/// The coordinator owns the fork, both strand managers and the event history.
/// Each [`advance_fork`](Self::advance_fork) call unwinds the template, then
/// extends the leading strand, then the lagging strand, and appends the
/// resulting events in that order.
///
/// A call either succeeds completely or leaves the coordinator as it was.
/// Random draws made by a failed call are not rewound.
#[derive(Debug)]
pub struct ForkCoordinator<U = SeededUniform> {
    organism: OrganismProfile,
    replisome: Replisome,
    leading: LeadingStrandSynthesis,
    lagging: LaggingStrandSynthesis,
    events: Vec<ReplicationEvent>,
    rng: U,
    initialized: bool,
    steps_taken: usize,
    step_size: Option<i64>,
    max_steps: usize,
}

impl<U: UniformSource> ForkCoordinator<U> {
    /// Set up a fork at the start of `sequence`.
    pub fn new<S: SequenceSource + ?Sized>(
        sequence: &S,
        organism: OrganismProfile,
        rng: U,
    ) -> Result<Self, ReplicationError> {
        let template: Arc<str> = Arc::from(sequence.sequence());
        let total_length = template.len() as i64;

        let fork = ReplicationFork::new(0, total_length, organism.clone())?;
        let replisome = Replisome::new(fork)?;
        let lagging = LaggingStrandSynthesis::new(organism.clone()).with_template(template);

        debug!(organism = %organism, total_length, "fork coordinator created");
        Ok(Self {
            organism,
            replisome,
            leading: LeadingStrandSynthesis::new(),
            lagging,
            events: Vec::new(),
            rng,
            initialized: false,
            steps_taken: 0,
            step_size: None,
            max_steps: DEFAULT_MAX_STEPS,
        })
    }

    /// Fixed step size for [`complete_replication`](Self::complete_replication).
    /// `None` uses 1% of the template.
    pub fn with_step_size(mut self, step_size: Option<i64>) -> Self {
        self.step_size = step_size;
        self
    }

    /// Step cap used by [`run`](Self::run).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Start both strands at the fork, leading strand first.
    ///
    /// Returns the events produced. Nothing is recorded if either strand fails.
    pub fn initialize_replication(&mut self) -> Result<Vec<ReplicationEvent>, ReplicationError> {
        if self.initialized {
            return Err(ReplicationError::AlreadyInitialized);
        }
        let position = self.replisome.fork().position();

        let mut leading = self.leading.clone();
        let mut events = leading
            .initiate_synthesis(position)
            .map_err(|e| ReplicationError::LeadingInit(e.to_string()))?;

        let mut lagging = self.lagging.clone();
        events.extend(
            lagging
                .initiate_synthesis(position, &mut self.rng)
                .map_err(|e| ReplicationError::LaggingInit(e.to_string()))?,
        );

        self.leading = leading;
        self.lagging = lagging;
        self.replisome.sync(&self.leading, &self.lagging);
        self.events.extend(events.iter().cloned());
        self.initialized = true;
        info!(organism = %self.organism, position, "replication initialized");
        Ok(events)
    }

    /// Unwind `base_pairs` of template and synthesize on both strands.
    ///
    /// The amount is clamped to what is left of the template.
    pub fn advance_fork(&mut self, base_pairs: i64) -> Result<RuntimeState, ReplicationError> {
        if base_pairs <= 0 {
            return Err(ReplicationError::NonPositiveAdvance(base_pairs));
        }
        if self.is_complete() {
            let fork = self.replisome.fork();
            return Err(ReplicationError::AlreadyComplete {
                position: fork.position(),
                total_length: fork.total_length(),
            });
        }

        let mut replisome = self.replisome.clone();
        let mut leading = self.leading.clone();
        let mut lagging = self.lagging.clone();

        let before = replisome.fork().position();
        let mut events = replisome.advance_fork(base_pairs)?;
        let fork_position = replisome.fork().position();
        let step = fork_position - before;

        events.extend(leading.advance(step)?);
        events.extend(lagging.advance(fork_position, step, &mut self.rng)?);
        replisome.sync(&leading, &lagging);

        self.replisome = replisome;
        self.leading = leading;
        self.lagging = lagging;
        self.events.extend(events);
        self.steps_taken += 1;
        Ok(self.current_state())
    }

    /// Advance in fixed steps until the fork reaches the end of the template.
    ///
    /// Initializes replication first if needed. Fails once `max_steps` calls
    /// to `advance_fork` have been made without finishing.
    pub fn complete_replication(
        &mut self,
        max_steps: usize,
    ) -> Result<RuntimeState, ReplicationError> {
        self.complete_replication_with(max_steps, |_| {})
    }

    /// Like [`complete_replication`](Self::complete_replication), calling
    /// `on_step` with the snapshot after every step.
    pub fn complete_replication_with<F>(
        &mut self,
        max_steps: usize,
        mut on_step: F,
    ) -> Result<RuntimeState, ReplicationError>
    where
        F: FnMut(&RuntimeState),
    {
        if !self.initialized {
            self.initialize_replication()?;
        }

        let step_size = self.step_size();
        let mut steps = 0;
        while !self.is_complete() {
            if steps >= max_steps {
                warn!(steps, max_steps, "replication stopped at step limit");
                return Err(ReplicationError::StepLimitExceeded { steps, max_steps });
            }
            let remaining = self.replisome.fork().remaining();
            let state = self.advance_fork(step_size.min(remaining))?;
            steps += 1;
            debug!(step = steps, position = state.fork_position, "fork advanced");
            on_step(&state);
        }

        self.leading.stop_synthesis();
        self.lagging.stop_synthesis();
        self.replisome.halt();
        self.replisome.sync(&self.leading, &self.lagging);
        info!(
            steps,
            events = self.events.len(),
            fragments = self.lagging.completed_fragments().len(),
            "replication complete"
        );
        Ok(self.current_state())
    }

    /// [`complete_replication`](Self::complete_replication) with the configured
    /// step cap.
    pub fn run(&mut self) -> Result<RuntimeState, ReplicationError> {
        self.complete_replication(self.max_steps)
    }

    /// Step size used by [`complete_replication`](Self::complete_replication).
    pub fn step_size(&self) -> i64 {
        self.step_size
            .unwrap_or_else(|| (self.total_length() / 100).max(1))
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn current_state(&self) -> RuntimeState {
        let fork = self.replisome.fork();
        RuntimeState {
            fork_position: fork.position(),
            total_length: fork.total_length(),
            completion_percentage: fork.completion_percentage(),
            is_complete: fork.is_complete(),
            leading_strand_progress: self.leading.synthesized_length(),
            lagging_strand_length: self.lagging.synthesized_length(),
            active_fragments: self.replisome.active_fragments().to_vec(),
            active_enzymes: self.replisome.active_enzymes().to_vec(),
        }
    }

    pub fn statistics(&self) -> Statistics {
        let fork = self.replisome.fork();
        Statistics {
            total_events: self.events.len(),
            actual_steps: self.steps_taken,
            fork: ForkSummary {
                organism: self.organism.name().to_string(),
                position: fork.position(),
                total_length: fork.total_length(),
                completion_percentage: fork.completion_percentage(),
                is_complete: fork.is_complete(),
            },
            leading: self.leading.state(),
            lagging: self.lagging.state(),
            event_counts: EventCounts::from_events(&self.events),
        }
    }

    /// Full event history in the order it was recorded.
    pub fn events(&self) -> &[ReplicationEvent] {
        &self.events
    }

    pub fn events_by_type(&self, kind: EventType) -> Vec<&ReplicationEvent> {
        self.events.iter().filter(|e| e.kind == kind).collect()
    }

    pub fn events_by_strand(&self, strand: Strand) -> Vec<&ReplicationEvent> {
        self.events.iter().filter(|e| e.strand == strand).collect()
    }

    pub fn events_by_fragment(&self, fragment_id: &str) -> Vec<&ReplicationEvent> {
        self.events
            .iter()
            .filter(|e| e.fragment_id.as_deref() == Some(fragment_id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.replisome.fork().is_complete()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of successful `advance_fork` calls.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn total_length(&self) -> i64 {
        self.replisome.fork().total_length()
    }

    pub fn organism(&self) -> &OrganismProfile {
        &self.organism
    }

    pub fn fork(&self) -> &ReplicationFork {
        self.replisome.fork()
    }

    pub fn replisome(&self) -> &Replisome {
        &self.replisome
    }

    pub fn leading(&self) -> &LeadingStrandSynthesis {
        &self.leading
    }

    pub fn lagging(&self) -> &LaggingStrandSynthesis {
        &self.lagging
    }

    pub fn completed_fragments(&self) -> &[OkazakiFragment] {
        self.lagging.completed_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FixedUniform;
    use crate::enzyme::Enzyme;

    fn coordinator(length: usize) -> ForkCoordinator<FixedUniform> {
        let sequence = "ACGT".repeat(length / 4);
        // 150 bp fragments with 5 nt primers
        let rng = FixedUniform::new(vec![150, 5, 0, 1, 2, 3, 0]);
        ForkCoordinator::new(sequence.as_str(), OrganismProfile::human(), rng).unwrap()
    }

    #[test]
    fn test_initialize_records_primer_event() {
        let mut c = coordinator(400);
        let events = c.initialize_replication().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventType::PrimerSynthesis);
        assert_eq!(c.events().len(), 1);
        assert!(c.is_initialized());
        assert!(matches!(
            c.initialize_replication(),
            Err(ReplicationError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_lagging_failure_keeps_leading_untouched() {
        let sequence = "A".repeat(100);
        let profile = OrganismProfile::new(
            "tiny",
            crate::base::OrganismClass::Prokaryote,
            10.0,
            crate::base::SizeRange::new(2, 4),
            crate::base::SizeRange::new(3, 3),
        )
        .unwrap();
        let mut c =
            ForkCoordinator::new(sequence.as_str(), profile, FixedUniform::constant(3)).unwrap();

        let err = c.initialize_replication().unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to initialize lagging strand: Failed to initiate first fragment"));
        assert!(c.events().is_empty());
        assert!(!c.leading().is_active());
        assert!(!c.is_initialized());
    }

    #[test]
    fn test_advance_orders_events_by_component() {
        let mut c = coordinator(400);
        c.initialize_replication().unwrap();
        let before = c.events().len();

        let state = c.advance_fork(160).unwrap();
        assert_eq!(state.fork_position, 160);
        assert_eq!(state.leading_strand_progress, 160);
        assert_eq!(state.lagging_strand_length, 160);

        let step: Vec<_> = c.events()[before..]
            .iter()
            .map(|e| (e.kind, e.strand))
            .collect();
        assert_eq!(
            step,
            vec![
                (EventType::Unwind, Strand::Leading),
                (EventType::DnaSynthesis, Strand::Leading),
                (EventType::Proofreading, Strand::Leading),
                (EventType::DnaSynthesis, Strand::Lagging),
                (EventType::Proofreading, Strand::Lagging),
                (EventType::PrimerRemoval, Strand::Lagging),
                (EventType::Ligation, Strand::Lagging),
                (EventType::PrimerSynthesis, Strand::Lagging),
                (EventType::DnaSynthesis, Strand::Lagging),
            ]
        );
        let lagging: Vec<_> = c
            .events_by_strand(Strand::Lagging)
            .into_iter()
            .filter(|e| e.kind == EventType::DnaSynthesis)
            .map(|e| (e.fragment_id.clone(), e.base_pairs_added))
            .collect();
        assert_eq!(
            lagging,
            vec![
                (Some("okazaki_1".to_string()), Some(150)),
                (Some("okazaki_2".to_string()), Some(10)),
            ]
        );
        assert_eq!(c.steps_taken(), 1);
    }

    #[test]
    fn test_advance_rejects_non_positive() {
        let mut c = coordinator(400);
        for n in [0, -5] {
            let err = c.advance_fork(n).unwrap_err();
            assert_eq!(err, ReplicationError::NonPositiveAdvance(n));
            assert!(err.to_string().contains("must be positive"));
        }
        assert_eq!(c.steps_taken(), 0);
    }

    #[test]
    fn test_advance_clamps_last_step() {
        let mut c = coordinator(400);
        c.initialize_replication().unwrap();
        c.advance_fork(300).unwrap();
        let state = c.advance_fork(300).unwrap();
        assert_eq!(state.fork_position, 400);
        assert_eq!(state.leading_strand_progress, 400);
        assert!(state.is_complete);

        let err = c.advance_fork(1).unwrap_err();
        assert!(err.to_string().contains("already complete"));
    }

    #[test]
    fn test_failed_advance_leaves_state_untouched() {
        let sequence = "A".repeat(1000);
        let profile = OrganismProfile::new(
            "loose",
            crate::base::OrganismClass::Eukaryote,
            50.0,
            crate::base::SizeRange::new(5, 20),
            crate::base::SizeRange::new(3, 3),
        )
        .unwrap();
        // first fragment is 15 bp, the one after it would be 5 bp
        let rng = FixedUniform::new(vec![15, 0, 0, 0, 0, 5]);
        let mut c = ForkCoordinator::new(sequence.as_str(), profile, rng).unwrap();
        c.initialize_replication().unwrap();
        let events = c.events().len();
        let state = c.current_state();

        let err = c.advance_fork(20).unwrap_err();
        assert!(err.to_string().starts_with("Failed to initiate fragment"));
        assert_eq!(c.events().len(), events);
        assert_eq!(c.current_state(), state);
        assert_eq!(c.leading().polymerase().position(), 0);
        assert!(c.completed_fragments().is_empty());
        assert_eq!(c.steps_taken(), 0);
    }

    #[test]
    fn test_complete_replication() {
        let mut c = coordinator(400);
        let state = c.complete_replication(DEFAULT_MAX_STEPS).unwrap();
        assert_eq!(state.fork_position, 400);
        assert_eq!(state.completion_percentage, 100.0);
        assert_eq!(c.steps_taken(), 100);
        assert!(!c.leading().is_active());
        assert!(!c.lagging().is_active());

        let stats = c.statistics();
        assert_eq!(stats.actual_steps, 100);
        assert_eq!(stats.total_events, c.events().len());
        assert!(stats.total_events > stats.actual_steps);
        assert_eq!(stats.event_counts.unwind, 100);
        assert_eq!(stats.event_counts.total(), stats.total_events);
    }

    #[test]
    fn test_step_limit() {
        let mut c = coordinator(400);
        let err = c.complete_replication(10).unwrap_err();
        assert_eq!(
            err,
            ReplicationError::StepLimitExceeded {
                steps: 10,
                max_steps: 10
            }
        );
        assert!(err.to_string().contains("step 10"));
        assert_eq!(c.fork().position(), 40);
    }

    #[test]
    fn test_step_callback() {
        let mut c = coordinator(400).with_step_size(Some(100));
        let mut positions = Vec::new();
        c.complete_replication_with(10, |state| positions.push(state.fork_position))
            .unwrap();
        assert_eq!(positions, vec![100, 200, 300, 400]);
    }

    #[test]
    fn test_configured_step_size() {
        let mut c = coordinator(400).with_step_size(Some(128));
        c.run().unwrap();
        assert_eq!(c.steps_taken(), 4);
    }

    #[test]
    fn test_queries() {
        let mut c = coordinator(400);
        c.complete_replication(DEFAULT_MAX_STEPS).unwrap();

        assert!(c
            .events_by_type(EventType::Ligation)
            .iter()
            .all(|e| e.strand == Strand::Lagging));
        assert_eq!(
            c.events_by_type(EventType::Ligation).len(),
            c.completed_fragments().len()
        );
        let first = c.events_by_fragment("okazaki_1");
        assert_eq!(first.first().map(|e| e.kind), Some(EventType::PrimerSynthesis));
        assert_eq!(first.last().map(|e| e.kind), Some(EventType::Ligation));
        assert!(c
            .events_by_strand(Strand::Leading)
            .iter()
            .all(|e| e.enzyme != crate::enzyme::EnzymeType::Ligase));
    }

    #[test]
    fn test_empty_template() {
        let mut c = ForkCoordinator::new("", OrganismProfile::e_coli(), SeededUniform::from_seed(1))
            .unwrap();
        let state = c.complete_replication(10).unwrap();
        assert!(state.is_complete);
        assert_eq!(state.completion_percentage, 100.0);
        assert!(c.advance_fork(1).is_err());
    }
}
