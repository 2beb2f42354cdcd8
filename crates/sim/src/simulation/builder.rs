//! Builder pattern for creating replication runs.
//!
//! Provides a fluent API for assembling a [`ForkCoordinator`] with
//! validation of every parameter.

use crate::base::{DnaSequence, OrganismProfile, SeededUniform, SequenceSource, UniformSource};
use crate::errors::BuilderError;
use crate::replication::{ForkCoordinator, DEFAULT_MAX_STEPS};
use crate::simulation::ReplicationConfig;

#[derive(Debug, Clone)]
enum TemplateInput {
    Sequence(String),
    Random(usize),
}

/// Builder for [`ForkCoordinator`] instances.
///
/// # Examples
///
/// ```
/// use replisome_sim::base::OrganismProfile;
/// use replisome_sim::simulation::ReplicationBuilder;
///
/// // Random 6.4 kb template, reproducible fragment sizes
/// let mut coordinator = ReplicationBuilder::new()
///     .organism(OrganismProfile::e_coli())
///     .sequence_length(6400)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let state = coordinator.run().unwrap();
/// assert_eq!(state.fork_position, 6400);
/// ```
#[derive(Debug, Clone)]
pub struct ReplicationBuilder {
    // Required parameters
    organism: Option<OrganismProfile>,
    template: Option<TemplateInput>,

    seed: Option<u64>,        // Default: None (random)
    max_steps: usize,         // Default: DEFAULT_MAX_STEPS
    step_size: Option<i64>,   // Default: None (1% of the template)
}

impl Default for ReplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplicationBuilder {
    pub fn new() -> Self {
        Self {
            organism: None,
            template: None,
            seed: None,
            max_steps: DEFAULT_MAX_STEPS,
            step_size: None,
        }
    }

    /// Start from a configuration. The template still has to be set.
    pub fn from_config(config: &ReplicationConfig) -> Result<Self, BuilderError> {
        let organism = config
            .organism
            .resolve()
            .map_err(|e| BuilderError::InvalidParameter(format!("organism: {e}")))?;
        let mut builder = Self::new()
            .organism(organism)
            .max_steps(config.max_steps);
        builder.seed = config.seed;
        builder.step_size = config.step_size;
        Ok(builder)
    }

    /// Set the organism profile (required).
    pub fn organism(mut self, organism: OrganismProfile) -> Self {
        self.organism = Some(organism);
        self
    }

    /// Replicate the given template.
    pub fn sequence<S: SequenceSource + ?Sized>(mut self, sequence: &S) -> Self {
        self.template = Some(TemplateInput::Sequence(sequence.sequence().to_string()));
        self
    }

    /// Replicate a random template of `length` bases.
    pub fn sequence_length(mut self, length: usize) -> Self {
        self.template = Some(TemplateInput::Random(length));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn step_size(mut self, step_size: i64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    /// Build a coordinator driven by a seeded RNG.
    pub fn build(self) -> Result<ForkCoordinator<SeededUniform>, BuilderError> {
        let rng = SeededUniform::new(self.seed);
        self.build_with_source(rng)
    }

    /// Build a coordinator driven by `rng`. The seed is ignored.
    ///
    /// A random template is drawn from `rng` before any fragment.
    pub fn build_with_source<U: UniformSource>(
        self,
        mut rng: U,
    ) -> Result<ForkCoordinator<U>, BuilderError> {
        let organism = self
            .organism
            .ok_or(BuilderError::MissingRequired("organism"))?;
        organism
            .validate()
            .map_err(|e| BuilderError::InvalidParameter(format!("organism: {e}")))?;

        if self.max_steps == 0 {
            return Err(BuilderError::InvalidParameter(
                "max_steps must be greater than 0".to_string(),
            ));
        }
        if let Some(step) = self.step_size {
            if step <= 0 {
                return Err(BuilderError::InvalidParameter(format!(
                    "step_size must be positive, got {step}"
                )));
            }
        }

        let template = match self.template {
            Some(TemplateInput::Sequence(sequence)) => sequence,
            Some(TemplateInput::Random(length)) => {
                DnaSequence::random(length, &mut rng).as_str().to_string()
            }
            None => return Err(BuilderError::MissingRequired("sequence")),
        };

        let coordinator = ForkCoordinator::new(template.as_str(), organism, rng)?
            .with_step_size(self.step_size)
            .with_max_steps(self.max_steps);
        Ok(coordinator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FixedUniform;
    use crate::simulation::OrganismSpec;

    #[test]
    fn test_builder_basic() {
        let coordinator = ReplicationBuilder::new()
            .organism(OrganismProfile::human())
            .sequence("ACGTACGTAC")
            .build()
            .unwrap();
        assert_eq!(coordinator.total_length(), 10);
        assert_eq!(coordinator.max_steps(), DEFAULT_MAX_STEPS);
        assert_eq!(coordinator.step_size(), 1);
    }

    #[test]
    fn test_builder_missing_organism() {
        let result = ReplicationBuilder::new().sequence_length(100).build();
        assert!(matches!(
            result,
            Err(BuilderError::MissingRequired("organism"))
        ));
    }

    #[test]
    fn test_builder_missing_sequence() {
        let result = ReplicationBuilder::new()
            .organism(OrganismProfile::e_coli())
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::MissingRequired("sequence"))
        ));
    }

    #[test]
    fn test_builder_rejects_bad_parameters() {
        let base = ReplicationBuilder::new()
            .organism(OrganismProfile::e_coli())
            .sequence_length(100);

        assert!(matches!(
            base.clone().max_steps(0).build(),
            Err(BuilderError::InvalidParameter(_))
        ));
        let err = base.step_size(0).build().unwrap_err();
        assert!(err.to_string().contains("step_size"));
    }

    #[test]
    fn test_builder_random_template_is_seeded() {
        let build = || {
            ReplicationBuilder::new()
                .organism(OrganismProfile::e_coli())
                .sequence_length(3000)
                .seed(11)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        a.run().unwrap();
        b.run().unwrap();
        assert_eq!(a.events(), b.events());
        assert_eq!(
            a.completed_fragments()[0].sequence(),
            b.completed_fragments()[0].sequence()
        );
    }

    #[test]
    fn test_builder_with_fixed_source() {
        let mut coordinator = ReplicationBuilder::new()
            .organism(OrganismProfile::human())
            .sequence(&"A".repeat(500))
            .step_size(50)
            .build_with_source(FixedUniform::new(vec![100, 3, 0, 0, 0]))
            .unwrap();
        coordinator.run().unwrap();
        assert_eq!(coordinator.steps_taken(), 10);
        assert_eq!(coordinator.completed_fragments().len(), 5);
        assert_eq!(
            coordinator.completed_fragments()[0].sequence(),
            Some("T".repeat(100).as_str())
        );
    }

    #[test]
    fn test_from_config() {
        let config = ReplicationConfig {
            organism: OrganismSpec::Preset("yeast".to_string()),
            seed: Some(5),
            max_steps: 20,
            step_size: Some(10),
        };
        let coordinator = ReplicationBuilder::from_config(&config)
            .unwrap()
            .sequence_length(100)
            .build()
            .unwrap();
        assert_eq!(coordinator.organism(), &OrganismProfile::yeast());
        assert_eq!(coordinator.max_steps(), 20);
        assert_eq!(coordinator.step_size(), 10);
    }
}
