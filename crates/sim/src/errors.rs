use std::fmt;

use thiserror::Error;

use crate::enzyme::PolymeraseVariant;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl std::error::Error for InvalidNucleotide {}

/// Error type for failures when constructing a `DnaSequence`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid nucleotide.
    #[error("Invalid character in sequence: '{0}'")]
    InvalidChar(char),

    /// No sequence record was found in the input.
    #[error("No sequence found in input")]
    EmptyInput,
}

/// Errors raised while validating an organism profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Polymerase speed must be positive: {0}")]
    NonPositiveSpeed(f64),
    #[error("Invalid {name} range: [{min}, {max}] (values must be positive and min <= max)")]
    InvalidRange {
        name: &'static str,
        min: i64,
        max: i64,
    },
    #[error("Unknown organism: {0}. Available: e-coli, human, yeast")]
    UnknownOrganism(String),
}

/// Errors produced by enzyme construction and enzyme actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnzymeError {
    #[error("Position cannot be negative: {0}")]
    NegativePosition(i64),
    #[error("Distance cannot be negative: {0}")]
    NegativeDistance(i64),
    #[error("Moving {distance} bp from position {position} overflows the position range")]
    PositionOverflow { position: i64, distance: i64 },
    #[error("Primer length must be between 3 and 10 nucleotides, got {0}")]
    InvalidPrimerLength(i64),
    #[error("{variant} synthesis requires a positive number of base pairs, got {base_pairs}")]
    NonPositiveSynthesis {
        variant: PolymeraseVariant,
        base_pairs: i64,
    },
    /// Wraps a construction failure raised by the enzyme factory.
    #[error("Failed to create {variant}: {message}")]
    Creation {
        variant: &'static str,
        message: String,
    },
}

/// Errors produced by Okazaki fragment validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("Fragment ID cannot be empty")]
    EmptyId,
    #[error("Start position cannot be negative: {0}")]
    NegativeStart(i64),
    #[error("End position ({end}) must be greater than start position ({start})")]
    InvalidRange { start: i64, end: i64 },
    #[error("Fragment of {length} bp starting at {start} overflows the position range")]
    PositionOverflow { start: i64, length: i64 },
    #[error("Fragment too short: {length} bp. Minimum: {min} bp")]
    TooShort { length: i64, min: i64 },
    #[error("Fragment too long: {length} bp. Maximum: {max} bp")]
    TooLong { length: i64, max: i64 },
    #[error("Cannot ligate fragment {0}: primer has not been removed")]
    PrimerNotRemoved(String),
    #[error("Sequence length ({actual}) does not match fragment length ({expected})")]
    SequenceLengthMismatch { expected: i64, actual: i64 },
    #[error(
        "Fragment length {length} bp is outside the expected range for {organism}: {min}-{max} bp"
    )]
    OutsideOrganismRange {
        length: i64,
        organism: String,
        min: i64,
        max: i64,
    },
}

/// Errors produced by the leading- and lagging-strand managers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("Primer position cannot be negative: {0}")]
    NegativePrimerPosition(i64),
    #[error("Fork position cannot be negative: {0}")]
    NegativeForkPosition(i64),
    #[error("Failed to initiate first fragment: {0}")]
    FirstFragment(String),
    #[error("Failed to initiate fragment: {0}")]
    NextFragment(String),
    #[error("Lagging strand is active but has no current fragment")]
    MissingFragment,
    #[error(transparent)]
    Enzyme(#[from] EnzymeError),
    #[error(transparent)]
    Fragment(#[from] FragmentError),
}

/// Errors produced by the fork, the replisome and the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    #[error("Invalid fork position {position} for template of length {total_length}")]
    InvalidForkPosition { position: i64, total_length: i64 },
    #[error("Failed to initialize leading strand: {0}")]
    LeadingInit(String),
    #[error("Failed to initialize lagging strand: {0}")]
    LaggingInit(String),
    #[error("Replication has already been initialized")]
    AlreadyInitialized,
    #[error("Base pairs to advance must be positive, got {0}")]
    NonPositiveAdvance(i64),
    #[error("Replication fork is already complete at position {position} of {total_length}")]
    AlreadyComplete { position: i64, total_length: i64 },
    #[error(
        "Replication did not complete: stopped at step {steps} after reaching the limit of {max_steps} steps"
    )]
    StepLimitExceeded { steps: usize, max_steps: usize },
    #[error(transparent)]
    Enzyme(#[from] EnzymeError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Errors that can occur while building a coordinator.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Replication(#[from] ReplicationError),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<ProfileError> for ConfigError {
    fn from(e: ProfileError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<InvalidSequence> for ConfigError {
    fn from(e: InvalidSequence) -> Self {
        Self::Validation(e.to_string())
    }
}
