use std::fmt;

use serde::{Deserialize, Serialize};

use super::RnaPrimer;
use crate::base::{OrganismProfile, UniformSource};
use crate::errors::FragmentError;

/// Hard lower bound on fragment length, independent of organism.
pub const MIN_FRAGMENT_LENGTH: i64 = 10;
/// Hard upper bound on fragment length, independent of organism.
pub const MAX_FRAGMENT_LENGTH: i64 = 10_000;

/// Next processing step for a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStep {
    RemovePrimer,
    Ligate,
}

/// Processing progress of one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub primer_removed: bool,
    pub ligated: bool,
    pub complete: bool,
    /// `None` once the fragment is complete.
    pub next_step: Option<ProcessingStep>,
}

/// A discontinuously synthesized lagging-strand segment.
///
/// A fragment covers the half-open interval `[start, end)` and moves through
/// `unprocessed -> primer removed -> ligated`. Once both flags are set it is
/// complete and no further mutation is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkazakiFragment {
    id: String,
    start_position: i64,
    end_position: i64,
    primer: RnaPrimer,
    primer_removed: bool,
    ligated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sequence: Option<String>,
}

impl OkazakiFragment {
    /// Create an unprocessed fragment.
    ///
    /// Fails when the id is blank, `start` is negative, `end <= start`, or the
    /// length lies outside `[MIN_FRAGMENT_LENGTH, MAX_FRAGMENT_LENGTH]`.
    ///
    /// ```
    /// use replisome_sim::fragment::{OkazakiFragment, RnaPrimer};
    ///
    /// let err = OkazakiFragment::new("short", 0, 5, RnaPrimer::new("ACGU", 0)).unwrap_err();
    /// assert_eq!(err.to_string(), "Fragment too short: 5 bp. Minimum: 10 bp");
    /// ```
    pub fn new(
        id: impl Into<String>,
        start_position: i64,
        end_position: i64,
        primer: RnaPrimer,
    ) -> Result<Self, FragmentError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(FragmentError::EmptyId);
        }
        if start_position < 0 {
            return Err(FragmentError::NegativeStart(start_position));
        }
        if end_position <= start_position {
            return Err(FragmentError::InvalidRange {
                start: start_position,
                end: end_position,
            });
        }

        let length = end_position - start_position;
        if length < MIN_FRAGMENT_LENGTH {
            return Err(FragmentError::TooShort {
                length,
                min: MIN_FRAGMENT_LENGTH,
            });
        }
        if length > MAX_FRAGMENT_LENGTH {
            return Err(FragmentError::TooLong {
                length,
                max: MAX_FRAGMENT_LENGTH,
            });
        }

        Ok(Self {
            id,
            start_position,
            end_position,
            primer,
            primer_removed: false,
            ligated: false,
            sequence: None,
        })
    }

    /// Create a fragment at `start_position` with random length and primer.
    ///
    /// The fragment length is drawn uniformly from the organism's fragment
    /// size range and the primer length from its primer length range.
    pub fn generate_random<U: UniformSource + ?Sized>(
        id: impl Into<String>,
        start_position: i64,
        organism: &OrganismProfile,
        rng: &mut U,
    ) -> Result<Self, FragmentError> {
        let sizes = organism.fragment_size();
        let length = rng.uniform_in(sizes.min, sizes.max);

        let primers = organism.primer_length();
        let primer_length = rng.uniform_in(primers.min, primers.max);
        let primer = RnaPrimer::random(primer_length, start_position, rng);

        let end_position = start_position
            .checked_add(length)
            .ok_or(FragmentError::PositionOverflow {
                start: start_position,
                length,
            })?;
        Self::new(id, start_position, end_position, primer)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_position(&self) -> i64 {
        self.start_position
    }

    pub fn end_position(&self) -> i64 {
        self.end_position
    }

    /// Length in base pairs.
    pub fn length(&self) -> i64 {
        self.end_position - self.start_position
    }

    pub fn primer(&self) -> &RnaPrimer {
        &self.primer
    }

    pub fn is_primer_removed(&self) -> bool {
        self.primer_removed
    }

    pub fn is_ligated(&self) -> bool {
        self.ligated
    }

    pub fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref()
    }

    /// Mark the RNA primer as excised. Returns the primer length.
    pub fn remove_primer(&mut self) -> i64 {
        self.primer_removed = true;
        self.primer.len()
    }

    /// Seal the fragment into the growing lagging strand.
    pub fn ligate(&mut self) -> Result<(), FragmentError> {
        if !self.primer_removed {
            return Err(FragmentError::PrimerNotRemoved(self.id.clone()));
        }
        self.ligated = true;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.primer_removed && self.ligated
    }

    pub fn needs_processing(&self) -> bool {
        !self.is_complete()
    }

    pub fn processing_status(&self) -> ProcessingStatus {
        let next_step = if !self.primer_removed {
            Some(ProcessingStep::RemovePrimer)
        } else if !self.ligated {
            Some(ProcessingStep::Ligate)
        } else {
            None
        };

        ProcessingStatus {
            primer_removed: self.primer_removed,
            ligated: self.ligated,
            complete: self.is_complete(),
            next_step,
        }
    }

    /// True if the half-open intervals `[start, end)` intersect.
    pub fn overlaps_with(&self, other: &OkazakiFragment) -> bool {
        self.start_position < other.end_position && other.start_position < self.end_position
    }

    /// True if `other` starts exactly where this fragment ends.
    ///
    /// Directional: `a.is_adjacent_to(b)` does not imply `b.is_adjacent_to(a)`.
    pub fn is_adjacent_to(&self, other: &OkazakiFragment) -> bool {
        self.end_position == other.start_position
    }

    /// Attach the synthesized sequence. Its length must equal the fragment
    /// length.
    pub fn set_sequence(&mut self, sequence: impl Into<String>) -> Result<(), FragmentError> {
        let sequence = sequence.into();
        let actual = sequence.len() as i64;
        if actual != self.length() {
            return Err(FragmentError::SequenceLengthMismatch {
                expected: self.length(),
                actual,
            });
        }
        self.sequence = Some(sequence);
        Ok(())
    }

    /// Check the length against the organism's expected fragment size.
    pub fn validate_for_organism(&self, organism: &OrganismProfile) -> Result<(), FragmentError> {
        let range = organism.fragment_size();
        let length = self.length();
        if !range.contains(length) {
            return Err(FragmentError::OutsideOrganismRange {
                length,
                organism: organism.name().to_string(),
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }

    pub fn summary(&self) -> FragmentSummary {
        FragmentSummary {
            id: self.id.clone(),
            start_position: self.start_position,
            end_position: self.end_position,
            length: self.length(),
            primer_length: self.primer.len(),
            status: self.processing_status(),
        }
    }
}

impl fmt::Display for OkazakiFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}) {} bp",
            self.id,
            self.start_position,
            self.end_position,
            self.length()
        )
    }
}

/// Lightweight fragment description used in runtime snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSummary {
    pub id: String,
    pub start_position: i64,
    pub end_position: i64,
    pub length: i64,
    pub primer_length: i64,
    pub status: ProcessingStatus,
}
