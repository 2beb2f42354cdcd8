use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::{Nucleotide, UniformSource};

/// Short RNA segment that gives polymerase a 3' end to extend.
///
/// The primer does not check its own length; primase enforces the 3-10 nt
/// range when it lays one down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RnaPrimer {
    sequence: String,
    position: i64,
}

impl RnaPrimer {
    pub fn new(sequence: impl Into<String>, position: i64) -> Self {
        Self {
            sequence: sequence.into(),
            position,
        }
    }

    /// Random primer of `length` ribonucleotides at `position`.
    pub fn random<U: UniformSource + ?Sized>(length: i64, position: i64, rng: &mut U) -> Self {
        let sequence = (0..length.max(0))
            .map(|_| Nucleotide::random(rng).to_rna_char())
            .collect::<String>();
        Self::new(sequence, position)
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Length in nucleotides.
    pub fn len(&self) -> i64 {
        self.sequence.len() as i64
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl fmt::Display for RnaPrimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "5'-{}-3' @{}", self.sequence, self.position)
    }
}
