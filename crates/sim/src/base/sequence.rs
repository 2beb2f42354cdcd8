use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::{Nucleotide, UniformSource};
use crate::errors::{ConfigError, InvalidSequence};

/// Read-only access to a template sequence.
///
/// The replication core only ever asks for the template text and its length;
/// it never validates the alphabet itself.
pub trait SequenceSource {
    /// Borrow the template as text.
    fn sequence(&self) -> &str;

    /// Template length in bases.
    fn len(&self) -> usize {
        self.sequence().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SequenceSource for str {
    fn sequence(&self) -> &str {
        self
    }
}

impl SequenceSource for String {
    fn sequence(&self) -> &str {
        self.as_str()
    }
}

/// Validated DNA template.
///
/// Stored as uppercase ASCII so it can be handed out through
/// [`SequenceSource`] without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DnaSequence(String);

impl DnaSequence {
    /// Build a sequence from nucleotides.
    pub fn from_nucleotides(nucleotides: impl IntoIterator<Item = Nucleotide>) -> Self {
        Self(nucleotides.into_iter().map(Nucleotide::to_char).collect())
    }

    /// Generate a random template of `len` bases.
    pub fn random<U: UniformSource + ?Sized>(len: usize, rng: &mut U) -> Self {
        Self::from_nucleotides((0..len).map(|_| Nucleotide::random(rng)))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0
            .as_bytes()
            .get(index)
            .and_then(|&b| Nucleotide::from_ascii(b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base-wise complement, same orientation.
    pub fn complement(&self) -> Self {
        Self(complement_str(&self.0))
    }

    /// Complement read in the opposite direction.
    pub fn reverse_complement(&self) -> Self {
        Self(complement_str(&self.0).chars().rev().collect())
    }

    /// Parse the first record of a FASTA document.
    ///
    /// Returns the record identifier (first word of the header) and the
    /// concatenated sequence lines.
    pub fn parse_fasta(text: &str) -> Result<(String, Self), InvalidSequence> {
        let mut id: Option<String> = None;
        let mut seq = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                if id.is_some() {
                    // only the first record is used as a template
                    break;
                }
                id = Some(header.split_whitespace().next().unwrap_or("").to_string());
            } else {
                seq.push_str(line);
            }
        }

        if seq.is_empty() {
            return Err(InvalidSequence::EmptyInput);
        }

        Ok((id.unwrap_or_default(), seq.parse()?))
    }

    /// Read the first record of a FASTA file.
    pub fn read_fasta(path: impl AsRef<Path>) -> Result<(String, Self), ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse_fasta(&text)?)
    }
}

/// Complement each base of `text`; characters outside the alphabet become `N`.
pub fn complement_str(text: &str) -> String {
    text.bytes()
        .map(|b| {
            Nucleotide::from_ascii(b)
                .map(|n| n.complement().to_char())
                .unwrap_or('N')
        })
        .collect()
}

impl SequenceSource for DnaSequence {
    fn sequence(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DnaSequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .filter(|b| !matches!(b, b'U' | b'u'))
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_nucleotides)
    }
}
