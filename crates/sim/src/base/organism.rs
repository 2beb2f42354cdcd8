//! Organism-specific replication parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// Broad organism classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganismClass {
    Prokaryote,
    Eukaryote,
}

impl fmt::Display for OrganismClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prokaryote => write!(f, "prokaryote"),
            Self::Eukaryote => write!(f, "eukaryote"),
        }
    }
}

/// Inclusive `[min, max]` range of lengths in bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i64,
    pub max: i64,
}

impl SizeRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Return true if `value` lies within the range (bounds included).
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ProfileError> {
        if self.min <= 0 || self.max <= 0 || self.min > self.max {
            return Err(ProfileError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Replication parameters for one organism.
///
/// Profiles are immutable once built. Use one of the presets or
/// [`OrganismProfile::new`], which checks that the speed is positive and that
/// both ranges are positive with `min <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismProfile {
    name: String,
    class: OrganismClass,
    /// Replicative polymerase speed in nucleotides per second.
    polymerase_speed: f64,
    /// Expected Okazaki fragment length.
    fragment_size: SizeRange,
    /// RNA primer length laid down by primase.
    primer_length: SizeRange,
}

impl OrganismProfile {
    pub fn new(
        name: impl Into<String>,
        class: OrganismClass,
        polymerase_speed: f64,
        fragment_size: SizeRange,
        primer_length: SizeRange,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            name: name.into(),
            class,
            polymerase_speed,
            fragment_size,
            primer_length,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Escherichia coli: fast polymerase, long fragments.
    pub fn e_coli() -> Self {
        Self {
            name: "E. coli".to_string(),
            class: OrganismClass::Prokaryote,
            polymerase_speed: 1000.0,
            fragment_size: SizeRange::new(1000, 2000),
            primer_length: SizeRange::new(3, 10),
        }
    }

    /// Homo sapiens: slow polymerase, short fragments.
    pub fn human() -> Self {
        Self {
            name: "Human".to_string(),
            class: OrganismClass::Eukaryote,
            polymerase_speed: 50.0,
            fragment_size: SizeRange::new(100, 200),
            primer_length: SizeRange::new(3, 10),
        }
    }

    /// Saccharomyces cerevisiae.
    pub fn yeast() -> Self {
        Self {
            name: "Yeast".to_string(),
            class: OrganismClass::Eukaryote,
            polymerase_speed: 60.0,
            fragment_size: SizeRange::new(100, 250),
            primer_length: SizeRange::new(8, 10),
        }
    }

    /// All built-in profiles.
    pub fn presets() -> Vec<Self> {
        vec![Self::e_coli(), Self::human(), Self::yeast()]
    }

    /// Check the data-model invariants.
    ///
    /// Presets always pass; deserialized profiles should be checked before use.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(self.polymerase_speed > 0.0) {
            return Err(ProfileError::NonPositiveSpeed(self.polymerase_speed));
        }
        self.fragment_size.validate("fragment size")?;
        self.primer_length.validate("primer length")?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> OrganismClass {
        self.class
    }

    pub fn polymerase_speed(&self) -> f64 {
        self.polymerase_speed
    }

    pub fn fragment_size(&self) -> SizeRange {
        self.fragment_size
    }

    pub fn primer_length(&self) -> SizeRange {
        self.primer_length
    }
}

impl fmt::Display for OrganismProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for OrganismProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e-coli" | "ecoli" | "e_coli" | "e. coli" => Ok(Self::e_coli()),
            "human" | "homo-sapiens" => Ok(Self::human()),
            "yeast" | "s-cerevisiae" => Ok(Self::yeast()),
            _ => Err(ProfileError::UnknownOrganism(s.to_string())),
        }
    }
}
