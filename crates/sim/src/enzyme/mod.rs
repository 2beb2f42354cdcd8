//! Replication enzymes.
//!
//! Five enzyme kinds take part in replication: helicase, primase, DNA
//! polymerase (three variants), ligase and exonuclease. They all share the
//! [`Enzyme`] capability (a position on the template, an activity flag and an
//! organism-dependent speed) and each has its own action that produces a
//! [`ReplicationEvent`](crate::event::ReplicationEvent).
//!
//! The set of kinds is fixed. [`AnyEnzyme`] wraps them for code that needs to
//! hold a heterogeneous collection and match on the kind.

mod exonuclease;
mod factory;
mod helicase;
mod ligase;
mod polymerase;
mod primase;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::OrganismProfile;
use crate::errors::EnzymeError;

pub use exonuclease::Exonuclease;
pub use factory::EnzymeFactory;
pub use helicase::Helicase;
pub use ligase::Ligase;
pub use polymerase::Polymerase;
pub use primase::{Primase, MAX_PRIMER_LENGTH, MIN_PRIMER_LENGTH};

/// Kind of enzyme, as recorded on events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnzymeType {
    Helicase,
    Primase,
    Polymerase,
    Ligase,
    Exonuclease,
}

impl fmt::Display for EnzymeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Helicase => "helicase",
            Self::Primase => "primase",
            Self::Polymerase => "polymerase",
            Self::Ligase => "ligase",
            Self::Exonuclease => "exonuclease",
        };
        f.write_str(name)
    }
}

/// DNA polymerase variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolymeraseVariant {
    /// Fills gaps left by primer removal.
    PolI,
    /// Repair polymerase.
    PolII,
    /// Main replicative polymerase.
    PolIII,
}

impl PolymeraseVariant {
    /// Fraction of the organism's polymerase speed this variant achieves.
    pub const fn speed_factor(self) -> f64 {
        match self {
            Self::PolI => 0.05,
            Self::PolII => 0.04,
            Self::PolIII => 1.0,
        }
    }
}

impl fmt::Display for PolymeraseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolI => write!(f, "PolI"),
            Self::PolII => write!(f, "PolII"),
            Self::PolIII => write!(f, "PolIII"),
        }
    }
}

/// Position and activity shared by every enzyme.
///
/// The position is never negative: construction, [`EnzymeState::advance`] and
/// [`EnzymeState::move_to`] all reject inputs that would make it so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnzymeState {
    position: i64,
    active: bool,
}

impl EnzymeState {
    /// Active state at position 0.
    pub const fn origin() -> Self {
        Self {
            position: 0,
            active: true,
        }
    }

    /// New active state at `position`.
    pub fn new(position: i64) -> Result<Self, EnzymeError> {
        if position < 0 {
            return Err(EnzymeError::NegativePosition(position));
        }
        Ok(Self {
            position,
            active: true,
        })
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn advance(&mut self, distance: i64) -> Result<(), EnzymeError> {
        if distance < 0 {
            return Err(EnzymeError::NegativeDistance(distance));
        }
        self.position = self
            .position
            .checked_add(distance)
            .ok_or(EnzymeError::PositionOverflow {
                position: self.position,
                distance,
            })?;
        Ok(())
    }

    pub fn move_to(&mut self, position: i64) -> Result<(), EnzymeError> {
        if position < 0 {
            return Err(EnzymeError::NegativePosition(position));
        }
        self.position = position;
        Ok(())
    }
}

/// Capability shared by all enzyme kinds.
pub trait Enzyme {
    fn enzyme_type(&self) -> EnzymeType;

    fn state(&self) -> &EnzymeState;

    fn state_mut(&mut self) -> &mut EnzymeState;

    /// Fraction of the organism's polymerase speed this enzyme works at.
    fn speed_factor(&self) -> f64;

    /// Human readable name used in summaries.
    fn label(&self) -> String {
        self.enzyme_type().to_string()
    }

    /// Speed in nucleotides per second for `organism`.
    fn speed(&self, organism: &OrganismProfile) -> f64 {
        organism.polymerase_speed() * self.speed_factor()
    }

    fn position(&self) -> i64 {
        self.state().position()
    }

    fn is_active(&self) -> bool {
        self.state().is_active()
    }

    fn activate(&mut self) {
        self.state_mut().set_active(true);
    }

    fn deactivate(&mut self) {
        self.state_mut().set_active(false);
    }

    /// Every non-negative template position is workable in this model.
    fn can_operate(&self, position: i64) -> bool {
        position >= 0
    }

    fn advance(&mut self, distance: i64) -> Result<(), EnzymeError> {
        self.state_mut().advance(distance)
    }

    fn move_to(&mut self, position: i64) -> Result<(), EnzymeError> {
        self.state_mut().move_to(position)
    }

    fn summary(&self) -> EnzymeSummary {
        EnzymeSummary {
            enzyme: self.enzyme_type(),
            label: self.label(),
            position: self.position(),
            active: self.is_active(),
        }
    }
}

/// Snapshot of one enzyme for state reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnzymeSummary {
    pub enzyme: EnzymeType,
    pub label: String,
    pub position: i64,
    pub active: bool,
}

/// Any one of the enzyme kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyEnzyme {
    Helicase(Helicase),
    Primase(Primase),
    Polymerase(Polymerase),
    Ligase(Ligase),
    Exonuclease(Exonuclease),
}

impl AnyEnzyme {
    /// Borrow the shared capability.
    pub fn as_enzyme(&self) -> &dyn Enzyme {
        match self {
            Self::Helicase(e) => e,
            Self::Primase(e) => e,
            Self::Polymerase(e) => e,
            Self::Ligase(e) => e,
            Self::Exonuclease(e) => e,
        }
    }

    /// Mutably borrow the shared capability.
    pub fn as_enzyme_mut(&mut self) -> &mut dyn Enzyme {
        match self {
            Self::Helicase(e) => e,
            Self::Primase(e) => e,
            Self::Polymerase(e) => e,
            Self::Ligase(e) => e,
            Self::Exonuclease(e) => e,
        }
    }
}

impl From<Helicase> for AnyEnzyme {
    fn from(e: Helicase) -> Self {
        Self::Helicase(e)
    }
}

impl From<Primase> for AnyEnzyme {
    fn from(e: Primase) -> Self {
        Self::Primase(e)
    }
}

impl From<Polymerase> for AnyEnzyme {
    fn from(e: Polymerase) -> Self {
        Self::Polymerase(e)
    }
}

impl From<Ligase> for AnyEnzyme {
    fn from(e: Ligase) -> Self {
        Self::Ligase(e)
    }
}

impl From<Exonuclease> for AnyEnzyme {
    fn from(e: Exonuclease) -> Self {
        Self::Exonuclease(e)
    }
}
