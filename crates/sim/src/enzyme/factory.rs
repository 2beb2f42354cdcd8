use super::{
    AnyEnzyme, EnzymeType, Exonuclease, Helicase, Ligase, Polymerase, PolymeraseVariant, Primase,
};
use crate::errors::EnzymeError;

/// Validated constructors for every enzyme kind.
///
/// Each constructor runs the same validation as the type's own `new` and
/// reports a failure as `"Failed to create <variant>: <reason>"`.
///
/// ```
/// use replisome_sim::enzyme::EnzymeFactory;
///
/// let err = EnzymeFactory::helicase(-1).unwrap_err();
/// assert_eq!(err.to_string(), "Failed to create Helicase: Position cannot be negative: -1");
/// ```
pub struct EnzymeFactory;

impl EnzymeFactory {
    pub fn helicase(position: i64) -> Result<Helicase, EnzymeError> {
        Helicase::new(position).map_err(|e| creation_error("Helicase", e))
    }

    pub fn primase(position: i64) -> Result<Primase, EnzymeError> {
        Primase::new(position).map_err(|e| creation_error("Primase", e))
    }

    pub fn polymerase(
        position: i64,
        variant: PolymeraseVariant,
    ) -> Result<Polymerase, EnzymeError> {
        Polymerase::new(position, variant).map_err(|e| creation_error("Polymerase", e))
    }

    pub fn ligase(position: i64) -> Result<Ligase, EnzymeError> {
        Ligase::new(position).map_err(|e| creation_error("Ligase", e))
    }

    pub fn exonuclease(position: i64) -> Result<Exonuclease, EnzymeError> {
        Exonuclease::new(position).map_err(|e| creation_error("Exonuclease", e))
    }

    /// Build any enzyme kind. Polymerases are created as Pol III.
    pub fn create(kind: EnzymeType, position: i64) -> Result<AnyEnzyme, EnzymeError> {
        Ok(match kind {
            EnzymeType::Helicase => Self::helicase(position)?.into(),
            EnzymeType::Primase => Self::primase(position)?.into(),
            EnzymeType::Polymerase => Self::polymerase(position, PolymeraseVariant::PolIII)?.into(),
            EnzymeType::Ligase => Self::ligase(position)?.into(),
            EnzymeType::Exonuclease => Self::exonuclease(position)?.into(),
        })
    }
}

fn creation_error(variant: &'static str, source: impl ToString) -> EnzymeError {
    EnzymeError::Creation {
        variant,
        message: source.to_string(),
    }
}
