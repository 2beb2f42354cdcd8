use crate::base::OrganismProfile;
use crate::errors::ReplicationError;

/// Overall progress of one replication fork along the template.
///
/// Invariant: `0 <= position <= total_length`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicationFork {
    position: i64,
    total_length: i64,
    organism: OrganismProfile,
}

impl ReplicationFork {
    pub fn new(
        position: i64,
        total_length: i64,
        organism: OrganismProfile,
    ) -> Result<Self, ReplicationError> {
        if position < 0 || position > total_length {
            return Err(ReplicationError::InvalidForkPosition {
                position,
                total_length,
            });
        }
        Ok(Self {
            position,
            total_length,
            organism,
        })
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn total_length(&self) -> i64 {
        self.total_length
    }

    pub fn organism(&self) -> &OrganismProfile {
        &self.organism
    }

    /// Bases still to be unwound.
    pub fn remaining(&self) -> i64 {
        self.total_length - self.position
    }

    /// Percentage of the template unwound. An empty template counts as done.
    pub fn completion_percentage(&self) -> f64 {
        if self.total_length <= 0 {
            return 100.0;
        }
        self.position as f64 / self.total_length as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.total_length
    }

    /// Move forward by up to `base_pairs`, never past the template end.
    /// Returns how far the fork actually moved.
    pub(crate) fn advance(&mut self, base_pairs: i64) -> i64 {
        let step = base_pairs.clamp(0, self.remaining());
        self.position += step;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enforces_bounds() {
        let organism = OrganismProfile::e_coli();
        assert!(ReplicationFork::new(0, 100, organism.clone()).is_ok());
        assert!(ReplicationFork::new(100, 100, organism.clone()).is_ok());
        assert_eq!(
            ReplicationFork::new(-1, 100, organism.clone()),
            Err(ReplicationError::InvalidForkPosition {
                position: -1,
                total_length: 100
            })
        );
        assert!(ReplicationFork::new(101, 100, organism).is_err());
    }

    #[test]
    fn test_completion() {
        let mut fork = ReplicationFork::new(0, 400, OrganismProfile::human()).unwrap();
        assert_eq!(fork.completion_percentage(), 0.0);
        assert!(!fork.is_complete());

        assert_eq!(fork.advance(100), 100);
        assert_eq!(fork.completion_percentage(), 25.0);

        assert_eq!(fork.advance(1000), 300);
        assert_eq!(fork.position(), 400);
        assert!(fork.is_complete());
        assert_eq!(fork.completion_percentage(), 100.0);
    }

    #[test]
    fn test_empty_template_is_complete() {
        let fork = ReplicationFork::new(0, 0, OrganismProfile::e_coli()).unwrap();
        assert!(fork.is_complete());
        assert_eq!(fork.completion_percentage(), 100.0);
    }
}
