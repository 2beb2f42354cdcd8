//! Replication events.
//!
//! Every enzyme action yields one [`ReplicationEvent`]. The coordinator keeps
//! them in an append-only history; the sub-managers only hand back what they
//! produced in the current call.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enzyme::EnzymeType;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Unwind,
    PrimerSynthesis,
    DnaSynthesis,
    Ligation,
    Proofreading,
    PrimerRemoval,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Unwind,
        EventType::PrimerSynthesis,
        EventType::DnaSynthesis,
        EventType::Ligation,
        EventType::Proofreading,
        EventType::PrimerRemoval,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unwind => "unwind",
            Self::PrimerSynthesis => "primer_synthesis",
            Self::DnaSynthesis => "dna_synthesis",
            Self::Ligation => "ligation",
            Self::Proofreading => "proofreading",
            Self::PrimerRemoval => "primer_removal",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template strand an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Leading,
    Lagging,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leading => write!(f, "leading"),
            Self::Lagging => write!(f, "lagging"),
        }
    }
}

/// One recorded step of replication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub position: i64,
    pub enzyme: EnzymeType,
    pub strand: Strand,
    /// Net bases added; negative when bases are removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_pairs_added: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ReplicationEvent {
    pub fn new(kind: EventType, position: i64, enzyme: EnzymeType, strand: Strand) -> Self {
        Self {
            kind,
            position,
            enzyme,
            strand,
            base_pairs_added: None,
            fragment_id: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_base_pairs(mut self, base_pairs: i64) -> Self {
        self.base_pairs_added = Some(base_pairs);
        self
    }

    pub fn with_fragment(mut self, fragment_id: impl Into<String>) -> Self {
        self.fragment_id = Some(fragment_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata.insert(key.into(), value.to_string());
        self
    }
}
