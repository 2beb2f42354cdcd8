//! RNA primers and Okazaki fragments.

mod okazaki;
mod primer;

pub use okazaki::{
    FragmentSummary, OkazakiFragment, ProcessingStatus, ProcessingStep, MAX_FRAGMENT_LENGTH,
    MIN_FRAGMENT_LENGTH,
};
pub use primer::RnaPrimer;
