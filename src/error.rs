use thiserror::Error;

use crate::element::ElementId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MirrorError {
    /// An operation ran before the state it depends on was in place.
    #[error("precondition failed: {0}")]
    Precondition(&'static str),
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),
    #[error("source node is already mirrored by element {0:?}")]
    DuplicateSource(ElementId),
    #[error("mirror already has root element {0:?}")]
    RootAlreadySet(ElementId),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
