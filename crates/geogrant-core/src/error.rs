// crates/geogrant-core/src/error.rs

//! # Error Types
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is [`GrantError`]. Evaluation and grant errors carry the offending location
//! (and direction, where relevant) as structured fields, so callers branch on
//! [`GrantError::kind`] instead of parsing messages.

use crate::permission::Direction;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrantError>;

#[derive(Error, Debug)]
pub enum GrantError {
    /// The location string does not split into 1 to 3 non-empty components.
    #[error("malformed location '{location}': expected 1 to 3 hyphen-separated parts, got {components}")]
    MalformedLocation { location: String, components: usize },

    /// The location's country component is unknown to the reference store.
    #[error("invalid input country {0}")]
    InvalidLocation(String),

    /// The location is valid but the parent does not hold it in the matching direction.
    #[error("Parent distributor does not have access to grant permission: {0}")]
    NotAuthorized(String),

    #[error("permission already exists in {direction}: {location}")]
    DuplicateGrant {
        direction: Direction,
        location: String,
    },

    /// The location is already granted in the opposite direction.
    #[error("permission conflicts with existing {existing} entry: {location}")]
    ConflictingGrant {
        existing: Direction,
        location: String,
    },

    #[error("unknown distributor: {0}")]
    UnknownDistributor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Coarse classification of a [`GrantError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLocation,
    InvalidLocation,
    NotAuthorized,
    DuplicateGrant,
    ConflictingGrant,
    UnknownDistributor,
    Data,
    Io,
}

impl GrantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GrantError::MalformedLocation { .. } => ErrorKind::MalformedLocation,
            GrantError::InvalidLocation(_) => ErrorKind::InvalidLocation,
            GrantError::NotAuthorized(_) => ErrorKind::NotAuthorized,
            GrantError::DuplicateGrant { .. } => ErrorKind::DuplicateGrant,
            GrantError::ConflictingGrant { .. } => ErrorKind::ConflictingGrant,
            GrantError::UnknownDistributor(_) => ErrorKind::UnknownDistributor,
            GrantError::InvalidData(_) | GrantError::Bincode(_) => ErrorKind::Data,
            #[cfg(feature = "json")]
            GrantError::Json(_) => ErrorKind::Data,
            GrantError::NotFound(_) | GrantError::Io(_) => ErrorKind::Io,
        }
    }

    /// The location a grant or evaluation error refers to, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            GrantError::MalformedLocation { location, .. }
            | GrantError::DuplicateGrant { location, .. }
            | GrantError::ConflictingGrant { location, .. } => Some(location),
            GrantError::InvalidLocation(location) | GrantError::NotAuthorized(location) => {
                Some(location)
            }
            _ => None,
        }
    }
}
