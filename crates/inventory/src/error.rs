use std::path::PathBuf;

use thiserror::Error;

use picker_core::DomainError;

use crate::reference::ReferenceKind;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure reading or assembling the inventory catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A stock record points at a reference row that does not exist.
    #[error("unresolved {kind} reference: id {id}")]
    UnresolvedReference { kind: ReferenceKind, id: u32 },

    /// The backing store cannot serve reads right now.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read catalog snapshot {}: {source}", .path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog snapshot: {0}")]
    SnapshotFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    pub(crate) fn poisoned(what: &str) -> Self {
        Self::Unavailable(format!("{what} lock poisoned"))
    }
}
