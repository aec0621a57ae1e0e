use std::fmt::Display;

use thiserror::Error;

use crate::domain::types::RepoId;
use crate::repository::errors::RepositoryError;

pub mod explore;
pub mod home;
pub mod listing;

/// Data-store operation a listing performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOperation {
    Count,
    List,
    Search,
}

impl Display for ListingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingOperation::Count => write!(f, "count"),
            ListingOperation::List => write!(f, "list"),
            ListingOperation::Search => write!(f, "search"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A count, list or search call failed; `target` names the listing.
    #[error("{operation} {target}: {source}")]
    Storage {
        operation: ListingOperation,
        target: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// The owner of a listed repository could not be loaded.
    #[error("owner of repository {repo_id}: {source}")]
    OwnerLookup {
        repo_id: RepoId,
        #[source]
        source: RepositoryError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;
