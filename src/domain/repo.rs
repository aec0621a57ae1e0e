use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::types::{AccountId, RepoId, RepoName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Repo {
    pub id: RepoId,
    pub owner_id: AccountId,
    pub name: RepoName,
    pub description: Option<String>,
    pub is_private: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Repository together with its owning account, as listings render it.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RepoWithOwner {
    pub repo: Repo,
    pub owner: Account,
}
