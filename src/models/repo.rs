//! Diesel models representing repositories.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::repo::Repo as DomainRepo;
use crate::domain::types::{AccountId, RepoId, RepoName, TypeConstraintError, non_blank};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::repositories)]
/// Diesel model for [`crate::domain::repo::Repo`].
pub struct Repo {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::repositories)]
/// Insertable form of [`Repo`].
pub struct NewRepo<'a> {
    pub owner_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_private: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Repo> for DomainRepo {
    type Error = TypeConstraintError;

    fn try_from(repo: Repo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RepoId::try_from(repo.id)?,
            owner_id: AccountId::try_from(repo.owner_id)?,
            name: RepoName::new(repo.name)?,
            description: non_blank(repo.description),
            is_private: repo.is_private,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        })
    }
}
