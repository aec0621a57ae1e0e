use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::account::{Account, AccountType};
use crate::domain::repo::Repo;
use crate::domain::search::OrderBy;
use crate::domain::types::{AccountId, TypeConstraintError};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod account;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod repo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        let skipped = self.page.saturating_sub(1).saturating_mul(self.per_page);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }
}

/// Which repositories a viewer may see in a listing.
///
/// Public repositories are always visible. Private ones are visible when
/// `include_private` is set or when the viewer owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepoVisibility {
    pub include_private: bool,
    pub viewer: Option<AccountId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoListQuery {
    pub visibility: RepoVisibility,
    pub order: Option<OrderBy>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountListQuery {
    pub account_type: AccountType,
    pub order: Option<OrderBy>,
    pub search: Option<String>,
    pub search_by_email: bool,
    pub pagination: Option<Pagination>,
}

impl RepoListQuery {
    pub fn new(visibility: RepoVisibility) -> Self {
        Self {
            visibility,
            order: None,
            search: None,
            pagination: None,
        }
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl AccountListQuery {
    pub fn new(account_type: AccountType) -> Self {
        Self {
            account_type,
            order: None,
            search: None,
            search_by_email: false,
            pagination: None,
        }
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn search_by_email(mut self, enabled: bool) -> Self {
        self.search_by_email = enabled;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait RepoReader {
    fn count_repos(&self, visibility: &RepoVisibility) -> RepositoryResult<usize>;
    fn list_repos(&self, query: &RepoListQuery) -> RepositoryResult<Vec<Repo>>;
    /// Matches `query.search` against repository names; returns the match
    /// count together with the requested page, both read from one snapshot.
    fn search_repos(&self, query: &RepoListQuery) -> RepositoryResult<(usize, Vec<Repo>)>;
}

pub trait AccountReader {
    fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>>;
    fn count_accounts(&self, account_type: AccountType) -> RepositoryResult<usize>;
    fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<Vec<Account>>;
    /// Matches `query.search` against names (and e-mails when enabled);
    /// returns the match count together with the requested page, both read
    /// from one snapshot.
    fn search_accounts(&self, query: &AccountListQuery)
    -> RepositoryResult<(usize, Vec<Account>)>;
}

/// Diesel-backed implementation of every reader trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Converts a row count returned by SQLite.
fn row_count(count: i64) -> RepositoryResult<usize> {
    usize::try_from(count)
        .map_err(|_| RepositoryError::Unexpected(format!("negative row count {count}")))
}

/// `LIKE` pattern matching the term anywhere in the column.
///
/// The term is kept as typed: SQLite `LIKE` folds ASCII case only, so
/// lowercasing would hide names with non-ASCII capitals.
fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

fn into_domain<D, T>(rows: Vec<D>) -> RepositoryResult<Vec<T>>
where
    T: TryFrom<D, Error = TypeConstraintError>,
{
    rows.into_iter()
        .map(|row| T::try_from(row).map_err(RepositoryError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_offsets_are_one_based() {
        let first = Pagination { page: 1, per_page: 10 };
        assert_eq!((first.limit(), first.offset()), (10, 0));

        let third = Pagination { page: 3, per_page: 10 };
        assert_eq!(third.offset(), 20);

        let huge = Pagination {
            page: usize::MAX,
            per_page: 50,
        };
        assert_eq!(huge.offset(), i64::MAX);
    }

    #[test]
    fn pattern_keeps_term_as_typed() {
        assert_eq!(contains_pattern("AcMe"), "%AcMe%");
        assert_eq!(contains_pattern("Ёжик"), "%Ёжик%");
    }
}
