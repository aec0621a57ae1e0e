//! Paginated, sortable, keyword-searchable listings.
//!
//! [`search_listing`] holds the whole request policy: page normalization, sort
//! resolution, keyword branching and pagination. What differs between entity
//! kinds is supplied by a [`ListingSource`]; the two provided here are
//! [`RepoSearchOptions`] and [`AccountSearchOptions`].

use crate::domain::account::{Account, AccountType};
use crate::domain::repo::{Repo, RepoWithOwner};
use crate::domain::search::{ListingKind, OrderBy, is_keyword_valid};
use crate::dto::explore::{ExploreQuery, ListingPage};
use crate::pagination::PageWindow;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AccountListQuery, AccountReader, RepoListQuery, RepoReader, RepoVisibility,
};
use crate::services::{ListingOperation, ServiceError, ServiceResult};

/// Listing parameters as they arrive from the client, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    pub page: i64,
    pub sort: &'a str,
    pub keyword: &'a str,
}

impl<'a> From<&'a ExploreQuery> for SearchRequest<'a> {
    fn from(query: &'a ExploreQuery) -> Self {
        Self {
            page: query.page(),
            sort: query.sort(),
            keyword: query.keyword(),
        }
    }
}

/// Normalized page, size and ordering passed to the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    pub order: OrderBy,
}

/// Capabilities one entity kind plugs into [`search_listing`].
pub trait ListingSource {
    /// Row type returned by the data store.
    type Item;
    /// Row type handed to the template after [`ListingSource::hydrate`].
    type Output;

    fn kind(&self) -> ListingKind;
    /// Listing name used in error reports, e.g. `repositories`.
    fn target(&self) -> &'static str;
    fn page_size(&self) -> usize;

    /// Size of the unfiltered collection.
    fn count(&self) -> RepositoryResult<usize>;
    /// One page of the unfiltered collection.
    fn list(&self, request: &PageRequest) -> RepositoryResult<Vec<Self::Item>>;
    /// One page of keyword matches together with the total match count.
    fn search(
        &self,
        request: &PageRequest,
        keyword: &str,
    ) -> RepositoryResult<(usize, Vec<Self::Item>)>;
    /// Completes fetched rows; the first failure aborts the listing.
    fn hydrate(&self, items: Vec<Self::Item>) -> ServiceResult<Vec<Self::Output>>;
}

/// Runs one listing request against `source`.
///
/// An empty keyword lists and counts the collection with two independent
/// calls. A keyword containing a NUL byte yields an empty page without
/// touching the store. Store failures are returned as
/// [`ServiceError::Storage`] and no partial page is produced.
pub fn search_listing<S>(
    source: &S,
    request: &SearchRequest,
) -> ServiceResult<ListingPage<S::Output>>
where
    S: ListingSource + ?Sized,
{
    let kind = source.kind();
    let page_size = source.page_size().max(1);
    let page_request = PageRequest {
        page: kind.normalize_page(request.page),
        page_size,
        order: OrderBy::resolve(request.sort, kind),
    };
    let keyword = request.keyword.trim();

    let storage_error = |operation: ListingOperation| {
        move |source_err: RepositoryError| ServiceError::Storage {
            operation,
            target: source.target(),
            source: source_err,
        }
    };

    let (total, mut items) = if keyword.is_empty() {
        let items = source
            .list(&page_request)
            .map_err(storage_error(ListingOperation::List))?;
        let total = source
            .count()
            .map_err(storage_error(ListingOperation::Count))?;
        (total, items)
    } else if is_keyword_valid(keyword) {
        source
            .search(&page_request, keyword)
            .map_err(storage_error(ListingOperation::Search))?
    } else {
        log::debug!("Dropping {} search with NUL byte in keyword", source.target());
        (0, Vec::new())
    };

    items.truncate(page_size);
    let items = source.hydrate(items)?;

    Ok(ListingPage {
        items,
        total,
        page: PageWindow::new(total, page_size, page_request.page),
        keyword: keyword.to_string(),
        sort_type: request.sort.to_string(),
    })
}

/// Repository listing; every row is completed with its owner.
pub struct RepoSearchOptions<'a, R: ?Sized> {
    pub reader: &'a R,
    pub page_size: usize,
    pub visibility: RepoVisibility,
}

impl<R> RepoSearchOptions<'_, R>
where
    R: ?Sized,
{
    fn query(&self, request: &PageRequest) -> RepoListQuery {
        RepoListQuery::new(self.visibility)
            .order_by(request.order)
            .paginate(request.page, request.page_size)
    }
}

impl<R> ListingSource for RepoSearchOptions<'_, R>
where
    R: RepoReader + AccountReader + ?Sized,
{
    type Item = Repo;
    type Output = RepoWithOwner;

    fn kind(&self) -> ListingKind {
        ListingKind::Repository
    }

    fn target(&self) -> &'static str {
        "repositories"
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn count(&self) -> RepositoryResult<usize> {
        self.reader.count_repos(&self.visibility)
    }

    fn list(&self, request: &PageRequest) -> RepositoryResult<Vec<Repo>> {
        self.reader.list_repos(&self.query(request))
    }

    fn search(
        &self,
        request: &PageRequest,
        keyword: &str,
    ) -> RepositoryResult<(usize, Vec<Repo>)> {
        self.reader.search_repos(&self.query(request).search(keyword))
    }

    fn hydrate(&self, items: Vec<Repo>) -> ServiceResult<Vec<RepoWithOwner>> {
        items
            .into_iter()
            .map(|repo| {
                let owner = self
                    .reader
                    .get_account_by_id(repo.owner_id)
                    .and_then(|owner| owner.ok_or(RepositoryError::NotFound))
                    .map_err(|source| ServiceError::OwnerLookup {
                        repo_id: repo.id,
                        source,
                    })?;
                Ok(RepoWithOwner { repo, owner })
            })
            .collect()
    }
}

/// User or organization listing, selected by `account_type`.
pub struct AccountSearchOptions<'a, R: ?Sized> {
    pub reader: &'a R,
    pub page_size: usize,
    pub account_type: AccountType,
    /// Let keywords match e-mail addresses as well as names.
    pub search_by_email: bool,
}

impl<R> AccountSearchOptions<'_, R>
where
    R: ?Sized,
{
    fn query(&self, request: &PageRequest) -> AccountListQuery {
        AccountListQuery::new(self.account_type)
            .order_by(request.order)
            .paginate(request.page, request.page_size)
    }
}

impl<R> ListingSource for AccountSearchOptions<'_, R>
where
    R: AccountReader + ?Sized,
{
    type Item = Account;
    type Output = Account;

    fn kind(&self) -> ListingKind {
        ListingKind::Account
    }

    fn target(&self) -> &'static str {
        match self.account_type {
            AccountType::Individual => "users",
            AccountType::Organization => "organizations",
        }
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn count(&self) -> RepositoryResult<usize> {
        self.reader.count_accounts(self.account_type)
    }

    fn list(&self, request: &PageRequest) -> RepositoryResult<Vec<Account>> {
        self.reader.list_accounts(&self.query(request))
    }

    fn search(
        &self,
        request: &PageRequest,
        keyword: &str,
    ) -> RepositoryResult<(usize, Vec<Account>)> {
        self.reader.search_accounts(
            &self
                .query(request)
                .search(keyword)
                .search_by_email(self.search_by_email),
        )
    }

    fn hydrate(&self, items: Vec<Account>) -> ServiceResult<Vec<Account>> {
        Ok(items)
    }
}
