//! Explore pages: repositories, users and organizations.

use crate::domain::account::AccountType;
use crate::domain::repo::RepoWithOwner;
use crate::domain::types::AccountId;
use crate::dto::explore::{AccountsPageData, ExploreQuery, ListingPage};
use crate::models::config::UiConfig;
use crate::repository::{AccountReader, RepoReader, RepoVisibility};
use crate::services::ServiceResult;
use crate::services::listing::{AccountSearchOptions, RepoSearchOptions, search_listing};

/// Lists public repositories, plus the viewer's own private ones.
pub fn explore_repositories<R>(
    repo: &R,
    viewer: Option<AccountId>,
    query: &ExploreQuery,
    ui: &UiConfig,
) -> ServiceResult<ListingPage<RepoWithOwner>>
where
    R: RepoReader + AccountReader + ?Sized,
{
    let options = RepoSearchOptions {
        reader: repo,
        page_size: ui.explore_paging_num,
        visibility: RepoVisibility {
            include_private: false,
            viewer,
        },
    };

    search_listing(&options, &query.into())
}

/// Lists individual user accounts.
pub fn explore_users<R>(
    repo: &R,
    query: &ExploreQuery,
    ui: &UiConfig,
) -> ServiceResult<AccountsPageData>
where
    R: AccountReader + ?Sized,
{
    explore_accounts(repo, AccountType::Individual, query, ui)
}

/// Lists organization accounts.
pub fn explore_organizations<R>(
    repo: &R,
    query: &ExploreQuery,
    ui: &UiConfig,
) -> ServiceResult<AccountsPageData>
where
    R: AccountReader + ?Sized,
{
    explore_accounts(repo, AccountType::Organization, query, ui)
}

fn explore_accounts<R>(
    repo: &R,
    account_type: AccountType,
    query: &ExploreQuery,
    ui: &UiConfig,
) -> ServiceResult<AccountsPageData>
where
    R: AccountReader + ?Sized,
{
    let options = AccountSearchOptions {
        reader: repo,
        page_size: ui.explore_paging_num,
        account_type,
        search_by_email: ui.search_by_email,
    };

    let accounts = search_listing(&options, &query.into())?;

    Ok(AccountsPageData {
        accounts,
        show_user_email: ui.show_user_email,
    })
}
