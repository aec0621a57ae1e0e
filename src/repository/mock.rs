//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::account::{Account, AccountType};
use crate::domain::repo::Repo;
use crate::domain::types::AccountId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AccountListQuery, AccountReader, RepoListQuery, RepoReader, RepoVisibility};

mock! {
    pub Repository {}

    impl RepoReader for Repository {
        fn count_repos(&self, visibility: &RepoVisibility) -> RepositoryResult<usize>;
        fn list_repos(&self, query: &RepoListQuery) -> RepositoryResult<Vec<Repo>>;
        fn search_repos(&self, query: &RepoListQuery) -> RepositoryResult<(usize, Vec<Repo>)>;
    }

    impl AccountReader for Repository {
        fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>>;
        fn count_accounts(&self, account_type: AccountType) -> RepositoryResult<usize>;
        fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<Vec<Account>>;
        fn search_accounts(
            &self,
            query: &AccountListQuery,
        ) -> RepositoryResult<(usize, Vec<Account>)>;
    }
}
