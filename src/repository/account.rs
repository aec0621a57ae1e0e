//! Account listings backed by the `accounts` table.

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::account::{Account, AccountType};
use crate::domain::search::{OrderBy, SortDirection, SortField};
use crate::domain::types::AccountId;
use crate::models::account::Account as DbAccount;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AccountListQuery, AccountReader, DieselRepository, contains_pattern, into_domain, row_count,
};
use crate::schema::accounts;

type BoxedAccountQuery<'a> = accounts::BoxedQuery<'a, Sqlite>;

/// Accounts of one type, optionally narrowed to those matching `search`.
fn of_type<'a>(
    account_type: AccountType,
    search: Option<&str>,
    search_by_email: bool,
) -> BoxedAccountQuery<'a> {
    let mut query = accounts::table
        .filter(accounts::account_type.eq(account_type.as_i32()))
        .into_boxed();

    if let Some(term) = search {
        let pattern = contains_pattern(term);
        query = if search_by_email {
            query.filter(
                accounts::name
                    .like(pattern.clone())
                    .or(accounts::full_name.like(pattern.clone()))
                    .or(accounts::email.like(pattern)),
            )
        } else {
            query.filter(
                accounts::name
                    .like(pattern.clone())
                    .or(accounts::full_name.like(pattern)),
            )
        };
    }

    query
}

fn ordered(query: BoxedAccountQuery<'_>, order: Option<OrderBy>) -> BoxedAccountQuery<'_> {
    use SortDirection::{Asc, Desc};

    let order = order.unwrap_or(OrderBy::new(SortField::Id, Desc));
    let query = match (order.field, order.direction) {
        (SortField::Id, Asc) => query.order(accounts::id.asc()),
        (SortField::Id, Desc) => query.order(accounts::id.desc()),
        (SortField::CreatedAt, Asc) => query.order(accounts::created_at.asc()),
        (SortField::CreatedAt, Desc) => query.order(accounts::created_at.desc()),
        (SortField::UpdatedAt, Asc) => query.order(accounts::updated_at.asc()),
        (SortField::UpdatedAt, Desc) => query.order(accounts::updated_at.desc()),
        (SortField::Name, Asc) => query.order(accounts::name.asc()),
        (SortField::Name, Desc) => query.order(accounts::name.desc()),
    };

    match order.direction {
        Asc => query.then_order_by(accounts::id.asc()),
        Desc => query.then_order_by(accounts::id.desc()),
    }
}

/// One page of accounts of the query's type, optionally narrowed to `search`.
fn load_accounts(
    conn: &mut SqliteConnection,
    query: &AccountListQuery,
    search: Option<&str>,
) -> RepositoryResult<Vec<Account>> {
    let mut items = ordered(
        of_type(query.account_type, search, query.search_by_email),
        query.order,
    );
    if let Some(pagination) = &query.pagination {
        items = items.limit(pagination.limit()).offset(pagination.offset());
    }

    let rows = items.load::<DbAccount>(conn)?;

    into_domain(rows)
}

fn count_of_type(
    conn: &mut SqliteConnection,
    account_type: AccountType,
    search: Option<&str>,
    search_by_email: bool,
) -> RepositoryResult<usize> {
    let total: i64 = of_type(account_type, search, search_by_email)
        .count()
        .get_result(conn)?;
    row_count(total)
}

impl AccountReader for DieselRepository {
    fn get_account_by_id(&self, id: AccountId) -> RepositoryResult<Option<Account>> {
        let mut conn = self.conn()?;
        let db_account = accounts::table
            .find(id.get())
            .first::<DbAccount>(&mut conn)
            .optional()?;

        match db_account {
            Some(db_account) => Ok(Some(
                Account::try_from(db_account).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn count_accounts(&self, account_type: AccountType) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        count_of_type(&mut conn, account_type, None, false)
    }

    fn list_accounts(&self, query: &AccountListQuery) -> RepositoryResult<Vec<Account>> {
        let mut conn = self.conn()?;
        load_accounts(&mut conn, query, None)
    }

    fn search_accounts(
        &self,
        query: &AccountListQuery,
    ) -> RepositoryResult<(usize, Vec<Account>)> {
        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;
        let search = query.search.as_deref();

        // Count and page share one read transaction so both see one snapshot.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = count_of_type(conn, query.account_type, search, query.search_by_email)?;
            let items = load_accounts(conn, query, search)?;
            Ok((total, items))
        })
    }
}
