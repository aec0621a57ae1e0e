//! Repository listings backed by the `repositories` table.

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::repo::Repo;
use crate::domain::search::{OrderBy, SortDirection, SortField};
use crate::models::repo::Repo as DbRepo;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, RepoListQuery, RepoReader, RepoVisibility, contains_pattern, into_domain,
    row_count,
};
use crate::schema::repositories;

type BoxedRepoQuery<'a> = repositories::BoxedQuery<'a, Sqlite>;

/// Rows the viewer may see, optionally narrowed to names containing `search`.
fn visible<'a>(visibility: &RepoVisibility, search: Option<&str>) -> BoxedRepoQuery<'a> {
    let mut query = repositories::table.into_boxed();

    if !visibility.include_private {
        query = match visibility.viewer {
            Some(viewer) => query.filter(
                repositories::is_private
                    .eq(false)
                    .or(repositories::owner_id.eq(viewer.get())),
            ),
            None => query.filter(repositories::is_private.eq(false)),
        };
    }

    if let Some(term) = search {
        query = query.filter(repositories::name.like(contains_pattern(term)));
    }

    query
}

fn ordered(query: BoxedRepoQuery<'_>, order: Option<OrderBy>) -> BoxedRepoQuery<'_> {
    use SortDirection::{Asc, Desc};

    let order = order.unwrap_or(OrderBy::new(SortField::CreatedAt, Desc));
    let query = match (order.field, order.direction) {
        (SortField::Id, Asc) => query.order(repositories::id.asc()),
        (SortField::Id, Desc) => query.order(repositories::id.desc()),
        (SortField::CreatedAt, Asc) => query.order(repositories::created_at.asc()),
        (SortField::CreatedAt, Desc) => query.order(repositories::created_at.desc()),
        (SortField::UpdatedAt, Asc) => query.order(repositories::updated_at.asc()),
        (SortField::UpdatedAt, Desc) => query.order(repositories::updated_at.desc()),
        (SortField::Name, Asc) => query.order(repositories::name.asc()),
        (SortField::Name, Desc) => query.order(repositories::name.desc()),
    };

    // Ties on the sort column keep a stable order across pages.
    match order.direction {
        Asc => query.then_order_by(repositories::id.asc()),
        Desc => query.then_order_by(repositories::id.desc()),
    }
}

/// One page of visible rows, optionally narrowed to `search` matches.
fn load_repos(
    conn: &mut SqliteConnection,
    query: &RepoListQuery,
    search: Option<&str>,
) -> RepositoryResult<Vec<Repo>> {
    let mut items = ordered(visible(&query.visibility, search), query.order);
    if let Some(pagination) = &query.pagination {
        items = items.limit(pagination.limit()).offset(pagination.offset());
    }

    let rows = items.load::<DbRepo>(conn)?;

    into_domain(rows)
}

fn count_visible(
    conn: &mut SqliteConnection,
    visibility: &RepoVisibility,
    search: Option<&str>,
) -> RepositoryResult<usize> {
    let total: i64 = visible(visibility, search).count().get_result(conn)?;
    row_count(total)
}

impl RepoReader for DieselRepository {
    fn count_repos(&self, visibility: &RepoVisibility) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        count_visible(&mut conn, visibility, None)
    }

    fn list_repos(&self, query: &RepoListQuery) -> RepositoryResult<Vec<Repo>> {
        let mut conn = self.conn()?;
        load_repos(&mut conn, query, None)
    }

    fn search_repos(&self, query: &RepoListQuery) -> RepositoryResult<(usize, Vec<Repo>)> {
        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;
        let search = query.search.as_deref();

        // Count and page share one read transaction so both see one snapshot.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = count_visible(conn, &query.visibility, search)?;
            let items = load_repos(conn, query, search)?;
            Ok((total, items))
        })
    }
}
