use chrono::Duration;
use pushkind_explore::domain::account::AccountType;
use pushkind_explore::domain::search::{ListingKind, OrderBy, SortDirection, SortField};
use pushkind_explore::domain::types::AccountId;
use pushkind_explore::repository::{
    AccountListQuery, AccountReader, DieselRepository, RepoListQuery, RepoReader, RepoVisibility,
};

mod common;

const INDIVIDUAL: i32 = 0;
const ORGANIZATION: i32 = 1;

fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| name(item).to_string()).collect()
}

#[test]
fn test_repo_visibility_and_counts() {
    let test_db = common::TestDb::new("test_repo_visibility_and_counts.db");
    let alice = test_db.account("alice", INDIVIDUAL, Duration::days(10));
    let bob = test_db.account("bob", INDIVIDUAL, Duration::days(9));
    test_db.repo(alice, "public-a", false, Duration::days(3));
    test_db.repo(alice, "secret-a", true, Duration::days(2));
    test_db.repo(bob, "public-b", false, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    let anonymous = RepoVisibility::default();
    assert_eq!(repo.count_repos(&anonymous).unwrap(), 2);
    let items = repo.list_repos(&RepoListQuery::new(anonymous)).unwrap();
    assert_eq!(
        names(&items, |r| r.name.as_str()),
        vec!["public-b", "public-a"]
    );

    let as_alice = RepoVisibility {
        include_private: false,
        viewer: AccountId::new(alice).ok(),
    };
    assert_eq!(repo.count_repos(&as_alice).unwrap(), 3);

    let as_bob = RepoVisibility {
        include_private: false,
        viewer: AccountId::new(bob).ok(),
    };
    assert_eq!(repo.count_repos(&as_bob).unwrap(), 2);

    let everything = RepoVisibility {
        include_private: true,
        viewer: None,
    };
    assert_eq!(repo.count_repos(&everything).unwrap(), 3);
}

#[test]
fn test_repo_ordering_and_pagination() {
    let test_db = common::TestDb::new("test_repo_ordering_and_pagination.db");
    let owner = test_db.account("owner", INDIVIDUAL, Duration::days(30));
    for (age, name) in ["delta", "alpha", "echo", "charlie", "bravo"]
        .into_iter()
        .enumerate()
    {
        test_db.repo(owner, name, false, Duration::days(age as i64 + 1));
    }

    let repo = DieselRepository::new(test_db.pool());
    let visibility = RepoVisibility::default();

    let alphabetical = OrderBy::resolve("alphabetically", ListingKind::Repository);
    let first = repo
        .list_repos(
            &RepoListQuery::new(visibility)
                .order_by(alphabetical)
                .paginate(1, 2),
        )
        .unwrap();
    assert_eq!(names(&first, |r| r.name.as_str()), vec!["alpha", "bravo"]);

    let third = repo
        .list_repos(
            &RepoListQuery::new(visibility)
                .order_by(alphabetical)
                .paginate(3, 2),
        )
        .unwrap();
    assert_eq!(names(&third, |r| r.name.as_str()), vec!["echo"]);

    let past_end = repo
        .list_repos(
            &RepoListQuery::new(visibility)
                .order_by(alphabetical)
                .paginate(4, 2),
        )
        .unwrap();
    assert!(past_end.is_empty());

    let oldest = repo
        .list_repos(
            &RepoListQuery::new(visibility)
                .order_by(OrderBy::resolve("oldest", ListingKind::Repository))
                .paginate(1, 1),
        )
        .unwrap();
    assert_eq!(names(&oldest, |r| r.name.as_str()), vec!["bravo"]);

    let newest = repo
        .list_repos(&RepoListQuery::new(visibility).order_by(OrderBy::new(
            SortField::CreatedAt,
            SortDirection::Desc,
        )))
        .unwrap();
    assert_eq!(newest[0].name.as_str(), "delta");
}

#[test]
fn test_repo_search_counts_matches_not_page() {
    let test_db = common::TestDb::new("test_repo_search_counts_matches_not_page.db");
    let owner = test_db.account("owner", INDIVIDUAL, Duration::days(30));
    test_db.repo(owner, "tea-api", false, Duration::days(4));
    test_db.repo(owner, "TEA-web", false, Duration::days(3));
    test_db.repo(owner, "teapot", false, Duration::days(2));
    test_db.repo(owner, "tea-private", true, Duration::days(1));
    test_db.repo(owner, "coffee", false, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    let (total, items) = repo
        .search_repos(
            &RepoListQuery::new(RepoVisibility::default())
                .order_by(OrderBy::resolve("alphabetically", ListingKind::Repository))
                .search("Tea")
                .paginate(1, 2),
        )
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|r| !r.is_private));
    assert!(
        items
            .iter()
            .all(|r| r.name.as_str().to_lowercase().contains("tea"))
    );
}

#[test]
fn test_account_type_filter_and_ordering() {
    let test_db = common::TestDb::new("test_account_type_filter_and_ordering.db");
    test_db.account("zed", INDIVIDUAL, Duration::days(5));
    test_db.account("amy", INDIVIDUAL, Duration::days(4));
    test_db.account("acme", ORGANIZATION, Duration::days(3));
    test_db.account("globex", ORGANIZATION, Duration::days(2));
    test_db.account("initech", ORGANIZATION, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(repo.count_accounts(AccountType::Individual).unwrap(), 2);
    assert_eq!(repo.count_accounts(AccountType::Organization).unwrap(), 3);

    let newest = repo
        .list_accounts(
            &AccountListQuery::new(AccountType::Organization)
                .order_by(OrderBy::resolve("", ListingKind::Account)),
        )
        .unwrap();
    assert_eq!(
        names(&newest, |a| a.name.as_str()),
        vec!["initech", "globex", "acme"]
    );
    assert!(
        newest
            .iter()
            .all(|a| a.account_type == AccountType::Organization)
    );

    let reversed = repo
        .list_accounts(
            &AccountListQuery::new(AccountType::Individual)
                .order_by(OrderBy::resolve(
                    "reversealphabetically",
                    ListingKind::Account,
                ))
                .paginate(2, 1),
        )
        .unwrap();
    assert_eq!(names(&reversed, |a| a.name.as_str()), vec!["amy"]);
}

#[test]
fn test_account_search_by_name_and_email() {
    let test_db = common::TestDb::new("test_account_search_by_name_and_email.db");
    test_db.account("octocat", INDIVIDUAL, Duration::days(3));
    test_db.account("hubot", INDIVIDUAL, Duration::days(2));
    test_db.account("octo-org", ORGANIZATION, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    let (total, items) = repo
        .search_accounts(&AccountListQuery::new(AccountType::Individual).search("octo"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "octocat");

    // Every seeded address ends in example.com.
    let (by_name, _) = repo
        .search_accounts(&AccountListQuery::new(AccountType::Individual).search("example"))
        .unwrap();
    assert_eq!(by_name, 0);

    let (by_email, items) = repo
        .search_accounts(
            &AccountListQuery::new(AccountType::Individual)
                .search("example")
                .search_by_email(true),
        )
        .unwrap();
    assert_eq!(by_email, 2);
    assert_eq!(items.len(), 2);
}

#[test]
fn test_get_account_by_id() {
    let test_db = common::TestDb::new("test_get_account_by_id.db");
    let id = test_db.account("solo", INDIVIDUAL, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    let found = repo
        .get_account_by_id(AccountId::new(id).unwrap())
        .unwrap()
        .expect("account exists");
    assert_eq!(found.name.as_str(), "solo");
    assert_eq!(found.email.as_deref(), Some("solo@example.com"));

    let missing = repo.get_account_by_id(AccountId::new(id + 100).unwrap()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_search_finds_non_ascii_names_as_stored() {
    let test_db = common::TestDb::new("test_search_finds_non_ascii_names_as_stored.db");
    let owner = test_db.account("Жора", INDIVIDUAL, Duration::days(2));
    test_db.repo(owner, "Ёжик", false, Duration::days(1));
    test_db.repo(owner, "hedgehog", false, Duration::days(1));

    let repo = DieselRepository::new(test_db.pool());

    let (total, items) = repo
        .search_repos(&RepoListQuery::new(RepoVisibility::default()).search("Ёжик"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Ёжик");

    let (total, items) = repo
        .search_accounts(&AccountListQuery::new(AccountType::Individual).search("Жора"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Жора");

    // ASCII case folding still applies.
    let (total, _) = repo
        .search_repos(&RepoListQuery::new(RepoVisibility::default()).search("HEDGE"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_search_total_agrees_with_loaded_rows() {
    let test_db = common::TestDb::new("test_search_total_agrees_with_loaded_rows.db");
    let owner = test_db.account("owner", INDIVIDUAL, Duration::days(10));
    for (age, name) in ["lib-core", "lib-http", "lib-cli", "app"].into_iter().enumerate() {
        test_db.repo(owner, name, false, Duration::days(age as i64 + 1));
    }
    test_db.account("libby", INDIVIDUAL, Duration::days(3));
    test_db.account("liberty", ORGANIZATION, Duration::days(2));

    let repo = DieselRepository::new(test_db.pool());

    let (total, items) = repo
        .search_repos(
            &RepoListQuery::new(RepoVisibility::default())
                .search("lib")
                .paginate(1, 10),
        )
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), total);

    let (total, items) = repo
        .search_accounts(
            &AccountListQuery::new(AccountType::Individual)
                .search("lib")
                .paginate(1, 10),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items.len(), total);
    assert_eq!(items[0].name.as_str(), "libby");
}
