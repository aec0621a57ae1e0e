//! Interpretation of listing requests: page floors, sort tokens and keywords.
//!
//! Everything here is pure. The listing service combines these rules with the
//! data store to produce a result page.

use serde::Serialize;

/// Entity kind a listing operates on. Kinds differ in their default ordering
/// and in how a requested page number is normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    Repository,
    Account,
}

impl ListingKind {
    /// Normalizes a raw page number to a 1-based page.
    ///
    /// Repositories reset any `page <= 0`, accounts any `page <= 1`. Both
    /// yield the same page for every integer input.
    pub fn normalize_page(self, requested: i64) -> usize {
        let floored = match self {
            ListingKind::Repository if requested <= 0 => 1,
            ListingKind::Account if requested <= 1 => 1,
            _ => requested,
        };
        usize::try_from(floored).unwrap_or(usize::MAX)
    }
}

/// Returns `false` when the keyword embeds a NUL byte.
pub fn is_keyword_valid(keyword: &str) -> bool {
    !keyword.as_bytes().contains(&0)
}

/// Sort options offered by the explore pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortType {
    Newest,
    Oldest,
    RecentUpdate,
    LeastUpdate,
    ReverseAlphabetically,
    Alphabetically,
}

impl From<&str> for SortType {
    fn from(token: &str) -> Self {
        match token {
            "oldest" => SortType::Oldest,
            "recentupdate" => SortType::RecentUpdate,
            "leastupdate" => SortType::LeastUpdate,
            "reversealphabetically" => SortType::ReverseAlphabetically,
            "alphabetically" => SortType::Alphabetically,
            _ => SortType::Newest,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SortField {
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering directive handed to the data store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    pub field: SortField,
    pub direction: SortDirection,
}

impl OrderBy {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Maps a raw sort token to the ordering used for `kind`.
    ///
    /// Unknown tokens fall back to newest first: creation time for
    /// repositories, identifier for accounts.
    pub fn resolve(token: &str, kind: ListingKind) -> Self {
        use SortDirection::{Asc, Desc};

        let creation = match kind {
            ListingKind::Repository => SortField::CreatedAt,
            ListingKind::Account => SortField::Id,
        };

        match SortType::from(token) {
            SortType::Oldest => Self::new(creation, Asc),
            SortType::RecentUpdate => Self::new(SortField::UpdatedAt, Desc),
            SortType::LeastUpdate => Self::new(SortField::UpdatedAt, Asc),
            SortType::ReverseAlphabetically => Self::new(SortField::Name, Desc),
            SortType::Alphabetically => Self::new(SortField::Name, Asc),
            SortType::Newest => Self::new(creation, Desc),
        }
    }
}
