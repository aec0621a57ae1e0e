//! DTOs shaped for the explore templates.

use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::pagination::PageWindow;

/// Raw `page`, `sort` and `q` query parameters.
///
/// Every field is kept as text so malformed values can be defaulted instead
/// of rejected.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct ExploreQuery {
    pub page: Option<String>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl ExploreQuery {
    /// Parses a URL query string; an unparsable string yields defaults.
    pub fn from_query_string(raw: &str) -> Self {
        serde_html_form::from_str(raw).unwrap_or_else(|err| {
            log::debug!("Ignoring malformed explore query {raw:?}: {err}");
            Self::default()
        })
    }

    /// Requested page; absent or non-numeric values read as `0`.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or_default()
    }

    pub fn keyword(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// One page of a listing plus the state echoed back to the template.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// Unfiltered count for plain listings, match count for searches.
    pub total: usize,
    pub page: PageWindow,
    /// Trimmed keyword.
    pub keyword: String,
    /// Sort token exactly as requested, recognised or not.
    pub sort_type: String,
}

/// Data required to render the users and organizations pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountsPageData {
    pub accounts: ListingPage<Account>,
    pub show_user_email: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_parameters() {
        let query = ExploreQuery::from_query_string("page=3&sort=oldest&q=tea%20pot");
        assert_eq!(query.page(), 3);
        assert_eq!(query.sort(), "oldest");
        assert_eq!(query.keyword(), "tea pot");
    }

    #[test]
    fn malformed_page_reads_as_zero() {
        assert_eq!(ExploreQuery::from_query_string("page=abc").page(), 0);
        assert_eq!(ExploreQuery::from_query_string("page=").page(), 0);
        assert_eq!(ExploreQuery::from_query_string("").page(), 0);
        assert_eq!(ExploreQuery::from_query_string("page=-4").page(), -4);
    }

    #[test]
    fn percent_encoded_nul_survives_parsing() {
        let query = ExploreQuery::from_query_string("q=ac%00me");
        assert_eq!(query.keyword(), "ac\0me");
    }
}
