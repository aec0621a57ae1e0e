//! Domain aggregates exposed by the explore service layer.

pub mod account;
pub mod repo;
pub mod search;
pub mod types;
