//! DTO modules that bridge services with templates.

pub mod explore;
pub mod home;
