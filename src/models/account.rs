//! Diesel models representing user and organization accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::account::{Account as DomainAccount, AccountType};
use crate::domain::types::{AccountId, AccountName, TypeConstraintError, non_blank};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::accounts)]
/// Diesel model for [`crate::domain::account::Account`].
pub struct Account {
    pub id: i32,
    pub name: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub account_type: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::accounts)]
/// Insertable form of [`Account`].
pub struct NewAccount<'a> {
    pub name: &'a str,
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub account_type: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Account> for DomainAccount {
    type Error = TypeConstraintError;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AccountId::try_from(account.id)?,
            name: AccountName::new(account.name)?,
            full_name: non_blank(account.full_name),
            email: non_blank(account.email),
            account_type: AccountType::try_from(account.account_type)?,
            is_active: account.is_active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }
}
