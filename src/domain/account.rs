use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountId, AccountName, TypeConstraintError};

/// Kind of account: a person or an organization owning repositories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    Individual,
    Organization,
}

impl AccountType {
    /// Value stored in the `accounts.account_type` column.
    pub const fn as_i32(self) -> i32 {
        match self {
            AccountType::Individual => 0,
            AccountType::Organization => 1,
        }
    }
}

impl TryFrom<i32> for AccountType {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountType::Individual),
            1 => Ok(AccountType::Organization),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown account type {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub account_type: AccountType,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
