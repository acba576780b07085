//! Reference data consulted by the DB-backed rules

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod memory;
pub mod sql;

pub use memory::MemoryStore;
pub use sql::{DatabaseType, SqlStore};

/// One row of the postal address master
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressMasterRecord {
    /// Seven digits, no hyphen
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    pub town: String,
}

impl AddressMasterRecord {
    pub fn new(
        postal_code: impl Into<String>,
        prefecture: impl Into<String>,
        city: impl Into<String>,
        town: impl Into<String>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            prefecture: prefecture.into(),
            city: city.into(),
            town: town.into(),
        }
    }

    /// Whether an already normalized submission falls under this row.
    /// The street number after city and town is not part of the master.
    pub fn matches(&self, postal_code: &str, prefecture: &str, city_town: &str) -> bool {
        self.postal_code == postal_code
            && self.prefecture == prefecture
            && city_town
                .strip_prefix(self.city.as_str())
                .is_some_and(|rest| rest.starts_with(self.town.as_str()))
    }
}

/// Read-only lookups behind address consistency and duplicate e-mail.
///
/// Callers pass normalized values: postal code without hyphen, city/town
/// without any whitespace.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Whether (postal code, prefecture, city + town) exists in the master
    async fn address_exists(&self, postal_code: &str, prefecture: &str, city_town: &str) -> Result<bool>;

    /// Whether a user other than `exclude_user_id` already has `email`
    async fn email_registered(&self, email: &str, exclude_user_id: Option<i64>) -> Result<bool>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S: ReferenceStore + ?Sized> ReferenceStore for Arc<S> {
    async fn address_exists(&self, postal_code: &str, prefecture: &str, city_town: &str) -> Result<bool> {
        (**self).address_exists(postal_code, prefecture, city_town).await
    }

    async fn email_registered(&self, email: &str, exclude_user_id: Option<i64>) -> Result<bool> {
        (**self).email_registered(email, exclude_user_id).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Placeholder for validators whose rules never reach the store.
/// Any lookup is a system error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

#[async_trait]
impl ReferenceStore for NoStore {
    async fn address_exists(&self, _postal_code: &str, _prefecture: &str, _city_town: &str) -> Result<bool> {
        Err(Error::StoreUnavailable("address consistency"))
    }

    async fn email_registered(&self, _email: &str, _exclude_user_id: Option<i64>) -> Result<bool> {
        Err(Error::StoreUnavailable("duplicate e-mail"))
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
