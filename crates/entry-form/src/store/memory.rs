//! In-memory reference store

use async_trait::async_trait;

use super::{AddressMasterRecord, ReferenceStore};
use crate::error::Result;

/// Store backed by vectors, for tests and fixtures
///
/// Contents are fixed once built, so lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    addresses: Vec<AddressMasterRecord>,
    users: Vec<(i64, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, record: AddressMasterRecord) -> Self {
        self.addresses.push(record);
        self
    }

    pub fn with_user(mut self, id: i64, email: impl Into<String>) -> Self {
        self.users.push((id, email.into()));
        self
    }

    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl ReferenceStore for MemoryStore {
    async fn address_exists(&self, postal_code: &str, prefecture: &str, city_town: &str) -> Result<bool> {
        Ok(self
            .addresses
            .iter()
            .any(|record| record.matches(postal_code, prefecture, city_town)))
    }

    async fn email_registered(&self, email: &str, exclude_user_id: Option<i64>) -> Result<bool> {
        Ok(self
            .users
            .iter()
            .any(|(id, registered)| registered == email && Some(*id) != exclude_user_id))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
