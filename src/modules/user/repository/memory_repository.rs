use super::UserRepository;
use crate::error::{Result, UserError};
use crate::modules::user::domain::User;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Process-local store backed by a concurrent map.
///
/// Nothing survives a restart; used in tests and with `USER_STORE=memory`.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: DashMap<String, User>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: &User) -> Result<()> {
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(UserError::Conflict {
                email: user.email.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut stored = self
            .users
            .get_mut(&user.email)
            .ok_or_else(|| UserError::NotFound {
                email: user.email.clone(),
            })?;
        stored.first_name = user.first_name.clone();
        stored.last_name = user.last_name.clone();
        Ok(())
    }
}
