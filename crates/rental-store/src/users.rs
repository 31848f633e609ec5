//! In-memory user repository

use rental_domain::clock::{Clock, SharedClock};
use rental_domain::model::{NewUser, UserPatch};
use rental_domain::repository::UserRepository;
use rental_types::{Error, User};

use crate::seed::sample_users;
use crate::table::Table;

#[derive(Clone)]
pub struct MemoryUserRepository {
    table: Table<User>,
    clock: SharedClock,
}

impl MemoryUserRepository {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            table: Table::new(),
            clock,
        }
    }

    pub fn seeded(clock: SharedClock) -> Self {
        let mut repo = Self::new(clock);
        for user in sample_users() {
            if let Err(e) = repo.create(user) {
                tracing::warn!("skipping sample user: {}", e);
            }
        }
        repo
    }

    /// Wrap a loaded table. Fails when its ids leave no room for new ones.
    pub fn from_table(table: Table<User>, clock: SharedClock) -> Result<Self, Error> {
        Ok(Self {
            table: table.normalized()?,
            clock,
        })
    }

    pub fn table(&self) -> &Table<User> {
        &self.table
    }

    /// Emails compare case-insensitively
    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.table
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(email) && Some(u.id) != except)
    }
}

fn email_conflict() -> Error {
    Error::Conflict("User with this email already exists".to_string())
}

impl UserRepository for MemoryUserRepository {
    fn create(&mut self, user: NewUser) -> Result<User, Error> {
        if self.email_taken(&user.email, None) {
            return Err(email_conflict());
        }
        let id = self.table.allocate_id()?;
        let user = User {
            id,
            name: user.name,
            email: user.email,
            created_at: self.clock.now(),
        };
        self.table.insert(id, user.clone())?;
        tracing::debug!(id, "user created");
        Ok(user)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<User>, Error> {
        Ok(self.table.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self
            .table
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<User>, Error> {
        Ok(self.table.values().cloned().collect())
    }

    fn update(&mut self, id: u64, patch: UserPatch) -> Result<Option<User>, Error> {
        if self.table.get(id).is_none() {
            return Ok(None);
        }
        if let Some(email) = patch.email() {
            if self.email_taken(email, Some(id)) {
                return Err(email_conflict());
            }
        }
        let Some(user) = self.table.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name() {
            user.name = name.to_string();
        }
        if let Some(email) = patch.email() {
            user.email = email.to_string();
        }
        tracing::debug!(id, "user updated");
        Ok(Some(user.clone()))
    }

    fn delete(&mut self, id: u64) -> Result<Option<User>, Error> {
        Ok(self.table.remove(id))
    }

    fn count(&self) -> usize {
        self.table.len()
    }
}
