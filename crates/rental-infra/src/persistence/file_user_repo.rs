//! File-based implementation of UserRepository

use std::path::{Path, PathBuf};

use rental_domain::clock::SharedClock;
use rental_domain::model::{NewUser, UserPatch};
use rental_domain::repository::UserRepository;
use rental_store::{MemoryUserRepository, Table};
use rental_types::{Error, Result, User};

use super::json_file;

pub struct FileUserRepository {
    store_path: PathBuf,
    inner: MemoryUserRepository,
}

impl FileUserRepository {
    pub fn open(store_dir: &Path, clock: SharedClock, seed: bool) -> Result<Self> {
        let store_path = json_file::store_file(store_dir, "users.json")?;

        let (inner, fresh) = match json_file::load::<Table<User>>(&store_path)? {
            Some(table) => (MemoryUserRepository::from_table(table, clock)?, false),
            None if seed => (MemoryUserRepository::seeded(clock), true),
            None => (MemoryUserRepository::new(clock), true),
        };

        let repo = Self { store_path, inner };
        if fresh {
            tracing::info!(path = %repo.store_path.display(), "created user store");
            json_file::save(&repo.store_path, repo.inner.table())?;
        }
        Ok(repo)
    }

    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryUserRepository) -> std::result::Result<T, Error>,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        if changed(&out) {
            json_file::save(&self.store_path, next.table())?;
            self.inner = next;
        }
        Ok(out)
    }
}

impl UserRepository for FileUserRepository {
    fn create(&mut self, user: NewUser) -> std::result::Result<User, Error> {
        self.commit(|repo| repo.create(user), |_| true)
    }

    fn find_by_id(&self, id: u64) -> std::result::Result<Option<User>, Error> {
        self.inner.find_by_id(id)
    }

    fn find_by_email(&self, email: &str) -> std::result::Result<Option<User>, Error> {
        self.inner.find_by_email(email)
    }

    fn find_all(&self) -> std::result::Result<Vec<User>, Error> {
        self.inner.find_all()
    }

    fn update(&mut self, id: u64, patch: UserPatch) -> std::result::Result<Option<User>, Error> {
        self.commit(|repo| repo.update(id, patch), Option::is_some)
    }

    fn delete(&mut self, id: u64) -> std::result::Result<Option<User>, Error> {
        self.commit(|repo| repo.delete(id), Option::is_some)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}
