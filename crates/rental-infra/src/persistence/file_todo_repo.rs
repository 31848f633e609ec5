//! File-based implementation of TodoRepository

use std::path::{Path, PathBuf};

use rental_domain::clock::SharedClock;
use rental_domain::model::{NewTodo, TodoPatch, TodoQuery};
use rental_domain::repository::TodoRepository;
use rental_store::{MemoryTodoRepository, Table};
use rental_types::{Error, Result, Todo};

use super::json_file;

pub struct FileTodoRepository {
    store_path: PathBuf,
    inner: MemoryTodoRepository,
}

impl FileTodoRepository {
    pub fn open(store_dir: &Path, clock: SharedClock, seed: bool) -> Result<Self> {
        let store_path = json_file::store_file(store_dir, "todos.json")?;

        let (inner, fresh) = match json_file::load::<Table<Todo>>(&store_path)? {
            Some(table) => (MemoryTodoRepository::from_table(table, clock)?, false),
            None if seed => (MemoryTodoRepository::seeded(clock), true),
            None => (MemoryTodoRepository::new(clock), true),
        };

        let repo = Self { store_path, inner };
        if fresh {
            tracing::info!(path = %repo.store_path.display(), "created todo store");
            json_file::save(&repo.store_path, repo.inner.table())?;
        }
        Ok(repo)
    }

    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryTodoRepository) -> std::result::Result<T, Error>,
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

impl TodoRepository for FileTodoRepository {
    fn create(&mut self, todo: NewTodo) -> std::result::Result<Todo, Error> {
        self.commit(|repo| repo.create(todo), |_| true)
    }

    fn find_by_id(&self, id: u64) -> std::result::Result<Option<Todo>, Error> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self, query: &TodoQuery) -> std::result::Result<Vec<Todo>, Error> {
        self.inner.find_all(query)
    }

    fn update(&mut self, id: u64, patch: TodoPatch) -> std::result::Result<Option<Todo>, Error> {
        self.commit(|repo| repo.update(id, patch), Option::is_some)
    }

    fn toggle(&mut self, id: u64) -> std::result::Result<Option<Todo>, Error> {
        self.commit(|repo| repo.toggle(id), Option::is_some)
    }

    fn delete(&mut self, id: u64) -> std::result::Result<Option<Todo>, Error> {
        self.commit(|repo| repo.delete(id), Option::is_some)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}
