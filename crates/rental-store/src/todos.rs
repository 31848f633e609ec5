//! In-memory todo repository

use rental_domain::clock::{Clock, SharedClock};
use rental_domain::model::{NewTodo, TodoPatch, TodoQuery};
use rental_domain::repository::TodoRepository;
use rental_types::{Error, Todo};

use crate::seed::sample_todos;
use crate::table::Table;

#[derive(Clone)]
pub struct MemoryTodoRepository {
    table: Table<Todo>,
    clock: SharedClock,
}

impl MemoryTodoRepository {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            table: Table::new(),
            clock,
        }
    }

    /// Repository pre-filled with the demo todos
    pub fn seeded(clock: SharedClock) -> Self {
        let mut repo = Self::new(clock);
        for (new, completed) in sample_todos() {
            let seeded = repo.create(new).and_then(|todo| {
                if completed {
                    repo.toggle(todo.id)?;
                }
                Ok(())
            });
            if let Err(e) = seeded {
                tracing::warn!("skipping sample todo: {}", e);
            }
        }
        repo
    }

    /// Wrap a loaded table. Fails when its ids leave no room for new ones.
    pub fn from_table(table: Table<Todo>, clock: SharedClock) -> Result<Self, Error> {
        Ok(Self {
            table: table.normalized()?,
            clock,
        })
    }

    pub fn table(&self) -> &Table<Todo> {
        &self.table
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn create(&mut self, todo: NewTodo) -> Result<Todo, Error> {
        let now = self.clock.now();
        let id = self.table.allocate_id()?;
        let todo = Todo {
            id,
            title: todo.title,
            description: todo.description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.table.insert(id, todo.clone())?;
        tracing::debug!(id, "todo created");
        Ok(todo)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Todo>, Error> {
        Ok(self.table.get(id).cloned())
    }

    fn find_all(&self, query: &TodoQuery) -> Result<Vec<Todo>, Error> {
        Ok(self
            .table
            .values()
            .filter(|todo| query.matches(todo))
            .cloned()
            .collect())
    }

    fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Option<Todo>, Error> {
        let now = self.clock.now();
        let Some(todo) = self.table.get_mut(id) else {
            return Ok(None);
        };
        let mut updated = todo.clone();
        patch.apply(&mut updated, now)?;
        *todo = updated.clone();
        tracing::debug!(id, "todo updated");
        Ok(Some(updated))
    }

    fn toggle(&mut self, id: u64) -> Result<Option<Todo>, Error> {
        let now = self.clock.now();
        Ok(self.table.get_mut(id).map(|todo| {
            todo.completed = !todo.completed;
            todo.updated_at = now;
            todo.clone()
        }))
    }

    fn delete(&mut self, id: u64) -> Result<Option<Todo>, Error> {
        let removed = self.table.remove(id);
        if removed.is_some() {
            tracing::debug!(id, "todo deleted");
        }
        Ok(removed)
    }

    fn count(&self) -> usize {
        self.table.len()
    }
}
