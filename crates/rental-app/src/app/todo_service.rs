use rental_domain::model::{NewTodo, TodoPatch, TodoQuery};
use rental_domain::repository::TodoRepository;
use rental_types::{Error, Result, Todo};

/// Filtered todos plus the size of the whole list
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub total: usize,
}

fn not_found() -> Error {
    Error::NotFound("Todo".to_string())
}

pub struct TodoService<R> {
    todos: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(todos: R) -> Self {
        Self { todos }
    }

    pub fn list(&self, query: &TodoQuery) -> Result<TodoList> {
        Ok(TodoList {
            todos: self.todos.find_all(query)?,
            total: self.todos.count(),
        })
    }

    pub fn get(&self, id: u64) -> Result<Todo> {
        self.todos.find_by_id(id)?.ok_or_else(not_found)
    }

    pub fn create(&mut self, title: &str, description: Option<&str>) -> Result<Todo> {
        let todo = self.todos.create(NewTodo::new(title, description)?)?;
        tracing::info!(id = todo.id, "todo created");
        Ok(todo)
    }

    /// Apply a patch. A patch that sets nothing is rejected.
    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Todo> {
        if patch.is_empty() {
            return Err(Error::MissingField("At least one field to update"));
        }
        self.todos.update(id, patch)?.ok_or_else(not_found)
    }

    pub fn toggle(&mut self, id: u64) -> Result<Todo> {
        self.todos.toggle(id)?.ok_or_else(not_found)
    }

    pub fn delete(&mut self, id: u64) -> Result<Todo> {
        let todo = self.todos.delete(id)?.ok_or_else(not_found)?;
        tracing::info!(id, "todo deleted");
        Ok(todo)
    }
}
