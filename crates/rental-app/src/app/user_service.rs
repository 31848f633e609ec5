use rental_domain::model::{NewUser, UserPatch};
use rental_domain::repository::UserRepository;
use rental_types::{Error, Result, User};

fn not_found() -> Error {
    Error::NotFound("User".to_string())
}

pub struct UserService<R> {
    users: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }

    pub fn list(&self) -> Result<Vec<User>> {
        self.users.find_all()
    }

    pub fn get(&self, id: u64) -> Result<User> {
        self.users.find_by_id(id)?.ok_or_else(not_found)
    }

    pub fn create(&mut self, name: &str, email: &str) -> Result<User> {
        let user = self.users.create(NewUser::new(name, email)?)?;
        tracing::info!(id = user.id, "user created");
        Ok(user)
    }

    pub fn update(&mut self, id: u64, patch: UserPatch) -> Result<User> {
        self.users.update(id, patch)?.ok_or_else(not_found)
    }

    pub fn delete(&mut self, id: u64) -> Result<User> {
        let user = self.users.delete(id)?.ok_or_else(not_found)?;
        tracing::info!(id, "user deleted");
        Ok(user)
    }
}
