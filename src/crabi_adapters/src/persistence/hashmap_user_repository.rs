use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crabi_core::{Password, User, UserRepository, UserRepositoryError};

#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn save_user(&self, user: User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        users.insert(user.email().to_owned(), user);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn get_user_by_email_and_password(
        &self,
        email: &str,
        password: &Password,
    ) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().await;
        Ok(users
            .get(email)
            .filter(|user| user.password() == password)
            .cloned())
    }
}
