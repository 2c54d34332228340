//! In-memory user storage

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserId, UserRepositoryInterface,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DEFAULT_COST};

/// In-memory user storage for development and testing.
///
/// Ids start at 1 and are never reused. Listing order is id order.
pub struct InMemoryUserRepository {
    users: DashMap<UserId, User>,
    id_counter: AtomicI64,
    bcrypt_cost: u32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_COST)
    }

    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            users: DashMap::new(),
            id_counter: AtomicI64::new(1),
            bcrypt_cost,
        }
    }

    /// Put a fully formed record in place, bypassing id assignment and hashing.
    pub fn seed(&self, user: User) {
        self.id_counter.fetch_max(user.id + 1, Ordering::SeqCst);
        self.users.insert(user.id, user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_email(&self, correo: &str) -> DomainResult<Option<User>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|u| u.correo == correo))
    }

    async fn find_by_credential_and_email(
        &self,
        contrasenia: &str,
        correo: &str,
    ) -> DomainResult<Option<User>> {
        Ok(self
            .find_by_email(correo)
            .await?
            .filter(|u| verify_password(contrasenia, &u.contrasenia)))
    }

    async fn insert(&self, dto: CreateUserDto) -> DomainResult<User> {
        let contrasenia = hash_password(&dto.contrasenia, self.bcrypt_cost)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            nombre: dto.nombre,
            apellido: dto.apellido,
            correo: dto.correo,
            edad: dto.edad,
            contrasenia,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    /// Overwrite an existing record. A vanished id is NotFound, never re-created.
    async fn save(&self, user: User) -> DomainResult<User> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user.clone();
                Ok(user)
            }
            None => Err(DomainError::user_not_found(user.id)),
        }
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<()> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}
