use async_trait::async_trait;

use super::{CreateUserDto, User, UserId};
use crate::domain::DomainResult;

/// Persistence port for users.
///
/// Implementations own the stored state; callers only ever hold a
/// transient copy for the duration of a request.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Every stored user, in the store's native order.
    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, correo: &str) -> DomainResult<Option<User>>;

    /// User with the given email whose stored credential matches `contrasenia`.
    async fn find_by_credential_and_email(
        &self,
        contrasenia: &str,
        correo: &str,
    ) -> DomainResult<Option<User>>;

    /// Store a new user and return it with its assigned id.
    async fn insert(&self, dto: CreateUserDto) -> DomainResult<User>;

    /// Overwrite an existing user.
    async fn save(&self, user: User) -> DomainResult<User>;

    async fn delete_by_id(&self, id: UserId) -> DomainResult<()>;
}
