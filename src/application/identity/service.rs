//! User management service
//!
//! All user-related logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserId,
    UserRepositoryInterface, UserSummary,
};

/// Orchestrates the user-management use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer. `R` may be a trait object.
///
/// Updates are read-then-write without a version check: two concurrent
/// updates of the same user resolve as last-writer-wins.
pub struct UserService<R: UserRepositoryInterface + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Every stored user, projected to summaries in store order.
    pub async fn list_users(&self) -> DomainResult<Vec<UserSummary>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    pub async fn get_user(&self, id: UserId) -> DomainResult<UserSummary> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserSummary::from)
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Full record for an email, credential included.
    pub async fn check_email(&self, correo: &str) -> DomainResult<User> {
        self.repo
            .find_by_email(correo)
            .await?
            .ok_or_else(|| email_not_found(correo))
    }

    /// Full record for an email whose credential matches.
    ///
    /// A wrong credential is reported exactly like an unknown email.
    pub async fn check_password(&self, contrasenia: &str, correo: &str) -> DomainResult<User> {
        self.repo
            .find_by_credential_and_email(contrasenia, correo)
            .await?
            .ok_or_else(|| email_not_found(correo))
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<UserSummary> {
        let user = self.repo.insert(dto).await?;
        info!(user_id = user.id, "User created");
        Ok(UserSummary::from(user))
    }

    /// Replace the profile fields of a user, persisting only on change.
    ///
    /// Fields equal to the stored value are skipped. When no field
    /// differs the repository is not written to at all.
    pub async fn update_user(&self, id: UserId, dto: UpdateUserDto) -> DomainResult<UserSummary> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        let changed = user.apply_update(&dto);
        if changed.is_empty() {
            debug!(user_id = id, "Update carried no changes, skipping save");
            return Ok(UserSummary::from(user));
        }

        let saved = self.repo.save(user).await?;
        let fields: Vec<&str> = changed.iter().map(|f| f.as_str()).collect();
        info!(user_id = id, changed = ?fields, "User updated");
        Ok(UserSummary::from(saved))
    }

    /// Delete a user. The repository delete is only issued for known ids.
    pub async fn delete_user(&self, id: UserId) -> DomainResult<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::user_not_found(id));
        }

        self.repo.delete_by_id(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────

fn email_not_found(correo: &str) -> DomainError {
    DomainError::NotFound {
        entity: "User",
        field: "correo",
        value: correo.to_string(),
    }
}
