use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserId, UserRepositoryInterface,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DEFAULT_COST};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
    bcrypt_cost: u32,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_cost(db, DEFAULT_COST)
    }

    pub fn with_cost(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        nombre: model.nombre,
        apellido: model.apellido,
        correo: model.correo,
        edad: model.edad,
        contrasenia: model.contrasenia,
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, correo: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Correo.eq(correo))
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_credential_and_email(
        &self,
        contrasenia: &str,
        correo: &str,
    ) -> DomainResult<Option<User>> {
        let user = self.find_by_email(correo).await?;
        Ok(user.filter(|u| verify_password(contrasenia, &u.contrasenia)))
    }

    async fn insert(&self, dto: CreateUserDto) -> DomainResult<User> {
        let contrasenia = hash_password(&dto.contrasenia, self.bcrypt_cost)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        let new_user = user::ActiveModel {
            id: NotSet,
            nombre: Set(dto.nombre),
            apellido: Set(dto.apellido),
            correo: Set(dto.correo),
            edad: Set(dto.edad),
            contrasenia: Set(contrasenia),
        };

        let model = new_user.insert(&self.db).await.map_err(db_err)?;
        Ok(user_model_to_domain(model))
    }

    async fn save(&self, u: User) -> DomainResult<User> {
        let id = u.id;
        let active = user::ActiveModel {
            id: Set(u.id),
            nombre: Set(u.nombre),
            apellido: Set(u.apellido),
            correo: Set(u.correo),
            edad: Set(u.edad),
            contrasenia: Set(u.contrasenia),
        };

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::user_not_found(id),
            other => db_err(other),
        })?;

        Ok(user_model_to_domain(model))
    }

    async fn delete_by_id(&self, id: UserId) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::password::MIN_COST;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> UserRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        UserRepository::with_cost(db, MIN_COST)
    }

    fn ana() -> CreateUserDto {
        CreateUserDto {
            nombre: "Ana".to_string(),
            apellido: "Li".to_string(),
            correo: "a@x.com".to_string(),
            edad: 30,
            contrasenia: "clave123".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let repo = repo().await;
        let created = repo.insert(ana()).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_ne!(found.contrasenia, "clave123");
    }

    #[tokio::test]
    async fn find_all_returns_every_row_in_id_order() {
        let repo = repo().await;
        let a = repo.insert(ana()).await.unwrap();
        let mut other = ana();
        other.correo = "b@x.com".to_string();
        let b = repo.insert(other).await.unwrap();

        let ids: Vec<UserId> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn save_overwrites_row() {
        let repo = repo().await;
        let mut u = repo.insert(ana()).await.unwrap();
        u.apellido = "Lee".to_string();

        repo.save(u.clone()).await.unwrap();
        let stored = repo.find_by_id(u.id).await.unwrap().unwrap();
        assert_eq!(stored.apellido, "Lee");
        assert_eq!(stored.contrasenia, u.contrasenia);
    }

    #[tokio::test]
    async fn save_unknown_id_is_not_found() {
        let repo = repo().await;
        let ghost = User {
            id: 404,
            nombre: "X".to_string(),
            apellido: "Y".to_string(),
            correo: "x@y.z".to_string(),
            edad: 1,
            contrasenia: String::new(),
        };
        let err = repo.save(ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn credential_and_email_lookup() {
        let repo = repo().await;
        repo.insert(ana()).await.unwrap();

        assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert!(repo
            .find_by_credential_and_email("clave123", "a@x.com")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_credential_and_email("nope", "a@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_removes_row_and_reports_missing() {
        let repo = repo().await;
        let u = repo.insert(ana()).await.unwrap();

        repo.delete_by_id(u.id).await.unwrap();
        assert!(repo.find_by_id(u.id).await.unwrap().is_none());

        let err = repo.delete_by_id(u.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
