//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateUserDto, Review, UpdateUserDto, User, UserSummary};

/// Display-safe user representation. Has no credential field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(s: UserSummary) -> Self {
        Self {
            id: s.id,
            nombre: s.nombre,
            apellido: s.apellido,
            correo: s.correo,
            edad: s.edad,
        }
    }
}

/// Full stored record, returned by the email / credential checks.
///
/// `contrasenia` holds the stored bcrypt hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
    pub contrasenia: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            correo: u.correo,
            edad: u.edad,
            contrasenia: u.contrasenia,
        }
    }
}

/// Create / update request body.
///
/// On update the path id wins over `id`, and `contrasenia` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
    #[serde(default)]
    pub contrasenia: Option<String>,
}

impl From<UserRequest> for CreateUserDto {
    fn from(r: UserRequest) -> Self {
        Self {
            nombre: r.nombre,
            apellido: r.apellido,
            correo: r.correo,
            edad: r.edad,
            contrasenia: r.contrasenia.unwrap_or_default(),
        }
    }
}

impl From<UserRequest> for UpdateUserDto {
    fn from(r: UserRequest) -> Self {
        Self {
            nombre: r.nombre,
            apellido: r.apellido,
            correo: r.correo,
            edad: r.edad,
        }
    }
}

/// One user's rating of another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i64,
    /// The user giving the rating
    pub usuario_calificador_id: UserSummaryDto,
    /// The user being rated
    pub usuario_objetivo_id: UserSummaryDto,
    pub calificacion: i32,
    pub comentario: String,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            usuario_calificador_id: r.calificador.into(),
            usuario_objetivo_id: r.objetivo.into(),
            calificacion: r.calificacion,
            comentario: r.comentario,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64, nombre: &str) -> User {
        User {
            id,
            nombre: nombre.to_string(),
            apellido: "Li".to_string(),
            correo: "a@x.com".to_string(),
            edad: 30,
            contrasenia: "$2b$04$hash".to_string(),
        }
    }

    #[test]
    fn summary_json_has_no_credential() {
        let dto = UserSummaryDto::from(user(1, "Ana").summary());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            json!({"id": 1, "nombre": "Ana", "apellido": "Li", "correo": "a@x.com", "edad": 30})
        );
        assert!(json.get("contrasenia").is_none());
    }

    #[test]
    fn full_record_json_keeps_credential() {
        let json = serde_json::to_value(UserDto::from(user(1, "Ana"))).unwrap();
        assert_eq!(json["contrasenia"], "$2b$04$hash");
    }

    #[test]
    fn request_without_id_or_credential() {
        let req: UserRequest = serde_json::from_value(json!({
            "nombre": "Ana", "apellido": "Lee", "correo": "a@x.com", "edad": 30
        }))
        .unwrap();
        assert!(req.id.is_none());

        let update = UpdateUserDto::from(req);
        assert_eq!(update.apellido, "Lee");
    }

    #[test]
    fn create_defaults_missing_credential_to_empty() {
        let req: UserRequest = serde_json::from_value(json!({
            "id": 99, "nombre": "Ana", "apellido": "Li", "correo": "a@x.com", "edad": 30
        }))
        .unwrap();
        let create = CreateUserDto::from(req);
        assert_eq!(create.contrasenia, "");
    }

    #[test]
    fn review_uses_camel_case_names() {
        let review = Review::new(5, &user(1, "Ana"), &user(2, "Bea"), 3, "ok");
        let json = serde_json::to_value(ReviewDto::from(review)).unwrap();

        assert_eq!(json["usuarioCalificadorId"]["id"], 1);
        assert_eq!(json["usuarioObjetivoId"]["nombre"], "Bea");
        assert_eq!(json["calificacion"], 3);
        assert_eq!(json["comentario"], "ok");
        assert!(json["usuarioObjetivoId"].get("contrasenia").is_none());
    }
}
