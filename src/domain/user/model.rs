//! User domain entity

use std::fmt;

use super::UpdateUserDto;

/// Identifier assigned by the persistence layer
pub type UserId = i64;

/// Stored user record, credential included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
    pub contrasenia: String,
}

/// Profile field that can be changed through an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Nombre,
    Apellido,
    Correo,
    Edad,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Apellido => "apellido",
            Self::Correo => "correo",
            Self::Edad => "edad",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl User {
    /// Overwrite every profile field that differs from `proposed`.
    ///
    /// Fields that compare equal are skipped. Returns the fields that were
    /// overwritten, in declaration order; an empty list means the record is
    /// untouched and does not need to be persisted.
    pub fn apply_update(&mut self, proposed: &UpdateUserDto) -> Vec<UserField> {
        let mut changed = Vec::new();

        if self.nombre != proposed.nombre {
            self.nombre = proposed.nombre.clone();
            changed.push(UserField::Nombre);
        }
        if self.apellido != proposed.apellido {
            self.apellido = proposed.apellido.clone();
            changed.push(UserField::Apellido);
        }
        if self.correo != proposed.correo {
            self.correo = proposed.correo.clone();
            changed.push(UserField::Correo);
        }
        if self.edad != proposed.edad {
            self.edad = proposed.edad;
            changed.push(UserField::Edad);
        }

        changed
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary::from(self)
    }
}

/// Display-safe projection of a [`User`]. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
}

impl From<&User> for UserSummary {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre.clone(),
            apellido: u.apellido.clone(),
            correo: u.correo.clone(),
            edad: u.edad,
        }
    }
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            correo: u.correo,
            edad: u.edad,
        }
    }
}
