/// Proposed replacement for the editable profile fields of a user.
///
/// The credential is not part of this path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserDto {
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
}
