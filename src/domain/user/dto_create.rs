/// A user that has not been stored yet. The id is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub edad: i32,
    /// Plaintext credential; hashed by the repository before it is stored.
    pub contrasenia: String,
}
