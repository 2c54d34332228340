//! Users module: user CRUD and credential checks

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
