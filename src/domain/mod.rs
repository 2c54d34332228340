//! Core business entities and the persistence port

pub mod error;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use review::Review;
pub use user::{
    CreateUserDto, UpdateUserDto, User, UserField, UserId, UserRepositoryInterface, UserSummary,
};
