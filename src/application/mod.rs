//! Application layer - use cases over the domain ports

pub mod identity;

pub use identity::UserService;
