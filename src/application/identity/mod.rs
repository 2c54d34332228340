//! Identity module: user management
//!
//! Contains the `UserService` which orchestrates the user use-cases:
//! listing, lookup, creation, change-detecting updates, deletion and
//! the email / credential checks.

pub mod service;

pub use service::UserService;
