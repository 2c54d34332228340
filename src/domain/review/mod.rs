//! Review aggregate
//!
//! One user rating another. Only the transfer shape lives here.

pub mod model;

pub use model::Review;
