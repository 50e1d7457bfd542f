//! `naming-core` — capability contracts shared across the workspace.
//!
//! This crate contains **pure** primitives (no IO, no logging setup).

pub mod error;
pub mod named;
pub mod random;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use named::NamedEntity;
pub use random::GeneratesRandomNumbers;
pub use value_object::ValueObject;
