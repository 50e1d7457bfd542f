//! Named entities: the concrete variants of the `NamedEntity` capability.
//!
//! - [`Person`] is a value object: copies are independent.
//! - [`Vessel`] is a shared handle: clones alias one vessel and its name can be
//!   reassigned in place.

pub mod person;
pub mod vessel;

pub use person::Person;
pub use vessel::Vessel;
