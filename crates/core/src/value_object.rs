//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and a copy is a fully independent value.

/// Marker trait for value objects.
///
/// ## Value Object vs Shared Handle
///
/// - **Value Object**: copying yields an independent value; mutating (or
///   replacing) one copy never shows up in another. `Person` is one.
/// - **Shared Handle**: clones alias one underlying object, so a change made
///   through any handle is visible through all of them. `Vessel` is one.
///
/// The trait requires:
/// - **Clone**: copies are independent
/// - **PartialEq**: compared by attribute values
/// - **Debug**: for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
