//! Random-number capability.

/// Capability contract: produces integers.
///
/// The contract says nothing about distribution or bounds; each implementor
/// documents its own. Generators carry state, hence `&mut self`.
pub trait GeneratesRandomNumbers {
    fn random(&mut self) -> i64;
}
