//! Named-entity capability: anything that can report a full name.

/// Capability contract: exposes a read-only, possibly derived, full name.
///
/// Implementors decide whether the name is stored or computed on each access.
/// Consumers holding a `dyn NamedEntity` may only rely on this method.
pub trait NamedEntity {
    /// Returns the entity's full name.
    fn full_name(&self) -> String;
}

impl<T: NamedEntity + ?Sized> NamedEntity for &T {
    fn full_name(&self) -> String {
        (**self).full_name()
    }
}

impl<T: NamedEntity + ?Sized> NamedEntity for Box<T> {
    fn full_name(&self) -> String {
        (**self).full_name()
    }
}
