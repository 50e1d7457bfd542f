//! Vessels: reference-semantics entities with a derived full name.

use std::cell::RefCell;
use std::rc::Rc;

use naming_core::NamedEntity;

/// A vessel with an optional prefix (e.g. `"USS"`) and a reassignable name.
///
/// `Vessel` is a handle: cloning it aliases the same vessel, so a rename made
/// through one handle is seen through every clone (including one stored in a
/// `Registry`). Use [`Vessel::detached`] for an independent copy.
///
/// Handles are `Rc`-based and stay on a single thread.
#[derive(Clone)]
pub struct Vessel {
    inner: Rc<VesselInner>,
}

struct VesselInner {
    prefix: Option<String>,
    name: RefCell<String>,
}

impl Vessel {
    pub fn new(prefix: Option<String>, name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(VesselInner {
                prefix,
                name: RefCell::new(name.into()),
            }),
        }
    }

    /// A vessel without a prefix.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(None, name)
    }

    pub fn prefixed(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Some(prefix.into()), name)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.inner.prefix.as_deref()
    }

    pub fn name(&self) -> String {
        self.inner.name.borrow().clone()
    }

    /// Reassign the vessel's name. Visible through every aliasing handle.
    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        let previous = self.inner.name.replace(name);
        tracing::debug!(
            prefix = ?self.inner.prefix,
            %previous,
            name = %self.inner.name.borrow(),
            "vessel renamed"
        );
    }

    /// Whether both handles refer to the same vessel.
    pub fn ptr_eq(a: &Vessel, b: &Vessel) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// An independent vessel with the current prefix and name.
    pub fn detached(&self) -> Vessel {
        Vessel::new(self.inner.prefix.clone(), self.name())
    }
}

impl NamedEntity for Vessel {
    fn full_name(&self) -> String {
        let name = self.inner.name.borrow();
        match &self.inner.prefix {
            // An empty prefix is still a prefix: `Some("")` yields " name".
            Some(prefix) => format!("{prefix} {name}"),
            None => name.clone(),
        }
    }
}

/// Vessels are equal when their full names are equal at the time of
/// comparison. This is not structural: `("USS", "Enterprise")` and
/// `(None, "USS Enterprise")` compare equal.
impl PartialEq for Vessel {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for Vessel {}

impl core::fmt::Debug for Vessel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vessel")
            .field("prefix", &self.inner.prefix)
            .field("name", &*self.inner.name.borrow())
            .finish()
    }
}

impl core::fmt::Display for Vessel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full_name())
    }
}
