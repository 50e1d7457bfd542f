//! Heterogeneous registry of named entities.
//!
//! The registry stores values of different concrete types side by side and
//! only ever talks to them through [`NamedEntity`].

pub mod registry;

pub use registry::Registry;

pub use naming_core::NamedEntity;
