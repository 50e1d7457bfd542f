//! Tracing/logging setup shared by binaries.

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_default(tracing::DEFAULT_FILTER);
}

pub use self::tracing::init_with_default;

/// Tracing configuration (filters, layers).
pub mod tracing;
