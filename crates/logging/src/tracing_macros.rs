//! crates/logging/src/tracing_macros.rs
//! Convenience macros for project-files tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with appropriate targets for each subsystem. Calling crates must depend on
//! `tracing` themselves.

/// Emit an ignore-pattern trace.
///
/// # Example
/// ```ignore
/// trace_filter!("compiled {} ignore patterns", count);
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::FILTER_TARGET, $($arg)*);
    };
}

/// Emit a manifest or inclusion-rule trace.
///
/// # Example
/// ```ignore
/// trace_rules!("derived {} inclusion rules", rules.len());
/// ```
#[macro_export]
macro_rules! trace_rules {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::RULES_TARGET, $($arg)*);
    };
}

/// Emit a traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("pruned {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::WALK_TARGET, $($arg)*);
    };
}
