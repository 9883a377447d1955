//! Tracing hooks (feature: `tracing`).
//!
//! Each hook compiles to a no-op without the feature so operators can call
//! them unconditionally.

use seqops_core::Cardinality;

#[cfg(feature = "tracing")]
pub(crate) fn materialized(op: &'static str, len: usize) {
    tracing::trace!(op, len, "materialized buffer");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn materialized(_op: &'static str, _len: usize) {}

#[cfg(feature = "tracing")]
pub(crate) fn sort_depth_exceeded(op: &'static str, depth: usize, threshold: usize, len: usize) {
    tracing::warn!(
        op,
        depth,
        threshold,
        len,
        "quicksort recursion passed warning depth (degenerate input?)"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn sort_depth_exceeded(
    _op: &'static str,
    _depth: usize,
    _threshold: usize,
    _len: usize,
) {
}

#[cfg(feature = "tracing")]
pub(crate) fn join_mismatch(op: &'static str, position: usize, found: Cardinality) {
    tracing::debug!(op, position, %found, "join single-match contract violated");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn join_mismatch(_op: &'static str, _position: usize, _found: Cardinality) {}
