//! Equality joins between two sequences.
//!
//! Both operators materialize the second sequence once, computing its key per
//! element, and correlate each element of the first sequence by linear scan.
//!
//! - [`Seq::join`]: eager, single-match contract (exactly one partner).
//! - [`Seq::group_join`]: lazy over the first sequence, zero or more partners.

pub mod group;
pub mod inner;

pub use group::GroupJoin;

use seqops_core::{QueryConfig, Result};

use crate::buffer::Buffer;

/// Materialize `source` as `(key, element)` pairs.
pub(crate) fn keyed<J, K, F>(
    op: &'static str,
    config: &QueryConfig,
    source: J,
    mut key_selector: F,
) -> Result<Vec<(K, J::Item)>>
where
    J: IntoIterator,
    F: FnMut(&J::Item) -> K,
{
    let pairs = source.into_iter().map(|item| (key_selector(&item), item));
    Buffer::collect(op, config, pairs)
}
