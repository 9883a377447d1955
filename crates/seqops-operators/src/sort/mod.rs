//! Ordering operators.
//!
//! All variants materialize the source, sort the buffer with
//! [`quicksort_by`], and return a pipeline over the sorted buffer. Descending
//! variants sort ascending and then reverse the buffer. None of them are
//! stable.

pub mod quick;

pub use quick::{quicksort, quicksort_by};

use std::cmp::Ordering;
use std::vec;

use seqops_core::{Comparer, QueryConfig, Result};

use crate::buffer::Buffer;
use crate::seq::Seq;
use crate::trace;

fn sort_buffer<T, F>(op: &'static str, config: &QueryConfig, items: &mut [T], cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let depth = quicksort_by(items, cmp);
    if depth > config.sort_depth_warn {
        trace::sort_depth_exceeded(op, depth, config.sort_depth_warn, items.len());
    }
}

impl<I: Iterator> Seq<I> {
    /// Ascending by the element's natural order. Not stable.
    pub fn order_by(self) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        I::Item: Ord,
    {
        self.sorted("order_by", Ord::cmp, false)
    }

    /// Descending by the element's natural order (ascending + reverse).
    pub fn order_by_desc(self) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        I::Item: Ord,
    {
        self.sorted("order_by_desc", Ord::cmp, true)
    }

    /// Ascending under an explicit total order.
    pub fn order_by_with<C>(self, comparer: C) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        C: Comparer<I::Item>,
    {
        self.sorted("order_by_with", |a, b| comparer.compare(a, b), false)
    }

    /// Ascending by a derived key. The selector runs once per element.
    pub fn order_by_key<K, F>(self, selector: F) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.sorted_by_key("order_by_key", selector, false)
    }

    pub fn order_by_key_desc<K, F>(self, selector: F) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.sorted_by_key("order_by_key_desc", selector, true)
    }

    fn sorted<F>(
        self,
        op: &'static str,
        cmp: F,
        descending: bool,
    ) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        F: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        let config = self.config;
        let mut items = Buffer::collect(op, &config, self.iter)?;
        sort_buffer(op, &config, &mut items, cmp);
        if descending {
            items.reverse();
        }
        Ok(Seq::from_vec(config, items))
    }

    fn sorted_by_key<K, F>(
        self,
        op: &'static str,
        mut selector: F,
        descending: bool,
    ) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let config = self.config;
        let keyed = self.iter.map(|item| (selector(&item), item));
        let mut pairs = Buffer::collect(op, &config, keyed)?;
        sort_buffer(op, &config, &mut pairs, |a, b| a.0.cmp(&b.0));
        if descending {
            pairs.reverse();
        }
        let items = pairs.into_iter().map(|(_, item)| item).collect();
        Ok(Seq::from_vec(config, items))
    }
}
