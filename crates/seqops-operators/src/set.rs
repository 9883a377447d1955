//! Set algebra: distinct, union, intersect, except.
//!
//! Containment is a linear scan over a [`Buffer`], so `distinct` is O(n²) and
//! the binary operators are O(n·m). Results keep first-occurrence order.

use std::vec;

use seqops_core::Result;

use crate::buffer::Buffer;
use crate::seq::Seq;

/// Passes through the elements that *fail* `predicate`.
#[derive(Debug, Clone)]
pub struct Except<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for Except<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.by_ref().find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> Seq<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    /// Eager, first-occurrence order, O(n²).
    pub fn distinct(self) -> Result<Seq<vec::IntoIter<I::Item>>> {
        let config = self.config;
        let mut seen = Buffer::new("distinct", &config);
        for item in self.iter {
            seen.push_unique(item)?;
        }
        Ok(Seq::from_vec(config, seen.finish()))
    }

    /// Distinct elements of `self` followed by those of `other` not yet seen.
    pub fn union<J>(self, other: J) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        let config = self.config;
        let mut seen = Buffer::new("union", &config);
        for item in self.iter.chain(other) {
            seen.push_unique(item)?;
        }
        Ok(Seq::from_vec(config, seen.finish()))
    }

    /// Elements of `self` that also occur in `other`, deduplicated, in
    /// `self`'s order.
    pub fn intersect<J>(self, other: J) -> Result<Seq<vec::IntoIter<I::Item>>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        let config = self.config;
        let mut probe = Buffer::new("intersect", &config);
        probe.extend(other)?;

        let mut seen = Buffer::new("intersect", &config);
        for item in self.iter {
            if probe.contains(&item) {
                seen.push_unique(item)?;
            }
        }
        Ok(Seq::from_vec(config, seen.finish()))
    }
}

impl<I: Iterator> Seq<I> {
    /// Lazy. Drops every element satisfying `predicate`; this takes a
    /// predicate, not a second sequence.
    pub fn except<P>(self, predicate: P) -> Seq<Except<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.then(|iter| Except { iter, predicate })
    }
}
