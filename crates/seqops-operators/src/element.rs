//! Element access: first, last, single, element_at and their `-or_default`
//! forms.
//!
//! `first`/`last`/`element_at` fail with `EmptySequence` when nothing
//! qualifies; `single` fails with `CardinalityViolation` on zero or many.
//! The `-or_default` forms return `T::default()` instead. `single_or_default`
//! never fails: zero *and* many both yield the default.

use seqops_core::{Cardinality, Error, Result};

use crate::seq::Seq;

/// Pull at most two elements and classify the count.
fn exactly_one<T>(mut iter: impl Iterator<Item = T>) -> std::result::Result<T, Cardinality> {
    match (iter.next(), iter.next()) {
        (Some(item), None) => Ok(item),
        (None, _) => Err(Cardinality::None),
        (Some(_), Some(_)) => Err(Cardinality::Many),
    }
}

impl<I: Iterator> Seq<I> {
    pub fn first(mut self) -> Result<I::Item> {
        self.iter.next().ok_or_else(|| Error::empty("first"))
    }

    pub fn first_where<P>(mut self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate).ok_or_else(|| Error::empty("first_where"))
    }

    pub fn first_or_default(mut self) -> I::Item
    where
        I::Item: Default,
    {
        self.iter.next().unwrap_or_default()
    }

    pub fn first_where_or_default<P>(mut self, predicate: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate).unwrap_or_default()
    }

    pub fn last(self) -> Result<I::Item> {
        self.iter.last().ok_or_else(|| Error::empty("last"))
    }

    pub fn last_where<P>(self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter
            .filter(predicate)
            .last()
            .ok_or_else(|| Error::empty("last_where"))
    }

    pub fn last_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        self.iter.last().unwrap_or_default()
    }

    /// Zero-based. An out-of-range index counts as an empty sequence.
    pub fn element_at(mut self, index: usize) -> Result<I::Item> {
        self.iter.nth(index).ok_or_else(|| Error::empty("element_at"))
    }

    pub fn element_at_or_default(mut self, index: usize) -> I::Item
    where
        I::Item: Default,
    {
        self.iter.nth(index).unwrap_or_default()
    }

    /// The only element. Stops pulling after the second element.
    pub fn single(self) -> Result<I::Item> {
        exactly_one(self.iter).map_err(|found| Error::cardinality("single", found))
    }

    pub fn single_where<P>(self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        exactly_one(self.iter.filter(predicate))
            .map_err(|found| Error::cardinality("single_where", found))
    }

    pub fn single_or_default(self) -> I::Item
    where
        I::Item: Default,
    {
        exactly_one(self.iter).unwrap_or_default()
    }
}
