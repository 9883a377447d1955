//! Predicate-driven lazy operators: filter (Where), skip_while, take_while.

use std::iter::{Filter, SkipWhile, TakeWhile};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Keep elements satisfying `predicate`, in order.
    pub fn filter<P>(self, predicate: P) -> Seq<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.then(|iter| iter.filter(predicate))
    }

    /// Drop the prefix while `predicate` holds; yields everything from the
    /// first failing element on, that element included.
    pub fn skip_while<P>(self, predicate: P) -> Seq<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.then(|iter| iter.skip_while(predicate))
    }

    pub fn take_while<P>(self, predicate: P) -> Seq<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.then(|iter| iter.take_while(predicate))
    }
}
