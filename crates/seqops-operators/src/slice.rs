//! Positional operators: skip, take, skip_last, reverse.

use std::collections::VecDeque;
use std::iter::{Skip, Take};
use std::vec;

use seqops_core::Result;

use crate::buffer::Buffer;
use crate::seq::Seq;

/// Yields all but the final `count` elements.
///
/// Holds a window of at most `count + 1` elements, so the first output is
/// produced once `count + 1` elements have been pulled.
#[derive(Debug, Clone)]
pub struct SkipLast<I: Iterator> {
    iter: I,
    count: usize,
    window: VecDeque<I::Item>,
}

impl<I: Iterator> SkipLast<I> {
    fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            count,
            window: VecDeque::with_capacity(count.saturating_add(1).min(1024)),
        }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.window.len() <= self.count {
            let item = self.iter.next()?;
            self.window.push_back(item);
        }
        self.window.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = self.window.len();
        let adjust = |n: usize| n.saturating_add(pending).saturating_sub(self.count);
        (adjust(lower), upper.map(adjust))
    }
}

impl<I: Iterator> Seq<I> {
    /// Skip `n` elements. Skipping past the end yields an empty sequence.
    pub fn skip(self, n: usize) -> Seq<Skip<I>> {
        self.then(|iter| iter.skip(n))
    }

    pub fn take(self, n: usize) -> Seq<Take<I>> {
        self.then(|iter| iter.take(n))
    }

    /// Exclude the final `n` elements.
    pub fn skip_last(self, n: usize) -> Seq<SkipLast<I>> {
        self.then(|iter| SkipLast::new(iter, n))
    }

    /// Eager: materializes the source, then yields it back to front.
    pub fn reverse(self) -> Result<Seq<vec::IntoIter<I::Item>>> {
        let config = self.config;
        let mut items = Buffer::collect("reverse", &config, self.iter)?;
        items.reverse();
        Ok(Seq::from_vec(config, items))
    }
}
