//! Aggregations: count, sum, average, min, max, all, any, contains.
//!
//! `sum`/`average` over an empty sequence return zero. `min`/`max` fail with
//! `EmptySequence` instead; the asymmetry is intentional.

use std::cmp::Ordering;

use seqops_core::{Comparer, Error, Natural, Numeric, Result};

use crate::seq::Seq;

impl<I: Iterator> Seq<I> {
    pub fn count(self) -> usize {
        self.iter.count()
    }

    pub fn count_where<P>(self, mut predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.filter(|item| predicate(item)).count()
    }

    pub fn long_count(self) -> u64 {
        self.iter.fold(0u64, |n, _| n + 1)
    }

    /// Zero for an empty sequence.
    pub fn sum(self) -> I::Item
    where
        I::Item: Numeric,
    {
        self.iter.fold(<I::Item as Numeric>::zero(), |acc, x| acc + x)
    }

    pub fn sum_by<N, F>(self, projection: F) -> N
    where
        N: Numeric,
        F: FnMut(I::Item) -> N,
    {
        self.iter.map(projection).fold(N::zero(), |acc, x| acc + x)
    }

    /// Arithmetic mean; `0.0` for an empty sequence.
    pub fn average(self) -> f64
    where
        I::Item: Numeric,
    {
        mean(self.iter)
    }

    pub fn average_by<N, F>(self, projection: F) -> f64
    where
        N: Numeric,
        F: FnMut(I::Item) -> N,
    {
        mean(self.iter.map(projection))
    }

    pub fn min(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.extreme("min", Natural, Ordering::Less, |_| true)
    }

    pub fn max(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.extreme("max", Natural, Ordering::Greater, |_| true)
    }

    /// Minimum among elements satisfying `predicate`, except that the first
    /// element always seeds the comparison whether or not it satisfies it.
    pub fn min_where<P>(self, predicate: P) -> Result<I::Item>
    where
        I::Item: Ord,
        P: FnMut(&I::Item) -> bool,
    {
        self.extreme("min_where", Natural, Ordering::Less, predicate)
    }

    /// See [`Seq::min_where`] for the seeding rule.
    pub fn max_where<P>(self, predicate: P) -> Result<I::Item>
    where
        I::Item: Ord,
        P: FnMut(&I::Item) -> bool,
    {
        self.extreme("max_where", Natural, Ordering::Greater, predicate)
    }

    pub fn min_with<C>(self, comparer: C) -> Result<I::Item>
    where
        C: Comparer<I::Item>,
    {
        self.extreme("min_with", comparer, Ordering::Less, |_| true)
    }

    pub fn max_with<C>(self, comparer: C) -> Result<I::Item>
    where
        C: Comparer<I::Item>,
    {
        self.extreme("max_with", comparer, Ordering::Greater, |_| true)
    }

    // The earliest of equal extremes wins: replacement needs a strict compare.
    fn extreme<C, P>(
        mut self,
        op: &'static str,
        comparer: C,
        want: Ordering,
        mut predicate: P,
    ) -> Result<I::Item>
    where
        C: Comparer<I::Item>,
        P: FnMut(&I::Item) -> bool,
    {
        let mut best = self.iter.next().ok_or_else(|| Error::empty(op))?;
        for item in self.iter {
            if comparer.compare(&item, &best) == want && predicate(&item) {
                best = item;
            }
        }
        Ok(best)
    }

    /// True for an empty sequence. Stops at the first failure.
    pub fn all<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.all(predicate)
    }

    /// False for an empty sequence. Stops at the first success.
    pub fn any<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }

    pub fn any_element(mut self) -> bool {
        self.iter.next().is_some()
    }

    pub fn contains(mut self, item: &I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.iter.any(|x| x == *item)
    }

    /// Containment under a total order: a match compares `Equal`.
    pub fn contains_with<C>(mut self, item: &I::Item, comparer: C) -> bool
    where
        C: Comparer<I::Item>,
    {
        self.iter
            .any(|x| comparer.compare(&x, item) == Ordering::Equal)
    }
}

fn mean<N: Numeric>(iter: impl Iterator<Item = N>) -> f64 {
    let (sum, n) = iter.fold((N::zero(), 0usize), |(acc, n), x| (acc + x, n + 1));
    if n == 0 {
        return 0.0;
    }
    sum.to_f64() / n as f64
}
