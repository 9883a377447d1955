//! Grouping join: each element of the first sequence is paired with the full
//! (possibly empty) group of matching elements of the second.

use std::fmt;

use seqops_core::Result;

use crate::join::keyed;
use crate::seq::Seq;

pub struct GroupJoin<I, K, U, FK, F> {
    outer: I,
    inner: Vec<(K, U)>,
    outer_key: FK,
    combine: F,
}

impl<I, K, U, FK, F> fmt::Debug for GroupJoin<I, K, U, FK, F>
where
    I: fmt::Debug,
    K: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupJoin")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<I, K, U, FK, F, R> Iterator for GroupJoin<I, K, U, FK, F>
where
    I: Iterator,
    K: PartialEq,
    FK: FnMut(&I::Item) -> K,
    F: FnMut(I::Item, Vec<&U>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = self.outer.next()?;
        let key = (self.outer_key)(&item);
        let group: Vec<&U> = self
            .inner
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, u)| u)
            .collect();
        Some((self.combine)(item, group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outer.size_hint()
    }
}

impl<I: Iterator> Seq<I> {
    /// Materializes `second` up front; the first sequence is then consumed
    /// lazily. Groups keep `second`'s order.
    pub fn group_join<J, K, R, FK, SK, F>(
        self,
        second: J,
        first_key: FK,
        second_key: SK,
        combine: F,
    ) -> Result<Seq<GroupJoin<I, K, J::Item, FK, F>>>
    where
        J: IntoIterator,
        K: PartialEq,
        FK: FnMut(&I::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        F: FnMut(I::Item, Vec<&J::Item>) -> R,
    {
        let inner = keyed("group_join", &self.config, second, second_key)?;
        Ok(self.then(|outer| GroupJoin {
            outer,
            inner,
            outer_key: first_key,
            combine,
        }))
    }
}
