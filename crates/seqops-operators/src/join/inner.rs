//! Inner equality join with a single-match contract.
//!
//! Unlike a relational inner join, every element of the first sequence must
//! match *exactly one* element of the second. No match, or several, fails the
//! whole call with `CardinalityViolation`; no partial result is returned.

use std::vec;

use seqops_core::{Cardinality, Error, Result};

use crate::buffer::Buffer;
use crate::join::keyed;
use crate::seq::Seq;
use crate::trace;

impl<I: Iterator> Seq<I> {
    pub fn join<J, K, R, FK, SK, F>(
        self,
        second: J,
        mut first_key: FK,
        second_key: SK,
        mut combine: F,
    ) -> Result<Seq<vec::IntoIter<R>>>
    where
        J: IntoIterator,
        K: PartialEq,
        FK: FnMut(&I::Item) -> K,
        SK: FnMut(&J::Item) -> K,
        F: FnMut(I::Item, &J::Item) -> R,
    {
        let config = self.config;
        let inner = keyed("join", &config, second, second_key)?;

        let mut out = Buffer::new("join", &config);
        let outer = self.iter.map(|item| (first_key(&item), item));
        for (position, (key, item)) in outer.enumerate() {
            let mut matches = inner.iter().filter(|(k, _)| *k == key).map(|(_, u)| u);
            let partner = match (matches.next(), matches.next()) {
                (Some(partner), None) => partner,
                (None, _) => return Err(mismatch(position, Cardinality::None)),
                (Some(_), Some(_)) => return Err(mismatch(position, Cardinality::Many)),
            };
            out.push(combine(item, partner))?;
        }
        Ok(Seq::from_vec(config, out.finish()))
    }
}

fn mismatch(position: usize, found: Cardinality) -> Error {
    trace::join_mismatch("join", position, found);
    Error::cardinality("join", found)
}
