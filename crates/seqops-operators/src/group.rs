//! GroupBy: partition a sequence by a computed key.

use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

use seqops_core::Result;

use crate::buffer::Buffer;
use crate::seq::Seq;

/// One key and every element that projected to it, in source order.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<I: Iterator> Seq<I> {
    /// One group per distinct key, in order of first appearance. The selector
    /// runs once per element; keys are matched by linear scan, O(k·n).
    pub fn group_by<K, F>(
        self,
        mut key_selector: F,
    ) -> Result<Seq<vec::IntoIter<Grouping<K, I::Item>>>>
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
    {
        let config = self.config;
        let items = Buffer::collect("group_by", &config, self.iter)?;

        let mut groups: Vec<Grouping<K, I::Item>> = Vec::new();
        for item in items {
            let key = key_selector(&item);
            match groups.iter().position(|g| g.key == key) {
                Some(idx) => groups[idx].elements.push(item),
                None => groups.push(Grouping {
                    key,
                    elements: vec![item],
                }),
            }
        }
        Ok(Seq::from_vec(config, groups))
    }
}
