//! Materialized buffers for eager operators.
//!
//! Every operator that needs the whole input (ordering, reverse, set algebra,
//! grouping, joins) collects through `Buffer`, which enforces the config's
//! `max_buffer_len`. The buffer is owned by the operator call that created it.

use seqops_core::{Error, QueryConfig, Result};

use crate::trace;

#[derive(Debug)]
pub struct Buffer<T> {
    op: &'static str,
    items: Vec<T>,
    limit: Option<usize>,
    trace: bool,
}

impl<T> Buffer<T> {
    pub fn new(op: &'static str, config: &QueryConfig) -> Self {
        Self {
            op,
            items: Vec::new(),
            limit: config.max_buffer_len,
            trace: config.trace_materialize,
        }
    }

    /// Drain `iter` into a fresh buffer and hand back the elements.
    pub fn collect<I>(op: &'static str, config: &QueryConfig, iter: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut buf = Self::new(op, config);
        buf.extend(iter)?;
        Ok(buf.finish())
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.items.len() >= limit {
                return Err(Error::BufferLimit { op: self.op, limit });
            }
        }
        self.items.push(item);
        Ok(())
    }

    pub fn extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.items
            .reserve(self.limit.map_or(lower, |limit| lower.min(limit)));
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn finish(self) -> Vec<T> {
        if self.trace {
            trace::materialized(self.op, self.items.len());
        }
        self.items
    }
}

impl<T: PartialEq> Buffer<T> {
    /// Linear containment check; O(len).
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|seen| seen == item)
    }

    /// Push `item` unless an equal element is already buffered.
    /// Returns whether it was added.
    pub fn push_unique(&mut self, item: T) -> Result<bool> {
        if self.contains(&item) {
            return Ok(false);
        }
        self.push(item)?;
        Ok(true)
    }
}
