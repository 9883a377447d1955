//! The `Seq` pipeline wrapper.
//!
//! `Seq<I>` is an ordinary iterator that also carries the `QueryConfig` of the
//! pipeline it belongs to. Every operator is an inherent method; lazy ones
//! return a new `Seq` around a lazy adaptor, eager ones materialize through
//! [`Buffer`](crate::buffer::Buffer) and return `Result<Seq<vec::IntoIter<_>>>`.
//!
//! Iterating a `Seq` runs the whole upstream pipeline. Nothing is memoized, so
//! traversing twice (via `clone`) evaluates every stage twice.

use std::vec;

use seqops_core::{QueryConfig, Result};

use crate::buffer::Buffer;

#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless iterated"]
pub struct Seq<I> {
    pub(crate) iter: I,
    pub(crate) config: QueryConfig,
}

impl<I: Iterator> Seq<I> {
    pub fn new(iter: I) -> Self {
        Self::with_config(iter, QueryConfig::default())
    }

    pub fn with_config(iter: I, config: QueryConfig) -> Self {
        Self { iter, config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Replace the config for this stage and everything derived from it.
    pub fn configure(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Wrap the next stage, keeping this pipeline's config.
    pub(crate) fn then<J>(self, f: impl FnOnce(I) -> J) -> Seq<J> {
        Seq {
            iter: f(self.iter),
            config: self.config,
        }
    }

    /// Materialize the pipeline, honouring `max_buffer_len`.
    pub fn to_vec(self) -> Result<Vec<I::Item>> {
        Buffer::collect("to_vec", &self.config, self.iter)
    }
}

impl<T> Seq<vec::IntoIter<T>> {
    /// Rebuild a pipeline over a buffer an eager stage produced.
    pub(crate) fn from_vec(config: QueryConfig, items: Vec<T>) -> Self {
        Self {
            iter: items.into_iter(),
            config,
        }
    }
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Lift a sequence into a pipeline with the default config.
pub fn seq<S: IntoIterator>(source: S) -> Seq<S::IntoIter> {
    Seq::new(source.into_iter())
}
