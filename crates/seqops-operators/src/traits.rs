//! Entry points that lift any `IntoIterator` into a [`Seq`] pipeline.

use seqops_core::QueryConfig;

use crate::seq::Seq;

pub trait IntoSeq: IntoIterator + Sized {
    fn into_seq(self) -> Seq<Self::IntoIter> {
        Seq::new(self.into_iter())
    }

    fn into_seq_with(self, config: QueryConfig) -> Seq<Self::IntoIter> {
        Seq::with_config(self.into_iter(), config)
    }
}

impl<S: IntoIterator> IntoSeq for S {}
