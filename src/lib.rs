#![forbid(unsafe_code)]
//! seqops: deferred-execution query operators over any sequence.
//!
//! ```
//! use seqops::prelude::*;
//!
//! let evens: Vec<i32> = vec![5, 2, 8, 1, 4]
//!     .into_seq()
//!     .filter(|x| x % 2 == 0)
//!     .order_by()?
//!     .collect();
//! assert_eq!(evens, vec![2, 4, 8]);
//! # Ok::<(), seqops::Error>(())
//! ```

pub use seqops_core::{
    config, error, numeric, order, value, ByKey, Cardinality, Comparer, Error, Natural, Numeric,
    QueryConfig, Result, Value,
};
pub use seqops_operators::{
    buffer, group, join, quicksort, quicksort_by, seq, sort, Buffer, Cast, Except, GroupJoin,
    Grouping, IntoSeq, OfType, Seq, SkipLast,
};

pub mod prelude {
    //! Everything needed to build pipelines.
    pub use seqops_core::prelude::*;
    pub use seqops_operators::{seq, Grouping, IntoSeq, Seq};
}
