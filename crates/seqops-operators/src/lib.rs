#![forbid(unsafe_code)]
//! seqops-operators: lazy and eager sequence operators.
//!
//! Design intent:
//! - Everything is synchronous and single-threaded; nothing is shared between
//!   operator calls.
//! - Lazy operators wrap std or local iterator adaptors and pull on demand.
//! - Eager operators (ordering, reverse, set algebra, grouping, joins) must
//!   materialize through [`Buffer`] so the config's `max_buffer_len` holds.
//! - Ordering uses the local quicksort engine, which is not stable.

pub mod buffer;
pub mod seq;
pub mod traits;

pub mod aggregate;
pub mod concat;
pub mod element;
pub mod filter;
pub mod map;
pub mod slice;

pub mod group;
pub mod join;
pub mod set;
pub mod sort;

mod trace;

pub use buffer::Buffer;
pub use group::Grouping;
pub use join::GroupJoin;
pub use map::{Cast, OfType};
pub use seq::{seq, Seq};
pub use set::Except;
pub use slice::SkipLast;
pub use sort::{quicksort, quicksort_by};
pub use traits::IntoSeq;
