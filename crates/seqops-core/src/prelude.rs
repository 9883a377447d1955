//! Convenient re-exports for downstream crates.

pub use crate::config::QueryConfig;
pub use crate::error::{Cardinality, Error, Result};
pub use crate::numeric::Numeric;
pub use crate::order::{ByKey, Comparer, Natural};
pub use crate::value::Value;
