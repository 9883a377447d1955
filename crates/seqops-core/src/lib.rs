#![forbid(unsafe_code)]
//! seqops-core: errors, configuration, and the capabilities operators are
//! generic over (numeric accumulation, total orders, dynamic values).
//!
//! No operator logic lives here.

pub mod config;
pub mod error;
pub mod numeric;
pub mod order;
pub mod prelude;
pub mod value;

pub use config::QueryConfig;
pub use error::{Cardinality, Error, Result};
pub use numeric::Numeric;
pub use order::{ByKey, Comparer, Natural};
pub use value::Value;
