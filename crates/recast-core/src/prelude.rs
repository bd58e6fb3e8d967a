//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::product::{cartesian_fold, cartesian_product, product_size};
pub use crate::record::{merged, recombine, Pair, Record};
pub use crate::value::{Key, Value};
