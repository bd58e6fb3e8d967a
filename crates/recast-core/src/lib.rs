#![forbid(unsafe_code)]
//! recast-core: value/record types, errors, and the cartesian product engine.
//!
//! Design intent:
//! - Pure and synchronous; no I/O and no interior mutability.
//! - Records are insertion-ordered (`indexmap`) so every expansion is reproducible.
//! - `product::cartesian_fold` is the single combinatorial engine shared by the
//!   matrix and unpivot paths in `recast-expand`.

pub mod error;
pub mod prelude;
pub mod product;
pub mod record;
pub mod trace;
pub mod value;

pub use error::{Error, Result};
pub use record::{Pair, Record};
pub use value::{Key, Value};
