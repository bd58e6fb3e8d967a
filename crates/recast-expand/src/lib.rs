#![forbid(unsafe_code)]
//! recast-expand: combinatorial record expansion.
//!
//! Two operators share `recast_core::product::cartesian_fold`:
//! - `Matrix` registers multi-valued keys and enumerates every single-valued record.
//! - `Unpivot` turns pivoted columns into rows and cross-products independent pivots.
//!
//! Expansion takes `&self` and mutation takes `&mut self`, so a matrix or unpivot
//! cannot be modified while an expansion over it is in flight.

pub mod kvp;
pub mod matrix;
pub mod unpivot;

pub use kvp::KeyValuePair;
pub use matrix::Matrix;
pub use unpivot::{
    CollisionPolicy, Pivot, PivotConfig, PivotSet, PivotSetBuilder, Unpivot, UnpivotBuilder,
};
