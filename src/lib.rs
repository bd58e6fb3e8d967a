#![forbid(unsafe_code)]
//! recast: reshape tabular data expressed as key-value records.
//!
//! - `Matrix` expands multi-valued keys into every single-valued record.
//! - `Unpivot` turns columns into rows and cross-products independent pivots.
//! - `Mapper`, `Prototype` and `Table` fill in looked-up values, clamp records to
//!   a fixed shape, and assemble sparse 2D data.
//! - `Document`/`Pipeline` build all of the above from YAML or JSON.
//!
//! ```
//! use recast::{record, Matrix, PivotConfig, Unpivot};
//!
//! let mut matrix = Matrix::new();
//! matrix.add("a", "a1").add("a", "a2").add("b", "b1");
//! assert_eq!(matrix.enumerate().len(), 2);
//!
//! let unpivot = Unpivot::builder()
//!     .pivot(PivotConfig::new(["a", "b"], "k", "v"))
//!     .build()
//!     .unwrap();
//! let rows = unpivot.expand(&record! { "a" => 1, "b" => 2, "c" => 3 });
//! assert_eq!(rows.len(), 2);
//! ```

pub use recast_core::{product, record, Error, Key, Pair, Record, Result, Value};
pub use recast_dsl::{parse_json_document, parse_yaml_document, Document, DslError, Pipeline};
pub use recast_expand::{
    CollisionPolicy, KeyValuePair, Matrix, Pivot, PivotConfig, PivotSet, PivotSetBuilder, Unpivot,
    UnpivotBuilder,
};
pub use recast_shape::{
    Accessor, Lookup, LookupConfig, Mapper, Mapping, MappingConfig, Prototype, Row, Table,
};
