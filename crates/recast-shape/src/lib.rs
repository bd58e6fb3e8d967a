#![forbid(unsafe_code)]
//! recast-shape: collaborators that shape records around the expansion engine.
//!
//! - `Prototype` clamps a record to a fixed key set with default values.
//! - `Table` assembles sparse (row, field) writes into prototype-shaped rows.
//! - `Mapper` fills in fields from constant-time lookups over reference records.

pub mod mapper;
pub mod prototype;
pub mod table;

pub use mapper::{Accessor, Lookup, LookupConfig, Mapper, Mapping, MappingConfig};
pub use prototype::Prototype;
pub use table::{Row, Table};
