#![forbid(unsafe_code)]
//! recast-dsl: configuration documents → built components → linear pipelines.
//!
//! Design:
//! - One document type (`dsl::yaml::Document`) describes pivots, lookup mappings,
//!   a prototype record and a value matrix; YAML and JSON share it.
//! - Missing required fields fail at parse time; semantic problems (blank names,
//!   rejected collisions) fail when the components are built. Nothing fails
//!   during expansion.
//! - `Pipeline` chains mapper → unpivot → strict prototype shaping.
//!
//! NOTE: documents are in-memory strings; reading them from disk is the caller's job.

pub mod dsl;
pub mod error;
pub mod pipeline;

pub use dsl::yaml::{parse_json_document, parse_yaml_document, Document, PrototypeDef, UnpivotDef};
pub use error::{DslError, Result};
pub use pipeline::Pipeline;
