//! Configuration documents → built components.
//!
//! Example:
//! ```yaml
//! unpivot:
//!   collisions: reject
//!   pivots:
//!     - keys: [first_exam_date, last_exam_date, consent_date]
//!       coalesce_key: field
//!       coalesce_key_value: value
//! mappings:
//!   - lookup: { name: statuses, by: name }
//!     value: status
//!     set: status_id
//!     with: id
//! prototype:
//!   keys: [patient_id, status_id, field, value]
//!   base_value: null
//! matrix:
//!   region: [north, south]
//!   year: 2024
//! ```
//!
//! Every section is optional. Accessors are plain keys here; closures are only
//! available when building components in Rust.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use recast_core::{Key, Value};
use recast_expand::{CollisionPolicy, Matrix, PivotConfig, Unpivot};
use recast_shape::{Mapper, MappingConfig, Prototype};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Document {
    pub unpivot: Option<UnpivotDef>,
    pub mappings: Vec<MappingConfig>,
    pub prototype: Option<PrototypeDef>,
    /// Key → value, or key → list of values.
    pub matrix: Option<IndexMap<Key, Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnpivotDef {
    #[serde(default)]
    pub collisions: CollisionPolicy,
    #[serde(default)]
    pub pivots: Vec<PivotConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrototypeDef {
    pub keys: Vec<Key>,
    #[serde(default)]
    pub base_value: Value,
}

impl Document {
    /// Unpivot with every configured pivot; a pass-through unpivot when the section is absent.
    pub fn unpivot(&self) -> Result<Unpivot> {
        let Some(def) = &self.unpivot else {
            return Ok(Unpivot::new());
        };
        let unpivot = Unpivot::builder()
            .collisions(def.collisions)
            .pivots(def.pivots.iter().cloned())
            .build()?;
        Ok(unpivot)
    }

    pub fn mapper(&self) -> Result<Mapper> {
        Ok(Mapper::from_configs(self.mappings.iter().cloned())?)
    }

    pub fn prototype(&self) -> Option<Prototype<Key, Value>> {
        self.prototype
            .as_ref()
            .map(|def| Prototype::new(def.keys.iter().cloned(), def.base_value.clone()))
    }

    /// A list value registers each element; anything else registers one value.
    pub fn matrix(&self) -> Matrix<Key, Value> {
        let mut matrix = Matrix::new();
        for (key, value) in self.matrix.iter().flatten() {
            match value {
                Value::List(items) => matrix.add_each(key.clone(), items.iter().cloned()),
                other => matrix.add(key.clone(), other.clone()),
            };
        }
        matrix
    }
}

/// Parse a YAML document string.
pub fn parse_yaml_document(yaml_src: &str) -> Result<Document> {
    Ok(serde_yaml::from_str(yaml_src)?)
}

/// Parse a JSON document string.
pub fn parse_json_document(json_src: &str) -> Result<Document> {
    Ok(serde_json::from_str(json_src)?)
}
