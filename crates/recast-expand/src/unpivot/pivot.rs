//! A single pivot rule: which columns to coalesce, and into which two fields.

use recast_core::{Error, Key, Record, Result, Value};
use serde::{Deserialize, Deserializer, Serialize};

/// Declarative pivot definition as supplied by callers or configuration documents.
///
/// `keys` accepts either a list or a single key when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PivotConfig {
    #[serde(deserialize_with = "one_or_many")]
    pub keys: Vec<Key>,
    pub coalesce_key: Key,
    pub coalesce_key_value: Key,
}

impl PivotConfig {
    pub fn new<I, S>(
        keys: I,
        coalesce_key: impl Into<Key>,
        coalesce_key_value: impl Into<Key>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Key>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            coalesce_key: coalesce_key.into(),
            coalesce_key_value: coalesce_key_value.into(),
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<Key>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Key),
        Many(Vec<Key>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(key) => vec![key],
        OneOrMany::Many(keys) => keys,
    })
}

/// Validated, immutable pivot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pivot {
    keys: Vec<Key>,
    coalesce_key: Key,
    coalesce_key_value: Key,
}

impl Pivot {
    /// Fails when either output field name is blank.
    ///
    /// Both names may be the same field; the value is written second and wins.
    pub fn new(config: PivotConfig) -> Result<Self> {
        let PivotConfig {
            keys,
            coalesce_key,
            coalesce_key_value,
        } = config;

        if coalesce_key.trim().is_empty() {
            return Err(Error::config("pivot coalesce_key is required"));
        }
        if coalesce_key_value.trim().is_empty() {
            return Err(Error::config("pivot coalesce_key_value is required"));
        }
        Ok(Self {
            keys,
            coalesce_key,
            coalesce_key_value,
        })
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn coalesce_key(&self) -> &Key {
        &self.coalesce_key
    }

    pub fn coalesce_key_value(&self) -> &Key {
        &self.coalesce_key_value
    }

    /// The two fields every derived record gains.
    pub fn output_fields(&self) -> [&Key; 2] {
        [&self.coalesce_key, &self.coalesce_key_value]
    }

    /// One derived record per pivot key, in key order.
    ///
    /// Each is a copy of `base` plus `coalesce_key → key` and
    /// `coalesce_key_value → source[key]`; a key missing from `source` yields
    /// `Value::Null`.
    pub fn expand(&self, base: &Record, source: &Record) -> Vec<Record> {
        self.keys
            .iter()
            .map(|key| {
                let mut derived = Record::with_capacity(base.len() + 2);
                derived.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
                derived.insert(self.coalesce_key.clone(), Value::Str(key.clone()));
                derived.insert(
                    self.coalesce_key_value.clone(),
                    source.get(key).cloned().unwrap_or_default(),
                );
                derived
            })
            .collect()
    }

    pub fn to_config(&self) -> PivotConfig {
        PivotConfig {
            keys: self.keys.clone(),
            coalesce_key: self.coalesce_key.clone(),
            coalesce_key_value: self.coalesce_key_value.clone(),
        }
    }
}

impl TryFrom<PivotConfig> for Pivot {
    type Error = Error;

    fn try_from(config: PivotConfig) -> Result<Self> {
        Pivot::new(config)
    }
}
