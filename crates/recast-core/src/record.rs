//! Records: insertion-ordered key → value maps representing one logical row.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{Key, Value};

/// One logical row. Equality ignores field order; iteration follows insertion order.
pub type Record<K = Key, V = Value> = IndexMap<K, V>;

/// Immutable key/value association produced while enumerating a matrix axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Flatten a list of pairs into a record by assignment (a later pair wins on a repeated key).
pub fn recombine<K, V>(pairs: &[Pair<K, V>]) -> Record<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut record = Record::with_capacity(pairs.len());
    for pair in pairs {
        record.insert(pair.key.clone(), pair.value.clone());
    }
    record
}

/// Union-with-overwrite: `right` wins on key collision, `left`'s field order is kept.
pub fn merged<K, V>(left: &Record<K, V>, right: &Record<K, V>) -> Record<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut out = left.clone();
    out.extend(right.iter().map(|(k, v)| (k.clone(), v.clone())));
    out
}

/// Build a dynamic [`Record`] from `key => value` pairs.
///
/// ```
/// use recast_core::{record, Value};
///
/// let r = record! { "id" => 1, "name" => "ada" };
/// assert_eq!(r["name"], Value::from("ada"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(
                ::std::string::String::from($key),
                $crate::Value::from($value),
            );
        )+
        record
    }};
}
