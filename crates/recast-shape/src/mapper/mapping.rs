use recast_core::{Error, Key, Record, Result, Value};
use serde::{Deserialize, Serialize};

use super::accessor::Accessor;
use super::lookup::{Lookup, LookupConfig};

/// Declarative mapping as found in configuration documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    pub lookup: LookupConfig,
    /// Field of the mapped record holding the lookup id.
    pub value: Accessor,
    /// Field written on the mapped record.
    pub set: Key,
    /// Field read from the matched lookup record.
    pub with: Accessor,
}

/// One lookup plus the rule for mapping a record through it.
///
/// For `{ lookup: statuses by name, value: status, set: status_id, with: id }`,
/// a record `{status: "active"}` gains `status_id` = the `id` of the status whose
/// `name` is `"active"`, or `Value::Null` when none matches.
#[derive(Debug, Clone)]
pub struct Mapping {
    lookup: Lookup,
    value: Accessor,
    set: Key,
    with: Accessor,
}

impl Mapping {
    pub fn new(
        lookup: Lookup,
        value: impl Into<Accessor>,
        set: impl Into<Key>,
        with: impl Into<Accessor>,
    ) -> Result<Self> {
        let set = set.into();
        if set.trim().is_empty() {
            return Err(Error::config("mapping 'set' field is required"));
        }
        if lookup.name().trim().is_empty() {
            return Err(Error::config("lookup name is required"));
        }
        Ok(Self {
            lookup,
            value: value.into(),
            set,
            with: with.into(),
        })
    }

    pub fn from_config(config: MappingConfig) -> Result<Self> {
        Mapping::new(
            Lookup::from(config.lookup),
            config.value,
            config.set,
            config.with,
        )
    }

    pub fn name(&self) -> &Key {
        self.lookup.name()
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    pub fn set_field(&self) -> &Key {
        &self.set
    }

    pub fn add(&mut self, object: Record) -> &mut Self {
        self.lookup.add(object);
        self
    }

    pub fn add_each<I>(&mut self, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = Record>,
    {
        self.lookup.add_each(objects);
        self
    }

    /// Resolve the mapped value for `record` without touching it.
    pub fn resolve(&self, record: &Record) -> Value {
        let lookup_value = self.value.extract(record);
        match self.lookup.get(&lookup_value) {
            Some(object) => self.with.extract(object),
            None => {
                #[cfg(feature = "tracing")]
                recast_core::trace::emit(
                    "mapping.miss",
                    &[
                        ("lookup", self.lookup.name().clone()),
                        ("value", lookup_value.to_string()),
                    ],
                );
                Value::Null
            }
        }
    }

    pub fn map_in_place(&self, record: &mut Record) {
        let resolved = self.resolve(record);
        record.insert(self.set.clone(), resolved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recast_core::record;

    fn statuses() -> Mapping {
        let config: MappingConfig = serde_json::from_str(
            r#"{
                "lookup": { "name": "patient_statuses", "by": "name" },
                "set": "patient_status_id",
                "value": "patient_status",
                "with": "id"
            }"#,
        )
        .expect("mapping config");
        let mut mapping = Mapping::from_config(config).expect("valid mapping");
        mapping.add_each([
            record! { "id" => 1, "name" => "active" },
            record! { "id" => 2, "name" => "inactive" },
        ]);
        mapping
    }

    #[test]
    fn missing_keys_map_to_null() {
        let mut patient = record! { "patient_id" => 1 };
        statuses().map_in_place(&mut patient);
        assert_eq!(
            patient,
            record! { "patient_id" => 1, "patient_status_id" => Value::Null }
        );
    }

    #[test]
    fn present_keys_map_to_values() {
        let mut patient = record! { "patient_id" => 2, "patient_status" => "active" };
        statuses().map_in_place(&mut patient);
        assert_eq!(patient["patient_status_id"], Value::Int(1));
    }

    #[test]
    fn unmatched_values_map_to_null() {
        let mut patient = record! { "patient_id" => 2, "patient_status" => "doesnt_exist" };
        statuses().map_in_place(&mut patient);
        assert_eq!(patient["patient_status_id"], Value::Null);
    }

    #[test]
    fn blank_set_field_is_rejected() {
        let err = Mapping::new(Lookup::new("x", "id"), "a", "  ", "id").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_config_field_fails_to_parse() {
        let parsed = serde_json::from_str::<MappingConfig>(
            r#"{ "lookup": { "name": "x", "by": "id" }, "value": "a", "set": "b" }"#,
        );
        assert!(parsed.is_err());
    }
}
