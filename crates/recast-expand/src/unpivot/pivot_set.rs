//! Ordered, append-only set of pivots sharing one base record.

use indexmap::IndexSet;
use recast_core::{Error, Key, Record, Result};
use serde::{Deserialize, Serialize};

use super::pivot::{Pivot, PivotConfig};

/// What to do when two pivots write the same output field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Accept the configuration; the later pivot's value wins when merging.
    #[default]
    LastWriteWins,
    /// Refuse the pivot at `add`/`build` time.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct PivotSet {
    pivots: Vec<Pivot>,
    /// Union of every pivot's keys, first-seen order.
    pivoted_keys: IndexSet<Key>,
    policy: CollisionPolicy,
}

impl PivotSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn builder() -> PivotSetBuilder {
        PivotSetBuilder::default()
    }

    /// Validate `config` and append it.
    pub fn add(&mut self, config: PivotConfig) -> Result<&mut Self> {
        self.add_pivot(Pivot::new(config)?)
    }

    pub fn add_pivot(&mut self, pivot: Pivot) -> Result<&mut Self> {
        if self.policy == CollisionPolicy::Reject {
            if let Some(field) = self.colliding_field(&pivot) {
                return Err(Error::CoalesceCollision {
                    field: field.clone(),
                });
            }
        }

        self.pivoted_keys.extend(pivot.keys().iter().cloned());
        self.pivots.push(pivot);
        Ok(self)
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    pub fn pivoted_keys(&self) -> impl Iterator<Item = &Key> {
        self.pivoted_keys.iter()
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// `record` minus every key claimed by any pivot.
    pub fn base_record(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(k, _)| !self.pivoted_keys.contains(*k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Per-pivot derived records, in registration order.
    ///
    /// The outer length equals the pivot count; each inner length equals that
    /// pivot's key count.
    pub fn expand(&self, record: &Record) -> Vec<Vec<Record>> {
        let base = self.base_record(record);
        self.pivots
            .iter()
            .map(|pivot| pivot.expand(&base, record))
            .collect()
    }

    fn colliding_field<'a>(&self, candidate: &'a Pivot) -> Option<&'a Key> {
        candidate.output_fields().into_iter().find(|field| {
            self.pivots
                .iter()
                .any(|existing| existing.output_fields().contains(field))
        })
    }
}

/// Collects pivot definitions and validates them all at `build`.
#[derive(Debug, Clone, Default)]
pub struct PivotSetBuilder {
    configs: Vec<PivotConfig>,
    policy: CollisionPolicy,
}

impl PivotSetBuilder {
    pub fn pivot(mut self, config: PivotConfig) -> Self {
        self.configs.push(config);
        self
    }

    pub fn pivots<I>(mut self, configs: I) -> Self
    where
        I: IntoIterator<Item = PivotConfig>,
    {
        self.configs.extend(configs);
        self
    }

    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<PivotSet> {
        let mut set = PivotSet::with_policy(self.policy);
        for config in self.configs {
            set.add(config)?;
        }
        Ok(set)
    }
}
