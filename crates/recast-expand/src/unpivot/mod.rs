//! Unpivoting: turn columns into rows, then cross-product independent pivots.
//!
//! For each input record the pivot set yields one list of derived records per
//! pivot; the unpivot takes their cartesian product (first pivot slowest) and
//! merges each combination left to right, later records winning on a shared key.

pub mod pivot;
pub mod pivot_set;

use recast_core::product::cartesian_fold;
use recast_core::record::merged;
use recast_core::{Record, Result};

pub use pivot::{Pivot, PivotConfig};
pub use pivot_set::{CollisionPolicy, PivotSet, PivotSetBuilder};

#[derive(Debug, Clone, Default)]
pub struct Unpivot {
    pivot_set: PivotSet,
}

impl Unpivot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> UnpivotBuilder {
        UnpivotBuilder::default()
    }

    pub fn add(&mut self, config: PivotConfig) -> Result<&mut Self> {
        self.pivot_set.add(config)?;
        Ok(self)
    }

    pub fn pivot_set(&self) -> &PivotSet {
        &self.pivot_set
    }

    /// Expand one record into `product(pivot key counts)` records.
    ///
    /// With no pivots configured the record passes through unchanged.
    pub fn expand(&self, record: &Record) -> Vec<Record> {
        if self.pivot_set.is_empty() {
            return vec![record.clone()];
        }

        let per_pivot = self.pivot_set.expand(record);
        let out = cartesian_fold(&per_pivot, Record::clone, merged);

        #[cfg(feature = "tracing")]
        recast_core::trace::emit(
            "unpivot.expand",
            &[
                ("pivots", per_pivot.len().to_string()),
                ("records", out.len().to_string()),
            ],
        );

        out
    }

    /// Like [`expand`](Self::expand), but accepts an absent record.
    ///
    /// An absent record with no pivots yields `[None]`. With pivots it expands
    /// like an empty record, so every coalesced value is `Value::Null`.
    pub fn expand_nullable(&self, record: Option<&Record>) -> Vec<Option<Record>> {
        match record {
            None if self.pivot_set.is_empty() => vec![None],
            None => self.expand(&Record::new()).into_iter().map(Some).collect(),
            Some(record) => self.expand(record).into_iter().map(Some).collect(),
        }
    }

    /// Flat-map [`expand`](Self::expand) over a batch, preserving input order.
    pub fn expand_all<'a, I>(&self, records: I) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .flat_map(|record| self.expand(record))
            .collect()
    }
}

impl From<PivotSet> for Unpivot {
    fn from(pivot_set: PivotSet) -> Self {
        Self { pivot_set }
    }
}

/// Builder producing an immutable [`Unpivot`]; every pivot is validated at `build`.
#[derive(Debug, Clone, Default)]
pub struct UnpivotBuilder {
    inner: PivotSetBuilder,
}

impl UnpivotBuilder {
    pub fn pivot(mut self, config: PivotConfig) -> Self {
        self.inner = self.inner.pivot(config);
        self
    }

    pub fn pivots<I>(mut self, configs: I) -> Self
    where
        I: IntoIterator<Item = PivotConfig>,
    {
        self.inner = self.inner.pivots(configs);
        self
    }

    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.inner = self.inner.collisions(policy);
        self
    }

    pub fn build(self) -> Result<Unpivot> {
        let pivot_set = self.inner.build()?;
        recast_core::trace::emit(
            "unpivot.build",
            &[("pivots", pivot_set.len().to_string())],
        );
        Ok(Unpivot::from(pivot_set))
    }
}
