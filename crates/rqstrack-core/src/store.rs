//! The grant record store.
//!
//! `GrantStore` owns every record for the lifetime of the process. Records
//! keep insertion order; an id index gives constant-time lookup and enforces
//! uniqueness. Every mutating call either applies fully or leaves the store
//! untouched.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::aggregate::{Aggregation, GroupField, NumericField};
use crate::clock::{Clock, SystemClock};
use crate::error::GrantError;
use crate::filter::FilterSet;
use crate::record::{GrantPatch, GrantRecord, NewGrant, RecordId};

/// In-memory collection of grant records.
pub struct GrantStore {
    records: Vec<GrantRecord>,
    index: HashMap<RecordId, usize>,
    clock: Box<dyn Clock>,
}

impl GrantStore {
    /// Create an empty store using the system date.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty store with the given clock.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            clock,
        }
    }

    /// Create a store pre-populated with `records`.
    ///
    /// Fails on the first duplicate id or negative amount.
    pub fn from_records<I>(clock: Box<dyn Clock>, records: I) -> Result<Self, GrantError>
    where
        I: IntoIterator<Item = GrantRecord>,
    {
        let mut store = Self::with_clock(clock);
        for record in records {
            store.insert_loaded(record)?;
        }
        Ok(store)
    }

    /// Add a new record from form input.
    pub fn add(&mut self, grant: NewGrant) -> Result<RecordId, GrantError> {
        grant.validate()?;
        if self.index.contains_key(&grant.id) {
            return Err(GrantError::DuplicateId(grant.id));
        }
        let record = grant.into_record(self.clock.today());
        let id = record.id;
        self.push(record);
        tracing::debug!(%id, total = self.records.len(), "grant added");
        Ok(id)
    }

    /// Insert a previously persisted record.
    ///
    /// Unlike `add`, required text fields are not checked so historical rows
    /// survive a reload; ids must still be positive and unique, amounts
    /// non-negative.
    pub fn insert_loaded(&mut self, record: GrantRecord) -> Result<(), GrantError> {
        if record.id.0 == 0 {
            return Err(GrantError::missing("RQS number"));
        }
        if self.index.contains_key(&record.id) {
            return Err(GrantError::DuplicateId(record.id));
        }
        if record.amount < Decimal::ZERO {
            return Err(GrantError::Validation(format!(
                "RQS {} has a negative amount",
                record.id
            )));
        }
        self.push(record);
        Ok(())
    }

    /// Overwrite fields of an existing record and optionally append a note.
    pub fn update(&mut self, id: RecordId, patch: GrantPatch) -> Result<(), GrantError> {
        let slot = *self.index.get(&id).ok_or(GrantError::NotFound(id))?;
        patch.validate()?;
        let appended = patch.has_note();
        let today = self.clock.today();
        patch.apply(&mut self.records[slot], today);
        tracing::debug!(%id, appended, "grant updated");
        Ok(())
    }

    /// Records passing `filter`, in store order.
    #[must_use]
    pub fn filter(&self, filter: &FilterSet) -> Vec<GrantRecord> {
        let hits: Vec<GrantRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        tracing::debug!(matched = hits.len(), total = self.records.len(), "filter applied");
        hits
    }

    /// Group every record by `field` and sum `measure`.
    #[must_use]
    pub fn aggregate_by(&self, field: GroupField, measure: NumericField) -> Aggregation {
        Aggregation::build(&self.records, field, measure)
    }

    /// Owned copy of every record, in store order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<GrantRecord> {
        self.records.clone()
    }

    /// Borrow the records without copying.
    #[must_use]
    pub fn records(&self) -> &[GrantRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&GrantRecord> {
        self.index.get(&id).map(|&slot| &self.records[slot])
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|record| record.id).collect()
    }

    /// Distinct values of `field`, in first-occurrence order.
    #[must_use]
    pub fn distinct_values(&self, field: GroupField) -> Vec<String> {
        self.aggregate_by(field, NumericField::Count)
            .into_vec()
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Today according to the store clock.
    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    fn push(&mut self, record: GrantRecord) {
        self.index.insert(record.id, self.records.len());
        self.records.push(record);
    }
}

impl Default for GrantStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrantStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrantStore")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}
