//! Inclusion-set filters over categorical record fields.

use std::collections::HashSet;

use crate::record::GrantRecord;
use crate::vocabulary::{ActiveStage, Status};

/// Inclusion sets per categorical field.
///
/// An empty set places no restriction on its field. A record matches when
/// every non-empty set contains the record's value.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub vendors: HashSet<String>,
    pub statuses: HashSet<Status>,
    pub staff: HashSet<String>,
    pub stages: HashSet<ActiveStage>,
    pub record_types: HashSet<String>,
}

impl FilterSet {
    /// A filter that passes every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors.extend(vendors.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_statuses<I: IntoIterator<Item = Status>>(mut self, statuses: I) -> Self {
        self.statuses.extend(statuses);
        self
    }

    #[must_use]
    pub fn with_staff<I, S>(mut self, staff: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staff.extend(staff.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_stages<I: IntoIterator<Item = ActiveStage>>(mut self, stages: I) -> Self {
        self.stages.extend(stages);
        self
    }

    #[must_use]
    pub fn with_record_types<I, S>(mut self, record_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record_types
            .extend(record_types.into_iter().map(Into::into));
        self
    }

    /// True when no field is restricted.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.vendors.is_empty()
            && self.statuses.is_empty()
            && self.staff.is_empty()
            && self.stages.is_empty()
            && self.record_types.is_empty()
    }

    /// Whether a record passes every restricted field.
    #[must_use]
    pub fn matches(&self, record: &GrantRecord) -> bool {
        admits(&self.vendors, &record.vendor)
            && admits(&self.statuses, &record.status)
            && admits(&self.staff, &record.assigned_staff)
            && admits(&self.stages, &record.active_stage)
            && admits(&self.record_types, &record.record_type)
    }
}

fn admits<T, Q>(set: &HashSet<T>, value: &Q) -> bool
where
    T: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
    Q: Eq + std::hash::Hash + ?Sized,
{
    set.is_empty() || set.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_records;

    #[test]
    fn empty_filter_passes_everything() {
        let filter = FilterSet::new();
        assert!(filter.is_unrestricted());
        assert!(sample_records().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn vendor_filter_restricts() {
        let records = sample_records();
        let filter = FilterSet::new().with_vendors(["County of Archuleta"]);
        let hits: Vec<_> = records.iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].vendor, "County of Archuleta");
    }

    #[test]
    fn fields_combine_with_and() {
        let records = sample_records();
        let filter = FilterSet::new()
            .with_vendors(["County of Archuleta"])
            .with_statuses([Status::Executed]);
        assert!(!records.iter().any(|r| filter.matches(r)));
    }

    #[test]
    fn stage_and_record_type_filters() {
        let records = sample_records();
        let filter = FilterSet::new()
            .with_stages([ActiveStage::Drafting])
            .with_record_types(["Purchase Order"]);
        assert_eq!(records.iter().filter(|r| filter.matches(r)).count(), 2);

        let filter = FilterSet::new().with_record_types(["Contract"]);
        assert_eq!(records.iter().filter(|r| filter.matches(r)).count(), 0);
    }
}
