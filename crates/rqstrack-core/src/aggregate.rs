//! Group-and-sum over categorical record fields.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::constants::MONTH_FORMAT;
use crate::error::GrantError;
use crate::record::GrantRecord;

/// Categorical field records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Vendor,
    Status,
    ActiveStage,
    AssignedStaff,
    RecordType,
    StatusCategory,
    /// Calendar month of `date_received`, as `YYYY-MM`.
    MonthReceived,
}

impl GroupField {
    pub const ALL: [GroupField; 7] = [
        GroupField::Vendor,
        GroupField::Status,
        GroupField::ActiveStage,
        GroupField::AssignedStaff,
        GroupField::RecordType,
        GroupField::StatusCategory,
        GroupField::MonthReceived,
    ];

    /// Command-line name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GroupField::Vendor => "vendor",
            GroupField::Status => "status",
            GroupField::ActiveStage => "stage",
            GroupField::AssignedStaff => "staff",
            GroupField::RecordType => "record-type",
            GroupField::StatusCategory => "status-category",
            GroupField::MonthReceived => "month",
        }
    }

    /// Group key of a record.
    #[must_use]
    pub fn key(self, record: &GrantRecord) -> String {
        match self {
            GroupField::Vendor => record.vendor.clone(),
            GroupField::Status => record.status.label().to_string(),
            GroupField::ActiveStage => record.active_stage.label().to_string(),
            GroupField::AssignedStaff => record.assigned_staff.clone(),
            GroupField::RecordType => record.record_type.clone(),
            GroupField::StatusCategory => record.status_category.clone(),
            GroupField::MonthReceived => record.date_received.format(MONTH_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupField {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| GrantError::Validation(format!("unknown group field: {s:?}")))
    }
}

/// Numeric field summed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericField {
    /// Original award amount.
    #[default]
    Amount,
    /// Derived progress percentage.
    Progress,
    /// One per record; the sum is the group size.
    Count,
}

impl NumericField {
    #[must_use]
    pub fn value(self, record: &GrantRecord) -> Decimal {
        match self {
            NumericField::Amount => record.amount,
            NumericField::Progress => Decimal::from(record.progress()),
            NumericField::Count => Decimal::ONE,
        }
    }
}

impl FromStr for NumericField {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" => Ok(NumericField::Amount),
            "progress" => Ok(NumericField::Progress),
            "count" => Ok(NumericField::Count),
            other => Err(GrantError::Validation(format!(
                "unknown numeric field: {other:?}"
            ))),
        }
    }
}

/// Summed values per group, in order of each group's first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    groups: Vec<(String, Decimal)>,
}

impl Aggregation {
    /// Group `records` by `field` and sum `measure`.
    pub fn build<'a, I>(records: I, field: GroupField, measure: NumericField) -> Self
    where
        I: IntoIterator<Item = &'a GrantRecord>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Decimal)> = Vec::new();
        for record in records {
            let key = field.key(record);
            let value = measure.value(record);
            match index.get(&key) {
                Some(&slot) => groups[slot].1 += value,
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push((key, value));
                }
            }
        }
        Self { groups }
    }

    /// Sum for one group.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum across every group.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.groups.iter().map(|(_, v)| *v).sum()
    }

    /// Groups ordered by sum, largest first. Ties keep first-occurrence order.
    #[must_use]
    pub fn sorted_descending(mut self) -> Self {
        self.groups.sort_by(|a, b| b.1.cmp(&a.1));
        self
    }

    /// Groups ordered by key.
    #[must_use]
    pub fn sorted_by_key(mut self) -> Self {
        self.groups.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(String, Decimal)> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_records;

    fn with_amounts(pairs: &[(&str, i64)]) -> Vec<GrantRecord> {
        let template = sample_records().remove(0);
        pairs
            .iter()
            .enumerate()
            .map(|(i, (vendor, amount))| GrantRecord {
                id: crate::record::RecordId(i as u64 + 1),
                vendor: (*vendor).to_string(),
                amount: Decimal::from(*amount),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn sums_per_vendor_in_first_occurrence_order() {
        let records = with_amounts(&[("A", 100), ("B", 50), ("A", 25)]);
        let agg = Aggregation::build(&records, GroupField::Vendor, NumericField::Amount);
        assert_eq!(
            agg.clone().into_vec(),
            vec![
                ("A".to_string(), Decimal::from(125)),
                ("B".to_string(), Decimal::from(50))
            ]
        );
        assert_eq!(agg.get("A"), Some(Decimal::from(125)));
        assert_eq!(agg.total(), Decimal::from(175));
    }

    #[test]
    fn sorted_descending_orders_by_sum() {
        let records = with_amounts(&[("A", 10), ("B", 50), ("C", 50), ("D", 70)]);
        let agg = Aggregation::build(&records, GroupField::Vendor, NumericField::Amount)
            .sorted_descending();
        let keys: Vec<&str> = agg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn count_measure_counts() {
        let records = with_amounts(&[("A", 1), ("A", 2), ("B", 3)]);
        let agg = Aggregation::build(&records, GroupField::Vendor, NumericField::Count);
        assert_eq!(agg.get("A"), Some(Decimal::from(2)));
    }

    #[test]
    fn month_grouping() {
        let records = sample_records();
        let agg = Aggregation::build(&records, GroupField::MonthReceived, NumericField::Count);
        assert_eq!(agg.get("2025-04"), Some(Decimal::ONE));
        assert_eq!(agg.get("2025-05"), Some(Decimal::ONE));
    }

    #[test]
    fn empty_input() {
        let agg = Aggregation::build(&Vec::<GrantRecord>::new(), GroupField::Status, NumericField::Amount);
        assert!(agg.is_empty());
        assert_eq!(agg.total(), Decimal::ZERO);
    }

    #[test]
    fn field_names_parse() {
        for field in GroupField::ALL {
            assert_eq!(field.name().parse::<GroupField>().unwrap(), field);
        }
        assert!("nope".parse::<GroupField>().is_err());
        assert_eq!("progress".parse::<NumericField>().unwrap(), NumericField::Progress);
    }
}
