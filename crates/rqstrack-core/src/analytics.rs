//! Dashboard views derived from the store: summary figures, status counts,
//! vendor distribution, progress overview and monthly intake volume.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::aggregate::{Aggregation, GroupField, NumericField};
use crate::record::{GrantRecord, RecordId};
use crate::store::GrantStore;

/// Headline figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_grants: usize,
    pub total_amount: Decimal,
    /// Mean amount, `None` for an empty store.
    pub average_amount: Option<Decimal>,
}

/// Progress of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRow {
    pub id: RecordId,
    pub vendor: String,
    pub progress: u8,
}

#[must_use]
pub fn summary(store: &GrantStore) -> Summary {
    let total_grants = store.len();
    let total_amount: Decimal = store.records().iter().map(|r| r.amount).sum();
    let average_amount =
        (total_grants > 0).then(|| (total_amount / Decimal::from(total_grants)).round_dp(2));
    Summary {
        total_grants,
        total_amount,
        average_amount,
    }
}

/// Records per status, most frequent first.
#[must_use]
pub fn status_counts(store: &GrantStore) -> Vec<(String, usize)> {
    store
        .aggregate_by(GroupField::Status, NumericField::Count)
        .sorted_descending()
        .into_vec()
        .into_iter()
        .map(|(status, count)| (status, decimal_count(count)))
        .collect()
}

/// Summed amount per vendor, largest first.
#[must_use]
pub fn vendor_distribution(store: &GrantStore) -> Aggregation {
    store
        .aggregate_by(GroupField::Vendor, NumericField::Amount)
        .sorted_descending()
}

/// Progress percentage per record, in store order.
#[must_use]
pub fn progress_overview(store: &GrantStore) -> Vec<ProgressRow> {
    store.records().iter().map(progress_row).collect()
}

/// Records received per month (`YYYY-MM`), oldest month first.
#[must_use]
pub fn monthly_volume(store: &GrantStore) -> Vec<(String, usize)> {
    store
        .aggregate_by(GroupField::MonthReceived, NumericField::Count)
        .sorted_by_key()
        .into_vec()
        .into_iter()
        .map(|(month, count)| (month, decimal_count(count)))
        .collect()
}

fn progress_row(record: &GrantRecord) -> ProgressRow {
    ProgressRow {
        id: record.id,
        vendor: record.vendor.clone(),
        progress: record.progress(),
    }
}

fn decimal_count(value: Decimal) -> usize {
    value.to_usize().unwrap_or(0)
}
