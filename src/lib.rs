//! Shared fixtures for the workspace integration tests.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use rqstrack_core::{ActiveStage, FixedClock, GrantStore, NewGrant, RecordId, Status};

/// Date every integration test treats as today.
#[must_use]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap_or_default()
}

/// Empty store pinned to `test_today`.
#[must_use]
pub fn empty_store() -> GrantStore {
    GrantStore::with_clock(Box::new(FixedClock(test_today())))
}

/// Path of a file under `tests/testdata`.
#[must_use]
pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

/// A valid new grant with the given id, vendor and amount in cents.
#[must_use]
pub fn new_grant(id: u64, vendor: &str, cents: i64) -> NewGrant {
    NewGrant {
        id: RecordId(id),
        vendor: vendor.to_string(),
        description: "Benefits application assistance".to_string(),
        amount: Decimal::new(cents, 2),
        assigned_staff: "Donald Southworth".to_string(),
        date_received: test_today(),
        document_start_date: test_today(),
        status: Status::Draft,
        active_stage: ActiveStage::Drafting,
        sos_gs: true,
        sam_record: false,
        core_number: String::new(),
        contract_record_number: id,
        initial_note: None,
    }
}
