//! Sample records used when no data file exists yet.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{
    DEFAULT_CONTRACT_TYPE, DEFAULT_DESCRIPTION, DEFAULT_RECORD_TYPE, DEFAULT_STATUS_CATEGORY,
};
use crate::record::{GrantRecord, RecordId};
use crate::vocabulary::{ActiveStage, Status};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The two sample grants shipped with the tracker.
#[must_use]
pub fn sample_records() -> Vec<GrantRecord> {
    vec![
        GrantRecord {
            id: RecordId(12769),
            date_received: date(2025, 4, 30),
            document_start_date: date(2025, 5, 19),
            vendor: "El Grupo Vida Inc".into(),
            description: DEFAULT_DESCRIPTION.into(),
            amount: Decimal::new(125_000, 0),
            assigned_staff: "Donald Southworth".into(),
            status: Status::InDraft,
            sos_gs: true,
            sam_record: false,
            core_number: String::new(),
            contract_record_number: 10078,
            record_type: DEFAULT_RECORD_TYPE.into(),
            contract_type: DEFAULT_CONTRACT_TYPE.into(),
            contract_name: "El Grupo_DAA_10078_POGG1 KAAA 2026-XXXX_BY26".into(),
            active_stage: ActiveStage::Drafting,
            last_modified_by: "Don Southworth".into(),
            status_category: DEFAULT_STATUS_CATEGORY.into(),
            timeline_events: vec![
                "05/19/2025: RQS in-review. DS".into(),
                "06/02/2025: Entered in CORE Budget & SOW in progress".into(),
            ],
            timeline_raw: None,
            last_updated: date(2025, 6, 2),
        },
        GrantRecord {
            id: RecordId(12849),
            date_received: date(2025, 5, 9),
            document_start_date: date(2025, 5, 19),
            vendor: "County of Archuleta".into(),
            description: DEFAULT_DESCRIPTION.into(),
            amount: Decimal::new(25_000, 0),
            assigned_staff: "Donald Southworth".into(),
            status: Status::InDraft,
            sos_gs: true,
            sam_record: false,
            core_number: String::new(),
            contract_record_number: 10077,
            record_type: DEFAULT_RECORD_TYPE.into(),
            contract_type: DEFAULT_CONTRACT_TYPE.into(),
            contract_name: "County of Archuleta_DAA_10077_POGG1 KAAA 2026-XXXX_BY26".into(),
            active_stage: ActiveStage::Drafting,
            last_modified_by: "Don Southworth".into(),
            status_category: DEFAULT_STATUS_CATEGORY.into(),
            timeline_events: vec![
                "05/19/2025: RQS in-review. DS".into(),
                "06/03/25: Entered in CORE Budget & SOW in progress".into(),
            ],
            timeline_raw: None,
            last_updated: date(2025, 6, 3),
        },
    ]
}
