//! Grant record types: the stored record, the add request and the update patch.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTRACT_TYPE, DEFAULT_RECORD_TYPE, DEFAULT_STATUS_CATEGORY};
use crate::error::GrantError;
use crate::progress::progress_percentage;
use crate::timeline::format_event;
use crate::vocabulary::{ActiveStage, Status};

/// RQS number identifying a grant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Spreadsheet exports write integer columns as `12769.0`.
        let digits = s.strip_suffix(".0").unwrap_or(s);
        digits
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| GrantError::Validation(format!("invalid RQS number: {s:?}")))
    }
}

/// One purchase-order / grant record moving through the approval workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    pub id: RecordId,
    pub date_received: NaiveDate,
    pub document_start_date: NaiveDate,
    /// Vendor or department receiving the grant.
    pub vendor: String,
    pub description: String,
    /// Original award amount, never negative.
    pub amount: Decimal,
    pub assigned_staff: String,
    pub status: Status,
    pub sos_gs: bool,
    pub sam_record: bool,
    pub core_number: String,
    pub contract_record_number: u64,
    pub record_type: String,
    pub contract_type: String,
    pub contract_name: String,
    pub active_stage: ActiveStage,
    pub last_modified_by: String,
    pub status_category: String,
    /// Dated notes, oldest first. Append-only.
    pub timeline_events: Vec<String>,
    /// Timeline cell that could not be read on load, kept verbatim so a
    /// save writes it back unchanged. Becomes the first event once a new
    /// note is appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_raw: Option<String>,
    pub last_updated: NaiveDate,
}

impl GrantRecord {
    /// Progress percentage derived from status and active stage.
    #[must_use]
    pub fn progress(&self) -> u8 {
        progress_percentage(self.status.label(), self.active_stage.label())
    }
}

/// Fields supplied when adding a record.
#[derive(Debug, Clone)]
pub struct NewGrant {
    pub id: RecordId,
    pub vendor: String,
    pub description: String,
    pub amount: Decimal,
    pub assigned_staff: String,
    pub date_received: NaiveDate,
    pub document_start_date: NaiveDate,
    pub status: Status,
    pub active_stage: ActiveStage,
    pub sos_gs: bool,
    pub sam_record: bool,
    pub core_number: String,
    pub contract_record_number: u64,
    /// First timeline note, if any.
    pub initial_note: Option<String>,
}

impl NewGrant {
    /// Check required fields and the amount.
    pub fn validate(&self) -> Result<(), GrantError> {
        if self.id.0 == 0 {
            return Err(GrantError::missing("RQS number"));
        }
        require("vendor", &self.vendor)?;
        require("description", &self.description)?;
        require("assigned staff", &self.assigned_staff)?;
        if self.amount <= Decimal::ZERO {
            return Err(GrantError::Validation(format!(
                "amount must be greater than zero, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Build the stored record. Call `validate` first.
    #[must_use]
    pub fn into_record(self, today: NaiveDate) -> GrantRecord {
        let vendor = self.vendor.trim().to_string();
        let staff = self.assigned_staff.trim().to_string();
        let timeline_events = self
            .initial_note
            .as_deref()
            .filter(|note| !note.trim().is_empty())
            .map(|note| vec![format_event(today, note)])
            .unwrap_or_default();

        GrantRecord {
            id: self.id,
            date_received: self.date_received,
            document_start_date: self.document_start_date,
            contract_name: format!("{vendor}_DAA_{}_POGG1", self.contract_record_number),
            vendor,
            description: self.description.trim().to_string(),
            amount: self.amount,
            last_modified_by: staff.clone(),
            assigned_staff: staff,
            status: self.status,
            sos_gs: self.sos_gs,
            sam_record: self.sam_record,
            core_number: self.core_number.trim().to_string(),
            contract_record_number: self.contract_record_number,
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            contract_type: DEFAULT_CONTRACT_TYPE.to_string(),
            active_stage: self.active_stage,
            status_category: DEFAULT_STATUS_CATEGORY.to_string(),
            timeline_events,
            timeline_raw: None,
            last_updated: today,
        }
    }
}

/// Partial update of an existing record. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct GrantPatch {
    pub status: Option<Status>,
    pub active_stage: Option<ActiveStage>,
    pub core_number: Option<String>,
    pub last_modified_by: Option<String>,
    pub assigned_staff: Option<String>,
    pub description: Option<String>,
    /// Note appended to the timeline. Blank notes are ignored.
    pub timeline_note: Option<String>,
}

impl GrantPatch {
    /// Check supplied fields before anything is written.
    pub fn validate(&self) -> Result<(), GrantError> {
        if let Some(name) = &self.last_modified_by {
            require("last modified by", name)?;
        }
        if let Some(staff) = &self.assigned_staff {
            require("assigned staff", staff)?;
        }
        if let Some(description) = &self.description {
            require("description", description)?;
        }
        Ok(())
    }

    /// Whether the patch appends a timeline entry.
    #[must_use]
    pub fn has_note(&self) -> bool {
        self.timeline_note
            .as_deref()
            .is_some_and(|note| !note.trim().is_empty())
    }

    /// Overwrite fields in place and append the note. Call `validate` first.
    pub fn apply(self, record: &mut GrantRecord, today: NaiveDate) {
        let has_note = self.has_note();
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(stage) = self.active_stage {
            record.active_stage = stage;
        }
        if let Some(core) = self.core_number {
            record.core_number = core.trim().to_string();
        }
        if let Some(name) = self.last_modified_by {
            record.last_modified_by = name.trim().to_string();
        }
        if let Some(staff) = self.assigned_staff {
            record.assigned_staff = staff.trim().to_string();
        }
        if let Some(description) = self.description {
            record.description = description.trim().to_string();
        }
        if let Some(note) = self.timeline_note.filter(|_| has_note) {
            record.timeline_events.extend(record.timeline_raw.take());
            record.timeline_events.push(format_event(today, &note));
        }
        record.last_updated = today;
    }
}

fn require(field: &str, value: &str) -> Result<(), GrantError> {
    if value.trim().is_empty() {
        Err(GrantError::missing(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn new_grant() -> NewGrant {
        NewGrant {
            id: RecordId(12769),
            vendor: "El Grupo Vida Inc".into(),
            description: "Grant award".into(),
            amount: Decimal::new(125_000, 0),
            assigned_staff: "Donald Southworth".into(),
            date_received: day(4, 30),
            document_start_date: day(5, 19),
            status: Status::InDraft,
            active_stage: ActiveStage::Drafting,
            sos_gs: true,
            sam_record: false,
            core_number: String::new(),
            contract_record_number: 10078,
            initial_note: Some("RQS in-review. DS".into()),
        }
    }

    #[test]
    fn record_id_parses_float_form() {
        assert_eq!("12769.0".parse::<RecordId>().unwrap(), RecordId(12769));
        assert_eq!(" 42 ".parse::<RecordId>().unwrap(), RecordId(42));
        assert!("abc".parse::<RecordId>().is_err());
    }

    #[test]
    fn valid_grant_passes() {
        assert!(new_grant().validate().is_ok());
    }

    #[test]
    fn zero_amount_rejected() {
        let mut grant = new_grant();
        grant.amount = Decimal::ZERO;
        assert!(matches!(grant.validate(), Err(GrantError::Validation(_))));
    }

    #[test]
    fn blank_vendor_rejected() {
        let mut grant = new_grant();
        grant.vendor = "   ".into();
        assert_eq!(
            grant.validate(),
            Err(GrantError::Validation("vendor is required".into()))
        );
    }

    #[test]
    fn zero_id_rejected() {
        let mut grant = new_grant();
        grant.id = RecordId(0);
        assert!(grant.validate().is_err());
    }

    #[test]
    fn into_record_fills_defaults() {
        let record = new_grant().into_record(day(6, 2));
        assert_eq!(record.contract_name, "El Grupo Vida Inc_DAA_10078_POGG1");
        assert_eq!(record.record_type, "Purchase Order");
        assert_eq!(record.contract_type, "Purchase Order Grant");
        assert_eq!(record.status_category, "In Process");
        assert_eq!(record.last_modified_by, "Donald Southworth");
        assert_eq!(record.timeline_events, vec!["06/02/2025: RQS in-review. DS"]);
        assert_eq!(record.last_updated, day(6, 2));
        assert_eq!(record.progress(), 25);
    }

    #[test]
    fn blank_initial_note_gives_empty_timeline() {
        let mut grant = new_grant();
        grant.initial_note = Some("  ".into());
        assert!(grant.into_record(day(6, 2)).timeline_events.is_empty());
    }

    #[test]
    fn patch_overwrites_and_appends() {
        let mut record = new_grant().into_record(day(6, 2));
        let patch = GrantPatch {
            status: Some(Status::CoreEntry),
            active_stage: Some(ActiveStage::BudgetAndSow),
            core_number: Some("POGG1 KAAA 2026-0001".into()),
            last_modified_by: Some("Don Southworth".into()),
            timeline_note: Some("Entered in CORE".into()),
            ..GrantPatch::default()
        };
        patch.validate().unwrap();
        patch.apply(&mut record, day(6, 3));

        assert_eq!(record.status, Status::CoreEntry);
        assert_eq!(record.active_stage, ActiveStage::BudgetAndSow);
        assert_eq!(record.core_number, "POGG1 KAAA 2026-0001");
        assert_eq!(record.last_modified_by, "Don Southworth");
        assert_eq!(
            record.timeline_events,
            vec![
                "06/02/2025: RQS in-review. DS",
                "06/03/2025: Entered in CORE"
            ]
        );
        assert_eq!(record.last_updated, day(6, 3));
    }

    #[test]
    fn blank_note_not_appended() {
        let mut record = new_grant().into_record(day(6, 2));
        let patch = GrantPatch {
            timeline_note: Some(String::new()),
            ..GrantPatch::default()
        };
        assert!(!patch.has_note());
        patch.apply(&mut record, day(6, 3));
        assert_eq!(record.timeline_events.len(), 1);
    }

    #[test]
    fn whitespace_note_ignored_and_padding_trimmed() {
        let mut record = new_grant().into_record(day(6, 2));
        let blank = GrantPatch {
            timeline_note: Some(" \t ".into()),
            ..GrantPatch::default()
        };
        assert!(!blank.has_note());
        blank.apply(&mut record, day(6, 3));
        assert_eq!(record.timeline_events.len(), 1);

        let padded = GrantPatch {
            timeline_note: Some("  W-9 received \n".into()),
            ..GrantPatch::default()
        };
        padded.apply(&mut record, day(6, 4));
        assert_eq!(record.timeline_events[1], "06/04/2025: W-9 received");
    }

    #[test]
    fn unreadable_cell_kept_until_next_note() {
        let mut record = new_grant().into_record(day(6, 2));
        record.timeline_events.clear();
        record.timeline_raw = Some("Timeline data needs formatting".into());

        let status_only = GrantPatch {
            status: Some(Status::RqsReview),
            ..GrantPatch::default()
        };
        status_only.apply(&mut record, day(6, 3));
        assert_eq!(
            record.timeline_raw.as_deref(),
            Some("Timeline data needs formatting")
        );
        assert!(record.timeline_events.is_empty());

        let note = GrantPatch {
            timeline_note: Some("Vendor called".into()),
            ..GrantPatch::default()
        };
        note.apply(&mut record, day(6, 4));
        assert_eq!(record.timeline_raw, None);
        assert_eq!(
            record.timeline_events,
            vec!["Timeline data needs formatting", "06/04/2025: Vendor called"]
        );
    }

    #[test]
    fn patch_rejects_blank_modifier() {
        let patch = GrantPatch {
            last_modified_by: Some(" ".into()),
            ..GrantPatch::default()
        };
        assert!(matches!(patch.validate(), Err(GrantError::Validation(_))));
    }
}
