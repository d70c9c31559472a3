//! Mapping between `GrantRecord` and one CSV row.
//!
//! Column names follow the Salesforce export the tracker was first fed
//! from. Every cell is read as text and converted here so that a bad value
//! is reported with its column name.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rqstrack_core::constants::ISO_DATE_FORMAT;
use rqstrack_core::timeline::{decode_events, encode_events};
use rqstrack_core::{ActiveStage, GrantRecord, RecordId, Status};

/// Column names, in file order. Must match the field order of `CsvRow`.
pub const COLUMNS: [&str; 20] = [
    "RQS",
    "Date_RQS_Received",
    "Document_Start_Date",
    "Vendor",
    "Description",
    "Original_Amount",
    "PCS_Assigned_Staff",
    "Status",
    "SOS_GS",
    "SAM_Record",
    "CORE_Number",
    "Contract_Record_Number",
    "Record_Type",
    "Contract_Type",
    "Contract_Name",
    "Active_Stage",
    "Last_Modified_By",
    "Status_Category",
    "Timeline_Events",
    "Last_Updated",
];

/// One CSV row, all cells as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "RQS")]
    pub rqs: String,
    #[serde(rename = "Date_RQS_Received")]
    pub date_received: String,
    #[serde(rename = "Document_Start_Date", default)]
    pub document_start_date: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Original_Amount")]
    pub amount: String,
    #[serde(rename = "PCS_Assigned_Staff", default)]
    pub assigned_staff: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SOS_GS", default)]
    pub sos_gs: String,
    #[serde(rename = "SAM_Record", default)]
    pub sam_record: String,
    #[serde(rename = "CORE_Number", default)]
    pub core_number: String,
    #[serde(rename = "Contract_Record_Number", default)]
    pub contract_record_number: String,
    #[serde(rename = "Record_Type", default)]
    pub record_type: String,
    #[serde(rename = "Contract_Type", default)]
    pub contract_type: String,
    #[serde(rename = "Contract_Name", default)]
    pub contract_name: String,
    #[serde(rename = "Active_Stage")]
    pub active_stage: String,
    #[serde(rename = "Last_Modified_By", default)]
    pub last_modified_by: String,
    #[serde(rename = "Status_Category", default)]
    pub status_category: String,
    #[serde(rename = "Timeline_Events", default)]
    pub timeline_events: String,
    #[serde(rename = "Last_Updated", default)]
    pub last_updated: String,
}

impl From<&GrantRecord> for CsvRow {
    fn from(record: &GrantRecord) -> Self {
        Self {
            rqs: record.id.to_string(),
            date_received: format_date(record.date_received),
            document_start_date: format_date(record.document_start_date),
            vendor: record.vendor.clone(),
            description: record.description.clone(),
            amount: record.amount.normalize().to_string(),
            assigned_staff: record.assigned_staff.clone(),
            status: record.status.label().to_string(),
            sos_gs: record.sos_gs.to_string(),
            sam_record: record.sam_record.to_string(),
            core_number: record.core_number.clone(),
            contract_record_number: record.contract_record_number.to_string(),
            record_type: record.record_type.clone(),
            contract_type: record.contract_type.clone(),
            contract_name: record.contract_name.clone(),
            active_stage: record.active_stage.label().to_string(),
            last_modified_by: record.last_modified_by.clone(),
            status_category: record.status_category.clone(),
            timeline_events: record
                .timeline_raw
                .clone()
                .unwrap_or_else(|| encode_events(&record.timeline_events)),
            last_updated: format_date(record.last_updated),
        }
    }
}

impl CsvRow {
    /// Convert to a record. The error names the offending column.
    pub fn into_record(self) -> Result<GrantRecord, String> {
        let id = RecordId::from_str(&self.rqs).map_err(|e| format!("RQS: {e}"))?;
        let date_received = parse_date("Date_RQS_Received", &self.date_received)?;
        let document_start_date = if self.document_start_date.trim().is_empty() {
            date_received
        } else {
            parse_date("Document_Start_Date", &self.document_start_date)?
        };
        let last_updated = if self.last_updated.trim().is_empty() {
            date_received
        } else {
            parse_date("Last_Updated", &self.last_updated)?
        };
        let amount = Decimal::from_str(self.amount.trim())
            .map_err(|e| format!("Original_Amount {:?}: {e}", self.amount))?;
        let status = Status::from_str(&self.status).map_err(|e| format!("Status: {e}"))?;
        let active_stage =
            ActiveStage::from_str(&self.active_stage).map_err(|e| format!("Active_Stage: {e}"))?;
        let contract_record_number = parse_count(&self.contract_record_number)?;
        let (timeline_events, timeline_raw) = match decode_events(&self.timeline_events) {
            Some(events) => (events, None),
            None => {
                tracing::warn!(
                    rqs = %id,
                    cell = %self.timeline_events,
                    "unreadable timeline cell, kept verbatim"
                );
                (Vec::new(), Some(self.timeline_events))
            }
        };

        Ok(GrantRecord {
            id,
            date_received,
            document_start_date,
            vendor: self.vendor,
            description: self.description,
            amount,
            assigned_staff: self.assigned_staff,
            status,
            sos_gs: parse_flag("SOS_GS", &self.sos_gs)?,
            sam_record: parse_flag("SAM_Record", &self.sam_record)?,
            core_number: self.core_number,
            contract_record_number,
            record_type: self.record_type,
            contract_type: self.contract_type,
            contract_name: self.contract_name,
            active_stage,
            last_modified_by: self.last_modified_by,
            status_category: self.status_category,
            timeline_events,
            timeline_raw,
            last_updated,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn parse_date(column: &str, cell: &str) -> Result<NaiveDate, String> {
    // Spreadsheet tools may append a time component.
    let day = cell
        .trim()
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or_default();
    NaiveDate::parse_from_str(day, ISO_DATE_FORMAT).map_err(|e| format!("{column} {cell:?}: {e}"))
}

fn parse_flag(column: &str, cell: &str) -> Result<bool, String> {
    match cell.trim() {
        "true" | "True" | "TRUE" | "1" => Ok(true),
        "false" | "False" | "FALSE" | "0" | "" => Ok(false),
        other => Err(format!("{column}: expected true/false, got {other:?}")),
    }
}

fn parse_count(cell: &str) -> Result<u64, String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0);
    }
    cell.strip_suffix(".0")
        .unwrap_or(cell)
        .parse()
        .map_err(|_| format!("Contract_Record_Number: invalid number {cell:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rqstrack_core::seed::sample_records;

    #[test]
    fn record_survives_row_conversion() {
        for record in sample_records() {
            let row = CsvRow::from(&record);
            assert_eq!(row.into_record().unwrap(), record);
        }
    }

    #[test]
    fn columns_match_serialized_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(CsvRow::default()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().next().unwrap(), COLUMNS.join(","));
    }

    #[test]
    fn amount_written_without_trailing_zeros() {
        let mut record = sample_records().remove(0);
        record.amount = Decimal::new(12_500_050, 2);
        assert_eq!(CsvRow::from(&record).amount, "125000.5");
    }

    #[test]
    fn spreadsheet_style_cells_accepted() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.rqs = "12769.0".into();
        row.date_received = "2025-04-30 00:00:00".into();
        row.sos_gs = "True".into();
        row.contract_record_number = "10078.0".into();
        row.amount = "125000.0".into();
        let record = row.into_record().unwrap();
        assert_eq!(record.id, RecordId(12769));
        assert!(record.sos_gs);
        assert_eq!(record.contract_record_number, 10078);
        assert_eq!(record.amount, Decimal::from(125_000));
    }

    #[test]
    fn missing_optional_dates_default_to_received() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.last_updated = String::new();
        row.document_start_date = String::new();
        let record = row.into_record().unwrap();
        assert_eq!(record.last_updated, record.date_received);
        assert_eq!(record.document_start_date, record.date_received);
    }

    #[test]
    fn bad_status_names_column() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.status = "Pending".into();
        let err = row.into_record().unwrap_err();
        assert!(err.starts_with("Status:"), "{err}");
    }

    #[test]
    fn bad_flag_rejected() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.sam_record = "maybe".into();
        assert!(row.into_record().unwrap_err().contains("SAM_Record"));
    }

    #[test]
    fn unreadable_timeline_is_kept_verbatim() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.timeline_events = "Timeline data needs formatting".into();
        let record = row.into_record().unwrap();
        assert!(record.timeline_events.is_empty());
        assert_eq!(
            record.timeline_raw.as_deref(),
            Some("Timeline data needs formatting")
        );
        assert_eq!(
            CsvRow::from(&record).timeline_events,
            "Timeline data needs formatting"
        );
    }

    #[test]
    fn python_repr_timeline_is_decoded() {
        let mut row = CsvRow::from(&sample_records()[0]);
        row.timeline_events =
            r#"['05/19/2025: RQS in-review. DS', "06/02/2025: Vendor's W-9 received"]"#.into();
        let record = row.into_record().unwrap();
        assert_eq!(record.timeline_raw, None);
        assert_eq!(record.timeline_events[1], "06/02/2025: Vendor's W-9 received");
    }
}
