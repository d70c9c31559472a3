//! Report presenters.
//!
//! A presenter turns store views into text on any `io::Write`, so the binary
//! writes to stdout and the tests write to a buffer.

use std::io::{self, Write};

use rust_decimal::Decimal;

use rqstrack_core::analytics::{ProgressRow, Summary};
use rqstrack_core::constants::TIMELINE_DATE_FORMAT;
use rqstrack_core::{Aggregation, GrantRecord, GroupField, NumericField};

use crate::output::{bar, format_currency, format_number, format_percent, truncate};
use crate::ui;

const VENDOR_WIDTH: usize = 28;
const STAFF_WIDTH: usize = 18;
const BAR_WIDTH: usize = 30;

/// Renders store views for the user.
pub trait ReportPresenter {
    /// Table of records with formatted currency and progress.
    fn present_records(&self, out: &mut dyn Write, records: &[GrantRecord]) -> io::Result<()>;

    /// Every field of one record, then its timeline.
    fn present_record(&self, out: &mut dyn Write, record: &GrantRecord) -> io::Result<()>;

    /// Headline figures and status distribution.
    fn present_summary(
        &self,
        out: &mut dyn Write,
        summary: &Summary,
        statuses: &[(String, usize)],
    ) -> io::Result<()>;

    /// Vendor amounts, progress per record and monthly intake.
    fn present_analytics(
        &self,
        out: &mut dyn Write,
        vendors: &Aggregation,
        progress: &[ProgressRow],
        months: &[(String, usize)],
    ) -> io::Result<()>;

    /// One aggregated series.
    fn present_aggregation(
        &self,
        out: &mut dyn Write,
        field: GroupField,
        measure: NumericField,
        aggregation: &Aggregation,
    ) -> io::Result<()>;

    /// Report an error to stderr.
    fn present_error(&self, error: &str);
}

/// Plain-text table presenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TablePresenter {
    verbose: bool,
    quiet: bool,
}

impl TablePresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn clip(&self, text: &str, width: usize) -> String {
        if self.verbose {
            text.to_string()
        } else {
            truncate(text, width)
        }
    }
}

impl ReportPresenter for TablePresenter {
    fn present_records(&self, out: &mut dyn Write, records: &[GrantRecord]) -> io::Result<()> {
        if self.quiet {
            for record in records {
                writeln!(out, "{}", record.id)?;
            }
            return Ok(());
        }
        if records.is_empty() {
            return writeln!(out, "No records match the current filters.");
        }

        let vendor_width = if self.verbose {
            records
                .iter()
                .map(|r| r.vendor.chars().count())
                .max()
                .unwrap_or(0)
                .max(6)
        } else {
            VENDOR_WIDTH
        };
        writeln!(
            out,
            "{:<7} {:<vendor_width$} {:>16} {:<22} {:<24} {:<STAFF_WIDTH$} {:>10} {:<12}",
            "RQS", "Vendor", "Amount", "Status", "Stage", "Staff", "Progress_%", "Last Updated",
        )?;
        writeln!(out, "{:-<1$}", "", 7 + vendor_width + STAFF_WIDTH + 16 + 22 + 24 + 10 + 12 + 7)?;
        for record in records {
            writeln!(
                out,
                "{:<7} {:<vendor_width$} {:>16} {:<22} {:<24} {:<STAFF_WIDTH$} {:>10} {:<12}",
                record.id.to_string(),
                self.clip(&record.vendor, vendor_width),
                format_currency(record.amount),
                record.status.label(),
                record.active_stage.label(),
                self.clip(&record.assigned_staff, STAFF_WIDTH),
                format_percent(record.progress()),
                record.last_updated.format(TIMELINE_DATE_FORMAT).to_string(),
            )?;
        }
        writeln!(
            out,
            "{} record(s), {}",
            format_number(records.len()),
            format_currency(records.iter().map(|r| r.amount).sum())
        )
    }

    fn present_record(&self, out: &mut dyn Write, record: &GrantRecord) -> io::Result<()> {
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        let fields: [(&str, String); 20] = [
            ("RQS", record.id.to_string()),
            ("Vendor", record.vendor.clone()),
            ("Description", record.description.clone()),
            ("Amount", format_currency(record.amount)),
            ("Assigned Staff", record.assigned_staff.clone()),
            ("Status", record.status.label().to_string()),
            ("Active Stage", record.active_stage.label().to_string()),
            ("Progress", format_percent(record.progress())),
            ("Date Received", record.date_received.to_string()),
            ("Document Start", record.document_start_date.to_string()),
            ("SOS GS", yes_no(record.sos_gs).to_string()),
            ("SAM Record", yes_no(record.sam_record).to_string()),
            ("CORE Number", record.core_number.clone()),
            ("Contract Number", record.contract_record_number.to_string()),
            ("Record Type", record.record_type.clone()),
            ("Contract Type", record.contract_type.clone()),
            ("Contract Name", record.contract_name.clone()),
            ("Status Category", record.status_category.clone()),
            ("Last Modified By", record.last_modified_by.clone()),
            ("Last Updated", record.last_updated.to_string()),
        ];
        for (label, value) in &fields {
            writeln!(out, "{label:<17} {value}")?;
        }

        writeln!(out)?;
        writeln!(out, "Timeline")?;
        if let Some(raw) = &record.timeline_raw {
            return writeln!(out, "  Unreadable timeline cell: {raw}");
        }
        if record.timeline_events.is_empty() {
            return writeln!(out, "  No timeline events recorded");
        }
        for event in &record.timeline_events {
            writeln!(out, "  - {event}")?;
        }
        Ok(())
    }

    fn present_summary(
        &self,
        out: &mut dyn Write,
        summary: &Summary,
        statuses: &[(String, usize)],
    ) -> io::Result<()> {
        let average = summary
            .average_amount
            .map_or_else(|| "n/a".to_string(), format_currency);
        writeln!(out, "Total Grants:  {}", format_number(summary.total_grants))?;
        writeln!(out, "Total Amount:  {}", format_currency(summary.total_amount))?;
        writeln!(out, "Average Grant: {average}")?;
        if self.quiet {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Status Distribution")?;
        for (status, count) in statuses {
            writeln!(out, "  {status:<24} {count:>6}")?;
        }
        Ok(())
    }

    fn present_analytics(
        &self,
        out: &mut dyn Write,
        vendors: &Aggregation,
        progress: &[ProgressRow],
        months: &[(String, usize)],
    ) -> io::Result<()> {
        writeln!(out, "Vendor Distribution")?;
        let max = vendors.iter().map(|(_, v)| v).max().unwrap_or(Decimal::ZERO);
        for (vendor, amount) in vendors.iter() {
            writeln!(
                out,
                "  {:<VENDOR_WIDTH$} {:>16} {}",
                self.clip(vendor, VENDOR_WIDTH),
                format_currency(amount),
                bar(amount, max, BAR_WIDTH)
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Progress Overview")?;
        for row in progress {
            writeln!(
                out,
                "  {:<7} {:<VENDOR_WIDTH$} {:>5}",
                row.id.to_string(),
                self.clip(&row.vendor, VENDOR_WIDTH),
                format_percent(row.progress)
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Monthly Volume")?;
        for (month, count) in months {
            writeln!(out, "  {month:<8} {count:>6}")?;
        }
        Ok(())
    }

    fn present_aggregation(
        &self,
        out: &mut dyn Write,
        field: GroupField,
        measure: NumericField,
        aggregation: &Aggregation,
    ) -> io::Result<()> {
        let render = |value: Decimal| match measure {
            NumericField::Amount => format_currency(value),
            NumericField::Progress | NumericField::Count => value.normalize().to_string(),
        };
        if self.quiet {
            for (key, value) in aggregation.iter() {
                writeln!(out, "{key}\t{}", value.normalize())?;
            }
            return Ok(());
        }
        writeln!(out, "{:<32} {:>16}", field.name(), measure_name(measure))?;
        for (key, value) in aggregation.iter() {
            writeln!(out, "{:<32} {:>16}", self.clip(key, 32), render(value))?;
        }
        writeln!(out, "{:<32} {:>16}", "Total", render(aggregation.total()))
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

fn measure_name(measure: NumericField) -> &'static str {
    match measure {
        NumericField::Amount => "amount",
        NumericField::Progress => "progress",
        NumericField::Count => "count",
    }
}
