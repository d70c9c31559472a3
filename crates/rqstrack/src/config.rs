//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;

use rqstrack_core::constants::DEFAULT_DESCRIPTION;
use rqstrack_core::{
    ActiveStage, Clock, FilterSet, FixedClock, GrantPatch, GroupField, NewGrant, NumericField,
    RecordId, Status, SystemClock,
};

/// Track RQS/POGG1 grant records through the approval workflow.
#[derive(Parser, Debug)]
#[command(name = "rqstrack", version, about)]
pub struct AppConfig {
    /// CSV data file holding the grant records.
    #[arg(
        long,
        global = true,
        default_value = "rqs_cleaned_data.csv",
        env = "RQSTRACK_DATA"
    )]
    pub data: PathBuf,

    /// Use this date as "today" (YYYY-MM-DD) instead of the system clock.
    #[arg(long, global = true, env = "RQSTRACK_TODAY")]
    pub today: Option<NaiveDate>,

    /// Start with an empty store when the data file is missing.
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output and debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (bare values only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List records, optionally filtered.
    List(ListArgs),
    /// Show one record with its timeline.
    Show {
        /// RQS number.
        id: RecordId,
    },
    /// Add a new grant record.
    Add(AddArgs),
    /// Update fields of an existing record and append a timeline note.
    Update(UpdateArgs),
    /// Totals and status distribution.
    Summary,
    /// Vendor distribution, progress overview and monthly volume.
    Analytics,
    /// Group records by a field and sum a numeric measure.
    Aggregate {
        /// Field to group by: vendor, status, stage, staff, record-type,
        /// status-category or month.
        #[arg(long)]
        by: GroupField,
        /// Measure to sum: amount, progress or count.
        #[arg(long, default_value = "amount")]
        measure: NumericField,
    },
    /// Write a dated export of every record.
    Export {
        /// Directory the export file is written to.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Filters for `list`. Each flag may be repeated; an absent flag matches all.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long = "vendor")]
    pub vendors: Vec<String>,
    #[arg(long = "status")]
    pub statuses: Vec<Status>,
    #[arg(long = "staff")]
    pub staff: Vec<String>,
    #[arg(long = "stage")]
    pub stages: Vec<ActiveStage>,
    #[arg(long = "record-type")]
    pub record_types: Vec<String>,
}

impl ListArgs {
    #[must_use]
    pub fn to_filter(&self) -> FilterSet {
        FilterSet::new()
            .with_vendors(self.vendors.iter().cloned())
            .with_statuses(self.statuses.iter().copied())
            .with_staff(self.staff.iter().cloned())
            .with_stages(self.stages.iter().copied())
            .with_record_types(self.record_types.iter().cloned())
    }
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// RQS number.
    #[arg(long)]
    pub id: RecordId,
    #[arg(long)]
    pub vendor: String,
    /// Original award amount in dollars.
    #[arg(long)]
    pub amount: Decimal,
    /// PCS assigned staff member.
    #[arg(long)]
    pub staff: String,
    /// Defaults to today.
    #[arg(long)]
    pub date_received: Option<NaiveDate>,
    /// Defaults to today.
    #[arg(long)]
    pub doc_start: Option<NaiveDate>,
    #[arg(long, default_value_t = Status::Draft)]
    pub status: Status,
    #[arg(long, default_value_t = ActiveStage::Drafting)]
    pub stage: ActiveStage,
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,
    #[arg(long, default_value_t = 0)]
    pub contract_number: u64,
    #[arg(long, default_value = "")]
    pub core_number: String,
    /// SOS GS check completed.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub sos_gs: bool,
    /// SAM record on file.
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub sam_record: bool,
    /// First timeline note.
    #[arg(long)]
    pub note: Option<String>,
}

impl AddArgs {
    #[must_use]
    pub fn into_new_grant(self, today: NaiveDate) -> NewGrant {
        NewGrant {
            id: self.id,
            vendor: self.vendor,
            description: self.description,
            amount: self.amount,
            assigned_staff: self.staff,
            date_received: self.date_received.unwrap_or(today),
            document_start_date: self.doc_start.unwrap_or(today),
            status: self.status,
            active_stage: self.stage,
            sos_gs: self.sos_gs,
            sam_record: self.sam_record,
            core_number: self.core_number,
            contract_record_number: self.contract_number,
            initial_note: self.note,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// RQS number.
    pub id: RecordId,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub stage: Option<ActiveStage>,
    #[arg(long)]
    pub core_number: Option<String>,
    /// Name recorded as the last modifier.
    #[arg(long)]
    pub modified_by: Option<String>,
    #[arg(long)]
    pub staff: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Note appended to the timeline.
    #[arg(long)]
    pub note: Option<String>,
}

impl UpdateArgs {
    #[must_use]
    pub fn into_patch(self) -> (RecordId, GrantPatch) {
        let patch = GrantPatch {
            status: self.status,
            active_stage: self.stage,
            core_number: self.core_number,
            last_modified_by: self.modified_by,
            assigned_staff: self.staff,
            description: self.description,
            timeline_note: self.note,
        };
        (self.id, patch)
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Clock pinned to `--today` when given.
    #[must_use]
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(day) => Box::new(FixedClock(day)),
            None => Box::new(SystemClock),
        }
    }

    /// Default log directive when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("rqstrack").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn global_options_after_subcommand() {
        let config = parse(&["summary", "--data", "grants.csv", "--today", "2025-06-10"]);
        assert_eq!(config.data, PathBuf::from("grants.csv"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 6, 10));
        assert!(matches!(config.command, Command::Summary));
    }

    #[test]
    fn pinned_clock() {
        let config = parse(&["--today", "2025-06-10", "summary"]);
        assert_eq!(
            config.clock().today(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
    }

    #[test]
    fn list_filters_repeat() {
        let config = parse(&[
            "list",
            "--status",
            "In Draft",
            "--status",
            "Approval",
            "--vendor",
            "County of Archuleta",
        ]);
        let Command::List(args) = config.command else {
            panic!("expected list");
        };
        assert_eq!(args.statuses, vec![Status::InDraft, Status::Approval]);
        assert!(!args.to_filter().is_unrestricted());
    }

    #[test]
    fn add_defaults() {
        let config = parse(&[
            "add", "--id", "13001", "--vendor", "Town of Ouray", "--amount", "40000", "--staff",
            "Jane Doe",
        ]);
        let Command::Add(args) = config.command else {
            panic!("expected add");
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let grant = args.into_new_grant(today);
        assert_eq!(grant.status, Status::Draft);
        assert_eq!(grant.active_stage, ActiveStage::Drafting);
        assert_eq!(grant.description, DEFAULT_DESCRIPTION);
        assert_eq!(grant.date_received, today);
        assert!(grant.sos_gs);
        assert!(!grant.sam_record);
        assert!(grant.initial_note.is_none());
    }

    #[test]
    fn add_flags_take_values() {
        let config = parse(&[
            "add", "--id", "13001", "--vendor", "V", "--amount", "1.50", "--staff", "S",
            "--sos-gs", "false", "--sam-record", "true",
        ]);
        let Command::Add(args) = config.command else {
            panic!("expected add");
        };
        assert!(!args.sos_gs);
        assert!(args.sam_record);
        assert_eq!(args.amount, Decimal::new(150, 2));
    }

    #[test]
    fn unknown_status_rejected() {
        let result = AppConfig::try_parse_from(["rqstrack", "list", "--status", "Pending"]);
        assert!(result.is_err());
    }

    #[test]
    fn update_builds_patch() {
        let config = parse(&["update", "12769", "--stage", "Review", "--note", "Sent over"]);
        let Command::Update(args) = config.command else {
            panic!("expected update");
        };
        let (id, patch) = args.into_patch();
        assert_eq!(id, RecordId(12769));
        assert_eq!(patch.active_stage, Some(ActiveStage::Review));
        assert!(patch.has_note());
        assert!(patch.status.is_none());
    }

    #[test]
    fn aggregate_measure_defaults_to_amount() {
        let config = parse(&["aggregate", "--by", "vendor"]);
        let Command::Aggregate { by, measure } = config.command else {
            panic!("expected aggregate");
        };
        assert_eq!(by, GroupField::Vendor);
        assert_eq!(measure, NumericField::Amount);
    }

    #[test]
    fn log_level_follows_verbose() {
        assert_eq!(parse(&["-v", "summary"]).log_level(), tracing::Level::DEBUG);
        assert_eq!(parse(&["summary"]).log_level(), tracing::Level::WARN);
    }
}
