//! Constants for progress scoring, record defaults and date formats.

/// Progress score per workflow label.
///
/// Status labels and active-stage labels share one table; a label that
/// appears in both vocabularies (e.g. `CORE Entry`) has a single score.
pub const PROGRESS_TABLE: [(&str, u8); 9] = [
    ("Draft", 10),
    ("In Draft", 20),
    ("RQS Review", 35),
    ("CORE Entry", 50),
    ("Budget & SOW", 65),
    ("Drafting", 25),
    ("Review", 40),
    ("Approval", 75),
    ("Executed", 100),
];

/// Score reported when neither the stage nor the status is known.
pub const UNKNOWN_PROGRESS: u8 = 0;

/// Date prefix used on timeline entries, e.g. `05/19/2025`.
pub const TIMELINE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Calendar date format used in CSV cells and on the command line.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Grouping key format for monthly volume.
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Record type assigned to new entries.
pub const DEFAULT_RECORD_TYPE: &str = "Purchase Order";

/// Contract type assigned to new entries.
pub const DEFAULT_CONTRACT_TYPE: &str = "Purchase Order Grant";

/// Status category assigned to new entries.
pub const DEFAULT_STATUS_CATEGORY: &str = "In Process";

/// Description pre-filled on the intake form.
pub const DEFAULT_DESCRIPTION: &str = "Grant award for DAA in order to assist individuals and families complete complicated public benefits applications for access to services.";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A required field was missing or a value was outside its vocabulary.
    pub const ERROR_VALIDATION: i32 = 2;
    /// An add referenced an RQS number that already exists.
    pub const ERROR_DUPLICATE: i32 = 3;
    /// An update referenced an RQS number that does not exist.
    pub const ERROR_NOT_FOUND: i32 = 4;
    /// Reading or writing the data file failed.
    pub const ERROR_PERSIST: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_table_labels_unique() {
        for (i, (a, _)) in PROGRESS_TABLE.iter().enumerate() {
            for (b, _) in &PROGRESS_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn progress_table_bounded() {
        assert!(PROGRESS_TABLE.iter().all(|(_, score)| *score <= 100));
    }

    #[test]
    fn executed_is_complete() {
        let executed = PROGRESS_TABLE
            .iter()
            .find(|(label, _)| *label == "Executed")
            .map(|(_, score)| *score);
        assert_eq!(executed, Some(100));
    }
}
