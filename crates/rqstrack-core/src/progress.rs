//! Progress scoring for status / active-stage pairs.

use crate::constants::{PROGRESS_TABLE, UNKNOWN_PROGRESS};

/// Look up the score for a single workflow label.
#[must_use]
pub fn score_of(label: &str) -> Option<u8> {
    PROGRESS_TABLE
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, score)| *score)
}

/// Progress percentage in `[0, 100]` for a status and an active stage.
///
/// The stage score wins when the stage is known; otherwise the status score
/// is used; otherwise the result is 0.
///
/// # Example
/// ```
/// use rqstrack_core::progress_percentage;
/// assert_eq!(progress_percentage("In Draft", "Drafting"), 25);
/// assert_eq!(progress_percentage("Executed", "Unknown Stage"), 100);
/// ```
#[must_use]
pub fn progress_percentage(status: &str, active_stage: &str) -> u8 {
    score_of(active_stage)
        .or_else(|| score_of(status))
        .unwrap_or(UNKNOWN_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{ActiveStage, Status};

    #[test]
    fn stage_wins_over_status() {
        assert_eq!(progress_percentage("In Draft", "Drafting"), 25);
        assert_eq!(progress_percentage("Executed", "Review"), 40);
    }

    #[test]
    fn falls_back_to_status() {
        assert_eq!(progress_percentage("Executed", "Unknown Stage"), 100);
        assert_eq!(progress_percentage("RQS Review", ""), 35);
    }

    #[test]
    fn unknown_both_is_zero() {
        assert_eq!(progress_percentage("Unknown Status", "Unknown Stage"), 0);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(progress_percentage("draft", "drafting"), 0);
    }

    #[test]
    fn every_vocabulary_label_is_scored() {
        for status in Status::ALL {
            assert!(score_of(status.label()).is_some(), "{status}");
        }
        for stage in ActiveStage::ALL {
            assert!(score_of(stage.label()).is_some(), "{stage}");
        }
    }
}
