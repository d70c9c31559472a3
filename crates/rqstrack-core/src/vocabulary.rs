//! Closed workflow vocabularies: coarse status and fine-grained active stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrantError;

/// Coarse workflow state of a grant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Draft")]
    Draft,
    #[serde(rename = "In Draft")]
    InDraft,
    #[serde(rename = "RQS Review")]
    RqsReview,
    #[serde(rename = "CORE Entry")]
    CoreEntry,
    #[serde(rename = "Budget & SOW")]
    BudgetAndSow,
    #[serde(rename = "Approval")]
    Approval,
    #[serde(rename = "Executed")]
    Executed,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 7] = [
        Status::Draft,
        Status::InDraft,
        Status::RqsReview,
        Status::CoreEntry,
        Status::BudgetAndSow,
        Status::Approval,
        Status::Executed,
    ];

    /// Display label, as stored in exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::InDraft => "In Draft",
            Status::RqsReview => "RQS Review",
            Status::CoreEntry => "CORE Entry",
            Status::BudgetAndSow => "Budget & SOW",
            Status::Approval => "Approval",
            Status::Executed => "Executed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| GrantError::Validation(format!("unknown status: {s:?}")))
    }
}

/// Processing step within a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActiveStage {
    #[serde(rename = "Drafting")]
    Drafting,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "CORE Entry")]
    CoreEntry,
    #[serde(rename = "Budget & SOW")]
    BudgetAndSow,
    #[serde(rename = "Approval")]
    Approval,
    #[serde(rename = "Executed")]
    Executed,
}

impl ActiveStage {
    /// All stages in workflow order.
    pub const ALL: [ActiveStage; 6] = [
        ActiveStage::Drafting,
        ActiveStage::Review,
        ActiveStage::CoreEntry,
        ActiveStage::BudgetAndSow,
        ActiveStage::Approval,
        ActiveStage::Executed,
    ];

    /// Display label, as stored in exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActiveStage::Drafting => "Drafting",
            ActiveStage::Review => "Review",
            ActiveStage::CoreEntry => "CORE Entry",
            ActiveStage::BudgetAndSow => "Budget & SOW",
            ActiveStage::Approval => "Approval",
            ActiveStage::Executed => "Executed",
        }
    }
}

impl fmt::Display for ActiveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActiveStage {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ActiveStage::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| GrantError::Validation(format!("unknown active stage: {s:?}")))
    }
}
