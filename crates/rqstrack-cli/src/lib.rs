//! # rqstrack-cli
//!
//! Terminal presentation for the grant tracker: currency formatting, record
//! tables, summaries, aggregated series, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{ReportPresenter, TablePresenter};
