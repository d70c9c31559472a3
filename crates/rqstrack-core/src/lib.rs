//! # rqstrack-core
//!
//! Core library for the RQS/POGG1 grant tracker. Holds the in-memory grant
//! record store together with the progress scoring, filtering, aggregation
//! and timeline history that every front end builds on.

pub mod aggregate;
pub mod analytics;
pub mod clock;
pub mod constants;
pub mod error;
pub mod filter;
pub mod progress;
pub mod record;
pub mod seed;
pub mod shared;
pub mod store;
pub mod timeline;
pub mod vocabulary;

// Re-exports
pub use aggregate::{Aggregation, GroupField, NumericField};
pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{exit_codes, PROGRESS_TABLE, TIMELINE_DATE_FORMAT};
pub use error::GrantError;
pub use filter::FilterSet;
pub use progress::progress_percentage;
pub use record::{GrantPatch, GrantRecord, NewGrant, RecordId};
pub use shared::SharedStore;
pub use store::GrantStore;
pub use vocabulary::{ActiveStage, Status};
