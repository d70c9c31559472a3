//! rqstrack library: command dispatch, configuration and exit codes for the
//! grant tracker binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
