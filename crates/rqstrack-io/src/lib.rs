//! # rqstrack-io
//!
//! Flat-file persistence for the grant record store: reading a CSV data
//! file into a store, saving it back, and writing dated export snapshots.

pub mod error;
pub mod io;
pub mod row;

pub use error::PersistError;
pub use io::{
    export_file_name, export_snapshot, load_store, read_records, save_store, write_records,
    DataSource,
};
