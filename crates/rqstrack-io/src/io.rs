//! Data file load/save and export snapshots.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use rqstrack_core::seed::sample_records;
use rqstrack_core::{Clock, GrantRecord, GrantStore};

use crate::error::PersistError;
use crate::row::{CsvRow, COLUMNS};

const EXPORT_PREFIX: &str = "rqs_pogg1_export_";

/// Where the records of a freshly loaded store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Read from the data file.
    File,
    /// Data file absent; sample records were used.
    Seed,
    /// Data file absent; the store started empty.
    Empty,
}

/// Read every record from CSV text with a header row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<GrantRecord>, PersistError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result?;
        let line = raw.position().map_or(0, csv::Position::line);
        let row: CsvRow = raw.deserialize(Some(&headers))?;
        let record = row
            .into_record()
            .map_err(|reason| PersistError::InvalidRow { line, reason })?;
        records.push(record);
    }
    Ok(records)
}

/// Write records as CSV with a header row.
pub fn write_records<W: Write>(writer: W, records: &[GrantRecord]) -> Result<(), PersistError> {
    // The header is written explicitly so an empty store still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a store from `path`.
///
/// A missing file is not an error: the store is seeded with the sample
/// records when `seed` is set, and starts empty otherwise.
pub fn load_store(
    path: &Path,
    clock: Box<dyn Clock>,
    seed: bool,
) -> Result<(GrantStore, DataSource), PersistError> {
    if !path.exists() {
        let (records, source) = if seed {
            (sample_records(), DataSource::Seed)
        } else {
            (Vec::new(), DataSource::Empty)
        };
        tracing::info!(path = %path.display(), ?source, "data file not found");
        return Ok((GrantStore::from_records(clock, records)?, source));
    }

    let records = read_records(File::open(path)?)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded grant records");
    Ok((GrantStore::from_records(clock, records)?, DataSource::File))
}

/// Save every record to `path`, replacing it.
///
/// Writes to a sibling temporary file first so a failed write never leaves
/// a truncated data file behind.
pub fn save_store(store: &GrantStore, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("csv.tmp");
    let written = File::create(&tmp)
        .map_err(PersistError::from)
        .and_then(|file| write_records(file, store.records()))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(PersistError::from));
    if let Err(err) = written {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), %cleanup, "temporary file not removed");
        }
        return Err(err);
    }
    tracing::debug!(path = %path.display(), count = store.len(), "saved grant records");
    Ok(())
}

/// File name of an export taken on `date`, e.g. `rqs_pogg1_export_20250610.csv`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}{}.csv", date.format("%Y%m%d"))
}

/// Write a snapshot of the store into `dir` and return the file path.
pub fn export_snapshot(store: &GrantStore, dir: &Path) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(store.today()));
    write_records(File::create(&path)?, &store.snapshot())?;
    tracing::info!(path = %path.display(), count = store.len(), "exported snapshot");
    Ok(path)
}
