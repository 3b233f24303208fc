//! Reading store API.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use wr_quality::{Classification, SensorReading};

use crate::stats::reading_stats;
use crate::types::{ReadingId, ReadingRecord, ReadingStats};
use crate::{ReadingsError, ReadingsResult};

/// Append-only log of classified readings.
///
/// Ids are assigned in insertion order starting at 1.
pub trait ReadingStore {
    /// Store a reading with an explicit timestamp.
    fn append_at(
        &mut self,
        reading: SensorReading,
        classification: &Classification,
        at: DateTime<Utc>,
    ) -> ReadingsResult<ReadingRecord>;

    /// All records in insertion order.
    fn records(&self) -> ReadingsResult<Vec<ReadingRecord>>;

    /// Store a reading stamped with the current UTC time.
    fn append(
        &mut self,
        reading: SensorReading,
        classification: &Classification,
    ) -> ReadingsResult<ReadingRecord> {
        self.append_at(reading, classification, Utc::now())
    }

    fn count(&self) -> ReadingsResult<usize> {
        Ok(self.records()?.len())
    }

    /// Up to `limit` records, newest first.
    fn recent(&self, limit: usize) -> ReadingsResult<Vec<ReadingRecord>> {
        Ok(self.records()?.into_iter().rev().take(limit).collect())
    }

    fn stats(&self) -> ReadingsResult<ReadingStats> {
        Ok(reading_stats(&self.records()?))
    }
}

fn make_record(
    id: ReadingId,
    reading: SensorReading,
    classification: &Classification,
    at: DateTime<Utc>,
) -> ReadingRecord {
    ReadingRecord {
        id,
        timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        reading,
        label: classification.label(),
        confidence: classification.confidence(),
    }
}

/// In-process store, lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryReadingStore {
    records: Vec<ReadingRecord>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingStore for MemoryReadingStore {
    fn append_at(
        &mut self,
        reading: SensorReading,
        classification: &Classification,
        at: DateTime<Utc>,
    ) -> ReadingsResult<ReadingRecord> {
        let id = self.records.len() as ReadingId + 1;
        let record = make_record(id, reading, classification, at);
        self.records.push(record.clone());
        Ok(record)
    }

    fn records(&self) -> ReadingsResult<Vec<ReadingRecord>> {
        Ok(self.records.clone())
    }

    fn count(&self) -> ReadingsResult<usize> {
        Ok(self.records.len())
    }
}

/// File-backed store: one JSON record per line.
#[derive(Debug, Clone)]
pub struct JsonlReadingStore {
    path: PathBuf,
    next_id: ReadingId,
}

impl JsonlReadingStore {
    /// Open (or create) the log at `path`. Existing records are scanned to
    /// continue the id sequence.
    pub fn open(path: impl Into<PathBuf>) -> ReadingsResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let next_id = if path.exists() {
            read_records(&path)?
                .last()
                .map(|r| r.id + 1)
                .unwrap_or(1)
        } else {
            1
        };
        Ok(Self { path, next_id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadingStore for JsonlReadingStore {
    fn append_at(
        &mut self,
        reading: SensorReading,
        classification: &Classification,
        at: DateTime<Utc>,
    ) -> ReadingsResult<ReadingRecord> {
        let record = make_record(self.next_id, reading, classification, at);
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        self.next_id += 1;
        Ok(record)
    }

    fn records(&self) -> ReadingsResult<Vec<ReadingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_records(&self.path)
    }
}

fn read_records(path: &Path) -> ReadingsResult<Vec<ReadingRecord>> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: ReadingRecord =
            serde_json::from_str(line).map_err(|e| ReadingsError::Corrupt {
                line: idx + 1,
                message: e.to_string(),
            })?;
        record.check().map_err(|message| ReadingsError::Corrupt {
            line: idx + 1,
            message,
        })?;
        records.push(record);
    }
    Ok(records)
}
