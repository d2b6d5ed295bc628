//! JSON-lines trace format for replaying recorded frames.
//!
//! ```text
//! {"type":"tick","dt":0.016,"entities":[{"id":1,"health":1000}]}
//! {"type":"area_changed","area_name":"The Coast"}
//! {"type":"reset_session"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use dpsmeter_core::ObservedEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceRecord {
    /// One host frame.
    Tick {
        dt: f64,
        #[serde(default)]
        entities: Vec<ObservedEntity>,
    },
    AreaChanged {
        #[serde(default)]
        area_name: Option<String>,
    },
    ResetSession,
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("failed to open trace {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read trace: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid trace record on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

/// Parse trace records, one per line. Blank lines are skipped.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record = serde_json::from_str(trimmed).map_err(|e| TraceError::Parse {
            line: idx + 1,
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

pub fn load_trace(path: &Path) -> Result<Vec<TraceRecord>, TraceError> {
    let file = File::open(path).map_err(|e| TraceError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let records = read_trace(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), records = records.len(), "Trace loaded");
    Ok(records)
}
