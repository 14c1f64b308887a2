use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::Phase;
use crate::rules::ValidatedAction;
use crate::snapshot::RankedHand;

/// Records a single validated action as it was applied.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// The phase when this action occurred
    pub phase: Phase,
    pub action: ValidatedAction,
}

/// Complete record of one round: every applied action, the board, and the
/// settlement. Serialized to JSONL for hand-history storage and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub round_no: u32,
    /// RNG seed of the table deck (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all applied actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub payouts: BTreeMap<usize, u32>,
    pub rake: u32,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Ranked showdown hands; empty when the round ended on folds
    #[serde(default)]
    pub showdown: Vec<RankedHand>,
}

/// JSONL writer for [`HandRecord`]s. The engine never writes on its own;
/// the embedding caller pushes records through this sink.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
        })
    }

    /// A logger that swallows records, for tests and headless runs.
    pub fn sink() -> Self {
        Self { writer: None }
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
