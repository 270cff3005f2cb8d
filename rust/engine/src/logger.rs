use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::state::{ActionLogEntry, HandResult, TableState};

/// Complete record of a finished hand, one JSON object per line in a
/// hand-history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Table seed the hand was played under
    pub seed: Option<u64>,
    pub button: usize,
    pub starting_stacks: [u32; 2],
    pub hole_cards: [[Card; 2]; 2],
    pub board: Vec<Card>,
    /// Chronological log including blind posts
    pub actions: Vec<ActionLogEntry>,
    pub result: HandResult,
    /// Timestamp when the hand was written (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (agent names, stack mode, ...)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl HandRecord {
    /// Builds a record from the final state of a hand; `None` while the hand
    /// is still running.
    pub fn from_state(hand_id: String, seed: Option<u64>, state: &TableState) -> Option<Self> {
        let result = state.result?;
        let hole_cards = state.hole_cards?;
        let starting_stacks = [0, 1].map(|i| (i64::from(state.seats[i].stack) - result.net[i]) as u32);
        Some(Self {
            hand_id,
            seed,
            button: state.button,
            starting_stacks,
            hole_cards,
            board: state.board.clone(),
            actions: state.action_log.clone(),
            result,
            ts: None,
            meta: None,
        })
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Writes [`HandRecord`]s as JSON Lines and numbers hands `YYYYMMDD-NNNNNN`.
///
/// Lines always end in a bare `\n`. Pending output is flushed on drop.
pub struct HandLogger<W: Write = BufWriter<File>> {
    sink: Option<W>,
    date: String,
    seq: u32,
}

impl HandLogger<BufWriter<File>> {
    /// Creates (or truncates) `path`, making missing parent directories.
    /// Hand ids use today's UTC date.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        Ok(Self::new(BufWriter::new(File::create(path)?), &date))
    }
}

impl<W: Write> HandLogger<W> {
    pub fn new(sink: W, date: &str) -> Self {
        Self {
            sink: Some(sink),
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Appends one record, stamping `ts` with the current time if unset.
    pub fn write(&mut self, record: &HandRecord) -> io::Result<()> {
        let line = if record.ts.is_some() {
            serde_json::to_string(record)
        } else {
            let mut stamped = record.clone();
            stamped.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
            serde_json::to_string(&stamped)
        }
        .map_err(io::Error::other)?;
        let sink = self.sink_mut()?;
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        self.sink
            .take()
            .ok_or_else(|| io::Error::other("hand logger already closed"))
    }

    fn sink_mut(&mut self) -> io::Result<&mut W> {
        self.sink
            .as_mut()
            .ok_or_else(|| io::Error::other("hand logger already closed"))
    }
}

impl<W: Write> Drop for HandLogger<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
