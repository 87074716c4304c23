//! The per-submission analysis lifecycle.
//!
//! One analysis is live at a time. Submitting a new image always discards
//! the previous record and restarts from AwaitingAnalysis; the record itself
//! is immutable once stored.

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::analysis::response_parser::{FoodIdentity, MacroRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingAnalysis,
    Analyzed,
    Error,
}

/// Everything the pipeline learned about one submitted photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub identity: FoodIdentity,
    pub macros: MacroRecord,
    pub raw_response: String,
    pub image_path: PathBuf,
}

#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    record: Option<AnalysisRecord>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            phase: SessionPhase::Idle,
            record: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        self.record.as_ref()
    }

    /// A new image submission. Valid from any phase; the prior record is
    /// discarded wholesale.
    pub fn submit(&mut self) {
        if self.record.is_some() {
            log::debug!("discarding previous analysis record on resubmission");
        }
        self.record = None;
        self.phase = SessionPhase::AwaitingAnalysis;
    }

    /// The analysis stage produced a record (all-zero macros still count as
    /// a successful parse).
    pub fn complete(&mut self, record: AnalysisRecord) -> Result<()> {
        if self.phase != SessionPhase::AwaitingAnalysis {
            bail!("cannot complete analysis from phase {:?}", self.phase);
        }
        self.record = Some(record);
        self.phase = SessionPhase::Analyzed;
        Ok(())
    }

    /// The analysis stage itself failed (collaborator error before or at
    /// the parse step).
    pub fn fail(&mut self) -> Result<()> {
        if self.phase != SessionPhase::AwaitingAnalysis {
            bail!("cannot fail analysis from phase {:?}", self.phase);
        }
        self.record = None;
        self.phase = SessionPhase::Error;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
