//! Operator workflow: pick a publication, propose a count, record it if valid

use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::error::{LoadError, SubmitError, ValidationError};
use crate::history::{HistoryStore, LoadSummary};
use crate::records::{AcceptedRecord, RecordStore};
use crate::validator::{Decision, Validator, parse_count};

/// Owns the loaded history and the accepted records of one session
#[derive(Debug, Default)]
pub struct Desk {
    history: HistoryStore,
    records: RecordStore,
    validator: Validator,
}

impl Desk {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            ..Default::default()
        }
    }

    /// Merge a historical CSV file into the session
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        self.history.load_csv(path)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate `raw_count` for `publication` and record it on acceptance
    ///
    /// Input errors are returned before any statistics run. A rejection is
    /// returned as `Ok` and leaves the record store untouched.
    pub fn submit(&mut self, publication: &str, raw_count: &str, today: NaiveDate) -> Result<Decision, SubmitError> {
        let count = parse_count(raw_count)?;
        let publication = publication.trim();
        if publication.is_empty() {
            return Err(SubmitError::NoPublication);
        }

        let history = self
            .history
            .history(publication)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationError::NoHistory {
                publication: publication.to_string(),
            })?;

        let decision = self.validator.validate(history, count)?;
        debug!("{} {}: {:?}", publication, count, decision);

        if decision.is_accepted() {
            self.records.append(AcceptedRecord::new(today, publication, count));
            info!("Accepted {} articles for {}", count, publication);
        } else {
            warn!("Rejected {} articles for {}: {}", count, publication, decision);
        }

        Ok(decision)
    }
}
