//! Historical counts per publication, loaded from CSV

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::LoadError;
use crate::stats;

/// Column holding the publication name
pub const COL_PUBLICATION: &str = "periodico";

/// Column holding the issue date
pub const COL_DATE: &str = "fecha";

/// Column holding the article count
pub const COL_COUNT: &str = "cantidad";

/// Result of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Publications present in the loaded file
    pub publications: usize,
    /// Data rows read
    pub rows: usize,
}

/// Publication name to historical counts, in file order
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    series: BTreeMap<String, Vec<u64>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a CSV file and merge it into the store
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let summary = self.load_reader(file)?;
        info!(
            "Loaded {} rows for {} publications from {}",
            summary.rows,
            summary.publications,
            path.display()
        );
        Ok(summary)
    }

    /// Parse CSV from any reader and merge it into the store
    ///
    /// Each publication in the input replaces its previous series; others are
    /// kept. Nothing is merged if any row fails to parse.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<LoadSummary, LoadError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = [COL_PUBLICATION, COL_DATE, COL_COUNT]
            .into_iter()
            .filter(|col| position(col).is_none())
            .map(String::from)
            .collect();
        let (Some(pub_idx), Some(count_idx), Some(_)) =
            (position(COL_PUBLICATION), position(COL_COUNT), position(COL_DATE))
        else {
            return Err(LoadError::MissingColumns { missing });
        };

        let mut loaded: BTreeMap<String, Vec<u64>> = BTreeMap::new();
        let mut rows = 0;

        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 1;
            let publication = record.get(pub_idx).unwrap_or_default();
            let raw = record.get(count_idx).unwrap_or_default();
            let count = raw.parse::<u64>().map_err(|_| LoadError::InvalidCount {
                row,
                value: raw.to_string(),
            })?;

            loaded.entry(publication.to_string()).or_default().push(count);
            rows = row;
        }

        let summary = LoadSummary {
            publications: loaded.len(),
            rows,
        };
        for (publication, counts) in loaded {
            debug!("{}: {} historical counts", publication, counts.len());
            self.series.insert(publication, counts);
        }

        Ok(summary)
    }

    /// Publication names, sorted
    pub fn publications(&self) -> Vec<&str> {
        self.series.keys().map(String::as_str).collect()
    }

    /// Historical counts for a publication
    pub fn history(&self, publication: &str) -> Option<&[u64]> {
        self.series.get(publication).map(Vec::as_slice)
    }

    /// Iterate publications with their series
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.series.iter().map(|(name, counts)| (name.as_str(), counts.as_slice()))
    }

    /// Historical mean per publication
    pub fn means(&self) -> Vec<(&str, f64)> {
        self.iter().map(|(name, counts)| (name, stats::mean(counts))).collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
