//! Auxiliary views derived from the loaded history

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::{DAYS_PER_WEEK, MAX_GRID_WEEKS};
use crate::error::ReportError;
use crate::history::HistoryStore;
use crate::stats;

/// One publication's counts laid out week by week, Monday first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub diario: String,
    /// `weeks * 7` values, zero-padded
    pub counts: Vec<u64>,
}

/// Sampled counts for Monday..Sunday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRow {
    pub diario: String,
    pub counts: [u64; DAYS_PER_WEEK],
}

/// Historical mean and a jittered forecast
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub diario: String,
    pub mean: f64,
    pub predicted: f64,
}

fn ensure_data(store: &HistoryStore) -> Result<(), ReportError> {
    if store.is_empty() { Err(ReportError::NoData) } else { Ok(()) }
}

/// First `weeks * 7` counts of each publication, padded with zeros
pub fn historical_grid(store: &HistoryStore, weeks: usize) -> Result<Vec<GridRow>, ReportError> {
    ensure_data(store)?;
    if weeks == 0 || weeks > MAX_GRID_WEEKS {
        return Err(ReportError::InvalidWeeks {
            weeks,
            max: MAX_GRID_WEEKS,
        });
    }
    let cells = weeks * DAYS_PER_WEEK;

    Ok(store
        .iter()
        .map(|(diario, history)| {
            let mut counts: Vec<u64> = history.iter().copied().take(cells).collect();
            counts.resize(cells, 0);
            GridRow {
                diario: diario.to_string(),
                counts,
            }
        })
        .collect())
}

/// Seven counts per publication, each drawn from its history with replacement
pub fn weekly_report<R: Rng>(store: &HistoryStore, rng: &mut R) -> Result<Vec<WeeklyRow>, ReportError> {
    ensure_data(store)?;

    let mut rows = Vec::with_capacity(store.len());
    for (diario, history) in store.iter() {
        let mut counts = [0; DAYS_PER_WEEK];
        for slot in counts.iter_mut() {
            *slot = history.choose(rng).copied().unwrap_or(0);
        }
        rows.push(WeeklyRow {
            diario: diario.to_string(),
            counts,
        });
    }

    Ok(rows)
}

/// Historical mean plus a uniform adjustment in `[-jitter, jitter]`
pub fn predictions<R: Rng>(store: &HistoryStore, rng: &mut R, jitter: f64) -> Result<Vec<Prediction>, ReportError> {
    ensure_data(store)?;
    let jitter = jitter.abs();

    let mut rows = Vec::with_capacity(store.len());
    for (diario, history) in store.iter() {
        let mean = stats::mean(history);
        rows.push(Prediction {
            diario: diario.to_string(),
            mean,
            predicted: mean + rng.random_range(-jitter..=jitter),
        });
    }

    Ok(rows)
}
