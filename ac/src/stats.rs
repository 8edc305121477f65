//! Descriptive statistics over a historical count series
//!
//! Every function treats the series as an unordered multiset, except
//! [`frequency_table`] and [`mode`] which keep first-occurrence order for
//! tie-breaking.

use std::collections::HashMap;

/// Arithmetic mean as an exact integer sum over n; NaN for an empty series
pub fn mean(series: &[u64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let sum: u128 = series.iter().map(|&v| v as u128).sum();
    sum as f64 / series.len() as f64
}

/// Population standard deviation (divides by n); NaN for an empty series
pub fn population_std_dev(series: &[u64]) -> f64 {
    std_dev_about(series, mean(series))
}

fn std_dev_about(series: &[u64], mean: f64) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let squares: f64 = series
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    (squares / series.len() as f64).sqrt()
}

/// Linear-interpolation percentile (R type 7)
///
/// The fractional rank is `p/100 * (n-1)` over the sorted series. Returns
/// `None` for an empty series. `p` is clamped to `[0, 100]`.
pub fn percentile(series: &[u64], p: f64) -> Option<f64> {
    if series.is_empty() {
        return None;
    }

    let mut sorted = series.to_vec();
    sorted.sort_unstable();

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;
    let lower = sorted[lo] as f64;

    match sorted.get(lo + 1) {
        Some(&upper) if frac > 0.0 => Some(lower + frac * (upper as f64 - lower)),
        _ => Some(lower),
    }
}

/// Standard deviation over mean, defined as 0 when the mean is 0
pub fn coefficient_of_variation(series: &[u64]) -> f64 {
    let mean = mean(series);
    if mean == 0.0 { 0.0 } else { population_std_dev(series) / mean }
}

/// Count of each distinct value, in order of first occurrence
pub fn frequency_table(series: &[u64]) -> Vec<(u64, usize)> {
    let mut slots: HashMap<u64, usize> = HashMap::new();
    let mut table: Vec<(u64, usize)> = Vec::new();

    for &value in series {
        match slots.get(&value) {
            Some(&idx) => table[idx].1 += 1,
            None => {
                slots.insert(value, table.len());
                table.push((value, 1));
            }
        }
    }

    table
}

/// Most frequent value; ties go to the value encountered first
pub fn mode(series: &[u64]) -> Option<u64> {
    let table = frequency_table(series);
    let highest = table.iter().map(|&(_, count)| count).max()?;
    table.into_iter().find(|&(_, count)| count == highest).map(|(value, _)| value)
}

/// Statistics the validator needs, computed in one pass over a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub mean: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub std_dev: f64,
    pub coef_var: f64,
}

impl SeriesSummary {
    /// Summarise a series; `None` when it is empty
    pub fn compute(series: &[u64]) -> Option<Self> {
        let q1 = percentile(series, 25.0)?;
        let q3 = percentile(series, 75.0)?;
        let mean = mean(series);
        let std_dev = std_dev_about(series, mean);
        let coef_var = if mean == 0.0 { 0.0 } else { std_dev / mean };

        Some(Self {
            mean,
            q1,
            q3,
            iqr: q3 - q1,
            std_dev,
            coef_var,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_std_dev() {
        let series = [2, 4, 4, 4, 5, 5, 7, 9];
        assert!(approx(mean(&series), 5.0));
        assert!(approx(population_std_dev(&series), 2.0));
    }

    #[test]
    fn test_mean_is_exact_sum_over_n() {
        // a running average lands one ulp above 3.75 here
        assert_eq!(mean(&[0, 1, 12, 2]), 3.75);
        assert_eq!(mean(&[0, 2, 24, 4]), 7.5);
        assert_eq!(mean(&[u64::MAX, u64::MAX]), u64::MAX as f64);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_percentile_interpolates() {
        // sorted: 5 5 5 20 20 20 50, rank(25%) = 1.5, rank(75%) = 4.5
        let series = [5, 20, 5, 20, 5, 20, 50];
        assert_eq!(percentile(&series, 25.0), Some(5.0));
        assert_eq!(percentile(&series, 75.0), Some(20.0));

        // rank(25%) = 0.75 -> 10 + 0.75 * 10
        assert_eq!(percentile(&[40, 10, 30, 20], 25.0), Some(17.5));
        assert_eq!(percentile(&[40, 10, 30, 20], 50.0), Some(25.0));
    }

    #[test]
    fn test_percentile_edges() {
        assert_eq!(percentile(&[], 25.0), None);
        assert_eq!(percentile(&[7], 25.0), Some(7.0));
        assert_eq!(percentile(&[1, 9], 0.0), Some(1.0));
        assert_eq!(percentile(&[1, 9], 100.0), Some(9.0));
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        assert_eq!(coefficient_of_variation(&[0, 0, 0]), 0.0);
        assert_eq!(coefficient_of_variation(&[10, 10, 10]), 0.0);
    }

    #[test]
    fn test_frequency_table_keeps_first_occurrence_order() {
        let table = frequency_table(&[3, 1, 3, 2, 1, 3]);
        assert_eq!(table, vec![(3, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_mode_tie_breaks_on_first_encountered() {
        assert_eq!(mode(&[9, 4, 4, 9]), Some(9));
        assert_eq!(mode(&[4, 9, 9, 4]), Some(4));
        assert_eq!(mode(&[1, 2, 2]), Some(2));
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_summary() {
        let summary = SeriesSummary::compute(&[100, 100, 100, 100, 10]).unwrap();
        assert!(approx(summary.mean, 82.0));
        assert!(approx(summary.q1, 100.0));
        assert!(approx(summary.iqr, 0.0));
        assert!(approx(summary.std_dev, 36.0));
        assert!(summary.coef_var > 0.2);

        assert!(SeriesSummary::compute(&[]).is_none());
    }
}
