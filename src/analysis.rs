//! Aggregation helpers shared by every report.
//!
//! These operate on plain slices of typed rows and a projection closure,
//! standing in for the column operations a dataframe would provide.

use std::cmp::Ordering;


/// Sum of `f(row)` over all rows; `0.0` when empty.
pub fn sum_by<T>(rows: &[T], f: impl Fn(&T) -> f64) -> f64 {
    rows.iter().map(f).sum()
}

/// Arithmetic mean of `f(row)`; `None` when empty.
pub fn mean_by<T>(rows: &[T], f: impl Fn(&T) -> f64) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(sum_by(rows, f) / rows.len() as f64)
}

/// `total / games`, or `None` when no games were played.
pub fn per_game(total: f64, games: u32) -> Option<f64> {
    (games > 0).then(|| total / games as f64)
}

/// The `n` rows with the largest `key`, largest first.
///
/// The sort is stable, so rows with equal keys keep their input order.
/// NaN keys rank below every number.
pub fn top_n<T>(rows: &[T], n: usize, key: impl Fn(&T) -> f64) -> Vec<&T> {
    let mut keyed: Vec<(f64, &T)> = rows.iter().map(|r| (key(r), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| descending(*a, *b));
    keyed.into_iter().take(n).map(|(_, r)| r).collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Running totals.
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Trailing mean over up to `window` values; early points average what is
/// available. A zero window behaves like a window of one.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
