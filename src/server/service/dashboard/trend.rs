//! Percentage change between consecutive report snapshots.

/// Percentage change from `previous` to `current`, truncated to two decimals.
///
/// Zero on either side yields zero rather than an infinite or -100% change.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 || current == 0.0 {
        return 0.0;
    }

    ((current - previous) / previous * 100.0 * 100.0).trunc() / 100.0
}

/// Trend of each value relative to the one before it.
///
/// `values` must be in chronological order. The first element has no predecessor and
/// gets `None`.
pub fn trends(values: &[f64]) -> Vec<Option<f64>> {
    let mut result = Vec::with_capacity(values.len());
    if values.is_empty() {
        return result;
    }

    result.push(None);
    result.extend(
        values
            .windows(2)
            .map(|pair| Some(percent_change(pair[0], pair[1]))),
    );

    result
}
