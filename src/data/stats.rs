use super::model::{CameraRecord, NumericColumn};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// count / mean / std / min / quartiles / max of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Statistic names paired with their values, in display order.
    /// `count` is reported as a float alongside the rest.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Describe a column. NaN cells are skipped, as are all statistics of an
/// empty column. The standard deviation uses the `n - 1` denominator.
pub fn describe(values: &[f64]) -> ColumnStats {
    let sorted = sorted_without_nan(values);
    let n = sorted.len();
    if n == 0 {
        return ColumnStats {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };

    ColumnStats {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.50),
        q75: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Median of the non-NaN values, `None` if there are none.
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted_without_nan(values);
    if sorted.is_empty() {
        None
    } else {
        Some(quantile(&sorted, 0.5))
    }
}

/// Quantile of an ascending, non-empty slice, interpolating linearly between
/// the two closest ranks at position `(n - 1) * q`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn sorted_without_nan(values: &[f64]) -> Vec<f64> {
    sorted_where(values, |v| !v.is_nan())
}

fn sorted_where(values: &[f64], keep: impl Fn(f64) -> bool) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|&v| keep(v)).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

// ---------------------------------------------------------------------------
// Summary – statistics for every numeric column
// ---------------------------------------------------------------------------

/// Per-column statistics over a set of records, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub columns: Vec<(NumericColumn, ColumnStats)>,
}

impl Summary {
    pub fn of(records: &[CameraRecord]) -> Self {
        let columns = NumericColumn::ALL
            .iter()
            .map(|&col| {
                let values: Vec<f64> = records.iter().map(|r| col.get(r)).collect();
                (col, describe(&values))
            })
            .collect();
        Summary { columns }
    }

    /// Stats for a single column.
    #[cfg(test)]
    pub fn get(&self, column: NumericColumn) -> Option<&ColumnStats> {
        self.columns
            .iter()
            .find(|(col, _)| *col == column)
            .map(|(_, stats)| stats)
    }
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One histogram bucket `[start, end)`; the last bucket also includes `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split the value range into `bins` equal-width buckets and count values.
/// A degenerate range (all values equal) is widened by 0.5 on each side.
/// NaN and infinite values are not counted.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let sorted = sorted_where(values, f64::is_finite);
    if sorted.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = (sorted[0], sorted[sorted.len() - 1]);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: lo + width * i as f64,
            end: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in sorted {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn describe_matches_textbook_values() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert!(approx(stats.mean, 2.5));
        assert!(approx(stats.std, 1.2909944487358056));
        assert_eq!(stats.min, 1.0);
        assert!(approx(stats.q25, 1.75));
        assert!(approx(stats.q50, 2.5));
        assert!(approx(stats.q75, 3.25));
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn describe_skips_nan_and_handles_single_value() {
        let stats = describe(&[f64::NAN, 7.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.0);
        assert!(stats.std.is_nan());
        assert_eq!(stats.q75, 7.0);
    }

    #[test]
    fn describe_empty_is_all_nan() {
        let stats = describe(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.max.is_nan());
    }

    #[test]
    fn median_odd_even_and_empty() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[f64::NAN]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn summary_reflects_current_records() {
        let mut a = CameraRecord::new("A");
        a.price = 100.0;
        let mut b = CameraRecord::new("B");
        b.price = 300.0;
        let summary = Summary::of(&[a, b]);
        assert_eq!(summary.columns.len(), NumericColumn::ALL.len());
        let price = summary.get(NumericColumn::Price).unwrap();
        assert_eq!(price.count, 2);
        assert!(approx(price.mean, 200.0));
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 * 3.5).collect();
        let bins = histogram(&values, 30);
        assert_eq!(bins.len(), 30);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[29].end, 99.0 * 3.5);
        // The maximum lands in the last, closed bucket.
        assert!(bins[29].count >= 1);
    }

    #[test]
    fn histogram_widens_degenerate_range() {
        let bins = histogram(&[5.0, 5.0, 5.0], 10);
        assert_eq!(bins[0].start, 4.5);
        assert_eq!(bins[9].end, 5.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(bins[5].count, 3);
    }

    #[test]
    fn histogram_skips_infinite_values() {
        let bins = histogram(&[10.0, f64::INFINITY, 20.0, f64::NEG_INFINITY, f64::NAN], 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0].start, 10.0);
        assert_eq!(bins[4].end, 20.0);
        assert!(bins.iter().all(|b| b.width().is_finite()));
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn histogram_of_only_infinity_is_empty() {
        assert!(histogram(&[f64::INFINITY], 30).is_empty());
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        assert!(histogram(&[], 30).is_empty());
    }
}
