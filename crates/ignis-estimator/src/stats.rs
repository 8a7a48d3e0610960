//! Streaming per-cell burn statistics.

/// Online mean and variance accumulator over burn-indicator samples.
///
/// One Welford accumulator per cell, so an estimation run never stores
/// individual replications. Variance is the population variance
/// `m2 / count`; with no samples folded yet both [`mean`](BurnStats::mean)
/// and [`variance`](BurnStats::variance) are all zeros.
///
/// # Examples
///
/// ```
/// use ignis_estimator::BurnStats;
///
/// let mut stats = BurnStats::new(2);
/// stats.push(&[1.0, 0.0]);
/// stats.push(&[0.0, 0.0]);
/// assert_eq!(stats.mean(), &[0.5, 0.0]);
/// assert_eq!(stats.variance(), vec![0.25, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BurnStats {
    count: u64,
    mean: Vec<f64>,
    m2: Vec<f64>,
}

impl BurnStats {
    /// Empty accumulator for `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            count: 0,
            mean: vec![0.0; cells],
            m2: vec![0.0; cells],
        }
    }

    /// Number of samples folded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of cells per sample.
    pub fn cells(&self) -> usize {
        self.mean.len()
    }

    /// Fold one sample.
    ///
    /// # Panics
    ///
    /// Panics if `sample.len() != self.cells()`.
    pub fn push(&mut self, sample: &[f64]) {
        assert_eq!(sample.len(), self.mean.len(), "sample length mismatch");
        self.count += 1;
        let n = self.count as f64;
        for (i, &x) in sample.iter().enumerate() {
            let delta = x - self.mean[i];
            self.mean[i] += delta / n;
            self.m2[i] += delta * (x - self.mean[i]);
        }
    }

    /// Per-cell sample mean.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Per-cell population variance.
    pub fn variance(&self) -> Vec<f64> {
        if self.count == 0 {
            return vec![0.0; self.m2.len()];
        }
        let n = self.count as f64;
        self.m2.iter().map(|&m2| m2 / n).collect()
    }
}
