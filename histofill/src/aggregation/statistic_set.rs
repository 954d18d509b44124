use crate::fill::Monoid;

/// A basic aggregation.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct StatisticSet {
    /// Minimum observed value
    pub min: f64,
    /// Maximum observed value
    pub max: f64,
    /// Sum of all observed values
    pub sum: f64,
    /// Count of observations
    pub count: u64,
}

impl std::fmt::Display for StatisticSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"min", &self.min)
            .entry(&"max", &self.max)
            .entry(&"sum", &self.sum)
            .entry(&"count", &self.count)
            .finish()
    }
}

impl Default for StatisticSet {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl StatisticSet {
    /// Fold one observation into the set
    pub fn accumulate(&mut self, value: impl Into<f64>) {
        let v: f64 = value.into();
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.sum += v;
        self.count += 1;
    }

    /// `None` until something has been accumulated
    pub fn mean(&self) -> Option<f64> {
        (self.count != 0).then(|| self.sum / self.count as f64)
    }

    /// Nothing accumulated yet
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Monoid for StatisticSet {
    fn empty() -> Self {
        Self::default()
    }

    fn combine(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }
}
