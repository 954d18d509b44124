//! Per-bin summaries for monoidal histograms

mod statistic_set;

pub use statistic_set::StatisticSet;
