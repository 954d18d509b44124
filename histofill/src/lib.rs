//! Histograms with pluggable binning, single-pass filling and zero-copy
//! slicing.
//!
//! [`histofill`](crate) separates three concerns:
//! * **Binning** ([`binning`]): pure mappings between domain values and bin
//!   indices. Values outside a binning's range are never an error; they
//!   land in underflow and overflow cells.
//! * **Histograms** ([`histogram`]): immutable pairings of a binning with one
//!   content value per bin, plus optional outlier counts. Slicing shares
//!   storage instead of copying.
//! * **Filling** ([`fill`]): a mutable [`HistogramBuilder`] and an
//!   [`Accumulator`](fill::Accumulator) contract that lets one pass over the
//!   input drive any number of histograms and folds.
//!
//! # Examples
//!
//! ```
//! use histofill::{binning::EqualWidthBins, fill::{counting, run_fill}};
//!
//! let bins = EqualWidthBins::new(0.0, 10, 10.0)?;
//! let histogram = run_fill(|| counting(bins, 0_u32), &[0.5, 1.5, 9.9, -1.0, 10.5]);
//! assert_eq!(Some(&1), histogram.at_value(&9.9));
//! assert_eq!(Some((&1, &1)), histogram.outliers());
//!
//! let text = histogram.to_string();
//! assert_eq!(histogram, text.parse()?);
//! # Ok::<(), histofill::HistogramError>(())
//! ```
//!
//! Benchmarks live under `benches/`.
//!
//! # Feature Flags
//!
//! * `derive`: re-exports `#[derive(Fill)]`, which feeds each value to every
//!   field of a struct.

pub mod aggregation;
pub mod binning;
pub mod codec;
pub mod error;
pub mod fill;
pub mod histogram;

pub use error::{HistogramError, Result};
pub use fill::HistogramBuilder;
pub use histogram::Histogram;

#[cfg(feature = "derive")]
pub use histofill_derive::Fill;
