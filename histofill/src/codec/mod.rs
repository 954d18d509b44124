//! Textual histogram format.
//!
//! ```text
//! # Histogram
//! # Underflows = 1
//! # Overflows  = 0
//! # IntBins
//! # Low  = 0
//! # High = 2
//! 0	4
//! 1	7
//! 2	3
//! ```
//!
//! The binning writes its own block of `# Key = value` lines after a keyword
//! line naming the strategy. Data lines pair each bin's representative value
//! with its content, separated by a single tab. A histogram without outliers
//! leaves the `# Underflows =` and `# Overflows =` values empty.
//!
//! Contents and outliers are written exactly as their `Display` output, with
//! `\\`, `\n` and `\r` escaped so each stays on one line. An outlier whose
//! output is empty is written as `\e`. Decoding is strict: any deviation is
//! a [`ParseError`].

mod escape;
mod reader;

use std::{fmt, str::FromStr};

use escape::{unescape, write_escaped, write_escaped_nonempty};
pub use reader::{HeaderReader, ParseError};

use crate::{binning::Bin, histogram::Histogram};

/// A binning that can describe itself in the textual histogram format.
pub trait BinCodec: Bin + Sized {
    /// Write the keyword line and parameter lines, each terminated by `\n`.
    fn write_header<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    /// Read back exactly what [`BinCodec::write_header`] wrote.
    fn read_header(reader: &mut HeaderReader<'_>) -> Result<Self, ParseError>;

    /// Write a bin value as it appears at the start of a data line.
    fn write_value<W: fmt::Write>(&self, value: &Self::Value, out: &mut W) -> fmt::Result;
}

const HISTOGRAM: &str = "Histogram";
const UNDERFLOWS: &str = "Underflows";
const OVERFLOWS: &str = "Overflows";

/// Encode a binning on its own.
pub fn encode_bin<B: BinCodec>(bin: &B) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = bin.write_header(&mut out);
    out
}

/// Decode a binning written by [`encode_bin`].
pub fn decode_bin<B: BinCodec>(text: &str) -> Result<B, ParseError> {
    let mut reader = HeaderReader::new(text);
    let bin = B::read_header(&mut reader)?;
    reader.finish()?;
    Ok(bin)
}

/// Encode a histogram: header, binning block, then one data line per bin.
pub fn encode_histogram<B, T>(histogram: &Histogram<B, T>) -> String
where
    B: BinCodec,
    T: fmt::Display,
{
    let mut out = String::new();
    let _ = write_histogram(histogram, &mut out);
    out
}

pub(crate) fn write_histogram<B, T, W>(histogram: &Histogram<B, T>, out: &mut W) -> fmt::Result
where
    B: BinCodec,
    T: fmt::Display,
    W: fmt::Write,
{
    writeln!(out, "# {HISTOGRAM}")?;
    match histogram.outliers() {
        Some((underflows, overflows)) => {
            write!(out, "# {UNDERFLOWS} = ")?;
            write_escaped_nonempty(out, underflows)?;
            write!(out, "\n# {OVERFLOWS}  = ")?;
            write_escaped_nonempty(out, overflows)?;
            writeln!(out)?;
        }
        None => {
            writeln!(out, "# {UNDERFLOWS} =")?;
            writeln!(out, "# {OVERFLOWS}  =")?;
        }
    }
    let bin = histogram.bin();
    bin.write_header(out)?;
    for (index, content) in histogram.contents().iter().enumerate() {
        bin.write_value(&bin.from_index(index), out)?;
        out.write_char('\t')?;
        write_escaped(out, content)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Decode a histogram written by [`encode_histogram`].
pub fn decode_histogram<B, T>(text: &str) -> Result<Histogram<B, T>, ParseError>
where
    B: BinCodec,
    T: FromStr,
{
    let result = read_histogram(text);
    if let Err(e) = &result {
        log::debug!("could not decode histogram: {e}");
    }
    result
}

fn read_histogram<B, T>(text: &str) -> Result<Histogram<B, T>, ParseError>
where
    B: BinCodec,
    T: FromStr,
{
    let mut reader = HeaderReader::new(text);
    reader.expect_keyword(HISTOGRAM)?;
    let underflows: Option<T> = read_outlier(&mut reader, UNDERFLOWS)?;
    let overflows: Option<T> = read_outlier(&mut reader, OVERFLOWS)?;
    let outliers = match (underflows, overflows) {
        (Some(underflows), Some(overflows)) => Some((underflows, overflows)),
        (None, None) => None,
        _ => {
            return Err(ParseError::InvalidBins {
                line: reader.line(),
                message: "underflows and overflows must both be present or both be absent"
                    .to_string(),
            })
        }
    };
    let bin = B::read_header(&mut reader)?;

    let mut contents = Vec::with_capacity(bin.n_bins());
    let mut expected = String::new();
    for index in 0..bin.n_bins() {
        expected.clear();
        let _ = bin.write_value(&bin.from_index(index), &mut expected);
        let (line, text) = reader.next_line(|| format!("data line for bin {index}"))?;
        let content = text
            .strip_prefix(expected.as_str())
            .and_then(|rest| rest.strip_prefix('\t'))
            .ok_or_else(|| ParseError::UnexpectedLine {
                line,
                expected: format!("{expected:?} followed by a tab"),
                found: text.to_string(),
            })?;
        contents.push(parse_escaped(content, line, "bin content")?);
    }
    let last_line = reader.line();
    reader.finish()?;

    Histogram::from_parts(bin, outliers, contents).map_err(|e| ParseError::InvalidBins {
        line: last_line,
        message: e.to_string(),
    })
}

fn read_outlier<T: FromStr>(
    reader: &mut HeaderReader<'_>,
    key: &str,
) -> Result<Option<T>, ParseError> {
    reader
        .verbatim_field(key)?
        .map(|value| parse_escaped(value, reader.line(), key))
        .transpose()
}

fn parse_escaped<T: FromStr>(text: &str, line: usize, field: &str) -> Result<T, ParseError> {
    unescape(text)
        .and_then(|unescaped| unescaped.parse().ok())
        .ok_or_else(|| ParseError::InvalidValue {
            line,
            field: field.to_string(),
            found: text.to_string(),
        })
}

impl<B, T> fmt::Display for Histogram<B, T>
where
    B: BinCodec,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_histogram(self, f)
    }
}

impl<B, T> FromStr for Histogram<B, T>
where
    B: BinCodec,
    T: FromStr,
{
    type Err = crate::HistogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode_histogram(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::{decode_bin, decode_histogram, encode_bin, encode_histogram, ParseError};
    use crate::{
        binning::{Bins2D, EqualWidthBins, IndexBins, IntBins, LogWidthBins, SteppedIntBins},
        fill::{monoidal, run_fill},
        histogram::Histogram,
    };

    #[test]
    fn int_histogram_text() {
        let histogram = Histogram::with_outliers(
            IntBins::new(0, 2).expect("valid bins"),
            (1_u32, 0),
            vec![4, 7, 3],
        )
        .expect("matching length");
        let text = encode_histogram(&histogram);
        assert_eq!(
            "# Histogram\n\
             # Underflows = 1\n\
             # Overflows  = 0\n\
             # IntBins\n\
             # Low  = 0\n\
             # High = 2\n\
             0\t4\n\
             1\t7\n\
             2\t3\n",
            text
        );
        assert_eq!(
            histogram,
            decode_histogram::<IntBins, u32>(&text).expect("round trip")
        );
    }

    #[test]
    fn every_binning_round_trips() {
        let int = IntBins::new(-3, 4).expect("valid");
        assert_eq!(int, decode_bin(&encode_bin(&int)).expect("int"));

        let stepped = SteppedIntBins::new(1, 3, 20).expect("valid");
        assert_eq!(stepped, decode_bin(&encode_bin(&stepped)).expect("stepped"));

        let index = IndexBins::new(-2_i32, 9).expect("valid");
        assert_eq!(index, decode_bin(&encode_bin(&index)).expect("index"));

        let equal = EqualWidthBins::new(0.1, 7, 0.9).expect("valid");
        assert_eq!(equal, decode_bin(&encode_bin(&equal)).expect("equal"));

        let log = LogWidthBins::new(1e-3, 17, 250.0).expect("valid");
        assert_eq!(log, decode_bin(&encode_bin(&log)).expect("log"));

        let product = Bins2D::new(equal, log);
        assert_eq!(
            product,
            decode_bin(&encode_bin(&product)).expect("product")
        );
    }

    #[test_log::test]
    fn float_histogram_without_outliers_round_trips() {
        let bin = Bins2D::new(
            EqualWidthBins::new(-1.0, 3, 1.0).expect("valid"),
            IntBins::new(0, 1).expect("valid"),
        );
        let histogram =
            Histogram::new(bin, vec![0.5, 1.25, -3.0, 1e-9, 7.0, 0.0]).expect("six bins");
        let text = histogram.to_string();
        assert!(text.contains("# Underflows =\n# Overflows  =\n"));
        let decoded: Histogram<Bins2D<EqualWidthBins, IntBins>, f64> =
            text.parse().expect("round trip");
        assert_eq!(histogram, decoded);
        assert_eq!(None, decoded.outliers());
    }

    #[test]
    fn string_contents_keep_their_whitespace() {
        let histogram = Histogram::with_outliers(
            IntBins::new(0, 2).expect("valid"),
            ("\tlow".to_string(), " ".to_string()),
            vec![" padded".to_string(), "x ".to_string(), "two\nlines\\".to_string()],
        )
        .expect("three bins");
        let text = encode_histogram(&histogram);
        assert!(text.ends_with("0\t padded\n1\tx \n2\ttwo\\nlines\\\\\n"));
        assert_eq!(
            histogram,
            decode_histogram::<IntBins, String>(&text).expect("round trip")
        );
    }

    #[test_log::test]
    fn frozen_monoidal_histogram_round_trips() {
        let histogram = run_fill(
            || monoidal(IntBins::new(1, 3).expect("valid")),
            &[(1_i64, "a".to_string()), (3, "b".to_string()), (1, "c".to_string())],
        );
        assert_eq!(Some((&String::new(), &String::new())), histogram.outliers());
        let text = histogram.to_string();
        assert!(text.contains("# Underflows = \\e\n# Overflows  = \\e\n"));
        let decoded: Histogram<IntBins, String> = text.parse().expect("round trip");
        assert_eq!(histogram, decoded);
        assert_eq!(&["ac", "", "b"], decoded.contents());
    }

    #[test_log::test]
    fn rejects_malformed_headers() {
        let good = encode_histogram(
            &Histogram::with_outliers(IntBins::new(0, 1).expect("valid"), (0_u32, 0), vec![1, 2])
                .expect("two bins"),
        );

        let missing_keyword = good.replacen("# Histogram\n", "", 1);
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&missing_keyword),
            Err(ParseError::UnexpectedLine { line: 1, .. })
        ));

        let wrong_binning = good.replace("# IntBins", "# SteppedIntBins");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&wrong_binning),
            Err(ParseError::UnexpectedLine { line: 4, .. })
        ));

        let bad_bound = good.replace("# High = 1", "# High = one");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&bad_bound),
            Err(ParseError::InvalidValue { line: 6, .. })
        ));

        let inverted = good.replace("# High = 1", "# High = -5");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&inverted),
            Err(ParseError::InvalidBins { line: 6, .. })
        ));

        let half_outliers = good.replace("# Overflows  = 0", "# Overflows  =");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&half_outliers),
            Err(ParseError::InvalidBins { .. })
        ));
    }

    #[test]
    fn rejects_malformed_data() {
        let good = encode_histogram(
            &Histogram::new(IntBins::new(0, 1).expect("valid"), vec![1_u32, 2]).expect("two bins"),
        );

        let truncated = good.replace("1\t2\n", "");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&truncated),
            Err(ParseError::UnexpectedEnd { .. })
        ));

        let trailing = format!("{good}2\t9\n");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&trailing),
            Err(ParseError::TrailingInput { line: 9, .. })
        ));

        let wrong_value = good.replace("1\t2", "5\t2");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&wrong_value),
            Err(ParseError::UnexpectedLine { line: 8, .. })
        ));

        let bad_content = good.replace("1\t2", "1\ttwo");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&bad_content),
            Err(ParseError::InvalidValue { line: 8, .. })
        ));

        let padded_content = good.replace("1\t2", "1\t 2");
        assert!(matches!(
            decode_histogram::<IntBins, u32>(&padded_content),
            Err(ParseError::InvalidValue { line: 8, .. })
        ));

        let bad_escape = good.replace("1\t2", "1\t2\\");
        assert!(matches!(
            decode_histogram::<IntBins, String>(&bad_escape),
            Err(ParseError::InvalidValue { line: 8, .. })
        ));

        // Tolerates a missing final newline and trailing blank lines.
        assert!(decode_histogram::<IntBins, u32>(good.trim_end()).is_ok());
        assert!(decode_histogram::<IntBins, u32>(&format!("{good}\n\n")).is_ok());
    }
}
