use std::{
    iter::{Enumerate, Peekable},
    str::{FromStr, Lines},
};

use thiserror::Error;

/// Why textual decoding failed. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended early.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the decoder was looking for
        expected: String,
    },

    /// A line did not have the required shape.
    #[error("line {line}: expected {expected}, found {found:?}")]
    UnexpectedLine {
        /// Offending line
        line: usize,
        /// What the decoder was looking for
        expected: String,
        /// The line as found
        found: String,
    },

    /// A field value could not be parsed.
    #[error("line {line}: cannot parse {found:?} as {field}")]
    InvalidValue {
        /// Offending line
        line: usize,
        /// The field being parsed
        field: String,
        /// The text as found
        found: String,
    },

    /// Fields parsed but describe an impossible binning or histogram.
    #[error("line {line}: {message}")]
    InvalidBins {
        /// Last line read before the problem was detected
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Input continued past the last data line.
    #[error("line {line}: unexpected trailing input {found:?}")]
    TrailingInput {
        /// Offending line
        line: usize,
        /// The line as found
        found: String,
    },
}

/// Line cursor over the textual format's `# Key = value` header lines.
#[derive(Debug)]
pub struct HeaderReader<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
    line: usize,
}

impl<'a> HeaderReader<'a> {
    /// Start reading at the first line of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
            line: 0,
        }
    }

    /// Number of the last line consumed, 0 before any.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consume the next line, whatever it holds.
    pub fn next_line(
        &mut self,
        expected: impl FnOnce() -> String,
    ) -> Result<(usize, &'a str), ParseError> {
        match self.lines.next() {
            Some((index, text)) => {
                self.line = index + 1;
                Ok((self.line, text))
            }
            None => Err(ParseError::UnexpectedEnd {
                expected: expected(),
            }),
        }
    }

    /// Consume a `# Keyword` line.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let (line, text) = self.next_line(|| format!("# {keyword}"))?;
        match comment_body(text) {
            Some(body) if body == keyword => Ok(()),
            _ => Err(ParseError::UnexpectedLine {
                line,
                expected: format!("# {keyword}"),
                found: text.to_string(),
            }),
        }
    }

    /// Consume a `# Key = value` line and return the trimmed value, which
    /// may be empty.
    pub fn field(&mut self, key: &str) -> Result<&'a str, ParseError> {
        let (line, text) = self.next_line(|| format!("# {key} = <value>"))?;
        comment_body(text)
            .and_then(|body| body.split_once('='))
            .filter(|(found_key, _)| found_key.trim() == key)
            .map(|(_, value)| value.trim())
            .ok_or_else(|| unexpected_field(line, key, text))
    }

    /// Consume a `# Key = value` line and parse the value.
    pub fn parse_field<T: FromStr>(&mut self, key: &str) -> Result<T, ParseError> {
        let value = self.field(key)?;
        value.parse().map_err(|_| ParseError::InvalidValue {
            line: self.line,
            field: key.to_string(),
            found: value.to_string(),
        })
    }

    /// Consume a `# Key = value` line whose value may be empty, read as
    /// `None`. The value is everything after the single space following
    /// `=`, untrimmed, so padding survives.
    pub fn verbatim_field(&mut self, key: &str) -> Result<Option<&'a str>, ParseError> {
        let (line, text) = self.next_line(|| format!("# {key} = <value>"))?;
        let value = text
            .strip_prefix('#')
            .map(str::trim_start)
            .and_then(|body| body.strip_prefix(key))
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .ok_or_else(|| unexpected_field(line, key, text))?;
        let value = value.strip_prefix(' ').unwrap_or(value);
        Ok(Some(value).filter(|value| !value.is_empty()))
    }

    /// Report a parameter set that parsed but was rejected by a binning
    /// constructor.
    pub fn invalid_bins(&self, error: impl std::fmt::Display) -> ParseError {
        ParseError::InvalidBins {
            line: self.line,
            message: error.to_string(),
        }
    }

    /// Require that only blank lines remain.
    pub fn finish(mut self) -> Result<(), ParseError> {
        for (index, text) in self.lines.by_ref() {
            if !text.trim().is_empty() {
                return Err(ParseError::TrailingInput {
                    line: index + 1,
                    found: text.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn unexpected_field(line: usize, key: &str, text: &str) -> ParseError {
    ParseError::UnexpectedLine {
        line,
        expected: format!("# {key} = <value>"),
        found: text.to_string(),
    }
}

fn comment_body(text: &str) -> Option<&str> {
    text.strip_prefix('#').map(str::trim)
}
