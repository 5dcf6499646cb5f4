//! Classification of single manifest lines.

use crate::base::Bank;
use crate::base::constants::{BANK_MARKER_PREFIX, HEADER_PREFIX};

use super::errors::DiagnosticCode;

/// One manifest line, classified after trimming surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLine<'a> {
    Blank,
    /// `# Label` - opens a section; holds the trimmed label.
    Header(&'a str),
    /// `-- Bank N` - a bank marker and its parsed number.
    Bank(Result<Bank, BankError<'a>>),
    /// Anything else, typically a preset filename.
    Entry(&'a str),
}

/// Why a bank marker line carries no usable bank number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError<'a> {
    /// Nothing follows the marker prefix.
    MissingNumber,
    /// The trailing token is not an unsigned integer.
    NotANumber(&'a str),
    /// Bank numbers start at 1.
    Zero,
}

impl BankError<'_> {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::MissingNumber => DiagnosticCode::W0101,
            Self::NotANumber(_) => DiagnosticCode::W0102,
            Self::Zero => DiagnosticCode::W0103,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingNumber => "bank marker has no bank number".to_string(),
            Self::NotANumber(token) => format!("bank token `{token}` is not a number"),
            Self::Zero => "bank numbers start at 1".to_string(),
        }
    }
}

/// Classify a raw manifest line.
///
/// The bank number is the last whitespace-delimited token of the line, so
/// `-- Bank 3` yields 3 while `-- Bank3` has no separate token and is
/// rejected.
pub fn classify_line(raw: &str) -> ManifestLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return ManifestLine::Blank;
    }
    if let Some(label) = line.strip_prefix(HEADER_PREFIX) {
        return ManifestLine::Header(label.trim());
    }
    if let Some(rest) = line.strip_prefix(BANK_MARKER_PREFIX) {
        return ManifestLine::Bank(parse_bank_token(line, rest));
    }
    ManifestLine::Entry(line)
}

fn parse_bank_token<'a>(line: &'a str, after_prefix: &str) -> Result<Bank, BankError<'a>> {
    if after_prefix.trim().is_empty() {
        return Err(BankError::MissingNumber);
    }
    let token = line.split_whitespace().next_back().unwrap_or(line);
    match token.parse::<Bank>() {
        Ok(0) => Err(BankError::Zero),
        Ok(bank) => Ok(bank),
        Err(_) => Err(BankError::NotANumber(token)),
    }
}
