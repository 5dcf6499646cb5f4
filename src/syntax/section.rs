//! Named bank ranges derived from a manifest.

use std::fmt;
use std::ops::RangeInclusive;

use smol_str::SmolStr;

use crate::base::Bank;

/// A named, contiguous range of banks under one manifest header.
///
/// Both ends are inclusive. A section whose header was never followed by a
/// bank line has neither end set; see [`SectionRange::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRange {
    label: SmolStr,
    start_bank: Option<Bank>,
    end_bank: Option<Bank>,
}

impl SectionRange {
    /// Create a section with no bank data yet.
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            start_bank: None,
            end_bank: None,
        }
    }

    /// Create a section spanning `start..=end`.
    pub fn with_banks(label: impl Into<SmolStr>, start: Bank, end: Bank) -> Self {
        Self {
            label: label.into(),
            start_bank: Some(start),
            end_bank: Some(end),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// First bank of the section, if any bank line followed its header.
    pub fn start_bank(&self) -> Option<Bank> {
        self.start_bank
    }

    /// Last bank of the section (inclusive).
    pub fn end_bank(&self) -> Option<Bank> {
        self.end_bank
    }

    /// True when the header had no bank lines before the next header or EOF.
    pub fn is_empty(&self) -> bool {
        self.banks().is_none()
    }

    /// The inclusive bank range, or `None` for an empty section.
    pub fn banks(&self) -> Option<RangeInclusive<Bank>> {
        match (self.start_bank, self.end_bank) {
            (Some(start), Some(end)) if start <= end => Some(start..=end),
            _ => None,
        }
    }

    pub fn contains(&self, bank: Bank) -> bool {
        self.banks().is_some_and(|banks| banks.contains(&bank))
    }

    /// Number of banks covered, 0 for an empty section.
    pub fn bank_count(&self) -> u32 {
        self.banks().map_or(0, |banks| banks.end() - banks.start() + 1)
    }

    /// Record a bank line seen while this section is open.
    ///
    /// The first bank becomes the start; the end tracks the maximum seen.
    pub(crate) fn record_bank(&mut self, bank: Bank) {
        if self.start_bank.is_none() {
            self.start_bank = Some(bank);
        }
        self.end_bank = Some(self.end_bank.map_or(bank, |end| end.max(bank)));
    }

    /// Close the section when the next header or EOF is reached.
    ///
    /// An end that never reached the start falls back to the last bank seen
    /// anywhere in the manifest, provided that bank is not before the start.
    pub(crate) fn close(&mut self, last_seen_bank: Option<Bank>) {
        let Some(start) = self.start_bank else {
            return;
        };
        if self.end_bank.is_none_or(|end| end < start) {
            if let Some(last) = last_seen_bank.filter(|&last| last >= start) {
                self.end_bank = Some(last);
            }
        }
    }
}

impl fmt::Display for SectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.banks() {
            Some(banks) if banks.start() == banks.end() => {
                write!(f, "{} (bank {})", self.label, banks.start())
            }
            Some(banks) => write!(f, "{} (banks {}-{})", self.label, banks.start(), banks.end()),
            None => write!(f, "{} (no banks)", self.label),
        }
    }
}
