//! Section range derivation.
//!
//! A manifest is read line by line. `#` headers open sections, `-- Bank N`
//! markers extend the open section, and every other line is ignored:
//!
//! ```text
//! # Nirvana          -> opens "Nirvana"
//! -- Bank 3          -> Nirvana starts at 3
//! preset_a.bin       -> ignored
//! -- Bank 7          -> Nirvana ends at 7
//! # Clean Tones      -> closes Nirvana, opens "Clean Tones"
//! -- Bank 8          -> Clean Tones is 8..=8
//! ```

use std::io::{self, BufRead};

use tracing::{debug, trace, warn};

use crate::base::{Bank, TextRange, TextSize};
use crate::syntax::SectionRange;

use super::errors::{DiagnosticCode, ManifestDiagnostic};
use super::line::{ManifestLine, classify_line};
use super::options::ParseOptions;

/// Result of parsing a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Sections in header order; never empty after a parse
    pub sections: Vec<SectionRange>,
    /// Skipped and degenerate input, ordered by line
    pub diagnostics: Vec<ManifestDiagnostic>,
    /// Last valid bank number seen anywhere in the manifest
    pub last_seen_bank: Option<Bank>,
    /// Number of lines read, blank lines included
    pub line_count: usize,
}

impl ParsedManifest {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse manifest text that is already in memory.
pub fn parse_manifest(source: &str, options: &ParseOptions) -> ParsedManifest {
    let mut builder = ManifestBuilder::new(options);
    for line in source.split_inclusive('\n') {
        builder.push_line(line, line.len());
    }
    builder.finish()
}

/// Parse a manifest from a line-oriented reader.
///
/// Invalid UTF-8 is decoded lossily. A read error ends the manifest at the
/// last complete line, the same as end-of-file.
pub fn parse_reader<R: BufRead>(mut reader: R, options: &ParseOptions) -> ParsedManifest {
    let mut builder = ManifestBuilder::new(options);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(read) => {
                let text = String::from_utf8_lossy(&buf);
                builder.push_line(&text, read);
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(
                    line = builder.line,
                    error = %err,
                    "manifest read failed; keeping lines read so far"
                );
                break;
            }
        }
    }
    builder.finish()
}

struct OpenSection {
    section: SectionRange,
    line: usize,
    range: TextRange,
}

/// Line-by-line section state machine shared by both entry points.
struct ManifestBuilder<'o> {
    options: &'o ParseOptions,
    sections: Vec<SectionRange>,
    open: Option<OpenSection>,
    saw_header: bool,
    last_seen_bank: Option<Bank>,
    diagnostics: Vec<ManifestDiagnostic>,
    /// Bank lines before the first header; only reported if a header follows
    orphan_banks: Vec<ManifestDiagnostic>,
    line: usize,
    offset: TextSize,
}

impl<'o> ManifestBuilder<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
            open: None,
            saw_header: false,
            last_seen_bank: None,
            diagnostics: Vec::new(),
            orphan_banks: Vec::new(),
            line: 0,
            offset: TextSize::new(0),
        }
    }

    /// Feed one line. `consumed` is its byte length including the terminator.
    fn push_line(&mut self, raw: &str, consumed: usize) {
        let content = raw.trim_end_matches(['\n', '\r']);
        let range = line_range(self.offset, content.len());

        match classify_line(content) {
            ManifestLine::Blank | ManifestLine::Entry(_) => {}
            ManifestLine::Header(label) => {
                self.close_open_section();
                self.saw_header = true;
                self.open = Some(OpenSection {
                    section: SectionRange::new(label),
                    line: self.line,
                    range,
                });
            }
            ManifestLine::Bank(Ok(bank)) => {
                self.last_seen_bank = Some(bank);
                match &mut self.open {
                    Some(open) => open.section.record_bank(bank),
                    None => self.orphan_banks.push(ManifestDiagnostic::new(
                        DiagnosticCode::W0202,
                        format!("bank {bank} appears before any section header"),
                        self.line,
                        range,
                    )),
                }
            }
            ManifestLine::Bank(Err(err)) => {
                trace!(line = self.line, code = %err.code(), "skipping bank marker");
                self.diagnostics
                    .push(ManifestDiagnostic::new(err.code(), err.message(), self.line, range));
            }
        }

        self.line += 1;
        self.offset = saturating_offset(self.offset, consumed);
    }

    fn close_open_section(&mut self) {
        let Some(mut open) = self.open.take() else {
            return;
        };
        open.section.close(self.last_seen_bank);
        if open.section.is_empty() {
            self.diagnostics.push(ManifestDiagnostic::new(
                DiagnosticCode::W0201,
                format!("section `{}` has no bank lines", open.section.label()),
                open.line,
                open.range,
            ));
            if self.options.skip_empty_sections {
                trace!(label = open.section.label(), "dropping empty section");
                return;
            }
        }
        self.sections.push(open.section);
    }

    fn finish(mut self) -> ParsedManifest {
        self.close_open_section();

        if self.saw_header {
            self.diagnostics.append(&mut self.orphan_banks);
            self.diagnostics.sort_by_key(|diagnostic| diagnostic.line);
        }

        if self.sections.is_empty() {
            let end = self.last_seen_bank.unwrap_or(1);
            debug!(end, "manifest has no sections; using catch-all");
            self.sections
                .push(SectionRange::with_banks(self.options.catch_all_label.clone(), 1, end));
        }

        debug!(
            sections = self.sections.len(),
            diagnostics = self.diagnostics.len(),
            lines = self.line,
            "parsed manifest"
        );

        ParsedManifest {
            sections: self.sections,
            diagnostics: self.diagnostics,
            last_seen_bank: self.last_seen_bank,
            line_count: self.line,
        }
    }
}

/// Offsets saturate at `u32::MAX` instead of wrapping on huge manifests.
pub(super) fn saturating_offset(offset: TextSize, len: usize) -> TextSize {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    TextSize::new(u32::from(offset).saturating_add(len))
}

pub(super) fn line_range(offset: TextSize, len: usize) -> TextRange {
    TextRange::new(offset, saturating_offset(offset, len))
}
