//! Parse options

use smol_str::SmolStr;

use crate::base::constants::CATCH_ALL_LABEL;

/// Options controlling how a manifest becomes section ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Label of the section synthesized when the manifest yields no sections
    pub catch_all_label: SmolStr,
    /// Drop headers that were never followed by a bank line
    pub skip_empty_sections: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            catch_all_label: SmolStr::new_static(CATCH_ALL_LABEL),
            skip_empty_sections: false,
        }
    }
}

impl ParseOptions {
    pub fn with_catch_all_label(mut self, label: impl Into<SmolStr>) -> Self {
        self.catch_all_label = label.into();
        self
    }

    pub fn with_skip_empty_sections(mut self, skip: bool) -> Self {
        self.skip_empty_sections = skip;
        self
    }
}
