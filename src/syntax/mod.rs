//! Parsed manifest data.

mod section;

pub use section::SectionRange;
