//! Text rendering of claims analysis results
//!
//! Pure presentation for the statistical crates: per-result formatters in
//! [`render`] and a [`Report`] builder that accumulates titled sections and
//! renders the whole analysis transcript. No computation happens here; the
//! unrounded statistics stay on the result structs.

pub mod render;

pub use render::{
    format_bootstrap, format_chi_square, format_contingency_table, format_cost,
    format_effect_size, format_odds_ratio, format_overlap, format_p_value,
    format_proportion_test, format_t_test,
};

use std::fmt;

/// An analysis report assembled from titled sections
#[derive(Debug, Clone, Default)]
pub struct Report {
    title: String,
    sections: Vec<(String, String)>,
}

impl Report {
    /// Create a report with a top-level title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a titled section
    pub fn section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.sections.push((heading.into(), body.into()));
        self
    }

    /// Number of sections added so far
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render the report as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.len()));
        out.push('\n');
        for (heading, body) in &self.sections {
            out.push('\n');
            out.push_str(heading);
            out.push('\n');
            out.push_str(&"-".repeat(heading.len()));
            out.push('\n');
            out.push_str(body.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
