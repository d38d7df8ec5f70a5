//! Generation configuration.

use std::path::PathBuf;

/// Inputs and output location for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Course information workbook.
    pub courses: PathBuf,
    /// Category/colour workbook.
    pub categories: PathBuf,
    /// Plan sequencing workbook (one sheet per plan).
    pub sequences: PathBuf,
    /// Optional accreditation-unit workbook.
    pub accreditation: Option<PathBuf>,
    /// Department name. Page title, header and accreditation row filter.
    pub department: String,
    /// Page template carrying the `<!--@name-->` anchors.
    pub template: PathBuf,
    /// Existing directory the site is written into.
    pub output_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            courses: PathBuf::from("Courses.xlsx"),
            categories: PathBuf::from("Categories.xlsx"),
            sequences: PathBuf::from("Sequences.xlsx"),
            accreditation: None,
            department: String::new(),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("output"),
        }
    }
}
