//! Workbook loading: reads the course, category, sequence and accreditation
//! workbooks with calamine and assembles the [`Curriculum`].

pub mod sheets;

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use log::{debug, info};

use crate::config::GenerateConfig;
use crate::error::{Error, Result};
use crate::model::Curriculum;

pub use sheets::{CategorySheet, CourseTable, Rows};

/// Text of one cell. Integral floats lose their `.0`.
fn cell_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        _ => String::new(),
    }
}

fn range_rows(range: &Range<Data>) -> Rows {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

/// Every worksheet of a workbook, in workbook order.
pub fn read_workbook(path: &Path) -> Result<Vec<(String, Rows)>> {
    let spreadsheet = |source| Error::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(spreadsheet)?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(spreadsheet)?;
        debug!("{}: sheet '{name}' has {} rows", path.display(), range.height());
        sheets.push((name, range_rows(&range)));
    }
    Ok(sheets)
}

fn first_sheet(path: &Path) -> Result<(String, Rows)> {
    read_workbook(path)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::malformed(path, "", "workbook has no sheets"))
}

pub fn load_courses(path: &Path) -> Result<CourseTable> {
    let (sheet, rows) = first_sheet(path)?;
    sheets::parse_courses(&rows).map_err(|reason| Error::malformed(path, &sheet, reason))
}

pub fn load_categories(path: &Path) -> Result<CategorySheet> {
    let (sheet, rows) = first_sheet(path)?;
    sheets::parse_categories(&rows).map_err(|reason| Error::malformed(path, &sheet, reason))
}

/// Load everything `config` names into one curriculum.
pub fn load_curriculum(config: &GenerateConfig) -> Result<Curriculum> {
    info!("Parsing courses...");
    let mut courses = load_courses(&config.courses)?;

    info!("Parsing categories...");
    let categories = load_categories(&config.categories)?;
    sheets::apply_categories(&mut courses, &categories);

    if let Some(path) = &config.accreditation {
        info!("Parsing accreditation units...");
        let (sheet, rows) = first_sheet(path)?;
        let units = sheets::parse_accreditation(&rows, &config.department)
            .map_err(|reason| Error::malformed(path, &sheet, reason))?;
        sheets::apply_accreditation(&mut courses, units);
    }

    info!("Parsing sequences...");
    let workbook = read_workbook(&config.sequences)?;
    if workbook.is_empty() {
        return Err(Error::malformed(
            &config.sequences,
            "",
            "workbook has no plan sheets",
        ));
    }
    let plans = workbook
        .iter()
        .map(|(name, rows)| sheets::parse_sequence(name, rows, &courses))
        .collect();

    Ok(Curriculum {
        department: config.department.trim().to_string(),
        plans,
        categories: categories.table,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_loader.rs"]
mod tests;
