//! Row-level parsing of the four workbooks.
//!
//! Everything here works on plain `Vec<Vec<String>>` rows so the schemas can
//! be tested without spreadsheet files. Errors are plain reasons; the caller
//! attaches the workbook path and sheet name.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::ident::{normalize, ElectiveKind};
use crate::model::{AccreditationUnit, CategoryEntry, Course, Plan, Requisite, Term};

/// One worksheet as text cells, row-major.
pub type Rows = Vec<Vec<String>>;

/// Courses keyed by normalized name, in workbook order.
pub type CourseTable = IndexMap<String, Course>;

// ── Header lookup ────────────────────────────────────────────────────────────

/// First row of a sheet with case- and punctuation-insensitive lookup.
struct Header {
    keys: Vec<String>,
}

impl Header {
    fn new(row: &[String]) -> Self {
        Self {
            keys: row.iter().map(|c| normalize(c)).collect(),
        }
    }

    /// Column of the first header matching any of `names`.
    fn find(&self, names: &[&str]) -> Option<usize> {
        names
            .iter()
            .find_map(|name| self.keys.iter().position(|k| k == name))
    }

    fn require(&self, names: &[&str]) -> Result<usize, String> {
        self.find(names)
            .ok_or_else(|| format!("missing '{}' column", names[0]))
    }
}

fn header_of(rows: &[Vec<String>]) -> Result<Header, String> {
    rows.first()
        .map(|row| Header::new(row))
        .ok_or_else(|| "sheet is empty".to_string())
}

fn cell(row: &[String], column: Option<usize>) -> &str {
    column
        .and_then(|c| row.get(c))
        .map(|s| s.trim())
        .unwrap_or("")
}

// ── Courses ──────────────────────────────────────────────────────────────────

/// Split a requisite cell into expressions on `,` or `;`.
pub fn split_requisites(text: &str) -> Vec<Requisite> {
    text.split([',', ';']).filter_map(Requisite::parse).collect()
}

pub fn parse_courses(rows: &[Vec<String>]) -> Result<CourseTable, String> {
    let header = header_of(rows)?;
    let name_col = header.require(&["course", "name", "coursename"])?;
    let description_col = header.find(&["description", "coursedescription"]);
    let prereq_col = header.find(&["prerequisites", "prerequisite", "prereqs"]);
    let coreq_col = header.find(&["corequisites", "corequisite", "coreqs"]);
    let category_col = header.find(&["category"]);

    let mut table = CourseTable::new();
    for row in rows.iter().skip(1) {
        let name = cell(row, Some(name_col));
        if name.is_empty() {
            continue;
        }
        let key = normalize(name);
        if table.contains_key(&key) {
            warn!("course '{name}' is listed more than once, keeping the first row");
            continue;
        }
        let course = Course {
            name: name.to_string(),
            description: cell(row, description_col).to_string(),
            category: cell(row, category_col).to_string(),
            prerequisites: split_requisites(cell(row, prereq_col)),
            corequisites: split_requisites(cell(row, coreq_col)),
            accreditation: Vec::new(),
        };
        table.insert(key, course);
    }
    Ok(table)
}

// ── Categories ───────────────────────────────────────────────────────────────

/// Category table plus the course-to-category assignments listed with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySheet {
    pub table: Vec<CategoryEntry>,
    /// `(course name, category name)` in sheet order.
    pub assignments: Vec<(String, String)>,
}

pub fn parse_categories(rows: &[Vec<String>]) -> Result<CategorySheet, String> {
    let header = header_of(rows)?;
    let name_col = header.require(&["category", "name"])?;
    let color_col = header.find(&["color", "colour"]);

    let mut sheet = CategorySheet::default();
    for row in rows.iter().skip(1) {
        let name = cell(row, Some(name_col));
        if name.is_empty() {
            continue;
        }
        sheet
            .table
            .push(CategoryEntry::new(name, cell(row, color_col)));
        for (index, value) in row.iter().enumerate() {
            if index == name_col || Some(index) == color_col {
                continue;
            }
            for course in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                sheet.assignments.push((course.to_string(), name.to_string()));
            }
        }
    }
    Ok(sheet)
}

/// Override course categories with the category sheet's assignments.
pub fn apply_categories(courses: &mut CourseTable, sheet: &CategorySheet) {
    for (course, category) in &sheet.assignments {
        match courses.get_mut(&normalize(course)) {
            Some(c) => c.category = category.clone(),
            None => debug!("category '{category}' lists unknown course '{course}'"),
        }
    }
}

// ── Sequences ────────────────────────────────────────────────────────────────

/// Build one plan from its sheet: row 1 holds term names, the cells below
/// each term name are that term's courses.
///
/// Names missing from `courses` become placeholders. Elective placeholders
/// take their own name as category; anything else is logged.
pub fn parse_sequence(plan_name: &str, rows: &[Vec<String>], courses: &CourseTable) -> Plan {
    let Some(header) = rows.first() else {
        return Plan::new(plan_name, Vec::new());
    };
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut terms = Vec::new();
    for column in 0..width {
        let names: Vec<&str> = rows
            .iter()
            .skip(1)
            .map(|row| cell(row, Some(column)))
            .filter(|s| !s.is_empty())
            .collect();
        let term_name = cell(header, Some(column));
        if term_name.is_empty() && names.is_empty() {
            continue;
        }
        let term_name = if term_name.is_empty() {
            format!("Term {}", terms.len() + 1)
        } else {
            term_name.to_string()
        };
        let term_courses = names
            .into_iter()
            .map(|name| lookup_course(plan_name, name, courses))
            .collect();
        terms.push(Term::new(term_name, term_courses));
    }
    Plan::new(plan_name, terms)
}

fn lookup_course(plan_name: &str, name: &str, courses: &CourseTable) -> Course {
    if let Some(course) = courses.get(&normalize(name)) {
        return course.clone();
    }
    match ElectiveKind::from_name(name) {
        Some(kind) => Course::new(name, kind.display_name()),
        None => {
            warn!("plan '{plan_name}' lists '{name}', which is not in the course workbook");
            Course::new(name, "")
        }
    }
}

// ── Accreditation units ──────────────────────────────────────────────────────

/// Per-course accreditation figures for `department`.
///
/// Rows with a blank department cell apply to every department.
pub fn parse_accreditation(
    rows: &[Vec<String>],
    department: &str,
) -> Result<IndexMap<String, Vec<AccreditationUnit>>, String> {
    let header = header_of(rows)?;
    let course_col = header.require(&["course", "name", "coursename"])?;
    let department_col = header.find(&["department", "dept"]);
    let labels: Vec<(usize, String)> = rows[0]
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != course_col && Some(*i) != department_col)
        .map(|(i, label)| (i, label.trim().to_string()))
        .filter(|(_, label)| !label.is_empty())
        .collect();

    let wanted = normalize(department);
    let mut units: IndexMap<String, Vec<AccreditationUnit>> = IndexMap::new();
    for row in rows.iter().skip(1) {
        let course = cell(row, Some(course_col));
        if course.is_empty() {
            continue;
        }
        let row_department = normalize(cell(row, department_col));
        if !row_department.is_empty() && row_department != wanted {
            continue;
        }
        let figures = labels.iter().filter_map(|(i, label)| {
            let value = cell(row, Some(*i));
            value.parse::<f64>().ok().map(|value| AccreditationUnit {
                label: label.clone(),
                value,
            })
        });
        units.entry(normalize(course)).or_default().extend(figures);
    }
    Ok(units)
}

pub fn apply_accreditation(
    courses: &mut CourseTable,
    units: IndexMap<String, Vec<AccreditationUnit>>,
) {
    for (key, figures) in units {
        match courses.get_mut(&key) {
            Some(course) => course.accreditation = figures,
            None => debug!("accreditation row for unknown course '{key}'"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_loader_sheets.rs"]
mod tests;
