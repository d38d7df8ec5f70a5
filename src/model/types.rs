//! Curriculum data structures produced by the loader and read by every later stage.
//!
//! Plans own their terms, terms own their course occurrences; order is
//! display order everywhere. Nothing here is mutated after loading.

// ─── Requisite ───────────────────────────────────────────────────────────────

/// Literal separator joining the alternatives of an OR-group.
pub const OR_SEPARATOR: &str = " or ";

/// One prerequisite or corequisite expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requisite {
    /// A single course reference, e.g. `MATH 100`.
    Course(String),
    /// Any one of several courses satisfies it, e.g. `PHYS 130 or PHYS 144`.
    AnyOf(Vec<String>),
}

impl Requisite {
    /// Parse one expression. Returns `None` for blank text.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let alternatives: Vec<String> = text
            .split(OR_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        match alternatives.len() {
            0 => None,
            1 => alternatives.into_iter().next().map(Requisite::Course),
            _ => Some(Requisite::AnyOf(alternatives)),
        }
    }

    /// Course references in left-to-right order.
    pub fn alternatives(&self) -> &[String] {
        match self {
            Requisite::Course(name) => std::slice::from_ref(name),
            Requisite::AnyOf(names) => names,
        }
    }
}

// ─── Course ──────────────────────────────────────────────────────────────────

/// One accreditation-unit figure attached to a course, e.g. ("Math", 12.5).
#[derive(Debug, Clone, PartialEq)]
pub struct AccreditationUnit {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Course {
    /// Display name (e.g. "MATH 100").
    pub name: String,
    /// Tooltip text.
    pub description: String,
    /// Category label as written in the workbook; may be empty.
    pub category: String,
    pub prerequisites: Vec<Requisite>,
    pub corequisites: Vec<Requisite>,
    pub accreditation: Vec<AccreditationUnit>,
}

impl Course {
    /// Create a course with only a name and category.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a prerequisite expression (ignored if blank).
    pub fn prerequisite(mut self, expr: &str) -> Self {
        self.prerequisites.extend(Requisite::parse(expr));
        self
    }

    /// Add a corequisite expression (ignored if blank).
    pub fn corequisite(mut self, expr: &str) -> Self {
        self.corequisites.extend(Requisite::parse(expr));
        self
    }
}

// ─── Plan ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Term {
    pub name: String,
    pub courses: Vec<Course>,
}

impl Term {
    pub fn new(name: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            name: name.into(),
            courses,
        }
    }
}

/// One degree program variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    pub name: String,
    pub terms: Vec<Term>,
}

impl Plan {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    /// All course occurrences across all terms, in display order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.terms.iter().flat_map(|t| t.courses.iter())
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Largest number of courses in any single term (0 for an empty plan).
    pub fn max_courses_per_term(&self) -> usize {
        self.terms.iter().map(|t| t.courses.len()).max().unwrap_or(0)
    }
}

// ─── Category table ──────────────────────────────────────────────────────────

/// A category row from the category workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    /// CSS colour, e.g. "#ffcc00". Empty when the workbook gives none.
    pub color: String,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

// ─── Curriculum ──────────────────────────────────────────────────────────────

/// Everything one generation run consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curriculum {
    /// Department name shown in the page title.
    pub department: String,
    pub plans: Vec<Plan>,
    /// Category table in workbook order.
    pub categories: Vec<CategoryEntry>,
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_types.rs"]
mod tests;
