//! Identifier policy: how free-text names become ids in markup and script.
//!
//! Every generated id (element ids, listener names, plan switch cases,
//! legend buttons) is derived here so that markup and behaviour code agree.

use crate::model::{Course, Plan};

/// Map free text to a safe identifier: ASCII letters and digits only, lowercased.
///
/// Total and idempotent; `""` maps to `""`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Plan-qualified course id: `normalize(course) + normalize(plan)`.
pub fn course_id(course_name: &str, plan_name: &str) -> String {
    let mut id = normalize(course_name);
    id.push_str(&normalize(plan_name));
    id
}

// ─── Listener maps ───────────────────────────────────────────────────────────

/// Scope map holding one click listener per course occurrence, keyed by element id.
pub const COURSE_LISTENERS: &str = "courseListeners";
/// Scope map holding one click listener per legend category, keyed by button id.
pub const CATEGORY_LISTENERS: &str = "categoryListeners";

/// `ng-click` expression calling the listener stored under `key` in `map`.
///
/// Keys are looked up by string, so ids starting with a digit stay valid.
pub fn listener_call(map: &str, key: &str) -> String {
    format!("{map}['{key}']()")
}

// ─── Electives ───────────────────────────────────────────────────────────────

/// The three elective placeholders that get shortened ids and class-based highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectiveKind {
    Complementary,
    ProgramTechnical,
    Its,
}

impl ElectiveKind {
    pub const ALL: [ElectiveKind; 3] = [
        ElectiveKind::Complementary,
        ElectiveKind::ProgramTechnical,
        ElectiveKind::Its,
    ];

    /// Recognise an already-normalized name.
    pub fn from_normalized(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.normalized() == key)
    }

    /// Recognise free text ("Program/Technical Elective" etc).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_normalized(&normalize(name))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ElectiveKind::Complementary => "Complementary Elective",
            ElectiveKind::ProgramTechnical => "Program/Technical Elective",
            ElectiveKind::Its => "ITS Elective",
        }
    }

    pub fn normalized(self) -> &'static str {
        match self {
            ElectiveKind::Complementary => "complementaryelective",
            ElectiveKind::ProgramTechnical => "programtechnicalelective",
            ElectiveKind::Its => "itselective",
        }
    }

    /// Short id used for the legend button and the category CSS class.
    pub fn alias(self) -> &'static str {
        match self {
            ElectiveKind::Complementary => "COMP",
            ElectiveKind::ProgramTechnical => "PROG",
            ElectiveKind::Its => "ITS",
        }
    }

    /// Extra box style for placeholders. ITS slots use the default course style.
    pub fn box_class(self) -> Option<&'static str> {
        match self {
            ElectiveKind::Complementary => Some("compelective"),
            ElectiveKind::ProgramTechnical => Some("progelective"),
            ElectiveKind::Its => None,
        }
    }
}

// ─── Category keys ───────────────────────────────────────────────────────────

/// Normalized category name plus the id policy derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey(String);

/// CSS class given to courses without a category. Never gets a legend button.
pub const UNCATEGORIZED_CLASS: &str = "uncategorized";

impl CategoryKey {
    pub fn new(category_name: &str) -> Self {
        Self(normalize(category_name))
    }

    pub fn from_normalized(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Data key: the normalized category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elective(&self) -> Option<ElectiveKind> {
        ElectiveKind::from_normalized(&self.0)
    }

    /// Legend button id; also the listener prefix and the course CSS class.
    pub fn button_id(&self) -> &str {
        match self.elective() {
            Some(kind) => kind.alias(),
            None if self.0.is_empty() => UNCATEGORIZED_CLASS,
            None => &self.0,
        }
    }
}

// ─── Placement ───────────────────────────────────────────────────────────────

/// A course occurrence with the element id it is rendered under.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    /// Index of the term within its plan.
    pub term: usize,
    pub course: &'a Course,
    pub element_id: String,
    /// Set when this occurrence is an elective placeholder.
    pub elective: Option<ElectiveKind>,
}

impl Placement<'_> {
    pub fn category(&self) -> CategoryKey {
        CategoryKey::new(&self.course.category)
    }
}

/// Walk a plan in display order and assign element ids.
///
/// Elective placeholders get a per-kind, per-plan counter suffix so that
/// repeated slots stay unique; every other course is `course_id(name, plan)`.
pub fn place(plan: &Plan) -> Vec<Placement<'_>> {
    let mut counters = [0usize; 3];
    let mut placed = Vec::new();
    for (term, t) in plan.terms.iter().enumerate() {
        for course in &t.courses {
            let elective = ElectiveKind::from_name(&course.name);
            let mut element_id = course_id(&course.name, &plan.name);
            if let Some(kind) = elective {
                let counter = &mut counters[kind as usize];
                element_id.push_str(&counter.to_string());
                *counter += 1;
            }
            placed.push(Placement {
                term,
                course,
                element_id,
                elective,
            });
        }
    }
    placed
}

#[cfg(test)]
#[path = "../tests/rust/test_ident.rs"]
mod tests;
