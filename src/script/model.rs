//! Structured form of the client controller, built before any text is emitted.
//!
//! Every identifier the serializer writes comes from here, so the model can
//! be checked against the line registry and the markup without parsing JS.

use crate::lines::LineId;

/// Per-plan state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanState {
    /// Normalized plan name: switch case label and radio value.
    pub id: String,
    pub term_count: usize,
    pub max_courses: usize,
    /// Legend button ids whose category has courses in this plan.
    pub legend_buttons: Vec<String>,
}

/// Click listener for one course occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListener {
    /// Element id; the listener is `<element_id>Listener`.
    pub element_id: String,
    pub plan: String,
    /// Every line touching this course, in assignment order.
    pub lines: Vec<LineId>,
}

/// One thing a category toggle highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightTarget {
    /// A regular course box, addressed by id.
    Course { element_id: String, class: String },
    /// Elective placeholder boxes, found by CSS class and limited to `element_ids`.
    Electives {
        class: String,
        element_ids: Vec<String>,
    },
}

/// What toggling a category does in one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanHighlight {
    pub plan: String,
    pub targets: Vec<HighlightTarget>,
}

/// Flags, click listener and highlight switch for one legend category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySwitch {
    /// Button id; also the switch case label and listener prefix.
    pub button_id: String,
    /// Plans with courses in this category, in first-seen order.
    pub highlights: Vec<PlanHighlight>,
}

/// The whole controller for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControllerModel {
    /// Plan selected when the page loads (first plan).
    pub default_plan: String,
    pub plans: Vec<PlanState>,
    pub categories: Vec<CategorySwitch>,
    pub listeners: Vec<CourseListener>,
}

impl ControllerModel {
    pub fn plan(&self, id: &str) -> Option<&PlanState> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn category(&self, button_id: &str) -> Option<&CategorySwitch> {
        self.categories.iter().find(|c| c.button_id == button_id)
    }

    pub fn listener(&self, element_id: &str) -> Option<&CourseListener> {
        self.listeners.iter().find(|l| l.element_id == element_id)
    }
}

impl CategorySwitch {
    pub fn highlight(&self, plan: &str) -> Option<&PlanHighlight> {
        self.highlights.iter().find(|h| h.plan == plan)
    }
}
