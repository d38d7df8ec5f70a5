//! Page fragments: plan selector, legend and the plan display.
//!
//! Element ids come from [`place`], the same walk the line resolver and the
//! controller builder use, so markup and behaviour code agree.

use crate::categories::LegendEntry;
use crate::ident::{
    listener_call, normalize, place, Placement, CATEGORY_LISTENERS, COURSE_LISTENERS,
};
use crate::model::{AccreditationUnit, Plan, Term};

use super::element::Element;

/// Horizontal space per term column, in pixels.
const TERM_WIDTH: usize = 210;
const PLAN_PADDING: usize = 60;

// ── Plan selector ────────────────────────────────────────────────────────────

/// Element id of a plan's radio input. The bare plan id belongs to its display div.
pub fn radio_id(plan_id: &str) -> String {
    format!("{plan_id}radio")
}

/// One radio input, label and line break per plan.
pub fn plan_selector(plans: &[Plan]) -> Vec<Element> {
    let mut nodes = Vec::with_capacity(plans.len() * 3);
    for plan in plans {
        let id = normalize(&plan.name);
        let radio = radio_id(&id);
        nodes.push(
            Element::new("input")
                .attr("type", "radio")
                .attr("name", "planselector")
                .attr("ng-model", "selectedPlan")
                .attr("value", id)
                .attr("id", radio.clone()),
        );
        nodes.push(Element::new("label").attr("for", radio).text(plan.name.trim()));
        nodes.push(Element::new("br"));
    }
    nodes
}

// ── Legend ───────────────────────────────────────────────────────────────────

pub fn legend(entries: &[LegendEntry]) -> Vec<Element> {
    entries.iter().map(legend_button).collect()
}

fn legend_button(entry: &LegendEntry) -> Element {
    let id = entry.button_id();
    Element::new("button")
        .attr("id", id)
        .attr("class", format!("legendbutton {id}"))
        .attr("ng-click", listener_call(CATEGORY_LISTENERS, id))
        .text(entry.label.as_str())
}

// ── Display ──────────────────────────────────────────────────────────────────

/// The `ng-switch` container holding one div per plan.
pub fn display(plans: &[Plan]) -> Element {
    let mut root = Element::new("div")
        .attr("class", "display")
        .attr("ng-switch", "selectedPlan");
    for plan in plans {
        root.push(plan_div(plan));
    }
    root
}

fn plan_div(plan: &Plan) -> Element {
    let id = normalize(&plan.name);
    let width = TERM_WIDTH * plan.term_count() + PLAN_PADDING;
    let mut div = Element::new("div")
        .attr("id", id.clone())
        .attr("ng-switch-when", id)
        .attr("style", format!("width: {width}px"));

    let placed = place(plan);
    let mut placements = placed.iter().peekable();
    for (index, term) in plan.terms.iter().enumerate() {
        let mut term_div = term_header(term);
        while let Some(p) = placements.next_if(|p| p.term == index) {
            term_div.push(
                Element::new("div")
                    .attr("class", "coursecontainer")
                    .child(course_box(p)),
            );
        }
        div.push(term_div);
    }
    div
}

fn term_header(term: &Term) -> Element {
    Element::new("div")
        .attr("class", "term")
        .child(Element::new("h3").attr("class", "termheader").text(term.name.trim()))
}

/// Box classes: `course tooltip <categoryClass>` plus the placeholder style
/// for complementary and program/technical electives.
pub fn course_classes(p: &Placement<'_>) -> String {
    let category = p.category();
    let mut classes = format!("course tooltip {}", category.button_id());
    if let Some(extra) = p.elective.and_then(|kind| kind.box_class()) {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

fn course_box(p: &Placement<'_>) -> Element {
    Element::new("div")
        .attr("class", course_classes(p))
        .attr("id", p.element_id.clone())
        .attr("ng-click", listener_call(COURSE_LISTENERS, &p.element_id))
        .child(Element::new("h3").attr("class", "embed").text(p.course.name.trim()))
        .child(tooltip(&p.course.description, &p.course.accreditation))
}

fn tooltip(description: &str, units: &[AccreditationUnit]) -> Element {
    let mut p = Element::new("p").attr("class", "tooltiptext");
    if units.is_empty() {
        return p.text(description);
    }
    p.push(Element::new("span").text(description));
    for unit in units {
        p.push(Element::new("br"));
        p.push(
            Element::new("span")
                .attr("class", "au")
                .text(format!("{}: {}", unit.label, unit.value)),
        );
    }
    p
}

#[cfg(test)]
#[path = "../../tests/rust/test_markup_page.rs"]
mod tests;
