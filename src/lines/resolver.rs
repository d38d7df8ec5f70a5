//! Requisite resolution. Turns each plan's requisite expressions into lines.
//!
//! A requisite only becomes a line when the course it names is placed in the
//! same plan; anything else (a course outside the plan, an unchosen OR
//! alternative) is satisfied elsewhere and silently dropped.

use std::collections::HashSet;

use log::debug;

use super::registry::{LineId, LineKind, LineRegistry};
use crate::ident::{normalize, place, Placement};
use crate::model::{Plan, Requisite};

/// Resolve one plan's lines into `registry`. Returns the ids added, in order.
///
/// Order: placements in display order, prerequisites before corequisites,
/// expressions in listed order, OR-alternatives left to right. Elective
/// placeholders are neither dependents nor requisite targets.
pub fn resolve_plan(plan: &Plan, registry: &mut LineRegistry) -> Vec<LineId> {
    let placed = place(plan);
    resolve_placements(&plan.name, &placed, registry)
}

fn resolve_placements(
    plan_name: &str,
    placed: &[Placement<'_>],
    registry: &mut LineRegistry,
) -> Vec<LineId> {
    let plan_key = normalize(plan_name);
    let present: HashSet<String> = placed
        .iter()
        .filter(|p| p.elective.is_none())
        .map(|p| normalize(&p.course.name))
        .collect();

    let mut added = Vec::new();
    for p in placed.iter().filter(|p| p.elective.is_none()) {
        let kinds = [
            (&p.course.prerequisites, LineKind::Prerequisite),
            (&p.course.corequisites, LineKind::Corequisite),
        ];
        for (requisites, kind) in kinds {
            for requisite in requisites {
                resolve_requisite(
                    requisite,
                    kind,
                    &p.element_id,
                    &plan_key,
                    &present,
                    registry,
                    &mut added,
                );
            }
        }
    }
    debug!("plan '{}': {} lines", plan_name, added.len());
    added
}

fn resolve_requisite(
    requisite: &Requisite,
    kind: LineKind,
    dependent: &str,
    plan_key: &str,
    present: &HashSet<String>,
    registry: &mut LineRegistry,
    added: &mut Vec<LineId>,
) {
    for alternative in requisite.alternatives() {
        let key = normalize(alternative);
        if present.contains(&key) {
            let source = format!("{key}{plan_key}");
            added.push(registry.add_line(&source, dependent, kind));
        } else {
            debug!("'{}' not in plan, no line to {}", alternative, dependent);
        }
    }
}

/// Resolve every plan in order into one registry.
pub fn resolve_all(plans: &[Plan]) -> LineRegistry {
    let mut registry = LineRegistry::new();
    for plan in plans {
        resolve_plan(plan, &mut registry);
    }
    registry
}

#[cfg(test)]
#[path = "../../tests/rust/test_lines_resolver.rs"]
mod tests;
