//! Builds the ControllerModel from plans, resolved lines and the category partition.

use crate::categories::{CategoryPartition, LegendEntry};
use crate::ident::{normalize, place, ElectiveKind, Placement};
use crate::lines::LineRegistry;
use crate::model::Plan;

use super::model::{
    CategorySwitch, ControllerModel, CourseListener, HighlightTarget, PlanHighlight, PlanState,
};

/// Assemble the controller model.
///
/// `legend` decides which categories get a listener and switch case (all of
/// them, even those with no courses), and the order they are emitted in.
pub fn build_controller(
    plans: &[Plan],
    registry: &LineRegistry,
    partition: &CategoryPartition<'_>,
    legend: &[LegendEntry],
) -> ControllerModel {
    let default_plan = plans.first().map(|p| normalize(&p.name)).unwrap_or_default();

    let plan_states = plans
        .iter()
        .map(|plan| {
            let id = normalize(&plan.name);
            let legend_buttons = legend
                .iter()
                .filter(|entry| partition.plans_of(&entry.key).contains(&id.as_str()))
                .map(|entry| entry.button_id().to_string())
                .collect();
            PlanState {
                id,
                term_count: plan.term_count(),
                max_courses: plan.max_courses_per_term(),
                legend_buttons,
            }
        })
        .collect();

    let categories = legend
        .iter()
        .map(|entry| CategorySwitch {
            button_id: entry.button_id().to_string(),
            highlights: partition
                .plans_of(&entry.key)
                .into_iter()
                .map(|plan| PlanHighlight {
                    plan: plan.to_string(),
                    targets: highlight_targets(
                        partition.courses(&entry.key, plan),
                        entry.button_id(),
                    ),
                })
                .collect(),
        })
        .collect();

    let mut listeners = Vec::new();
    for plan in plans {
        let plan_id = normalize(&plan.name);
        for placement in place(plan) {
            let lines = registry
                .lines_of(&placement.element_id)
                .map(<[_]>::to_vec)
                .unwrap_or_default();
            listeners.push(CourseListener {
                element_id: placement.element_id,
                plan: plan_id.clone(),
                lines,
            });
        }
    }

    ControllerModel {
        default_plan,
        plans: plan_states,
        categories,
        listeners,
    }
}

/// Regular courses become one target each; elective placeholders of the same
/// kind collapse into a single class-matched target at their first position.
fn highlight_targets(placed: &[Placement<'_>], class: &str) -> Vec<HighlightTarget> {
    let mut targets: Vec<HighlightTarget> = Vec::new();
    let mut elective_slot: [Option<usize>; 3] = [None; 3];
    for p in placed {
        match p.elective {
            None => targets.push(HighlightTarget::Course {
                element_id: p.element_id.clone(),
                class: class.to_string(),
            }),
            Some(kind) => push_elective(&mut targets, &mut elective_slot, kind, p, class),
        }
    }
    targets
}

fn push_elective(
    targets: &mut Vec<HighlightTarget>,
    elective_slot: &mut [Option<usize>; 3],
    kind: ElectiveKind,
    p: &Placement<'_>,
    class: &str,
) {
    if let Some(index) = elective_slot[kind as usize] {
        if let Some(HighlightTarget::Electives { element_ids, .. }) = targets.get_mut(index) {
            element_ids.push(p.element_id.clone());
        }
        return;
    }
    elective_slot[kind as usize] = Some(targets.len());
    targets.push(HighlightTarget::Electives {
        class: class.to_string(),
        element_ids: vec![p.element_id.clone()],
    });
}

#[cfg(test)]
#[path = "../../tests/rust/test_script_builder.rs"]
mod tests;
