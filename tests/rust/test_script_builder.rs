use std::collections::{HashMap, HashSet};

use super::*;
use crate::categories::legend_entries;
use crate::lines::{resolve_all, LineId};
use crate::model::{CategoryEntry, Course, Term};

fn fixture() -> Vec<Plan> {
    vec![
        Plan::new(
            "Traditional",
            vec![
                Term::new(
                    "Fall Term 1",
                    vec![
                        Course::new("MATH 100", "Math"),
                        Course::new("CHEM 103", "Natural Sciences"),
                        Course::new("Complementary Elective", "Complementary Elective"),
                    ],
                ),
                Term::new(
                    "Winter Term 1",
                    vec![
                        Course::new("MATH 101", "Math").prerequisite("MATH 100"),
                        Course::new("CHEM 105", "Natural Sciences")
                            .prerequisite("CHEM 103")
                            .corequisite("MATH 101"),
                        Course::new("Complementary Elective", "Complementary Elective"),
                    ],
                ),
            ],
        ),
        Plan::new(
            "Co-op Plan 1",
            vec![
                Term::new(
                    "Fall Term 1",
                    vec![
                        Course::new("MATH 100", "Math"),
                        Course::new("Complementary Elective", "Complementary Elective"),
                    ],
                ),
                Term::new(
                    "Winter Term 1",
                    vec![Course::new("MATH 101", "Math").prerequisite("MATH 100")],
                ),
            ],
        ),
        Plan::new("Empty", vec![]),
    ]
}

fn table() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new("Math", "#ffcc00"),
        CategoryEntry::new("Natural Sciences", "#00ccff"),
        CategoryEntry::new("Complementary Elective", "#cccccc"),
        CategoryEntry::new("Engineering Design", "#ff0000"),
    ]
}

fn build(plans: &[Plan]) -> (ControllerModel, LineRegistry) {
    let registry = resolve_all(plans);
    let partition = CategoryPartition::build(plans);
    let legend = legend_entries(&table(), &partition);
    let model = build_controller(plans, &registry, &partition, &legend);
    (model, registry)
}

// ── Model shape ───────────────────────────────────────────────────────────

#[test]
fn test_plan_states() {
    let (model, _) = build(&fixture());
    assert_eq!(model.default_plan, "traditional");
    let ids: Vec<&str> = model.plans.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["traditional", "coopplan1", "empty"]);
    let trad = model.plan("traditional").unwrap();
    assert_eq!((trad.term_count, trad.max_courses), (2, 3));
    assert_eq!(trad.legend_buttons, vec!["math", "naturalsciences", "COMP"]);
    let coop = model.plan("coopplan1").unwrap();
    assert_eq!(coop.legend_buttons, vec!["math", "COMP"]);
}

#[test]
fn test_empty_plan_still_has_state() {
    let (model, _) = build(&fixture());
    let empty = model.plan("empty").unwrap();
    assert_eq!((empty.term_count, empty.max_courses), (0, 0));
    assert!(empty.legend_buttons.is_empty());
    assert!(model.listeners.iter().all(|l| l.plan != "empty"));
}

#[test]
fn test_one_listener_per_occurrence_matching_registry() {
    let plans = fixture();
    let (model, registry) = build(&plans);
    let occurrences: usize = plans.iter().map(|p| p.courses().count()).sum();
    assert_eq!(model.listeners.len(), occurrences);
    for listener in &model.listeners {
        let expected = registry.lines_of(&listener.element_id).unwrap_or(&[]);
        assert_eq!(listener.lines.as_slice(), expected, "{}", listener.element_id);
    }
    let math100 = model.listener("math100traditional").unwrap();
    assert_eq!(math100.lines, vec![0]);
    let math101 = model.listener("math101traditional").unwrap();
    assert_eq!(math101.lines, vec![0, 2]);
}

#[test]
fn test_every_legend_entry_gets_a_switch() {
    let (model, _) = build(&fixture());
    let ids: Vec<&str> = model.categories.iter().map(|c| c.button_id.as_str()).collect();
    assert_eq!(ids, vec!["math", "naturalsciences", "COMP", "engineeringdesign"]);
    assert!(model.category("engineeringdesign").unwrap().highlights.is_empty());
}

#[test]
fn test_regular_course_targets() {
    let (model, _) = build(&fixture());
    let math = model.category("math").unwrap();
    let trad = math.highlight("traditional").unwrap();
    assert_eq!(
        trad.targets,
        vec![
            HighlightTarget::Course {
                element_id: "math100traditional".into(),
                class: "math".into()
            },
            HighlightTarget::Course {
                element_id: "math101traditional".into(),
                class: "math".into()
            },
        ]
    );
}

#[test]
fn test_electives_collapse_per_plan_with_distinct_counts() {
    let (model, _) = build(&fixture());
    let comp = model.category("COMP").unwrap();
    assert_eq!(
        comp.highlight("traditional").unwrap().targets,
        vec![HighlightTarget::Electives {
            class: "COMP".into(),
            element_ids: vec![
                "complementaryelectivetraditional0".into(),
                "complementaryelectivetraditional1".into()
            ],
        }]
    );
    assert_eq!(
        comp.highlight("coopplan1").unwrap().targets,
        vec![HighlightTarget::Electives {
            class: "COMP".into(),
            element_ids: vec!["complementaryelectivecoopplan10".into()],
        }]
    );
}

// ── Client simulation ─────────────────────────────────────────────────────
//
// Mirrors what the serialized controller does, driven by the same model.

struct Client<'m> {
    model: &'m ControllerModel,
    /// Element ids rendered for each plan (the ng-switch body).
    dom: HashMap<String, Vec<String>>,
    selected: String,
    lines: HashMap<String, Vec<(LineId, u32)>>,
    visible: HashSet<LineId>,
    clicked: HashMap<String, Vec<String>>,
    course_flags: HashMap<String, bool>,
    category_flags: HashMap<(String, String), bool>,
    highlighted: HashSet<String>,
}

impl<'m> Client<'m> {
    fn new(model: &'m ControllerModel) -> Self {
        let mut dom: HashMap<String, Vec<String>> = HashMap::new();
        for l in &model.listeners {
            dom.entry(l.plan.clone()).or_default().push(l.element_id.clone());
        }
        Self {
            model,
            dom,
            selected: model.default_plan.clone(),
            lines: HashMap::new(),
            visible: HashSet::new(),
            clicked: HashMap::new(),
            course_flags: HashMap::new(),
            category_flags: HashMap::new(),
            highlighted: HashSet::new(),
        }
    }

    fn in_dom(&self, id: &str) -> bool {
        self.dom
            .get(&self.selected)
            .is_some_and(|ids| ids.iter().any(|i| i == id))
    }

    fn add_line(&mut self, line: LineId) {
        let list = self.lines.entry(self.selected.clone()).or_default();
        match list.iter_mut().find(|(l, _)| *l == line) {
            Some((_, count)) => *count += 1,
            None => {
                self.visible.insert(line);
                list.push((line, 1));
            }
        }
    }

    fn remove_line(&mut self, line: LineId) {
        let list = self.lines.entry(self.selected.clone()).or_default();
        if let Some(index) = list.iter().position(|(l, _)| *l == line) {
            list[index].1 -= 1;
            if list[index].1 == 0 {
                self.visible.remove(&line);
                list.remove(index);
            }
        }
    }

    fn click_course(&mut self, id: &str) {
        let listener = self.model.listener(id).unwrap().clone();
        let flag = self.course_flags.entry(id.to_string()).or_default();
        let activate = !*flag;
        *flag = activate;
        for line in listener.lines {
            if activate {
                self.add_line(line);
            } else {
                self.remove_line(line);
            }
        }
    }

    fn click_category(&mut self, button: &str) {
        let key = (button.to_string(), self.selected.clone());
        let flag = self.category_flags.entry(key).or_default();
        let activate = !*flag;
        *flag = activate;
        let Some(highlight) = self
            .model
            .category(button)
            .and_then(|c| c.highlight(&self.selected))
        else {
            return;
        };
        for target in highlight.targets.clone() {
            let ids = match target {
                HighlightTarget::Course { element_id, .. } => vec![element_id],
                HighlightTarget::Electives { element_ids, .. } => element_ids,
            };
            for id in ids {
                let clicked = self.clicked.entry(self.selected.clone()).or_default();
                if activate {
                    if !clicked.contains(&id) {
                        clicked.push(id.clone());
                    }
                    if self.in_dom(&id) {
                        self.highlighted.insert(id);
                    }
                } else {
                    clicked.retain(|c| *c != id);
                    self.highlighted.remove(&id);
                }
            }
        }
    }

    fn select_plan(&mut self, plan: &str) {
        // disable(previous)
        for (line, _) in self.lines.get(&self.selected).cloned().unwrap_or_default() {
            self.visible.remove(&line);
        }
        // ng-switch swaps the DOM: fresh boxes, no highlight classes.
        self.highlighted.clear();
        self.selected = plan.to_string();
        // enable(plan)
        for (line, _) in self.lines.get(plan).cloned().unwrap_or_default() {
            self.visible.insert(line);
        }
        for id in self.clicked.get(plan).cloned().unwrap_or_default() {
            if self.in_dom(&id) {
                self.highlighted.insert(id);
            }
        }
    }

    fn expected_visible(&self) -> HashSet<LineId> {
        self.model
            .listeners
            .iter()
            .filter(|l| l.plan == self.selected)
            .filter(|l| self.course_flags.get(&l.element_id).copied().unwrap_or(false))
            .flat_map(|l| l.lines.iter().copied())
            .collect()
    }
}

#[test]
fn test_shared_line_hidden_only_after_last_release() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    // Line 0 joins MATH 100 and MATH 101.
    client.add_line(0);
    client.add_line(0);
    client.remove_line(0);
    assert!(client.visible.contains(&0));
    client.remove_line(0);
    assert!(!client.visible.contains(&0));
}

#[test]
fn test_shared_line_through_course_clicks() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    client.click_course("math100traditional");
    client.click_course("math101traditional");
    assert!(client.visible.contains(&0));
    client.click_course("math100traditional");
    assert!(client.visible.contains(&0), "still held by MATH 101");
    client.click_course("math101traditional");
    assert!(client.visible.is_empty());
}

#[test]
fn test_visible_lines_equal_union_of_active_courses() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    let clicks = [
        "chem105traditional",
        "math101traditional",
        "math100traditional",
        "chem105traditional",
        "chem103traditional",
        "math101traditional",
    ];
    for id in clicks {
        client.click_course(id);
        assert_eq!(client.visible, client.expected_visible(), "after {id}");
    }
}

#[test]
fn test_plan_switch_hides_and_restores_lines() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    client.click_course("math101traditional");
    let before = client.visible.clone();
    assert!(!before.is_empty());
    client.select_plan("coopplan1");
    assert!(client.visible.is_empty());
    client.select_plan("traditional");
    assert_eq!(client.visible, before);
}

#[test]
fn test_category_highlight_survives_plan_round_trip() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    client.click_category("math");
    client.click_category("COMP");
    let before = client.highlighted.clone();
    let expected: HashSet<String> = [
        "math100traditional",
        "math101traditional",
        "complementaryelectivetraditional0",
        "complementaryelectivetraditional1",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(before, expected);

    client.select_plan("coopplan1");
    assert!(client.highlighted.is_empty());
    client.select_plan("traditional");
    assert_eq!(client.highlighted, before);
}

#[test]
fn test_elective_highlight_isolated_between_plans() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    client.click_category("COMP");
    client.select_plan("coopplan1");
    client.click_category("COMP");
    assert_eq!(
        client.highlighted,
        HashSet::from(["complementaryelectivecoopplan10".to_string()])
    );
    client.click_category("COMP");
    assert!(client.highlighted.is_empty());
    client.select_plan("traditional");
    assert_eq!(client.highlighted.len(), 2);
}

#[test]
fn test_category_toggle_off_clears_highlights() {
    let (model, _) = build(&fixture());
    let mut client = Client::new(&model);
    client.click_category("naturalsciences");
    assert_eq!(client.highlighted.len(), 2);
    client.click_category("naturalsciences");
    assert!(client.highlighted.is_empty());
    assert!(client.clicked["traditional"].is_empty());
}
