use super::*;
use crate::categories::{legend_entries, CategoryPartition};
use crate::markup::render_all;
use crate::model::{CategoryEntry, Course};

fn traditional() -> Plan {
    let mut math101 = Course::new("MATH 101", "Math")
        .with_description("Calculus II")
        .prerequisite("MATH 100");
    math101.accreditation = vec![AccreditationUnit {
        label: "Math".into(),
        value: 42.5,
    }];
    Plan::new(
        "Traditional",
        vec![
            Term::new(
                "Fall Term 1",
                vec![
                    Course::new("MATH 100", "Math").with_description("Calculus I & limits"),
                    Course::new("Complementary Elective", "Complementary Elective"),
                ],
            ),
            Term::new(
                "Winter Term 1",
                vec![
                    math101,
                    Course::new("Program/Technical Elective", "Program/Technical Elective"),
                    Course::new("ITS Elective", "ITS Elective"),
                    Course::new("ENGG 160", ""),
                ],
            ),
        ],
    )
}

#[test]
fn test_plan_selector_radio_label_break() {
    let plans = vec![traditional(), Plan::new("Co-op Plan 1", vec![])];
    let nodes = plan_selector(&plans);
    assert_eq!(nodes.len(), 6);
    assert_eq!(nodes[0].tag, "input");
    assert_eq!(nodes[0].get_attr("value"), Some("traditional"));
    assert_eq!(nodes[0].get_attr("id"), Some("traditionalradio"));
    assert_eq!(nodes[0].get_attr("name"), Some("planselector"));
    assert_eq!(nodes[0].get_attr("ng-model"), Some("selectedPlan"));
    assert_eq!(nodes[4].get_attr("for"), Some("coopplan1radio"));
    assert_eq!(nodes[5].tag, "br");
    let html = render_all(&nodes, 0);
    assert!(html.contains("<label for=\"coopplan1radio\">Co-op Plan 1</label>"));
    assert!(!html.contains("</br>"));
    assert!(!html.contains("</input>"));
}

#[test]
fn test_selector_and_display_ids_are_distinct() {
    let plans = vec![traditional(), Plan::new("Co-op Plan 1", vec![])];
    let html = format!(
        "{}{}",
        render_all(&plan_selector(&plans), 0),
        display(&plans).render(0)
    );
    let mut seen = std::collections::HashSet::new();
    for chunk in html.split(" id=\"").skip(1) {
        let id = &chunk[..chunk.find('"').unwrap()];
        assert!(seen.insert(id), "duplicate id {id}");
    }
    assert!(seen.contains("traditional"));
    assert!(seen.contains("traditionalradio"));
}

#[test]
fn test_digit_leading_course_is_called_through_the_map() {
    let plan = Plan::new(
        "Traditional",
        vec![Term::new("Fall Term 1", vec![Course::new("3D Modelling", "1st Year Core")])],
    );
    let html = display(&[plan]).render(0);
    assert!(html.contains("class=\"course tooltip 1styearcore\" id=\"3dmodellingtraditional\""));
    assert!(html.contains("ng-click=\"courseListeners['3dmodellingtraditional']()\""));
}

#[test]
fn test_display_plan_div() {
    let plans = vec![traditional()];
    let root = display(&plans);
    assert_eq!(root.get_attr("ng-switch"), Some("selectedPlan"));
    let html = root.render(0);
    assert!(html.contains(
        "<div id=\"traditional\" ng-switch-when=\"traditional\" style=\"width: 480px\">"
    ));
    assert_eq!(html.matches("class=\"term\"").count(), 2);
    assert!(html.contains("<h3 class=\"termheader\">Fall Term 1</h3>"));
    assert_eq!(html.matches("class=\"coursecontainer\"").count(), 6);
}

#[test]
fn test_course_box_wiring() {
    let html = display(&[traditional()]).render(0);
    assert!(html.contains(
        "<div class=\"course tooltip math\" id=\"math100traditional\" ng-click=\"courseListeners['math100traditional']()\">"
    ));
    assert!(html.contains("<h3 class=\"embed\">MATH 100</h3>"));
    assert!(html.contains("<p class=\"tooltiptext\">Calculus I &amp; limits</p>"));
}

#[test]
fn test_elective_box_variants() {
    let html = display(&[traditional()]).render(0);
    assert!(html.contains(
        "class=\"course tooltip COMP compelective\" id=\"complementaryelectivetraditional0\""
    ));
    assert!(html.contains(
        "class=\"course tooltip PROG progelective\" id=\"programtechnicalelectivetraditional0\""
    ));
    assert!(html.contains("class=\"course tooltip ITS\" id=\"itselectivetraditional0\""));
}

#[test]
fn test_uncategorized_course_class() {
    let html = display(&[traditional()]).render(0);
    assert!(html.contains("class=\"course tooltip uncategorized\" id=\"engg160traditional\""));
}

#[test]
fn test_tooltip_lists_accreditation_units() {
    let html = display(&[traditional()]).render(0);
    assert!(html.contains("<span>Calculus II</span>"));
    assert!(html.contains("<span class=\"au\">Math: 42.5</span>"));
}

#[test]
fn test_markup_ids_match_placement_walk() {
    let plan = traditional();
    let html = display(std::slice::from_ref(&plan)).render(0);
    for p in place(&plan) {
        assert!(
            html.contains(&format!("ng-click=\"{}\"", listener_call(COURSE_LISTENERS, &p.element_id))),
            "{}",
            p.element_id
        );
    }
}

#[test]
fn test_legend_buttons() {
    let plans = vec![traditional()];
    let partition = CategoryPartition::build(&plans);
    let table = vec![CategoryEntry::new("Math", "#ffcc00")];
    let buttons = legend(&legend_entries(&table, &partition));
    let ids: Vec<_> = buttons.iter().map(|b| b.get_attr("id").unwrap()).collect();
    assert_eq!(ids, vec!["math", "COMP", "PROG", "ITS"]);
    let html = buttons[1].render(0);
    assert_eq!(
        html,
        "<button id=\"COMP\" class=\"legendbutton COMP\" ng-click=\"categoryListeners['COMP']()\">Complementary Elective</button>\n"
    );
}

#[test]
fn test_empty_plan_renders_empty_div() {
    let html = display(&[Plan::new("Empty", vec![])]).render(0);
    assert!(html.contains("<div id=\"empty\" ng-switch-when=\"empty\" style=\"width: 60px\"></div>"));
}
