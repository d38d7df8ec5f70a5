//! AngularJS controller serializer (`js/controller.js`).
//!
//! Section order: bootstrap, plan state, disable/enable, addLine/removeLine,
//! addToClicked/removeFromClicked, category flags, category listeners,
//! highlight/unhighlight switches, legend buttons, course listeners, then
//! the controller terminator and the right-click directive.
//!
//! State and listeners live in explicit maps (`plans`, `categoryFlags`,
//! `courseFlags`, `courseListeners`, `categoryListeners`) keyed by quoted
//! ids, so an id is never spliced into a JS identifier and nothing is
//! evaluated at runtime.

use crate::ident::{CATEGORY_LISTENERS, COURSE_LISTENERS};

use super::model::{CategorySwitch, ControllerModel, CourseListener, HighlightTarget, PlanState};
use super::writer::ScriptWriter;
use super::ScriptRenderer;

const SWITCH_FALLTHROUGH: &str = "console.log(\"shouldn't be here\");";

const RIGHT_CLICK_DIRECTIVE: &str = r#"app.directive('ngRightClick', function($parse) {
    return function(scope, element, attrs) {
        var fn = $parse(attrs.ngRightClick);
        element.bind('contextmenu', function(event) {
            scope.$apply(function() {
                event.preventDefault();
                fn(scope, {$event:event});
            });
        });
    };
});
"#;

/// Renders a [`ControllerModel`] as an AngularJS `main` controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct AngularRenderer;

impl ScriptRenderer for AngularRenderer {
    fn render(&self, model: &ControllerModel) -> String {
        let mut w = ScriptWriter::new();
        write_bootstrap(&mut w, &model.default_plan);
        write_plan_state(&mut w, &model.plans);
        write_visibility(&mut w, &model.plans);
        write_line_counting(&mut w, &model.plans);
        write_clicked_tracking(&mut w, &model.plans);
        write_highlight_helpers(&mut w);
        write_category_flags(&mut w, model);
        for category in &model.categories {
            write_category_listener(&mut w, category);
        }
        write_category_switch(&mut w, "highlightCategory", &model.categories, true);
        write_category_switch(&mut w, "unhighlightCategory", &model.categories, false);
        write_legend_buttons(&mut w, &model.plans);
        w.line("this.courseFlags = {};");
        for listener in &model.listeners {
            write_course_listener(&mut w, listener);
        }
        w.line("});");
        w.raw(RIGHT_CLICK_DIRECTIVE);
        w.finish()
    }
}

// ─── Bootstrap ───────────────────────────────────────────────────────────────

fn write_bootstrap(w: &mut ScriptWriter, default_plan: &str) {
    w.line("var app = angular.module(\"main\", []);");
    w.line("app.controller(\"main\", function($scope, $timeout) {");
    w.line(format!("$scope.selectedPlan = \"{default_plan}\";"));
    w.line("var that = this;");
    w.line("this.previousPlan = $scope.selectedPlan;");
    w.line(format!("$scope.{COURSE_LISTENERS} = {{}};"));
    w.line(format!("$scope.{CATEGORY_LISTENERS} = {{}};"));
    w.open("this.render = function(plan) {");
    w.line("this.disable(this.previousPlan);");
    w.line("this.enable(plan);");
    w.line("this.previousPlan = plan;");
    w.close("};");
    // $timeout defers until the digest has swapped the ng-switch body in.
    w.open("$scope.$watch(\"selectedPlan\", function(plan, previous) {");
    w.open("$timeout(function() {");
    w.open("if (plan === previous) {");
    w.line("that.enable(plan);");
    w.close("}");
    w.open("else {");
    w.line("that.render(plan);");
    w.close("}");
    w.close("});");
    w.close("});");
}

// ─── Plan state ──────────────────────────────────────────────────────────────

fn write_plan_state(w: &mut ScriptWriter, plans: &[PlanState]) {
    w.line("this.plans = {};");
    for plan in plans {
        w.open(format!("this.plans[\"{}\"] = {{", plan.id));
        w.line("lines: [],");
        w.line("clicked: [],");
        w.line("legendBtns: [],");
        w.line("legendBtnsClicked: [],");
        w.line(format!("terms: {},", plan.term_count));
        w.line(format!("maxCourses: {}", plan.max_courses));
        w.close("};");
    }
}

/// `this.<name> = function(<param>) { switch (<subject>) { case ... } };`
/// with one braced case per plan and a logging default.
fn write_plan_switch(
    w: &mut ScriptWriter,
    name: &str,
    param: &str,
    subject: &str,
    plans: &[PlanState],
    body: impl Fn(&mut ScriptWriter),
) {
    w.open(format!("this.{name} = function({param}) {{"));
    w.open(format!("switch ({subject}) {{"));
    for plan in plans {
        w.open(format!("case \"{}\": {{", plan.id));
        w.line(format!("const state = this.plans[\"{}\"];", plan.id));
        body(w);
        w.line("break;");
        w.close("}");
    }
    w.open("default:");
    w.line(SWITCH_FALLTHROUGH);
    w.dedent();
    w.close("}");
    w.close("};");
}

// ─── disable / enable ────────────────────────────────────────────────────────

fn write_visibility(w: &mut ScriptWriter, plans: &[PlanState]) {
    write_plan_switch(w, "disable", "plan", "plan", plans, |w| {
        w.open("for (let i = 0; i < state.lines.length; i++) {");
        w.line("state.lines[i][0].hide(true);");
        w.close("}");
    });
    write_plan_switch(w, "enable", "plan", "plan", plans, |w| {
        w.open("for (let i = 0; i < state.lines.length; i++) {");
        w.line("state.lines[i][0].show(true);");
        w.close("}");
        w.line("const main = document.getElementById(\"main\");");
        w.line("main.style.width = (state.terms * 220 + 20).toString() + \"px\";");
        w.line("main.style.height = (state.maxCourses * 100 + 440).toString() + \"px\";");
        w.open("for (let i = 0; i < state.clicked.length; i++) {");
        w.line("const element = document.getElementById(state.clicked[i][0]);");
        w.open("if (element) {");
        w.line("element.classList.remove(state.clicked[i][1]);");
        w.line("element.classList.add(state.clicked[i][1] + \"-highlighted\");");
        w.close("}");
        w.close("}");
        w.open("for (let i = 0; i < state.legendBtns.length; i++) {");
        w.line("const btn = state.legendBtns[i];");
        w.open("if (!btn) {");
        w.line("continue;");
        w.close("}");
        w.open("if (state.legendBtnsClicked.indexOf(btn) != -1) {");
        w.line("btn.classList.remove(\"legendbutton\");");
        w.line("btn.classList.add(\"legendbutton-pressed\");");
        w.close("}");
        w.open("else {");
        w.line("btn.classList.remove(\"legendbutton-pressed\");");
        w.line("btn.classList.add(\"legendbutton\");");
        w.close("}");
        w.close("}");
    });
}

// ─── addLine / removeLine ────────────────────────────────────────────────────

fn write_line_counting(w: &mut ScriptWriter, plans: &[PlanState]) {
    write_plan_switch(w, "addLine", "line", "$scope.selectedPlan", plans, |w| {
        w.line("const index = state.lines.findIndex((element) => element[0] == line);");
        w.open("if (index == -1) {");
        w.line("line.show(false);");
        w.line("state.lines.push([line, 1]);");
        w.close("}");
        w.open("else {");
        w.line("state.lines[index][1]++;");
        w.close("}");
    });
    write_plan_switch(w, "removeLine", "line", "$scope.selectedPlan", plans, |w| {
        w.line("const index = state.lines.findIndex((element) => element[0] == line);");
        w.open("if (index != -1) {");
        w.line("state.lines[index][1]--;");
        w.open("if (state.lines[index][1] <= 0) {");
        w.line("line.hide(false);");
        w.line("state.lines.splice(index, 1);");
        w.close("}");
        w.close("}");
    });
}

// ─── addToClicked / removeFromClicked ────────────────────────────────────────

fn write_clicked_tracking(w: &mut ScriptWriter, plans: &[PlanState]) {
    write_plan_switch(w, "addToClicked", "element", "$scope.selectedPlan", plans, |w| {
        w.line("const index = state.clicked.findIndex((item) => item[0] == element[0]);");
        w.open("if (index == -1) {");
        w.line("state.clicked.push(element);");
        w.close("}");
    });
    write_plan_switch(w, "removeFromClicked", "element", "$scope.selectedPlan", plans, |w| {
        w.line("const index = state.clicked.findIndex((item) => item[0] == element);");
        w.open("if (index != -1) {");
        w.line("state.clicked.splice(index, 1);");
        w.close("}");
    });
}

// ─── Highlight helpers ───────────────────────────────────────────────────────

fn write_highlight_helpers(w: &mut ScriptWriter) {
    w.open("this.highlightCourse = function(id, cls) {");
    w.line("const element = document.getElementById(id);");
    w.open("if (element) {");
    w.line("element.classList.remove(cls);");
    w.line("element.classList.add(cls + \"-highlighted\");");
    w.close("}");
    w.line("this.addToClicked([id, cls]);");
    w.close("};");

    w.open("this.unhighlightCourse = function(id, cls) {");
    w.line("const element = document.getElementById(id);");
    w.open("if (element) {");
    w.line("element.classList.remove(cls + \"-highlighted\");");
    w.line("element.classList.add(cls);");
    w.close("}");
    w.line("this.removeFromClicked(id);");
    w.close("};");

    // Electives share a class; only the listed slots of the current plan are touched.
    w.open("this.highlightElectives = function(cls, ids) {");
    w.line("const elements = Array.from(document.getElementsByClassName(cls));");
    w.open("for (let i = 0; i < elements.length; i++) {");
    w.open("if (ids.indexOf(elements[i].id) != -1) {");
    w.line("elements[i].classList.remove(cls);");
    w.line("elements[i].classList.add(cls + \"-highlighted\");");
    w.line("this.addToClicked([elements[i].id, cls]);");
    w.close("}");
    w.close("}");
    w.close("};");

    w.open("this.unhighlightElectives = function(cls, ids) {");
    w.line("const elements = Array.from(document.getElementsByClassName(cls + \"-highlighted\"));");
    w.open("for (let i = 0; i < elements.length; i++) {");
    w.open("if (ids.indexOf(elements[i].id) != -1) {");
    w.line("elements[i].classList.remove(cls + \"-highlighted\");");
    w.line("elements[i].classList.add(cls);");
    w.close("}");
    w.close("}");
    w.line("ids.forEach((id) => this.removeFromClicked(id));");
    w.close("};");
}

// ─── Category flags / listeners ──────────────────────────────────────────────

fn write_category_flags(w: &mut ScriptWriter, model: &ControllerModel) {
    w.line("this.categoryFlags = {};");
    let per_plan = model
        .plans
        .iter()
        .map(|p| format!("\"{}\": false", p.id))
        .collect::<Vec<_>>()
        .join(", ");
    for category in &model.categories {
        w.line(format!(
            "this.categoryFlags[\"{}\"] = {{{per_plan}}};",
            category.button_id
        ));
    }
}

fn write_category_listener(w: &mut ScriptWriter, category: &CategorySwitch) {
    let id = &category.button_id;
    w.open(format!("$scope.{CATEGORY_LISTENERS}[\"{id}\"] = function() {{"));
    w.line("const plan = $scope.selectedPlan;");
    w.line("const state = that.plans[plan];");
    w.line(format!("const pressedbtn = document.getElementById(\"{id}\");"));
    w.open(format!("if (!that.categoryFlags[\"{id}\"][plan]) {{"));
    w.line(format!("that.highlightCategory(\"{id}\", plan);"));
    w.line("pressedbtn.classList.remove(\"legendbutton\");");
    w.line("pressedbtn.classList.add(\"legendbutton-pressed\");");
    w.line("state.legendBtnsClicked.push(pressedbtn);");
    w.line(format!("that.categoryFlags[\"{id}\"][plan] = true;"));
    w.close("}");
    w.open("else {");
    w.line(format!("that.unhighlightCategory(\"{id}\", plan);"));
    w.line("pressedbtn.classList.remove(\"legendbutton-pressed\");");
    w.line("pressedbtn.classList.add(\"legendbutton\");");
    w.line("const index = state.legendBtnsClicked.indexOf(pressedbtn);");
    w.open("if (index != -1) {");
    w.line("state.legendBtnsClicked.splice(index, 1);");
    w.close("}");
    w.line(format!("that.categoryFlags[\"{id}\"][plan] = false;"));
    w.close("}");
    w.close("};");
}

// ─── highlightCategory / unhighlightCategory ─────────────────────────────────

fn write_category_switch(
    w: &mut ScriptWriter,
    name: &str,
    categories: &[CategorySwitch],
    highlight: bool,
) {
    w.open(format!("this.{name} = function(categoryName, planName) {{"));
    w.open("switch (categoryName) {");
    for category in categories {
        w.open(format!("case \"{}\":", category.button_id));
        w.open("switch (planName) {");
        for plan in &category.highlights {
            w.open(format!("case \"{}\":", plan.plan));
            for target in &plan.targets {
                write_target(w, target, highlight);
            }
            w.line("break;");
            w.dedent();
        }
        w.open("default:");
        w.line("break;");
        w.dedent();
        w.close("}");
        w.line("break;");
        w.dedent();
    }
    w.open("default:");
    w.line(SWITCH_FALLTHROUGH);
    w.dedent();
    w.close("}");
    w.close("};");
}

fn write_target(w: &mut ScriptWriter, target: &HighlightTarget, highlight: bool) {
    match target {
        HighlightTarget::Course { element_id, class } => {
            let action = if highlight { "highlightCourse" } else { "unhighlightCourse" };
            w.line(format!("this.{action}(\"{element_id}\", \"{class}\");"));
        }
        HighlightTarget::Electives { class, element_ids } => {
            let action = if highlight {
                "highlightElectives"
            } else {
                "unhighlightElectives"
            };
            let ids = element_ids
                .iter()
                .map(|id| format!("\"{id}\""))
                .collect::<Vec<_>>()
                .join(", ");
            w.line(format!("this.{action}(\"{class}\", [{ids}]);"));
        }
    }
}

// ─── Legend buttons ──────────────────────────────────────────────────────────

fn write_legend_buttons(w: &mut ScriptWriter, plans: &[PlanState]) {
    for plan in plans {
        for button in &plan.legend_buttons {
            w.line(format!(
                "this.plans[\"{}\"].legendBtns.push(document.getElementById(\"{button}\"));",
                plan.id
            ));
        }
    }
}

// ─── Course listeners ────────────────────────────────────────────────────────

fn write_course_listener(w: &mut ScriptWriter, listener: &CourseListener) {
    let id = &listener.element_id;
    w.line(format!("this.courseFlags[\"{id}\"] = false;"));
    w.open(format!("$scope.{COURSE_LISTENERS}[\"{id}\"] = function() {{"));
    w.open(format!("if (!that.courseFlags[\"{id}\"]) {{"));
    for line in &listener.lines {
        w.line(format!("that.addLine(getLine{line}());"));
    }
    w.line(format!("that.courseFlags[\"{id}\"] = true;"));
    w.close("}");
    w.open("else {");
    for line in &listener.lines {
        w.line(format!("that.removeLine(getLine{line}());"));
    }
    w.line(format!("that.courseFlags[\"{id}\"] = false;"));
    w.close("}");
    w.close("};");
}

#[cfg(test)]
#[path = "../../tests/rust/test_script_angular.rs"]
mod tests;
