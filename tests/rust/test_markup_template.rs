use super::*;

const TEMPLATE: &str = "<html><head><title><!--@department--> Plans</title></head>\n\
<body><h1><!--@department--></h1>\n\
<form><!--@plan-selector--></form>\n\
<div class=\"legend\"><!--@legend--></div>\n\
<div id=\"main\"><!--@display--></div><!--@footer--></body></html>";

fn fragments() -> PageFragments {
    PageFragments {
        plan_selector: "<input>".into(),
        legend: "<button></button>".into(),
        display: "<div class=\"display\"></div>".into(),
        department: "Electrical & Computer".into(),
    }
}

#[test]
fn test_anchor_scan_dedups_in_order() {
    assert_eq!(
        anchors(TEMPLATE),
        vec!["department", "plan-selector", "legend", "display", "footer"]
    );
}

#[test]
fn test_fill_replaces_every_known_anchor() {
    let html = fill(TEMPLATE, &fragments()).unwrap();
    assert!(html.contains("<title>Electrical &amp; Computer Plans</title>"));
    assert!(html.contains("<h1>Electrical &amp; Computer</h1>"));
    assert!(html.contains("<form><input></form>"));
    assert!(html.contains("<div class=\"legend\"><button></button></div>"));
    assert!(html.contains("<div id=\"main\"><div class=\"display\"></div></div>"));
}

#[test]
fn test_unknown_anchor_left_alone() {
    let html = fill(TEMPLATE, &fragments()).unwrap();
    assert!(html.contains("<!--@footer-->"));
}

#[test]
fn test_department_anchor_optional() {
    let template = "<!--@plan-selector--><!--@legend--><!--@display-->";
    let html = fill(template, &fragments()).unwrap();
    assert_eq!(html, "<input><button></button><div class=\"display\"></div>");
}

#[test]
fn test_missing_required_anchor() {
    let template = "<!--@plan-selector--><!--@display-->";
    match fill(template, &fragments()) {
        Err(Error::TemplateAnchor { anchor }) => assert_eq!(anchor, "legend"),
        other => panic!("expected TemplateAnchor, got {other:?}"),
    }
}

#[test]
fn test_missing_anchor_is_internal_assertion() {
    let err = fill("", &fragments()).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::InternalAssertion);
    assert!(err.to_string().contains("plan-selector"));
}

#[test]
fn test_fragment_text_not_reinterpreted() {
    let mut f = fragments();
    f.display = "$1 <!--@legend-->".into();
    let html = fill("<!--@plan-selector--><!--@legend--><!--@display-->", &f).unwrap();
    assert!(html.ends_with("$1 <!--@legend-->"));
}
