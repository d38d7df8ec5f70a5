//! Page template filling.
//!
//! A template is plain HTML carrying comment anchors of the form
//! `<!--@name-->`. Each anchor is replaced by the matching fragment; unknown
//! anchors are left untouched.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

use super::element::escape_text;

pub const PLAN_SELECTOR: &str = "plan-selector";
pub const LEGEND: &str = "legend";
pub const DISPLAY: &str = "display";
pub const DEPARTMENT: &str = "department";

/// Anchors every template must carry.
pub const REQUIRED_ANCHORS: [&str; 3] = [PLAN_SELECTOR, LEGEND, DISPLAY];

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<!--@([a-z][a-z0-9-]*)-->").expect("anchor pattern is a valid regex")
    })
}

/// Rendered fragments substituted into the template.
#[derive(Debug, Clone, Default)]
pub struct PageFragments {
    pub plan_selector: String,
    pub legend: String,
    pub display: String,
    /// Raw department name; escaped on substitution.
    pub department: String,
}

/// Names of all anchors present, in order of first appearance.
pub fn anchors(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    anchor_pattern()
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Substitute the fragments into `template`.
///
/// Fails with [`Error::TemplateAnchor`] naming the first required anchor that
/// is missing.
pub fn fill(template: &str, fragments: &PageFragments) -> Result<String> {
    let present = anchors(template);
    if let Some(missing) = REQUIRED_ANCHORS
        .iter()
        .find(|required| !present.iter().any(|name| name == *required))
    {
        return Err(Error::TemplateAnchor {
            anchor: missing.to_string(),
        });
    }

    let department = escape_text(fragments.department.trim());
    let filled = anchor_pattern().replace_all(template, |caps: &Captures<'_>| {
        match &caps[1] {
            PLAN_SELECTOR => fragments.plan_selector.clone(),
            LEGEND => fragments.legend.clone(),
            DISPLAY => fragments.display.clone(),
            DEPARTMENT => department.clone(),
            _ => caps[0].to_string(),
        }
    });
    Ok(filled.into_owned())
}

#[cfg(test)]
#[path = "../../tests/rust/test_markup_template.rs"]
mod tests;
