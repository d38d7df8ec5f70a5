//! Category stylesheet (`styles/category.css`).
//!
//! One rule per legend category for its course-box class, and one for the
//! `-highlighted` variant the controller swaps in on category toggle.

use crate::categories::LegendEntry;

pub const DEFAULT_COLOR: &str = "#ffffff";

/// Normalize a table colour: trim, add the leading `#` if missing, fall back
/// to white when blank.
pub fn css_color(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        DEFAULT_COLOR.to_string()
    } else if raw.starts_with('#') {
        raw.to_string()
    } else {
        format!("#{raw}")
    }
}

/// Class selector for `class`.
///
/// A leading digit is not a valid identifier start in CSS, so it is written
/// as a hex escape (`1st` becomes `\31 st`).
pub fn class_selector(class: &str) -> String {
    let mut chars = class.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => {
            format!(".\\{:x} {}", u32::from(first), chars.as_str())
        }
        _ => format!(".{class}"),
    }
}

pub fn render_category_css(legend: &[LegendEntry]) -> String {
    let mut out = String::new();
    for entry in legend {
        let class = class_selector(entry.button_id());
        let color = css_color(&entry.color);
        out.push_str(&format!("{class} {{\n    background-color: {color};\n}}\n\n"));
        out.push_str(&format!(
            "{class}-highlighted {{\n    background-color: {color};\n    border: 3px solid #000000;\n    box-shadow: 0 0 8px {color};\n}}\n\n"
        ));
    }
    out
}

#[cfg(test)]
#[path = "../tests/rust/test_style.rs"]
mod tests;
