//! Page markup: the node tree, the generated fragments and template filling.

pub mod element;
pub mod page;
pub mod template;

pub use element::{escape_attr, escape_text, render_all, Element, Node};
pub use page::{course_classes, display, legend, plan_selector, radio_id};
pub use template::{anchors, fill, PageFragments, REQUIRED_ANCHORS};
