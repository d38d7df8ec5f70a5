//! Client behaviour code: the controller model and its serializers.
//!
//! Two stages: `builder` derives a [`ControllerModel`] from the resolved
//! lines and category partition, then a [`ScriptRenderer`] turns it into
//! script text. `lines` renders the line-definition script straight from
//! the registry.

pub mod angular;
pub mod builder;
pub mod lines;
pub mod model;
pub mod writer;

pub use angular::AngularRenderer;
pub use builder::build_controller;
pub use lines::render_lines;
pub use model::{
    CategorySwitch, ControllerModel, CourseListener, HighlightTarget, PlanHighlight, PlanState,
};

/// Trait for controller serializers.
pub trait ScriptRenderer {
    /// Render the controller model to script source.
    fn render(&self, model: &ControllerModel) -> String;
}
