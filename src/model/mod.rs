//! Curriculum model: courses, requisites, terms, plans, categories.

pub mod types;

pub use types::{
    AccreditationUnit, CategoryEntry, Course, Curriculum, Plan, Requisite, Term, OR_SEPARATOR,
};
