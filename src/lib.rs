//! plan-visualizer: curriculum spreadsheets to an interactive program
//! sequence web page.
//!
//! Pipeline:
//!   loader      workbooks → Curriculum
//!   lines       requisites → LineRegistry (petgraph)
//!   categories  occurrences → CategoryPartition, legend
//!   script      ControllerModel → controller.js, registry → index.js
//!   markup      fragments → index.html (template anchors)
//!   style       legend → category.css
//!   site        generate() / build_site()

pub mod categories;
pub mod config;
pub mod error;
pub mod ident;
pub mod lines;
pub mod loader;
pub mod markup;
pub mod model;
pub mod script;
pub mod site;
pub mod style;

pub use config::GenerateConfig;
pub use error::{Error, ErrorKind, Result};
pub use model::{CategoryEntry, Course, Curriculum, Plan, Requisite, Term};
pub use site::{build_site, generate, Site};
