//! Generation pipeline: curriculum in, page and scripts out.
//!
//! [`generate`] is pure. It takes loaded data and the template text and
//! returns every output in memory. [`build_site`] wraps it with input
//! validation, loading and the ordered writes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::categories::{legend_entries, CategoryPartition};
use crate::config::GenerateConfig;
use crate::error::{Error, Result};
use crate::ident::place;
use crate::lines::{resolve_all, LineRegistry};
use crate::loader::load_curriculum;
use crate::markup::{self, PageFragments};
use crate::model::{Curriculum, Plan};
use crate::script::{build_controller, render_lines, AngularRenderer, ScriptRenderer};
use crate::style::render_category_css;

pub const CONTROLLER_JS: &str = "js/controller.js";
pub const LINES_JS: &str = "js/index.js";
pub const CATEGORY_CSS: &str = "styles/category.css";
pub const INDEX_HTML: &str = "index.html";

/// Everything one run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub index_html: String,
    pub controller_js: String,
    pub lines_js: String,
    pub category_css: String,
}

impl Site {
    /// Output files in write order; the page comes last.
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (CONTROLLER_JS, &self.controller_js),
            (LINES_JS, &self.lines_js),
            (CATEGORY_CSS, &self.category_css),
            (INDEX_HTML, &self.index_html),
        ]
    }
}

// ── Generation ───────────────────────────────────────────────────────────────

/// Produce the whole site for `curriculum`, filling `template`.
pub fn generate(curriculum: &Curriculum, template: &str) -> Result<Site> {
    let plans = &curriculum.plans;

    info!("Resolving course lines...");
    warn_duplicate_occurrences(plans);
    let registry = resolve_all(plans);
    report_diagnostics(&registry);

    info!("Partitioning categories...");
    let partition = CategoryPartition::build(plans);
    let legend = legend_entries(&curriculum.categories, &partition);

    info!("Writing category CSS...");
    let category_css = render_category_css(&legend);

    info!("Generating controller script...");
    let model = build_controller(plans, &registry, &partition, &legend);
    let controller_js = AngularRenderer.render(&model);
    let lines_js = render_lines(&registry);

    info!("Placing course diagram...");
    let fragments = PageFragments {
        plan_selector: markup::render_all(&markup::plan_selector(plans), 0),
        legend: markup::render_all(&markup::legend(&legend), 0),
        display: markup::display(plans).render(0),
        department: curriculum.department.clone(),
    };
    let index_html = markup::fill(template, &fragments)?;

    Ok(Site {
        index_html,
        controller_js,
        lines_js,
        category_css,
    })
}

fn warn_duplicate_occurrences(plans: &[Plan]) {
    for plan in plans {
        let mut seen = HashSet::new();
        for placement in place(plan) {
            if !seen.insert(placement.element_id.clone()) {
                warn!(
                    "plan '{}' lists '{}' more than once; its boxes share one id",
                    plan.name, placement.course.name
                );
            }
        }
    }
}

fn report_diagnostics(registry: &LineRegistry) {
    for id in registry.self_references() {
        if let Some(line) = registry.line(id) {
            warn!("course '{}' lists itself as a requisite", line.source);
        }
    }
    if registry.has_prerequisite_cycle() {
        warn!("prerequisite chain contains a cycle");
    }
}

// ── Build ────────────────────────────────────────────────────────────────────

fn require_file(what: &'static str, path: &Path, hint: &'static str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingResource {
            what,
            path: path.to_path_buf(),
            hint,
        })
    }
}

/// Check every input before anything is read or written.
pub fn validate(config: &GenerateConfig) -> Result<()> {
    require_file(
        "page template",
        &config.template,
        "place template.html in the working directory or pass --template",
    )?;
    require_file("course workbook", &config.courses, "check the --courses path")?;
    require_file("category workbook", &config.categories, "check the --categories path")?;
    require_file("sequence workbook", &config.sequences, "check the --sequences path")?;
    if let Some(path) = &config.accreditation {
        require_file("accreditation workbook", path, "check the --accreditation path")?;
    }
    if !config.output_dir.is_dir() {
        return Err(Error::MissingResource {
            what: "output directory",
            path: config.output_dir.clone(),
            hint: "create it before generating",
        });
    }
    Ok(())
}

fn write_file(root: &Path, relative: &str, contents: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    let io = |source| Error::Io {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io)?;
    }
    fs::write(&path, contents).map_err(io)?;
    Ok(path)
}

/// Validate, load, generate and write one site under `config.output_dir`.
pub fn build_site(config: &GenerateConfig) -> Result<Site> {
    validate(config)?;
    let template = fs::read_to_string(&config.template).map_err(|source| Error::Io {
        path: config.template.clone(),
        source,
    })?;
    let curriculum = load_curriculum(config)?;
    let site = generate(&curriculum, &template)?;

    for (relative, contents) in site.files() {
        let path = write_file(&config.output_dir, relative, contents)?;
        info!("Wrote {}", path.display());
    }
    Ok(site)
}

#[cfg(test)]
#[path = "../tests/rust/test_site.rs"]
mod tests;
