use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, Worksheet};

use super::*;
use crate::error::ErrorKind;

type Sheet<'a> = (&'a str, &'a [&'a [&'a str]]);

fn write_xlsx(path: &Path, sheets: &[Sheet<'_>]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if let Ok(number) = value.parse::<f64>() {
                    worksheet.write_number(r as u32, c as u16, number).unwrap();
                } else if !value.is_empty() {
                    worksheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.push_worksheet(worksheet);
    }
    workbook.save(path).unwrap();
}

struct Fixture {
    _dir: tempfile::TempDir,
    config: GenerateConfig,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let at = |name: &str| -> PathBuf { dir.path().join(name) };
    write_xlsx(
        &at("courses.xlsx"),
        &[(
            "Courses",
            &[
                &["Course", "Description", "Prerequisites", "Corequisites", "Category"],
                &["MATH 100", "Calculus I", "", "", ""],
                &["MATH 101", "Calculus II", "MATH 100", "", ""],
            ],
        )],
    );
    write_xlsx(
        &at("categories.xlsx"),
        &[(
            "Categories",
            &[&["Category", "Color", "Courses"], &["Math", "ffcc00", "MATH 100, MATH 101"]],
        )],
    );
    write_xlsx(
        &at("sequences.xlsx"),
        &[
            (
                "Traditional",
                &[&["Fall Term 1", "Winter Term 1"], &["MATH 100", "MATH 101"]],
            ),
            ("Co-op Plan 1", &[&["Fall Term 1"], &["MATH 100"]]),
        ],
    );
    write_xlsx(
        &at("au.xlsx"),
        &[("AU", &[&["Course", "Math"], &["MATH 101", "42"]])],
    );
    let config = GenerateConfig {
        courses: at("courses.xlsx"),
        categories: at("categories.xlsx"),
        sequences: at("sequences.xlsx"),
        accreditation: Some(at("au.xlsx")),
        department: "Electrical Engineering".into(),
        template: at("template.html"),
        output_dir: at("output"),
    };
    Fixture { _dir: dir, config }
}

#[test]
fn test_cell_text() {
    assert_eq!(cell_text(&Data::Float(42.0)), "42");
    assert_eq!(cell_text(&Data::Float(30.5)), "30.5");
    assert_eq!(cell_text(&Data::Int(7)), "7");
    assert_eq!(cell_text(&Data::String("MATH 100".into())), "MATH 100");
    assert_eq!(cell_text(&Data::Empty), "");
}

#[test]
fn test_read_workbook_keeps_sheet_order() {
    let f = fixture();
    let sheets = read_workbook(&f.config.sequences).unwrap();
    let names: Vec<&str> = sheets.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Traditional", "Co-op Plan 1"]);
    assert_eq!(sheets[0].1[1], vec!["MATH 100".to_string(), "MATH 101".to_string()]);
}

#[test]
fn test_load_curriculum() {
    let f = fixture();
    let curriculum = load_curriculum(&f.config).unwrap();
    assert_eq!(curriculum.department, "Electrical Engineering");
    assert_eq!(curriculum.plans.len(), 2);
    assert_eq!(curriculum.categories[0].name, "Math");
    let math101 = &curriculum.plans[0].terms[1].courses[0];
    assert_eq!(math101.category, "Math");
    assert_eq!(math101.prerequisites.len(), 1);
    assert_eq!(math101.accreditation[0].value, 42.0);
}

#[test]
fn test_unreadable_workbook_is_malformed_input() {
    let f = fixture();
    std::fs::write(&f.config.courses, b"not a workbook").unwrap();
    let err = load_curriculum(&f.config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_schema_mismatch_names_sheet() {
    let f = fixture();
    write_xlsx(&f.config.courses, &[("Sheet1", &[&["Title"], &["x"]])]);
    match load_curriculum(&f.config).unwrap_err() {
        Error::MalformedSheet { sheet, reason, .. } => {
            assert_eq!(sheet, "Sheet1");
            assert!(reason.contains("course"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}
