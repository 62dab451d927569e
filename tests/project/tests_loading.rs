//! Loading models from text and files.

use std::path::PathBuf;

use classref::base::LineCol;
use classref::hir::LoadError;
use classref::project::{MODEL_EXT, load_files};
use classref::{LoadOptions, ProjectError, load_file, load_str};

use crate::helpers::source_fixtures::{PERSON_MODEL, big_model_source};

#[test]
fn test_load_big_model_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("big.{MODEL_EXT}"));
    std::fs::write(&path, big_model_source(50)).unwrap();

    let model = load_file(&path, &LoadOptions::default()).unwrap();
    assert_eq!(model.class_count(), 50);
    let r = model.class_by_name("A0").unwrap().ref_at(3).unwrap();
    assert_eq!(r.target().ty().name(), "A47");
}

#[test]
fn test_syntax_error_reports_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.cref");
    std::fs::write(&path, "class A {\n  a: A\n  b A\n}\n").unwrap();

    let error = load_file(&path, &LoadOptions::default()).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("broken.cref"), "{message}");
    assert!(message.contains("3:5: expected ':'"), "{message}");
}

#[test]
fn test_duplicate_class_position_is_second_occurrence() {
    let text = "class A { }\nclass B { }\nclass A { }\n";
    let error = load_str(text, &LoadOptions::default()).unwrap_err();
    let ProjectError::Load { position, error, .. } = error else {
        panic!("expected load error, got {error}");
    };
    assert_eq!(position, Some(LineCol { line: 2, col: 6 }));
    assert!(matches!(error, LoadError::DuplicateClassName { .. }));
}

#[test]
fn test_load_many_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = (1..=8)
        .map(|n| {
            let path = dir.path().join(format!("m{n}.cref"));
            std::fs::write(&path, big_model_source(n)).unwrap();
            path
        })
        .collect();

    let results = load_files(&paths, &LoadOptions::default());
    assert_eq!(results.len(), 8);
    for ((path, result), n) in results.iter().zip(1..) {
        assert_eq!(path, &paths[n - 1]);
        assert_eq!(result.as_ref().unwrap().class_count(), n);
    }
}

#[test]
fn test_person_model() {
    let model = load_str(PERSON_MODEL, &LoadOptions::sequential()).unwrap();
    let city = model.class_by_name("City").unwrap();
    assert_eq!(city.attributes().len(), 0);
    assert_eq!(city.refs().len(), 0);
    assert!(city.range().is_some());
}
