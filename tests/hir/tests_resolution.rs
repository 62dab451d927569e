//! Resolution behaviour on small hand-written models.

use classref::hir::{LoadError, NameKind};
use classref::{ClassDecl, LoadOptions, Model, SourceModel};
use rstest::rstest;

use crate::helpers::model_helpers::load_ok;
use crate::helpers::source_fixtures::{PERSON_MODEL, SELF_CYCLE};

fn load_ast(source: SourceModel) -> Result<Model, LoadError> {
    Model::from_ast(source, &LoadOptions::default())
}

#[test]
fn test_self_cycle_lands_on_attribute() {
    let model = load_ok(SELF_CYCLE);
    let r = model.class_at(0).unwrap().ref_at(0).unwrap();
    assert_eq!(r.target().to_string(), "X.a");
    assert_eq!(r.target().ty().name(), "X");
    assert_eq!(r.matched_path().len(), 4);
}

#[test]
fn test_long_path_through_two_cycle() {
    let path = vec!["next"; 1001].join(".");
    let source = SourceModel::new()
        .with_class(ClassDecl::new("Even").with_attribute("next", "Odd").with_ref(path))
        .with_class(ClassDecl::new("Odd").with_attribute("next", "Even"));
    let model = load_ast(source).unwrap();
    let target = model.class_at(0).unwrap().ref_at(0).unwrap().target();
    // 1000 steps from Even lands back on Even
    assert_eq!(target.to_string(), "Even.next");
}

#[test]
fn test_chained_navigation() {
    let model = load_ok(PERSON_MODEL);
    let name = model
        .class_at(0)
        .and_then(|c| c.ref_at(0))
        .map(|r| r.target().owner().name().to_string());
    assert_eq!(name.as_deref(), Some("Address"));

    let friend = model.class_by_name("Person").unwrap().ref_at(2).unwrap();
    assert_eq!(friend.target().ty(), friend.owner());
}

#[test]
fn test_empty_model() {
    let model = load_ast(SourceModel::new()).unwrap();
    assert_eq!(model.class_count(), 0);
    assert!(model.class_at(0).is_none());
    assert_eq!(model.stats().lookups, 0);
}

#[test]
fn test_unresolved_first_segment() {
    let source = SourceModel::new().with_class(ClassDecl::new("C").with_ref("x.y"));
    let error = load_ast(source).unwrap_err();
    assert_eq!(
        error,
        LoadError::UnresolvedPathSegment {
            class: "C".into(),
            ref_index: 0,
            path: "x.y".into(),
            segment_index: 1,
            segment: "x".into(),
            searched: "C".into(),
            range: None,
        }
    );
}

#[rstest]
#[case("class A { x: B { ref x.y } } class B { }", 2, "B")]
#[case("class A { x: B { ref x.x } } class B { y: A }", 2, "B")]
#[case("class A { x: B { ref x.y.z } } class B { y: B }", 3, "B")]
#[case("class A { x: A { ref x.x.q } }", 3, "A")]
fn test_unresolved_segment_index(#[case] text: &str, #[case] index: usize, #[case] searched: &str) {
    let error = classref::load_str(text, &LoadOptions::default()).unwrap_err();
    let Some(LoadError::UnresolvedPathSegment {
        segment_index,
        searched: found,
        ..
    }) = error.load_error()
    else {
        panic!("expected UnresolvedPathSegment, got {error}");
    };
    assert_eq!(*segment_index, index);
    assert_eq!(found, searched);
}

#[test]
fn test_unresolved_type() {
    let error = load_ast(
        SourceModel::new().with_class(ClassDecl::new("A").with_attribute("x", "Nowhere")),
    )
    .unwrap_err();
    assert_eq!(error.code(), "UnresolvedTypeReference");
    assert_eq!(error.to_string(), "attribute 'A.x' has unknown type 'Nowhere'");
}

#[test]
fn test_duplicates_are_rejected() {
    let classes = SourceModel::new()
        .with_class(ClassDecl::new("A"))
        .with_class(ClassDecl::new("A"));
    assert!(matches!(
        load_ast(classes),
        Err(LoadError::DuplicateClassName { .. })
    ));

    let attrs = SourceModel::new().with_class(
        ClassDecl::new("A")
            .with_attribute("x", "A")
            .with_attribute("x", "A"),
    );
    assert!(matches!(
        load_ast(attrs),
        Err(LoadError::DuplicateAttributeName { .. })
    ));
}

#[rstest]
#[case(ClassDecl::new("1A"), NameKind::Class)]
#[case(ClassDecl::new("A").with_attribute("", "A"), NameKind::Attribute)]
#[case(ClassDecl::new("A").with_attribute("a", "A-B"), NameKind::Type)]
fn test_invalid_identifiers(#[case] class: ClassDecl, #[case] expected: NameKind) {
    let error = load_ast(SourceModel::new().with_class(class)).unwrap_err();
    assert!(
        matches!(error, LoadError::InvalidIdentifier { kind, .. } if kind == expected),
        "{error:?}"
    );
}

#[rstest]
#[case("a..b", 2)]
#[case(".a", 1)]
#[case("a.", 2)]
#[case("a.b c", 2)]
fn test_malformed_paths(#[case] path: &str, #[case] index: usize) {
    let source = SourceModel::new().with_class(
        ClassDecl::new("A")
            .with_attribute("a", "A")
            .with_attribute("b", "A")
            .with_ref(path),
    );
    let error = load_ast(source).unwrap_err();
    assert!(
        matches!(error, LoadError::MalformedPath { segment_index, .. } if segment_index == index),
        "{error:?}"
    );
}

#[test]
fn test_first_error_wins_with_parallel_resolution() {
    let mut source = SourceModel::new();
    for i in 0..200 {
        let class = ClassDecl::new(format!("C{i}")).with_attribute("me", format!("C{i}"));
        let class = if i % 50 == 7 { class.with_ref("me.nope") } else { class.with_ref("me.me") };
        source.push_class(class);
    }
    for _ in 0..5 {
        let error = Model::from_ast(source.clone(), &LoadOptions::default()).unwrap_err();
        assert!(
            matches!(error, LoadError::UnresolvedPathSegment { ref class, .. } if class == "C7"),
            "{error:?}"
        );
    }
}
