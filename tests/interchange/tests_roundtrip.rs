//! Export, import and re-resolve through every interchange format.

use classref::interchange::{InterchangeError, Json, ModelFormat, Yaml, format_for_extension};
use classref::{LoadOptions, Model};
use rstest::rstest;

use crate::helpers::model_helpers::{BIG_MODEL_100, load_ok, matched_paths, targets};
use crate::helpers::source_fixtures::PERSON_MODEL;

fn round_trip(format: &dyn ModelFormat, model: &Model) -> Model {
    let bytes = format.write(model).unwrap();
    format.load(&bytes, &LoadOptions::default()).unwrap()
}

#[rstest]
#[case(&Json)]
#[case(&Yaml)]
fn test_big_model_round_trip(#[case] format: &dyn ModelFormat) {
    let again = round_trip(format, &BIG_MODEL_100);
    assert_eq!(targets(&again), targets(&BIG_MODEL_100));
    assert_eq!(matched_paths(&again), matched_paths(&BIG_MODEL_100));
}

#[rstest]
#[case("json")]
#[case("yaml")]
#[case("yml")]
fn test_round_trip_by_extension(#[case] ext: &str) {
    let model = load_ok(PERSON_MODEL);
    let format = format_for_extension(ext).unwrap();
    let again = round_trip(format, &model);
    assert_eq!(targets(&again), targets(&model));
}

#[test]
fn test_export_is_stable() {
    let model = load_ok(PERSON_MODEL);
    let first = Json.write(&model).unwrap();
    let second = Json.write(&round_trip(&Json, &model)).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case(&Json)]
#[case(&Yaml)]
fn test_read_then_resolve_matches_load(#[case] format: &dyn ModelFormat) {
    let bytes = format.write(&BIG_MODEL_100).unwrap();
    let source = format.read(&bytes).unwrap();
    let again = Model::from_ast(source, &LoadOptions::sequential()).unwrap();
    assert_eq!(targets(&again), targets(&BIG_MODEL_100));
}

#[test]
fn test_load_rejects_edited_ref_pointer() {
    let model = load_ok("class A { b: B c: B { ref b.a } } class B { a: A }");
    let text = String::from_utf8(Json.write(&model).unwrap()).unwrap();
    assert!(text.contains("\"#/classes[1]/attrs[0]\""));
    let edited = text.replace("\"#/classes[1]/attrs[0]\"", "\"#/classes[0]/attrs[1]\"");

    // shape and bounds are fine, so a plain read accepts it
    assert!(Json.read(edited.as_bytes()).is_ok());
    let error = Json.load(edited.as_bytes(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(error, InterchangeError::Invalid { kind: "pointer", .. }), "{error:?}");
}
