//! The big model: n classes in a ring, seven refs each.

use classref::LoadOptions;
use rstest::rstest;

use crate::helpers::model_helpers::{BIG_MODEL_100, big_model, matched_paths, targets};
use crate::helpers::source_fixtures::{
    BIG_MODEL_REFS, BIG_MODEL_TARGET_OWNERS, BIG_MODEL_TARGET_TYPES, wrap,
};

#[test]
fn test_class_count() {
    assert_eq!(BIG_MODEL_100.class_count(), 100);
    assert_eq!(BIG_MODEL_100.attribute_count(), 400);
    assert_eq!(BIG_MODEL_100.ref_count(), 700);
}

#[test]
fn test_a10_first_ref() {
    let a10 = BIG_MODEL_100.class_by_name("A10").unwrap();
    let r = a10.ref_at(0).unwrap();
    assert_eq!(r.path(), "c");
    assert_eq!(r.target().name(), "c");
    assert_eq!(r.target().owner().name(), "A10");
    assert_eq!(r.target().ty().name(), "A9");
}

#[rstest]
#[case(0, "c", "A99")]
#[case(1, "a.a.a.a", "A0")]
#[case(2, "b.b.b", "A3")]
#[case(3, "c.c.c", "A97")]
fn test_class_zero_ref_types(#[case] index: usize, #[case] path: &str, #[case] ty: &str) {
    let r = BIG_MODEL_100.class_at(0).unwrap().ref_at(index).unwrap();
    assert_eq!(r.path(), path);
    assert_eq!(r.target().ty().name(), ty);
}

#[test]
fn test_first_ref_type_is_previous_class() {
    let n = BIG_MODEL_100.class_count();
    for (i, class) in BIG_MODEL_100.classes().enumerate() {
        let ty = class.ref_at(0).unwrap().target().ty();
        assert_eq!(ty.index(), (i + n - 1) % n, "class {}", class.name());
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(17)]
#[case(100)]
fn test_every_target_follows_the_ring(#[case] n: usize) {
    let model = big_model(n, &LoadOptions::default());
    for (i, class) in model.classes().enumerate() {
        for (k, r) in class.refs().enumerate() {
            assert_eq!(r.path(), BIG_MODEL_REFS[k]);
            let target = r.target();
            let last = BIG_MODEL_REFS[k].rsplit('.').next().unwrap();
            assert_eq!(target.name(), last);
            assert_eq!(target.owner().index(), wrap(i, BIG_MODEL_TARGET_OWNERS[k], n));
            assert_eq!(target.ty().index(), wrap(i, BIG_MODEL_TARGET_TYPES[k], n));
        }
    }
}

#[test]
fn test_matched_path_lengths() {
    for class in BIG_MODEL_100.classes() {
        for r in class.refs() {
            assert_eq!(r.matched_path().len(), r.segments().len());
            assert_eq!(r.matched_path().last(), Some(r.target()));
        }
    }
}

#[rstest]
#[case(LoadOptions::sequential())]
#[case(LoadOptions::sequential().with_memoize(true))]
#[case(LoadOptions::default().with_memoize(false))]
#[case(LoadOptions::default().with_cache_shards(1))]
#[case(LoadOptions::default().with_cache_shards(256))]
fn test_options_do_not_change_results(#[case] options: LoadOptions) {
    let model = big_model(100, &options);
    assert_eq!(targets(&model), targets(&BIG_MODEL_100));
    assert_eq!(matched_paths(&model), matched_paths(&BIG_MODEL_100));
}

#[test]
fn test_loads_are_deterministic() {
    let first = big_model(60, &LoadOptions::default());
    let second = big_model(60, &LoadOptions::default());
    assert_eq!(matched_paths(&first), matched_paths(&second));
}

#[test]
fn test_lookups_without_memo_equal_total_path_length() {
    let n = 100;
    let model = big_model(n, &LoadOptions::default().with_memoize(false));
    let per_class: usize = BIG_MODEL_REFS.iter().map(|p| p.split('.').count()).sum();
    let stats = model.stats();
    assert_eq!(stats.lookups, n * per_class);
    assert_eq!(stats.cache_hits, 0);
    assert_eq!(stats.cache_misses, 0);
}

#[test]
fn test_memo_lowers_lookups() {
    let n = 100;
    let total = n * BIG_MODEL_REFS.iter().map(|p| p.split('.').count()).sum::<usize>();

    let sequential = big_model(n, &LoadOptions::sequential().with_memoize(true)).stats();
    assert!(sequential.lookups < total, "{sequential:?}");
    assert!(sequential.cache_hits > 0);
    assert!(sequential.cache_entries > 0);

    let parallel = big_model(n, &LoadOptions::default()).stats();
    assert!(parallel.lookups <= total, "{parallel:?}");
}

#[test]
fn test_references_to_in_big_model() {
    // A0.c is targeted by A0's own `c` ref and by `c.c.c` from A2.
    let a0 = BIG_MODEL_100.class_at(0).unwrap();
    let c = a0.attribute("c").unwrap();
    let refs: Vec<_> = BIG_MODEL_100
        .references_to(c)
        .map(|r| format!("{}:{}", r.owner().name(), r.path()))
        .collect();
    assert_eq!(refs, vec!["A0:c", "A2:c.c.c"]);
}
