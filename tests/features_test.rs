//! Feature set behavior.
//!
//! Properties of `CpuFeatures` over arbitrary ids, plus the typed x86 and ARM
//! namespaces working against the same set.

use proptest::prelude::*;
use tpde_target::x64::X86Feature;
use tpde_target::{ArmFeature, CpuFeatures, FeatureNamespace, MAX_FEATURES};

fn feature_ids() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..MAX_FEATURES, 0..64)
}

proptest! {
    #[test]
    fn added_ids_are_present(ids in feature_ids()) {
        let mut features = CpuFeatures::new();
        features.add(ids.iter().copied());
        for &id in &ids {
            prop_assert!(features.has(id));
        }
    }

    #[test]
    fn removal_clears_only_the_removed_ids(ids in feature_ids(), removed in feature_ids()) {
        let mut features: CpuFeatures = ids.iter().copied().collect();
        features.remove(removed.iter().copied());
        for id in 0..MAX_FEATURES {
            let expected = ids.contains(&id) && !removed.contains(&id);
            prop_assert_eq!(features.has(id), expected);
        }
    }

    #[test]
    fn add_and_remove_are_idempotent(ids in feature_ids()) {
        let mut once = CpuFeatures::new();
        once.add(ids.iter().copied());
        let mut twice = once;
        twice.add(ids.iter().copied());
        prop_assert_eq!(once, twice);

        let mut removed = once;
        removed.remove(ids.iter().copied());
        let after_first = removed;
        removed.remove(ids.iter().copied());
        prop_assert_eq!(removed, after_first);
        prop_assert!(removed.is_empty());
        prop_assert_eq!(removed == CpuFeatures::new(), removed.is_empty());
    }

    #[test]
    fn equality_is_bitwise(a in feature_ids(), b in feature_ids()) {
        let left: CpuFeatures = a.iter().copied().collect();
        let right: CpuFeatures = b.iter().copied().collect();
        prop_assert_eq!(left == right, right == left);
        prop_assert_eq!(left == right, left.words() == right.words());
        prop_assert_eq!(left.is_empty(), left == CpuFeatures::new());
    }

    #[test]
    fn iteration_is_sorted_and_matches_len(ids in feature_ids()) {
        let features: CpuFeatures = ids.iter().copied().collect();
        let listed: Vec<u32> = features.iter().collect();

        let mut expected = ids.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(features.len(), expected.len());
        prop_assert_eq!(features.iter().len(), expected.len());
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn has_any_agrees_with_membership(ids in feature_ids(), probe in feature_ids()) {
        let features: CpuFeatures = ids.iter().copied().collect();
        let expected = probe.iter().any(|id| ids.contains(id));
        prop_assert_eq!(features.has_any(probe.iter().copied()), expected);
    }

    #[test]
    fn union_contains_both_operands(a in feature_ids(), b in feature_ids()) {
        let left: CpuFeatures = a.iter().copied().collect();
        let right: CpuFeatures = b.iter().copied().collect();
        let mut union = left;
        union.extend(right.iter());
        prop_assert!(union.has_all(&left));
        prop_assert!(union.has_all(&right));
        prop_assert!(left.has_all(&CpuFeatures::new()));
    }
}

#[test]
fn test_avx_query() {
    let mut features = CpuFeatures::new();
    features.add([X86Feature::Avx, X86Feature::Avx2]);

    assert!(features.has_any([X86Feature::Avx, X86Feature::Sse]));
    assert!(features.has_all(&[X86Feature::Avx, X86Feature::Avx2].into_iter().collect()));
    assert!(!features.has_all(&[X86Feature::Avx, X86Feature::Bmi2].into_iter().collect()));
    assert_eq!(features.names::<X86Feature>(), vec!["avx", "avx2"]);

    features.remove([X86Feature::Avx]);
    assert!(!features.has(X86Feature::Avx));
    assert!(features.has(X86Feature::Avx2));
}

#[test]
fn test_word_boundaries() {
    let mut features = CpuFeatures::new();
    features.add([0u32, 63, 64, 127, 128, 255]);
    let top = 1u64 << 63;
    assert_eq!(features.words(), &[1 | top, 1 | top, 1, top]);
    assert_eq!(features.iter().collect::<Vec<_>>(), vec![0, 63, 64, 127, 128, 255]);

    features.reset();
    assert!(features.is_empty());
    assert_eq!(features, CpuFeatures::default());
}

#[test]
fn test_namespaces_share_storage_but_not_names() {
    // The same bit means different things in different namespaces.
    let features: CpuFeatures = [ArmFeature::Asimd].into_iter().collect();
    let id = ArmFeature::Asimd as u32;
    assert!(features.has(id));
    assert_eq!(features.names::<ArmFeature>(), vec!["asimd"]);
    assert_eq!(
        features.iter_as::<X86Feature>().collect::<Vec<_>>(),
        X86Feature::from_id(id).into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_feature_names_parse_back() {
    for &feature in X86Feature::ALL.iter().skip(1) {
        assert_eq!(feature.name().parse::<X86Feature>(), Ok(feature));
    }
    for &feature in ArmFeature::ALL.iter().skip(1) {
        assert_eq!(feature.name().parse::<ArmFeature>(), Ok(feature));
    }
    assert_eq!("SSE4.1".parse::<X86Feature>(), Ok(X86Feature::Sse41));
    assert_eq!("avx512-f".parse::<X86Feature>(), Ok(X86Feature::Avx512F));
}
