//! Property tests over structurally generated element lists.
//!
//! Inputs are fixed byte strings decoded through `arbitrary`, the same path
//! the `format_properties` fuzz harness takes.

#![cfg(feature = "testing")]

use arbitrary::{Arbitrary, Unstructured};
use settings_profile_sql::testing::{
    assert_element_properties, assert_list_properties, strip_highlight, test_format_properties,
};
use settings_profile_sql::{
    FlatProfileElement, FormatSettings, FormatSql, ProfileElement, ProfileElements,
    ProfileReference, SettingConstraint, Writability,
};

/// Deterministic pseudo-random bytes (xorshift), enough to drive `Unstructured`.
fn seeded_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state.to_le_bytes()[0]
        })
        .collect()
}

#[test]
fn test_generated_lists() {
    for seed in 0..256 {
        test_format_properties(&seeded_bytes(seed, 512));
    }
}

#[test]
fn test_generated_elements() {
    for seed in 1000..1256 {
        let data = seeded_bytes(seed, 128);
        let mut u = Unstructured::new(&data);
        if let Ok(element) = ProfileElement::arbitrary(&mut u) {
            assert_element_properties(&element);
        }
    }
}

#[test]
fn test_generated_flat_elements_lower_by_precedence() {
    for seed in 2000..2256 {
        let data = seeded_bytes(seed, 256);
        let mut u = Unstructured::new(&data);
        let Ok(flat) = FlatProfileElement::arbitrary(&mut u) else {
            continue;
        };
        let has_parent = !flat.parent_profile.is_empty();
        let element = ProfileElement::from(flat);
        assert_eq!(
            matches!(element, ProfileElement::Reference(_)),
            has_parent,
            "{element:?}"
        );
        assert_element_properties(&element);
    }
}

#[test]
fn test_degenerate_inputs() {
    test_format_properties(&[]);
    test_format_properties(&[0]);
    test_format_properties(&[0xff; 64]);
}

#[test]
fn test_handwritten_list() {
    let list = ProfileElements::new()
        .push(SettingConstraint::new("").value(1u64))
        .push(
            SettingConstraint::new("max_execution_time")
                .min(1u64)
                .max(600u64)
                .writability(Writability::ChangeableInReadonly),
        )
        .push(ProfileReference::by_id("x'y").inherit());
    assert_list_properties(&list);
}

#[test]
fn test_strip_highlight() {
    let list = ProfileElements::new().push(SettingConstraint::new("readonly").min(0u64));
    assert_eq!(
        strip_highlight(&list.to_sql_string(FormatSettings::highlighted())),
        "readonly MIN 0"
    );
}
