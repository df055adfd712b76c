//! Property checks shared by the integration tests and the fuzz harness.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`strip_highlight`]: remove keyword highlight markers from formatted text
//! - [`assert_element_properties`]: check the output grammar of one element
//! - [`assert_list_properties`]: check list-level collapsing, joining and determinism
//! - [`test_format_properties`]: decode arbitrary bytes into a list and check it

use alloc::string::String;
use alloc::vec::Vec;
use arbitrary::{Arbitrary, Unstructured};

use crate::format::{FormatSettings, FormatSql, HILITE_KEYWORD, HILITE_NONE};
use crate::profile::{ProfileElement, ProfileElements};

/// Remove every highlight marker from `sql`.
#[must_use]
pub fn strip_highlight(sql: &str) -> String {
    sql.replace(HILITE_KEYWORD, "").replace(HILITE_NONE, "")
}

/// Check that highlighting only adds markers around `plain`.
///
/// Inputs that already contain an escape character are skipped, since their
/// own text could combine with a marker.
fn assert_highlight_is_cosmetic(plain: &str, highlighted: &str) {
    if plain.contains('\x1b') {
        return;
    }
    assert_eq!(
        strip_highlight(highlighted),
        plain,
        "Highlighted output differs from plain output beyond markers"
    );
}

/// Assert the output grammar of a single element.
///
/// # Panics
///
/// Panics if the formatted text breaks the element grammar, depends on
/// anything but the element, or if highlighting changes more than markers.
pub fn assert_element_properties(element: &ProfileElement) {
    let plain = element.to_sql_string(FormatSettings::default());
    assert_eq!(
        plain,
        element.to_sql_string(FormatSettings::default()),
        "Element formatting is not deterministic"
    );

    match element {
        ProfileElement::Reference(reference) if !reference.is_empty() => {
            let keyword = if reference.use_inherit_keyword {
                "INHERIT "
            } else {
                "PROFILE "
            };
            assert!(
                plain.starts_with(keyword),
                "Reference {plain:?} should start with {keyword:?}"
            );
            let target = &plain[keyword.len()..];
            if reference.id_mode {
                assert!(target.starts_with("ID('") && target.ends_with("')"));
            } else {
                assert!(target.starts_with('`') && target.ends_with('`'));
            }
        }
        ProfileElement::Reference(_) => assert_eq!(plain, "``"),
        ProfileElement::Constraint(constraint) => {
            if let Some(writability) = constraint.writability {
                let clause = alloc::format!(" {}", writability.keyword());
                assert!(
                    plain.ends_with(&clause),
                    "Constraint {plain:?} should end with {clause:?}"
                );
            }
        }
    }

    let highlighted = element.to_sql_string(FormatSettings::highlighted());
    assert_highlight_is_cosmetic(&plain, &highlighted);
}

/// Assert the list-level formatting rules.
///
/// # Panics
///
/// Panics if an all-empty list does not format as `NONE`, if a non-empty list
/// is not the `", "`-join of every element in order, or if any element fails
/// [`assert_element_properties`].
pub fn assert_list_properties(elements: &ProfileElements) {
    let plain = elements.to_sql_string(FormatSettings::default());
    assert_eq!(
        plain,
        elements.to_sql_string(FormatSettings::default()),
        "List formatting is not deterministic"
    );

    if elements.formats_as_none() {
        assert_eq!(plain, "NONE", "All-empty list should format as NONE");
    } else {
        let parts: Vec<String> = elements
            .iter()
            .map(|element| element.to_sql_string(FormatSettings::default()))
            .collect();
        assert_eq!(plain, parts.join(", "), "List should join every element");
    }

    for element in elements {
        assert_element_properties(element);
    }

    let highlighted = elements.to_sql_string(FormatSettings::highlighted());
    assert_highlight_is_cosmetic(&plain, &highlighted);
}

/// Decode `data` into a [`ProfileElements`] and check its formatting properties,
/// once as generated and once after propagating each inherit keyword choice.
///
/// Inputs that do not decode are ignored.
///
/// # Panics
///
/// Panics if any property check fails.
pub fn test_format_properties(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(mut elements) = ProfileElements::arbitrary(&mut u) else {
        return;
    };
    assert_list_properties(&elements);

    for use_inherit_keyword in [true, false] {
        elements.set_use_inherit_keyword(use_inherit_keyword);
        assert!(elements.iter().all(|element| match element {
            ProfileElement::Reference(reference) => {
                reference.use_inherit_keyword == use_inherit_keyword
            }
            ProfileElement::Constraint(_) => true,
        }));
        assert_list_properties(&elements);
    }
}
