//! Serialized shape of the profile AST.

#![cfg(feature = "serde")]

use settings_profile_sql::{
    Field, FlatProfileElement, FormatSettings, FormatSql, ProfileElement, ProfileElements,
    ProfileReference, SettingConstraint, Writability,
};

#[test]
fn test_list_serializes_as_array() {
    let list = ProfileElements::new()
        .push(SettingConstraint::new("readonly").value(1u64).writability(Writability::Const))
        .push(ProfileReference::new("default"));

    let json = serde_json::to_value(&list).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["Constraint"]["writability"], "Const");
    assert_eq!(json[1]["Reference"]["name"], "default");

    let back: ProfileElements = serde_json::from_value(json).unwrap();
    assert_eq!(back, list);
}

#[test]
fn test_flat_element_fields_default() {
    let flat: FlatProfileElement =
        serde_json::from_str(r#"{"setting_name": "max_threads", "max_value": {"UInt64": 8}}"#)
            .unwrap();
    let element = ProfileElement::from(flat);
    assert_eq!(
        element,
        ProfileElement::from(SettingConstraint::new("max_threads").max(Field::UInt64(8)))
    );
    assert_eq!(
        element.to_sql_string(FormatSettings::default()),
        "max_threads MAX 8"
    );
}
