use fieldcheck::{Schema, SchemaError};
use pretty_assertions::assert_eq;
use serde_json::json;

const USER_SCHEMA: &str = r#"[
    { "name": "Name",     "kind": "string",  "rules": "required" },
    { "name": "Age",      "kind": "integer", "rules": "required,min=18,max=99" },
    { "name": "Email",    "kind": "string",  "rules": "required,email" },
    { "name": "Password", "kind": "string",  "rules": "required,minLen=8,maxLen=20" }
]"#;

fn schema() -> Schema {
    Schema::from_json_str(USER_SCHEMA).unwrap()
}

#[test]
fn json_record_with_missing_name() {
    let report = schema()
        .validate_json(&json!({
            "Name": "",
            "Age": 24,
            "Email": "x@y.com",
            "Password": "123456789",
        }))
        .unwrap();

    assert_eq!(serde_json::to_value(&report).unwrap(), json!({ "Name": "Field is required" }));
}

#[test]
fn json_record_with_several_failures() {
    let report = schema()
        .validate_json(&json!({
            "Name": "Handy",
            "Age": 5,
            "Email": "bad",
            "Password": "short",
        }))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "Age": "Value should be greater than or equal to 18",
            "Email": "Invalid email format",
            "Password": "Length should be at least 8 characters",
        })
    );
}

#[test]
fn absent_members_fall_back_to_zero_values() {
    let report = schema().validate_json(&json!({})).unwrap();
    assert_eq!(report.get("Name"), Some("Field is required"));
    assert_eq!(report.get("Age"), Some("Value should be greater than or equal to 18"));
    assert_eq!(report.len(), 4);
}

#[test]
fn wrong_member_type_is_a_binding_error() {
    let err = schema()
        .validate_json(&json!({ "Name": 7, "Age": 24 }))
        .unwrap_err();
    assert!(matches!(err, SchemaError::TypeMismatch { ref field, .. } if field == "Name"));
}

#[test]
fn schema_round_trips_through_json() {
    let original = schema();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded = Schema::from_json_str(&encoded).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(
        serde_json::to_value(&original).unwrap()[1],
        json!({ "name": "Age", "kind": "integer", "rules": "required,min=18,max=99" })
    );
}
