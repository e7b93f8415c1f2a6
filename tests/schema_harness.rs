use chart_mcp_server::schema::{compile, first_violation};
use serde_json::json;

#[test]
fn json_schema_harness_reports_violations() {
    let schema = json!({
        "type": "object",
        "required": ["chart_type", "data"],
        "properties": {
            "chart_type": {
                "type": "string",
                "enum": ["line", "bar"]
            },
            "data": { "type": "array" }
        }
    });

    let validator = compile(&schema).expect("schema must compile");

    assert!(
        first_violation(&validator, &json!({"chart_type": "bar", "data": []})).is_none(),
        "valid instance must pass"
    );

    let missing = first_violation(&validator, &json!({"data": []}))
        .expect("missing required property must be reported");
    assert!(missing.contains("chart_type"), "violation: {missing}");

    let mismatch = first_violation(&validator, &json!({"chart_type": "bar", "data": 7}))
        .expect("type mismatch must be reported");
    assert!(mismatch.contains("data"), "violation: {mismatch}");
}

#[test]
fn json_schema_harness_rejects_malformed_schema() {
    let schema = json!({ "type": "not-a-type" });
    assert!(compile(&schema).is_err(), "bogus type keyword must not compile");
}
