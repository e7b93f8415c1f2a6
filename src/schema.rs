use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema compile error: {0}")]
    Compile(String),
}

/// Compile a JSON Schema (draft 2020-12) into a reusable validator.
pub fn compile(schema: &Value) -> Result<Validator, SchemaError> {
    validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))
}

/// Report the first schema violation for an instance, or `None` if valid.
///
/// The returned detail names the offending field: required-property errors
/// already carry the property name, other errors are suffixed with the
/// instance path (e.g. `(at /chart_type)`).
pub fn first_violation(validator: &Validator, instance: &Value) -> Option<String> {
    match validator.validate(instance) {
        Ok(()) => None,
        Err(err) => {
            let path = err.instance_path().to_string();
            if path.is_empty() {
                Some(err.to_string())
            } else {
                Some(format!("{err} (at {path})"))
            }
        }
    }
}
