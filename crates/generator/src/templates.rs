//! Template loading and management

use cloudops_generator_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Name the operation template is registered under
pub const OPERATION_TEMPLATE: &str = "operation.cs";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("csharp_string", csharp_string_filter);

    tera.add_raw_template(
        OPERATION_TEMPLATE,
        include_str!("../templates/operation.cs.tera"),
    )
    .map_err(|e| {
        GeneratorError::Generation(format!("Failed to load operation.cs template: {}", e))
    })?;

    Ok(tera)
}

/// Filter to escape a value for use inside a C# string literal
fn csharp_string_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("csharp_string filter expects a string"))?;

    Ok(Value::String(escape_csharp_string(s)))
}

fn escape_csharp_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' | '\r' | '\t' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}
