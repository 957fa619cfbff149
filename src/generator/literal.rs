//! Rendering JSON values as Rust expressions.

use serde_json::Value;

/// Renders `value` as an expression convertible into `serde_json::Value`.
///
/// Scalars become suffixed literals. Arrays and objects go through `serde_json::json!`.
pub fn render(value: &Value, crate_path: &str) -> String {
    match value {
        Value::Null => format!("{}::serde_json::Value::Null", crate_path),
        Value::Array(_) | Value::Object(_) => {
            format!("{}::serde_json::json!({})", crate_path, render_json(value))
        }
        scalar => render_json(scalar),
    }
}

/// Token form accepted inside `json!`.
fn render_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                format!("{}_i64", i)
            } else if let Some(u) = n.as_u64() {
                format!("{}_u64", u)
            } else {
                format!("{:?}_f64", n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => format!("{:?}", s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_json).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{:?}: {}", key, render_json(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}
