pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The payload of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Split an object into scalar fields and arrays of row objects (e.g. the
/// amortization schedule), in map order.
pub(crate) fn split_rows(map: &Map<String, Value>) -> (Vec<(&str, &Value)>, Vec<(&str, &[Value])>) {
    let mut fields = Vec::new();
    let mut row_sets = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(rows) if rows.first().is_some_and(Value::is_object) => {
                row_sets.push((key.as_str(), rows.as_slice()));
            }
            _ => fields.push((key.as_str(), val)),
        }
    }
    (fields, row_sets)
}

pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr.iter().map(format_scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_rows_separates_schedule() {
        let value = json!({
            "monthly_payment": "100",
            "amortization_schedule": [{"month": 1}, {"month": 2}],
            "term_options": [12, 24],
        });
        let (fields, rows) = split_rows(value.as_object().unwrap());
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert!(names.contains(&"monthly_payment"));
        assert!(names.contains(&"term_options"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "amortization_schedule");
        assert_eq!(rows[0].1.len(), 2);
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&json!("7029.77")), "7029.77");
        assert_eq!(format_scalar(&json!([60, 84, 120])), "60, 84, 120");
        assert_eq!(format_scalar(&Value::Null), "");
    }

    #[test]
    fn test_result_of_unwraps_envelope() {
        let value = json!({"result": {"monthly_payment": "1"}, "warnings": []});
        assert!(result_of(&value).get("monthly_payment").is_some());
        let bare = json!([1, 2]);
        assert_eq!(result_of(&bare), &bare);
    }
}
