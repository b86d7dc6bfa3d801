use serde_json::Value;

use super::{format_scalar, result_of};

/// Fields printed by `--output minimal`, in priority order.
const PRIORITY_KEYS: [&str; 4] = ["monthly_payment", "total_cost", "total_interest", "name"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result = result_of(value);

    match result {
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                    return format_scalar(val);
                }
            }
            match map.iter().next() {
                Some((key, val)) => format!("{}: {}", key, format_scalar(val)),
                None => String::new(),
            }
        }
        // Row listings: one line per row keyed by its first field
        Value::Array(rows) => rows
            .iter()
            .map(|row| match row {
                Value::Object(map) => map
                    .get("key")
                    .or_else(|| map.get("month"))
                    .or_else(|| map.get("year"))
                    .map(format_scalar)
                    .unwrap_or_default(),
                other => format_scalar(other),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => format_scalar(other),
    }
}
