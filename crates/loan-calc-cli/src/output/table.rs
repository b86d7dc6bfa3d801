use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, split_rows};

/// Format output as tables using the tabled crate.
///
/// Scalar fields go into a Field/Value table; any array of rows (the
/// amortization schedule, the product catalogue) gets its own table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_envelope(result, map),
            _ => print_object(map),
        },
        Value::Array(rows) => println!("{}", rows_table(rows)),
        _ => println!("{}", value),
    }
}

fn print_envelope(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    print_object(result);

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_object(map: &Map<String, Value>) {
    let (fields, row_sets) = split_rows(map);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.to_string(), format_scalar(val)]);
    }
    println!("{}", Table::from(builder));

    for (name, rows) in row_sets {
        println!("\n{}:", name);
        println!("{}", rows_table(rows));
    }
}

fn rows_table(rows: &[Value]) -> String {
    let Some(Value::Object(first)) = rows.first() else {
        return if rows.is_empty() {
            "(empty)".to_string()
        } else {
            rows.iter().map(format_scalar).collect::<Vec<_>>().join("\n")
        };
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());

    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| row.get(h).map(format_scalar).unwrap_or_default()),
        );
    }

    Table::from(builder).to_string()
}
