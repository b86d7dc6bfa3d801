use serde_json::Value;
use std::io;

use super::{format_scalar, result_of, split_rows};

/// Write output as CSV to stdout.
///
/// Row listings (a schedule or the product catalogue) print one CSV row per
/// entry. A calculation envelope prints its schedule when it has one,
/// otherwise a two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(out: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);

    match result_of(value) {
        Value::Array(rows) => write_rows(&mut wtr, rows)?,
        Value::Object(map) => {
            let (fields, row_sets) = split_rows(map);
            if let Some((_, rows)) = row_sets.first() {
                write_rows(&mut wtr, rows)?;
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in fields {
                    wtr.write_record([key, format_scalar(val).as_str()])?;
                }
            }
        }
        other => wtr.write_record([format_scalar(other)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            wtr.write_record([format_scalar(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;

    for row in rows.iter().filter_map(Value::as_object) {
        let record: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(format_scalar).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    Ok(())
}
