use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped stdin into `T`.
///
/// Returns None when stdin is a terminal or the pipe is empty. A body starting
/// with `{` is parsed as JSON, anything else as YAML.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let body = raw.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let parsed = if body.starts_with('{') {
        serde_json::from_str(body).map_err(|e| format!("Invalid JSON on stdin: {e}"))?
    } else {
        serde_yaml::from_str(body).map_err(|e| format!("Invalid YAML on stdin: {e}"))?
    };
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_calc_core::LoanInputs;

    #[test]
    fn test_empty_pipe_is_none() {
        let parsed: Option<LoanInputs> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_body() {
        let parsed: Option<LoanInputs> =
            parse_piped(r#"{"loan_amount": 1000, "interest_rate": 5, "loan_term_months": 12}"#).unwrap();
        assert_eq!(parsed.unwrap().loan_term_months, 12);
    }

    #[test]
    fn test_yaml_body() {
        let parsed: Option<LoanInputs> =
            parse_piped("loanAmount: 1000\ninterestRate: 5\nloanTermMonths: 24\n").unwrap();
        assert_eq!(parsed.unwrap().loan_term_months, 24);
    }

    #[test]
    fn test_malformed_json_reports_source() {
        let err = parse_piped::<LoanInputs>("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON on stdin"));
    }
}
