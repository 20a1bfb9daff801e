use std::collections::HashMap;

use super::error::ApiError;

/// Pull a required float out of the parsed query string.
///
/// Rust's float grammar admits `NaN` and `inf` spellings; such values pass
/// through to the formulas untouched.
pub fn require_f64(params: &HashMap<String, String>, name: &str) -> Result<f64, ApiError> {
    let raw = params.get(name).ok_or_else(|| {
        ApiError::BadRequest(format!("missing required parameter '{}'", name))
    })?;
    raw.parse::<f64>().map_err(|_| {
        ApiError::BadRequest(format!("parameter '{}' is not a valid number: '{}'", name, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_plain_and_scientific_notation() {
        let params = query(&[("distance", "2.5"), ("sourcePower", "1.5e3")]);
        assert_eq!(require_f64(&params, "distance").unwrap(), 2.5);
        assert_eq!(require_f64(&params, "sourcePower").unwrap(), 1500.0);
    }

    #[test]
    fn nan_spelling_is_accepted() {
        let params = query(&[("distance", "NaN")]);
        assert!(require_f64(&params, "distance").unwrap().is_nan());
    }

    #[test]
    fn missing_parameter_is_rejected() {
        let err = require_f64(&HashMap::new(), "distance").unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert!(msg.contains("distance")),
            _ => panic!("expected BadRequest"),
        }
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let params = query(&[("distance", "close")]);
        let err = require_f64(&params, "distance").unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert!(msg.contains("close")),
            _ => panic!("expected BadRequest"),
        }
    }
}
