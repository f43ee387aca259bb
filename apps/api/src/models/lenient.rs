//! Tolerant numeric deserializers for candidate fields.
//!
//! The extraction service and the review form both hand us numbers in loose
//! shapes (`3`, `3.0`, `"3"`). These helpers accept all of them but still
//! reject values that break the data contract: negatives, non-finite numbers,
//! and flags other than 0/1.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Bool(bool),
    Text(String),
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Ok(n),
        RawNumber::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
        RawNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got \"{s}\""))),
    }
}

/// Non-negative count. Fractional values are truncated.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = number(deserializer)?;
    if !n.is_finite() || n < 0.0 {
        return Err(de::Error::custom(format!(
            "expected a non-negative count, got {n}"
        )));
    }
    Ok(n.trunc().min(u32::MAX as f64) as u32)
}

/// Non-negative duration in years.
pub fn years<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let n = number(deserializer)?;
    if !n.is_finite() || n < 0.0 {
        return Err(de::Error::custom(format!(
            "expected a non-negative number of years, got {n}"
        )));
    }
    Ok(n)
}

/// Categorical flag, strictly 0 or 1.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let n = number(deserializer)?;
    if n == 0.0 {
        Ok(0)
    } else if n == 1.0 {
        Ok(1)
    } else {
        Err(de::Error::custom(format!("expected a 0/1 flag, got {n}")))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::count")]
        count: u32,
        #[serde(deserialize_with = "super::years")]
        years: f64,
        #[serde(deserialize_with = "super::flag")]
        flag: u8,
    }

    fn parse(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_integer_float_and_string_shapes() {
        let p = parse(r#"{"count": 3.0, "years": "2.5", "flag": 1}"#).unwrap();
        assert_eq!(p.count, 3);
        assert_eq!(p.years, 2.5);
        assert_eq!(p.flag, 1);
    }

    #[test]
    fn test_fractional_count_is_truncated() {
        let p = parse(r#"{"count": 4.9, "years": 0, "flag": 0}"#).unwrap();
        assert_eq!(p.count, 4);
    }

    #[test]
    fn test_bool_flag_is_accepted() {
        let p = parse(r#"{"count": 0, "years": 0, "flag": true}"#).unwrap();
        assert_eq!(p.flag, 1);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = parse(r#"{"count": -1, "years": 0, "flag": 0}"#).unwrap_err();
        assert!(err.to_string().contains("non-negative count"), "{err}");
    }

    #[test]
    fn test_negative_years_rejected() {
        assert!(parse(r#"{"count": 0, "years": -0.5, "flag": 0}"#).is_err());
    }

    #[test]
    fn test_flag_outside_zero_one_rejected() {
        let err = parse(r#"{"count": 0, "years": 0, "flag": 2}"#).unwrap_err();
        assert!(err.to_string().contains("0/1 flag"), "{err}");
    }

    #[test]
    fn test_non_numeric_text_rejected() {
        assert!(parse(r#"{"count": "many", "years": 0, "flag": 0}"#).is_err());
    }
}
