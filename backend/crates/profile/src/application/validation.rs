//! Input Validation
//!
//! Collects field-level errors before any store access. The error shape
//! (`value`, `msg`, `param`, `location`) is what existing clients render.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ProfileError, ProfileResult};

/// One rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(param: &str, value: Option<&str>, msg: impl Into<String>) -> Self {
        Self {
            value: value.map(Value::from),
            msg: msg.into(),
            param: param.to_owned(),
            location: "body",
        }
    }
}

/// Accumulates field errors; `finish` turns them into one `ProfileError`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `msg` when `value` is absent or blank. Returns whether it passed.
    pub fn require(&mut self, param: &str, value: Option<&str>, msg: &str) -> bool {
        if is_blank(value) {
            self.errors.push(FieldError::body(param, value, msg));
            return false;
        }
        true
    }

    /// Record `msg` unconditionally, for checks done outside the validator.
    pub fn reject(&mut self, param: &str, value: Option<&str>, msg: &str) {
        self.errors.push(FieldError::body(param, value, msg));
    }

    /// Parse an optional date; record `msg` when present but unparseable.
    pub fn date(&mut self, param: &str, value: Option<&str>, msg: &str) -> Option<DateTime<Utc>> {
        let raw = value.filter(|v| !v.trim().is_empty())?;
        let parsed = parse_date(raw);
        if parsed.is_none() {
            self.errors.push(FieldError::body(param, Some(raw), msg));
        }
        parsed
    }

    pub fn finish(self) -> ProfileResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::Validation(self.errors))
        }
    }
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_collects_every_missing_field() {
        let mut v = Validator::new();
        assert!(!v.require("status", None, "status is required"));
        assert!(!v.require("skills", Some("  "), "skills is required"));
        assert!(v.require("company", Some("Acme"), "Company is required"));

        match v.finish() {
            Err(ProfileError::Validation(errors)) => {
                let params: Vec<_> = errors.iter().map(|e| e.param.as_str()).collect();
                assert_eq!(params, ["status", "skills"]);
                assert_eq!(errors[0].msg, "status is required");
                assert_eq!(errors[0].location, "body");
                assert!(errors[0].value.is_none());
                assert_eq!(errors[1].value, Some(Value::from("  ")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("2020-03-01").unwrap();
        assert_eq!(day.to_rfc3339(), "2020-03-01T00:00:00+00:00");

        let ts = parse_date("2020-03-01T12:30:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2020-03-01T10:30:00+00:00");

        assert!(parse_date("March 2020").is_none());
    }

    #[test]
    fn test_date_records_invalid_but_not_absent() {
        let mut v = Validator::new();
        assert!(v.date("to", None, "To Date is invalid").is_none());
        assert!(v.date("to", Some(""), "To Date is invalid").is_none());
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        assert!(v.date("to", Some("soon"), "To Date is invalid").is_none());
        assert!(v.finish().is_err());
    }
}
