//! Flexible date ingestion
//!
//! Statement sources encode timestamps two ways: an ISO-like string, or a
//! positional `[year, month(1-based), day, hour, minute, second]` array (the
//! backend wire form for local datetimes). Both are normalized to
//! `NaiveDateTime` here, at the boundary; nothing downstream sees the raw
//! shapes. Anything unparseable normalizes to `None` so the dedup matcher
//! fails closed and the committer falls back to "now".

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Local wall-clock "now", used when a candidate carries no date
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse an ISO-like or Indian-statement date string
///
/// Accepted: `2025-08-14T09:30:00` (optional fractional seconds, optional
/// trailing `Z`, space instead of `T`), `2025-08-14T09:30`, `2025-08-14`,
/// and `14/08/2025` / `14-08-2025` (optionally with `HH:MM`). Date-only
/// forms resolve to midnight.
pub fn parse_flexible_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('Z');
    if s.is_empty() {
        return None;
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d/%m/%Y %H:%M",
        "%d-%m-%Y %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Resolve a positional `[year, month, day, hour, minute, second]` array
///
/// At least year/month/day are required; missing time components default to
/// zero, elements past the sixth (sub-second precision) are ignored. Out of
/// range components make the date unresolvable rather than wrapping.
pub fn parse_parts(parts: &[i64]) -> Option<NaiveDateTime> {
    if parts.len() < 3 {
        return None;
    }
    let get = |i: usize| -> i64 { parts.get(i).copied().unwrap_or(0) };

    let year = i32::try_from(parts[0]).ok()?;
    let month = u32::try_from(parts[1]).ok()?;
    let day = u32::try_from(parts[2]).ok()?;
    let hour = u32::try_from(get(3)).ok()?;
    let minute = u32::try_from(get(4)).ok()?;
    let second = u32::try_from(get(5)).ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

/// Resolve either accepted encoding out of a raw JSON value
pub fn from_json_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_flexible_str(s),
        Value::Array(items) => {
            let parts: Option<Vec<i64>> = items.iter().map(Value::as_i64).collect();
            parse_parts(&parts?)
        }
        _ => None,
    }
}

/// Serde deserializer for optional flexible date fields
///
/// Absent, null, malformed, and wrong-typed values all come back as `None`;
/// a bad date never fails the surrounding document.
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(from_json_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_iso_strings() {
        assert_eq!(
            parse_flexible_str("2025-08-14T09:30:00"),
            Some(dt(2025, 8, 14, 9, 30, 0))
        );
        assert_eq!(
            parse_flexible_str("2025-08-14 09:30:00"),
            Some(dt(2025, 8, 14, 9, 30, 0))
        );
        assert_eq!(
            parse_flexible_str("2025-08-14"),
            Some(dt(2025, 8, 14, 0, 0, 0))
        );
    }

    #[test]
    fn test_fractional_seconds_and_zulu_suffix() {
        let parsed = parse_flexible_str("2025-08-14T09:30:00.123Z").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "09:30:00");
    }

    #[test]
    fn test_statement_day_first_strings() {
        assert_eq!(
            parse_flexible_str("14/08/2025"),
            Some(dt(2025, 8, 14, 0, 0, 0))
        );
        assert_eq!(
            parse_flexible_str("14-08-2025 18:05"),
            Some(dt(2025, 8, 14, 18, 5, 0))
        );
    }

    #[test]
    fn test_unparseable_strings() {
        assert_eq!(parse_flexible_str(""), None);
        assert_eq!(parse_flexible_str("yesterday"), None);
        assert_eq!(parse_flexible_str("2025-13-01"), None);
    }

    #[test]
    fn test_parts() {
        assert_eq!(
            parse_parts(&[2025, 8, 14, 9, 30, 0]),
            Some(dt(2025, 8, 14, 9, 30, 0))
        );
        // Time components default to midnight
        assert_eq!(parse_parts(&[2025, 8, 14]), Some(dt(2025, 8, 14, 0, 0, 0)));
        // Sub-second element is ignored
        assert_eq!(
            parse_parts(&[2025, 8, 14, 9, 30, 0, 123456789]),
            Some(dt(2025, 8, 14, 9, 30, 0))
        );
    }

    #[test]
    fn test_invalid_parts_fail_closed() {
        assert_eq!(parse_parts(&[2025, 8]), None);
        assert_eq!(parse_parts(&[2025, 13, 1]), None);
        assert_eq!(parse_parts(&[2025, 2, 30]), None);
        assert_eq!(parse_parts(&[2025, 8, 14, 25, 0, 0]), None);
        assert_eq!(parse_parts(&[2025, -3, 14]), None);
    }

    #[test]
    fn test_from_json_value() {
        let s: Value = serde_json::json!("2025-08-14T09:30:00");
        assert_eq!(from_json_value(&s), Some(dt(2025, 8, 14, 9, 30, 0)));

        let arr: Value = serde_json::json!([2025, 8, 14, 9, 30, 0]);
        assert_eq!(from_json_value(&arr), Some(dt(2025, 8, 14, 9, 30, 0)));

        let junk: Value = serde_json::json!({"year": 2025});
        assert_eq!(from_json_value(&junk), None);

        let num: Value = serde_json::json!(1755163800);
        assert_eq!(from_json_value(&num), None);
    }

    #[test]
    fn test_deserialize_flexible_never_fails_document() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_flexible")]
            date: Option<NaiveDateTime>,
        }

        let row: Row = serde_json::from_str(r#"{"date": "2025-08-14"}"#).unwrap();
        assert!(row.date.is_some());

        let row: Row = serde_json::from_str(r#"{"date": [2025, 8, 14, 1, 2, 3]}"#).unwrap();
        assert_eq!(row.date, Some(dt(2025, 8, 14, 1, 2, 3)));

        let row: Row = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert!(row.date.is_none());

        let row: Row = serde_json::from_str(r#"{"date": {"bogus": true}}"#).unwrap();
        assert!(row.date.is_none());

        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert!(row.date.is_none());
    }
}
