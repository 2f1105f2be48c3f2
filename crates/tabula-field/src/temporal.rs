//! Timestamp, date and time-of-day columns.
//!
//! Text input follows the MySQL wire formats: `YYYY-MM-DD`,
//! `YYYY-MM-DD HH:MM:SS` with up to six fractional digits, and
//! `HH:MM:SS[.ffffff]`. Timestamps additionally accept RFC 3339. An
//! all-zero date string is the SQL "zero date" and coerces to null.
//! Values are truncated to microsecond precision, the resolution the
//! storage layer keeps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

const ZERO_DATETIME: &str = "0000-00-00 00:00:00.000000";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATETIME_T_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

fn truncate_nanos(nanos: u32) -> u32 {
    nanos / 1_000 * 1_000
}

fn truncate_time(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(truncate_nanos(t.nanosecond()))
        .unwrap_or(t)
}

fn truncate_datetime(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(truncate_nanos(ts.nanosecond()))
        .unwrap_or(ts)
}

/// Whether `s` is a prefix of the zero timestamp at a recognised length.
fn is_zero_date(s: &str) -> bool {
    matches!(s.len(), 10 | 19 | 21..=26) && ZERO_DATETIME.starts_with(s)
}

/// Parse a timestamp string. `Ok(None)` for the zero date.
pub fn parse_timestamp(s: &str) -> Result<Option<NaiveDateTime>, String> {
    if is_zero_date(s) {
        return Ok(None);
    }
    if s.len() == 10 {
        return NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(|d| Some(d.and_time(NaiveTime::MIN)))
            .map_err(|e| e.to_string());
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_T_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_utc()))
        .map(|ts| Some(truncate_datetime(ts)))
        .map_err(|_| format!("invalid timestamp string: {s}"))
}

/// Parse a `YYYY-MM-DD` date string. `Ok(None)` for the zero date.
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, String> {
    if s.len() != 10 {
        return Err(format!("invalid date string: {s}"));
    }
    if is_zero_date(s) {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Parse an `HH:MM:SS[.ffffff]` time string.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map(truncate_time)
        .map_err(|e| e.to_string())
}

fn text_of<'a>(name: &'static str, raw: &'a RawValue) -> Result<&'a str, ScanError> {
    raw.as_text().ok_or_else(|| ScanError::new(name, raw))
}

impl ColumnType for NaiveDateTime {
    const NAME: &'static str = "Timestamp";
    const NULLABLE_NAME: &'static str = "NullTimestamp";

    fn zero() -> Self {
        DateTime::UNIX_EPOCH.naive_utc()
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Timestamp(ts) => Ok(Some(truncate_datetime(*ts))),
            RawValue::Date(d) => Ok(Some(d.and_time(NaiveTime::MIN))),
            RawValue::Text(_) | RawValue::Bytes(_) => parse_timestamp(text_of(Self::NAME, raw)?)
                .map_err(|reason| ScanError::new(Self::NAME, raw).with_reason(reason)),
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Timestamp(*self)
    }
}

impl ColumnType for NaiveDate {
    const NAME: &'static str = "Date";
    const NULLABLE_NAME: &'static str = "NullDate";

    fn zero() -> Self {
        DateTime::UNIX_EPOCH.date_naive()
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Date(d) => Ok(Some(*d)),
            RawValue::Timestamp(ts) => Ok(Some(ts.date())),
            RawValue::Text(_) | RawValue::Bytes(_) => parse_date(text_of(Self::NAME, raw)?)
                .map_err(|reason| ScanError::new(Self::NAME, raw).with_reason(reason)),
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Date(*self)
    }
}

impl ColumnType for NaiveTime {
    const NAME: &'static str = "TimeOfDay";
    const NULLABLE_NAME: &'static str = "NullTimeOfDay";

    fn zero() -> Self {
        NaiveTime::MIN
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Time(t) => Ok(Some(truncate_time(*t))),
            RawValue::Timestamp(ts) => Ok(Some(truncate_time(ts.time()))),
            RawValue::Text(_) | RawValue::Bytes(_) => parse_time(text_of(Self::NAME, raw)?)
                .map(Some)
                .map_err(|reason| ScanError::new(Self::NAME, raw).with_reason(reason)),
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Time(*self)
    }
}
