//! Civil date/time/zone → absolute UTC instant.
//!
//! Conversion always uses the zone's rules in force at the given civil
//! instant, so historical offsets and DST transitions resolve correctly.
//! Local times that fall in a transition gap or overlap are rejected
//! rather than silently shifted.

use chrono::{LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::error::{CivilField, TimeError};
use crate::moment::BirthMoment;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Return the trimmed value of a required civil field.
///
/// `None`, empty and whitespace-only inputs all count as missing.
pub fn require_present(value: Option<&str>, field: CivilField) -> Result<&str, TimeError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TimeError::MissingField(field)),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM:SS` or `HH:MM` clock time.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s_trim = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s_trim, fmt).ok())
        .ok_or_else(|| TimeError::InvalidTime(s.to_string()))
}

/// Look up an IANA zone identifier in the compiled tz database.
pub fn parse_zone(s: &str) -> Result<Tz, TimeError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(s.to_string()))
}

/// Resolve raw civil inputs into a [`BirthMoment`].
///
/// Missing fields are reported before any parsing, date before time.
pub fn resolve(
    date: Option<&str>,
    time: Option<&str>,
    zone: &str,
) -> Result<BirthMoment, TimeError> {
    let date = require_present(date, CivilField::Date)?;
    let time = require_present(time, CivilField::Time)?;

    let date = parse_date(date)?;
    let time = parse_time(time)?;
    let tz = parse_zone(zone)?;

    resolve_civil(date, time, tz)
}

/// Resolve already-parsed civil values into a [`BirthMoment`].
pub fn resolve_civil(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<BirthMoment, TimeError> {
    let local = NaiveDateTime::new(date, time);
    let utc = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(_, _) => {
            return Err(TimeError::AmbiguousLocalTime {
                local,
                zone: tz.name().to_string(),
            });
        }
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime {
                local,
                zone: tz.name().to_string(),
            });
        }
    };

    let moment = BirthMoment::from_utc(utc);
    debug!(local:% = local, zone = tz.name(), utc:% = moment; "resolved civil time");
    Ok(moment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paris_summer_time() {
        let m = resolve(Some("1990-06-15"), Some("14:30"), "Europe/Paris").unwrap();
        assert_eq!(m.to_string(), "1990-06-15T12:30:00Z");
    }

    #[test]
    fn paris_winter_time() {
        let m = resolve(Some("1990-01-15"), Some("14:30:00"), "Europe/Paris").unwrap();
        assert_eq!(m.to_string(), "1990-01-15T13:30:00Z");
    }

    #[test]
    fn seconds_are_kept() {
        let m = resolve(Some("2000-01-01"), Some("12:00:45"), "UTC").unwrap();
        assert_eq!(m.to_string(), "2000-01-01T12:00:45Z");
    }

    #[test]
    fn missing_date_reported_first() {
        let err = resolve(None, None, "Europe/Paris").unwrap_err();
        assert_eq!(err, TimeError::MissingField(CivilField::Date));
    }

    #[test]
    fn blank_time_is_missing() {
        let err = resolve(Some("1990-06-15"), Some("   "), "Europe/Paris").unwrap_err();
        assert_eq!(err, TimeError::MissingField(CivilField::Time));
    }

    #[test]
    fn missing_checked_before_zone() {
        let err = resolve(Some("1990-06-15"), None, "Not/AZone").unwrap_err();
        assert_eq!(err, TimeError::MissingField(CivilField::Time));
    }

    #[test]
    fn invalid_date() {
        let err = resolve(Some("1990-02-30"), Some("12:00"), "UTC").unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate(_)), "{err:?}");
    }

    #[test]
    fn invalid_time() {
        let err = resolve(Some("1990-06-15"), Some("25:00"), "UTC").unwrap_err();
        assert!(matches!(err, TimeError::InvalidTime(_)), "{err:?}");
    }

    #[test]
    fn unknown_zone() {
        let err = resolve(Some("1990-06-15"), Some("12:00"), "Mars/Olympus").unwrap_err();
        assert_eq!(err, TimeError::UnknownZone("Mars/Olympus".to_string()));
    }

    #[test]
    fn spring_forward_gap() {
        let err = resolve(Some("2021-03-28"), Some("02:30"), "Europe/Paris").unwrap_err();
        assert!(matches!(err, TimeError::NonexistentLocalTime { .. }), "{err:?}");
    }

    #[test]
    fn fall_back_overlap() {
        let err = resolve(Some("2021-10-31"), Some("02:30"), "Europe/Paris").unwrap_err();
        assert!(matches!(err, TimeError::AmbiguousLocalTime { .. }), "{err:?}");
    }

    #[test]
    fn historical_offset_is_used() {
        // New York observed EST (UTC−5) in January 1950.
        let m = resolve(Some("1950-01-10"), Some("07:00"), "America/New_York").unwrap();
        assert_eq!(m.to_string(), "1950-01-10T12:00:00Z");
    }
}
