use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parses the timestamp shapes the API produces: RFC 3339 with an offset,
/// naive ISO date-times (taken as UTC) and bare `YYYY-MM-DD` dates.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = parse_form_date(raw) {
        return Ok(start_of_day(date));
    }
    Err(format!("invalid timestamp: {}", raw))
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Dates entered in forms use the `YYYY-MM-DD` shape of a date input.
pub fn parse_form_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date: {}", raw))
}

pub fn format_form_date(value: &DateTime<Utc>) -> String {
    value.date_naive().format("%Y-%m-%d").to_string()
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

pub mod optional_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&super::format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2023-01-01T10:00:00.000Z").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.year(), 2023);
    }

    #[test]
    fn parses_naive_timestamps_as_utc() {
        let parsed = parse_timestamp("2022-12-01T00:00:00").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.month(), 12);

        let fractional = parse_timestamp("2022-12-05T08:30:15.123456").unwrap();
        assert_eq!(fractional.minute(), 30);
    }

    #[test]
    fn parses_bare_dates_as_midnight() {
        let parsed = parse_timestamp("2023-01-10").unwrap();
        assert_eq!(parsed.hour(), 0);
        assert_eq!(format_form_date(&parsed), "2023-01-10");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_form_date("01/02/2023").is_err());
    }

    #[test]
    fn formats_with_millis_and_zulu() {
        let parsed = parse_timestamp("2023-01-01T10:00:00Z").unwrap();
        assert_eq!(format_timestamp(&parsed), "2023-01-01T10:00:00.000Z");
    }
}
