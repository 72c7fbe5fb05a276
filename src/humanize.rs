//! Human-readable duration formatting and parsing utilities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Whole-second duration with human-readable parsing ("3600", "1h", "1d")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Seconds(pub u64);

impl Seconds {
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }

    pub fn to_human_readable(&self) -> String {
        const UNITS: &[(&str, u64)] = &[("w", WEEK), ("d", DAY), ("h", HOUR), ("m", MINUTE)];

        for &(unit, divisor) in UNITS {
            if self.0 >= divisor && self.0 % divisor == 0 {
                return format!("{}{}", self.0 / divisor, unit);
            }
        }

        format!("{}s", self.0)
    }
}

impl<'de> Deserialize<'de> for Seconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SecondsVisitor;

        impl<'de> serde::de::Visitor<'de> for SecondsVisitor {
            type Value = Seconds;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration as string (e.g., \"1h\", \"24h\") or seconds")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Seconds(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(v)
                    .map(Seconds)
                    .map_err(|_| E::custom(format!("duration must not be negative: {}", v)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Seconds>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(SecondsVisitor)
    }
}

impl FromStr for Seconds {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        // Plain number means seconds
        if let Ok(num) = s.parse::<u64>() {
            return Ok(Seconds(num));
        }

        let (num_str, unit) = if let Some(pos) = s.find(|c: char| !c.is_ascii_digit()) {
            (&s[..pos], &s[pos..])
        } else {
            return Err(ParseError::InvalidFormat(s.to_string()));
        };

        if num_str.is_empty() {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        let num: u64 = num_str.parse()?;

        let multiplier = match unit.trim() {
            "s" | "sec" | "secs" => 1,
            "m" | "min" | "mins" => MINUTE,
            "h" | "hr" | "hour" | "hours" => HOUR,
            "d" | "day" | "days" => DAY,
            "w" | "week" | "weeks" => WEEK,
            _ => return Err(ParseError::InvalidUnit(unit.to_string())),
        };

        Ok(Seconds(num * multiplier))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_human_readable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        assert_eq!("3600".parse::<Seconds>().unwrap().as_secs(), 3600);
        assert_eq!("0".parse::<Seconds>().unwrap().as_secs(), 0);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("30s".parse::<Seconds>().unwrap().as_secs(), 30);
        assert_eq!("5m".parse::<Seconds>().unwrap().as_secs(), 300);
        assert_eq!("1h".parse::<Seconds>().unwrap().as_secs(), 3600);
        assert_eq!("24h".parse::<Seconds>().unwrap().as_secs(), 86400);
        assert_eq!("1d".parse::<Seconds>().unwrap().as_secs(), 86400);
        assert_eq!("1D".parse::<Seconds>().unwrap().as_secs(), 86400);
        assert_eq!("2 weeks".parse::<Seconds>().unwrap().as_secs(), 14 * 86400);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Seconds>().is_err());
        assert!("h".parse::<Seconds>().is_err());
        assert!(matches!(
            "10y".parse::<Seconds>(),
            Err(ParseError::InvalidUnit(_))
        ));
    }

    #[test]
    fn test_to_human_readable() {
        assert_eq!(Seconds(86400).to_human_readable(), "1d");
        assert_eq!(Seconds(3600).to_human_readable(), "1h");
        assert_eq!(Seconds(90).to_human_readable(), "90s");
        assert_eq!(Seconds(0).to_human_readable(), "0s");
    }

    #[test]
    fn test_deserialize_string() {
        let json = r#"{"ttl": "1h"}"#;
        #[derive(Deserialize)]
        struct TestStruct {
            ttl: Seconds,
        }
        let parsed: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ttl.as_secs(), 3600);
    }

    #[test]
    fn test_deserialize_number() {
        let json = r#"{"ttl": 86400}"#;
        #[derive(Deserialize)]
        struct TestStruct {
            ttl: Seconds,
        }
        let parsed: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ttl.as_duration(), Duration::from_secs(86400));
    }
}
