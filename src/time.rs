use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;

/// A time of the service day, stored as seconds since its start.
///
/// GTFS lets a trip run past midnight of its service day, so hours are not
/// capped at 23: `23:50:00` plus 30 minutes is `24:20:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ServiceTime(u32);

impl ServiceTime {
    /// Returns `None` when the time does not fit in a `u32` number of seconds
    pub fn from_hms_opt(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        hours
            .checked_mul(SECONDS_PER_HOUR)?
            .checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?)?
            .checked_add(seconds)
            .map(ServiceTime)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn plus_minutes(self, minutes: u32) -> Result<Self, Error> {
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|delta| self.0.checked_add(delta))
            .map(ServiceTime)
            .ok_or_else(|| Error::TimeOverflow {
                time: self.to_string(),
                minutes,
            })
    }
}

impl FromStr for ServiceTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidTimeFormat(s.to_owned());

        let mut parts = s.split(':');
        let (hours, minutes, seconds) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(m), Some(sec), None) => (h, m, sec),
                _ => return Err(invalid()),
            };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let well_formed = all_digits(hours)
            && minutes.len() == 2
            && seconds.len() == 2
            && all_digits(minutes)
            && all_digits(seconds);
        if !well_formed {
            return Err(invalid());
        }

        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }

        ServiceTime::from_hms_opt(hours, minutes, seconds).ok_or_else(invalid)
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0 / SECONDS_PER_HOUR,
            (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            self.0 % SECONDS_PER_MINUTE
        )
    }
}

impl From<NaiveTime> for ServiceTime {
    fn from(time: NaiveTime) -> Self {
        ServiceTime(time.num_seconds_from_midnight())
    }
}

impl Serialize for ServiceTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Adds `minutes` to an `HH:MM:SS` time and formats the result the same way.
pub fn add_minutes(time: &str, minutes: u32) -> Result<String, Error> {
    let time: ServiceTime = time.parse()?;
    Ok(time.plus_minutes(minutes)?.to_string())
}
