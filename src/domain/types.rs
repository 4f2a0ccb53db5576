/// Core value types used throughout the domain layer
///
/// Calendar days and months are carried as their canonical zero-padded
/// strings. A month is derived from a day by taking the first seven
/// characters, and months compare as plain strings.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// A validated `YYYY-MM-DD` calendar date
///
/// Equality, ordering and hashing only look at the string form so the
/// key can be borrowed as `&str` in map lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    key: String,
    date: NaiveDate,
}

impl DateKey {
    /// Parse a date string, rejecting anything that is not a zero-padded
    /// `YYYY-MM-DD` naming a real calendar day
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if !has_shape(s, &[4, 7]) || s.len() != 10 {
            return Err(DomainError::InvalidDate(format!(
                "expected YYYY-MM-DD, got '{}'",
                s
            )));
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            DomainError::InvalidDate(format!("'{}' is not a calendar date", s))
        })?;

        Ok(Self {
            key: s.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The `YYYY-MM` prefix of this date
    pub fn month(&self) -> MonthKey {
        MonthKey {
            key: self.key[..7].to_string(),
            year: self.date.year(),
            month: self.date.month(),
        }
    }
}

/// A validated `YYYY-MM` month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    key: String,
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if !has_shape(s, &[4]) || s.len() != 7 {
            return Err(DomainError::InvalidDate(format!(
                "expected YYYY-MM, got '{}'",
                s
            )));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| DomainError::InvalidDate(format!("bad year in '{}'", s)))?;
        let month: u32 = s[5..]
            .parse()
            .map_err(|_| DomainError::InvalidDate(format!("bad month in '{}'", s)))?;

        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidDate(format!(
                "month must be 01-12, got '{}'",
                s
            )));
        }

        Ok(Self {
            key: s.to_string(),
            year,
            month,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of calendar days in this month, leap years included
    pub fn days_in_month(&self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match (first, next) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 0,
        }
    }
}

/// Digits everywhere except for `-` at the given byte offsets
fn has_shape(s: &str, dashes: &[usize]) -> bool {
    s.bytes().enumerate().all(|(i, b)| {
        if dashes.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_digit()
        }
    })
}

macro_rules! string_key_impls {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.key.cmp(&other.key)
            }
        }

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.key.hash(state);
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.key
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.key)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.key
            }
        }

        impl std::str::FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

string_key_impls!(DateKey);
string_key_impls!(MonthKey);

/// Colors of the period marks in the calendar
pub const PERIOD_COLORS: [&str; 5] = ["#8B5CF6", "#A78BFA", "#C4B5FD", "#A78BFA", "#8B5CF6"];

/// Text color used on a marked day
pub const MARK_TEXT_COLOR: &str = "#fff";

/// A fixed, non-empty sequence of mark colors
///
/// The n-th day marked in a session gets the n-th color; once the
/// palette runs out every further day gets the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, DomainError> {
        if colors.is_empty() {
            return Err(DomainError::InvalidInput {
                message: "palette needs at least one color".to_string(),
            });
        }
        Ok(Self { colors })
    }

    /// The calendar's period palette
    pub fn period() -> Self {
        Self {
            colors: PERIOD_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Color for a day marked when `count` days are already marked
    pub fn color_for(&self, count: usize) -> &str {
        let index = count.min(self.colors.len() - 1);
        &self.colors[index]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::period()
    }
}

/// Unique identifier for a notebook entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a new random entry ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_accepts_valid_dates() {
        let key = DateKey::parse("2024-02-29").unwrap();
        assert_eq!(key.as_str(), "2024-02-29");
        assert_eq!(key.month().as_str(), "2024-02");
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_date_key_rejects_malformed() {
        for bad in ["", "2024-2-01", "2024/02/01", "2023-02-29", "2024-13-01", "24-02-01", "2024-02-01T00"] {
            assert!(DateKey::parse(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_month_key_days_in_month() {
        assert_eq!(MonthKey::parse("2024-01").unwrap().days_in_month(), 31);
        assert_eq!(MonthKey::parse("2024-02").unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::parse("2023-02").unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::parse("1900-02").unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::parse("2000-02").unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::parse("2024-04").unwrap().days_in_month(), 30);
        assert_eq!(MonthKey::parse("2023-12").unwrap().days_in_month(), 31);
        assert_eq!(MonthKey::parse("9999-12").unwrap().days_in_month(), 31);
        assert!(MonthKey::parse("2024-00").is_err());
    }

    #[test]
    fn test_month_ordering_is_string_ordering() {
        let dec = MonthKey::parse("2023-12").unwrap();
        let jan = MonthKey::parse("2024-01").unwrap();
        assert!(jan > dec);
    }

    #[test]
    fn test_palette_saturates_at_last_color() {
        let palette = Palette::period();
        assert_eq!(palette.color_for(0), "#8B5CF6");
        assert_eq!(palette.color_for(1), "#A78BFA");
        assert_eq!(palette.color_for(2), "#C4B5FD");
        assert_eq!(palette.color_for(4), "#8B5CF6");
        assert_eq!(palette.color_for(40), palette.color_for(4));
        assert!(Palette::new(Vec::new()).is_err());
    }

    #[test]
    fn test_date_key_serde_validates() {
        let key: DateKey = serde_json::from_str("\"2024-03-01\"").unwrap();
        assert_eq!(key.as_str(), "2024-03-01");
        assert!(serde_json::from_str::<DateKey>("\"2024-03-32\"").is_err());
    }
}
