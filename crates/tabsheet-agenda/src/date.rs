//! The agenda layer's simplified calendar
//!
//! Every month has 30 days and every year 12 months, so offsets reduce to a
//! day count and arithmetic is plain carrying. Components outside the
//! calendar range are accepted at parse time; only arithmetic normalizes.

use crate::error::{AgendaError, AgendaResult};
use lazy_regex::regex;
use std::fmt;
use std::str::FromStr;

/// A calendar date with total ordering
///
/// The textual form is zero-padded `YYYY-MM-DD`; ordering is consistent with
/// comparing those strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Create a date from its components
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse a `YYYY-MM-DD` date
    ///
    /// # Examples
    /// ```
    /// use tabsheet_agenda::Date;
    ///
    /// let date = Date::parse("2012-08-07").unwrap();
    /// assert_eq!(date.to_string(), "2012-08-07");
    /// assert!(Date::parse("2012-8-7").is_err());
    /// ```
    pub fn parse(text: &str) -> AgendaResult<Self> {
        let caps = regex!(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
            .captures(text)
            .ok_or_else(|| AgendaError::InvalidDate(text.to_string()))?;

        let invalid = || AgendaError::InvalidDate(text.to_string());
        Ok(Self {
            year: caps[1].parse().map_err(|_| invalid())?,
            month: caps[2].parse().map_err(|_| invalid())?,
            day: caps[3].parse().map_err(|_| invalid())?,
        })
    }

    /// Year component
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month component
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day component
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Add an offset of the form `+<N>d`, `+<N>w` or `+<N>m`
    ///
    /// Days, weeks and months weigh 1, 7 and 30 days respectively.
    ///
    /// # Examples
    /// ```
    /// use tabsheet_agenda::Date;
    ///
    /// let date = Date::parse("2012-08-28").unwrap();
    /// assert_eq!(date.add("+3d").unwrap().to_string(), "2012-09-01");
    /// assert_eq!(date.add("+1m").unwrap().to_string(), "2012-09-28");
    /// ```
    pub fn add(&self, offset: &str) -> AgendaResult<Self> {
        let caps = regex!(r"^\+([0-9]+)([dwm])$")
            .captures(offset)
            .ok_or_else(|| AgendaError::InvalidOffset(offset.to_string()))?;

        let count: u32 = caps[1]
            .parse()
            .map_err(|_| AgendaError::InvalidOffset(offset.to_string()))?;
        let weight = match &caps[2] {
            "d" => 1,
            "w" => 7,
            "m" => 30,
            _ => return Err(AgendaError::InvalidOffset(offset.to_string())),
        };

        Ok(self.add_days(count * weight))
    }

    /// Add a number of days, carrying through 30-day months and 12-month years
    pub fn add_days(&self, days: u32) -> Self {
        let mut day = self.day as u32 + days;
        let mut month = self.month as u32;
        let mut year = self.year as u32;

        while day > 30 {
            month += 1;
            day -= 30;
        }
        while month > 12 {
            year += 1;
            month -= 12;
        }

        Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = AgendaError;

    fn from_str(s: &str) -> AgendaResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2012-08-07").unwrap();
        assert_eq!(date, Date::new(2012, 8, 7));
        assert_eq!(date.to_string(), "2012-08-07");

        // Zero-padding survives the round trip.
        assert_eq!(Date::new(450, 1, 1).to_string(), "0450-01-01");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "2012-8-7", "2012/08/07", "20120807", "12-08-07x"] {
            assert!(
                matches!(Date::parse(bad), Err(AgendaError::InvalidDate(_))),
                "expected InvalidDate for {bad:?}"
            );
        }
    }

    #[test]
    fn test_ordering() {
        let a = Date::parse("2012-08-07").unwrap();
        let b = Date::parse("2012-08-08").unwrap();
        let c = Date::parse("2012-09-01").unwrap();
        let d = Date::parse("2013-01-01").unwrap();

        assert!(a < b && b < c && c < d);
        // Later year beats earlier month/day components.
        assert!(Date::parse("2013-01-01").unwrap() > Date::parse("2012-12-30").unwrap());
        assert_eq!(a, Date::parse("2012-08-07").unwrap());
    }

    #[test]
    fn test_add_days_weeks_months() {
        let date = Date::parse("2012-08-07").unwrap();
        assert_eq!(date.add("+1d").unwrap().to_string(), "2012-08-08");
        assert_eq!(date.add("+2w").unwrap().to_string(), "2012-08-21");
        assert_eq!(date.add("+1m").unwrap().to_string(), "2012-09-07");
    }

    #[test]
    fn test_add_carries_months_and_years() {
        let date = Date::parse("2012-12-28").unwrap();
        assert_eq!(date.add("+5d").unwrap().to_string(), "2013-01-03");

        // A day count landing exactly on day 30 stays in the month.
        let date = Date::parse("2012-08-29").unwrap();
        assert_eq!(date.add("+1d").unwrap().to_string(), "2012-08-30");
        assert_eq!(date.add("+2d").unwrap().to_string(), "2012-09-01");

        // Twelve 30-day months is a full year.
        let date = Date::parse("2012-01-15").unwrap();
        assert_eq!(date.add("+12m").unwrap().to_string(), "2013-01-15");
    }

    #[test]
    fn test_invalid_offsets() {
        let date = Date::parse("2012-08-07").unwrap();
        for bad in ["", "+d", "1d", "+1y", "-1d", "+1d extra"] {
            assert!(
                matches!(date.add(bad), Err(AgendaError::InvalidOffset(_))),
                "expected InvalidOffset for {bad:?}"
            );
        }
    }
}
