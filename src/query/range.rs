// src/query/range.rs
//! Start/end validation for the telemetry endpoints.
//!
//! Every ceiling follows one rule: a span equal to the ceiling is accepted,
//! anything longer is rejected. Month and year ceilings are calendar
//! arithmetic on the start timestamp, not fixed day counts.

use super::vocabulary::TIME_UNIT;
use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::error::RequestError;
use chrono::{Months, NaiveDateTime, TimeDelta};
use std::fmt;

/// The longest span an endpoint accepts between start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanCeiling {
    Week,
    Month,
    Year,
    Unbounded,
}

impl SpanCeiling {
    /// Latest end accepted for `start`, or `None` when nothing caps it.
    pub fn latest_end(self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Week => start.checked_add_signed(TimeDelta::days(7)),
            Self::Month => start.checked_add_months(Months::new(1)),
            Self::Year => start.checked_add_months(Months::new(12)),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for SpanCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "one week"),
            Self::Month => write!(f, "one month"),
            Self::Year => write!(f, "one year"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Query keys and textual format a range is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEncoding {
    pub start_key: &'static str,
    pub end_key: &'static str,
    pub format: &'static str,
}

/// `startDate`/`endDate` at day precision.
pub const DATE_RANGE: RangeEncoding = RangeEncoding {
    start_key: "startDate",
    end_key: "endDate",
    format: DATE_FORMAT,
};

/// `startTime`/`endTime` at second precision.
pub const TIME_RANGE: RangeEncoding = RangeEncoding {
    start_key: "startTime",
    end_key: "endTime",
    format: DATE_TIME_FORMAT,
};

/// The sensor endpoint names its keys like dates but wants full timestamps.
pub const SENSOR_RANGE: RangeEncoding = RangeEncoding {
    start_key: "startDate",
    end_key: "endDate",
    format: DATE_TIME_FORMAT,
};

/// A validated, ordered pair of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
    encoding: RangeEncoding,
}

impl DateRange {
    /// Checks presence, ordering and the span ceiling, in that order.
    pub fn validate(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        encoding: RangeEncoding,
        ceiling: SpanCeiling,
    ) -> Result<Self, RequestError> {
        let start = start.ok_or(RequestError::MissingArgument(encoding.start_key))?;
        let end = end.ok_or(RequestError::MissingArgument(encoding.end_key))?;

        if end < start {
            return Err(RequestError::InvalidRange { start, end });
        }

        let range = Self {
            start,
            end,
            encoding,
        };
        range.ensure_within(ceiling)?;
        Ok(range)
    }

    /// Fails with `RangeTooLarge` when the span exceeds `ceiling`.
    pub fn ensure_within(&self, ceiling: SpanCeiling) -> Result<(), RequestError> {
        match ceiling.latest_end(self.start) {
            Some(latest) if self.end > latest => Err(RequestError::RangeTooLarge { ceiling }),
            _ => Ok(()),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Start and end formatted for the wire, keyed per the endpoint.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            (
                self.encoding.start_key,
                self.start.format(self.encoding.format).to_string(),
            ),
            (
                self.encoding.end_key,
                self.end.format(self.encoding.format).to_string(),
            ),
        ]
    }
}

/// Aggregation bucket of the energy and meter endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    QuarterOfAnHour,
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Case-insensitive lookup; absent or unknown units fall back to `Day`.
    pub fn resolve(input: Option<&str>) -> Self {
        input
            .and_then(|raw| TIME_UNIT.normalize(raw))
            .and_then(Self::from_token)
            .unwrap_or_default()
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "QUARTER_OF_AN_HOUR" => Some(Self::QuarterOfAnHour),
            "HOUR" => Some(Self::Hour),
            "DAY" => Some(Self::Day),
            "WEEK" => Some(Self::Week),
            "MONTH" => Some(Self::Month),
            "YEAR" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }

    /// Ceiling the energy endpoints apply for this bucket.
    ///
    /// Week and coarser are left to the vendor.
    pub fn span_ceiling(self) -> SpanCeiling {
        match self {
            Self::QuarterOfAnHour | Self::Hour => SpanCeiling::Month,
            Self::Day => SpanCeiling::Year,
            Self::Week | Self::Month | Self::Year => SpanCeiling::Unbounded,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_bounds_are_reported_by_key() {
        let err = DateRange::validate(None, Some(at(2024, 1, 1)), TIME_RANGE, SpanCeiling::Week)
            .unwrap_err();
        assert_eq!(err, RequestError::MissingArgument("startTime"));

        let err = DateRange::validate(Some(at(2024, 1, 1)), None, DATE_RANGE, SpanCeiling::Week)
            .unwrap_err();
        assert_eq!(err, RequestError::MissingArgument("endDate"));
    }

    #[test]
    fn end_before_start_is_invalid() {
        let err = DateRange::validate(
            Some(at(2024, 1, 2)),
            Some(at(2024, 1, 1)),
            DATE_RANGE,
            SpanCeiling::Unbounded,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn zero_span_is_valid() {
        let range = DateRange::validate(
            Some(at(2024, 5, 5)),
            Some(at(2024, 5, 5)),
            DATE_RANGE,
            SpanCeiling::Week,
        );
        assert!(range.is_ok());
    }

    #[test]
    fn ceilings_accept_exact_boundary() {
        let start = at(2024, 1, 10);
        for (ceiling, end, past) in [
            (SpanCeiling::Week, at(2024, 1, 17), at(2024, 1, 18)),
            (SpanCeiling::Month, at(2024, 2, 10), at(2024, 2, 11)),
            (SpanCeiling::Year, at(2025, 1, 10), at(2025, 1, 11)),
        ] {
            assert!(
                DateRange::validate(Some(start), Some(end), TIME_RANGE, ceiling).is_ok(),
                "{} boundary should be accepted",
                ceiling
            );
            let err = DateRange::validate(Some(start), Some(past), TIME_RANGE, ceiling)
                .unwrap_err();
            assert_eq!(err, RequestError::RangeTooLarge { ceiling });
        }
    }

    #[test]
    fn one_second_past_the_week_is_too_large() {
        let start = at(2024, 3, 1);
        let end = start + TimeDelta::days(7) + TimeDelta::seconds(1);
        let err = DateRange::validate(Some(start), Some(end), TIME_RANGE, SpanCeiling::Week)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeTooLarge);
    }

    #[test]
    fn query_pairs_follow_encoding() {
        let start = at(2024, 1, 1);
        let end = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap();

        let range =
            DateRange::validate(Some(start), Some(end), DATE_RANGE, SpanCeiling::Year).unwrap();
        assert_eq!(
            range.query_pairs(),
            [
                ("startDate", "2024-01-01".to_string()),
                ("endDate", "2024-01-02".to_string())
            ]
        );

        let range =
            DateRange::validate(Some(start), Some(end), SENSOR_RANGE, SpanCeiling::Week).unwrap();
        assert_eq!(range.query_pairs()[1], ("endDate", "2024-01-02 13:05:09".to_string()));
    }

    #[test]
    fn time_unit_defaults_to_day() {
        assert_eq!(TimeUnit::resolve(None), TimeUnit::Day);
        assert_eq!(TimeUnit::resolve(Some("fortnight")), TimeUnit::Day);
        assert_eq!(TimeUnit::resolve(Some("Quarter_Of_An_Hour")), TimeUnit::QuarterOfAnHour);
        assert_eq!(TimeUnit::resolve(Some("week")).as_str(), "WEEK");
    }

    #[test]
    fn time_unit_ceilings() {
        assert_eq!(TimeUnit::Hour.span_ceiling(), SpanCeiling::Month);
        assert_eq!(TimeUnit::QuarterOfAnHour.span_ceiling(), SpanCeiling::Month);
        assert_eq!(TimeUnit::Day.span_ceiling(), SpanCeiling::Year);
        assert_eq!(TimeUnit::Month.span_ceiling(), SpanCeiling::Unbounded);
    }
}
