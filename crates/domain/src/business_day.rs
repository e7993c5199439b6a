use crate::holiday::HolidayCalendar;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DateArithmeticError {
    #[error("number of business days to add must be non-negative, got: {0}")]
    NegativeBusinessDays(i64),
}

/// Business day arithmetic over the national `HolidayCalendar`: a business
/// day is any date that is neither a weekend day nor a holiday.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: HolidayCalendar,
}

impl BusinessCalendar {
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self { holidays }
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        !self.holidays.is_holiday(date)
    }

    /// Advances `start` until `n` business days have been counted. The start
    /// date itself is never counted; `n == 0` returns `start` unchanged. The
    /// result is always a business day.
    pub fn add_business_days(
        &self,
        start: NaiveDate,
        n: i64,
    ) -> Result<NaiveDate, DateArithmeticError> {
        if n < 0 {
            return Err(DateArithmeticError::NegativeBusinessDays(n));
        }

        let mut date = start;
        let mut remaining = n;
        while remaining > 0 {
            date = date + Duration::days(1);
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Business days in the inclusive range `[from, to]`. Both endpoints
    /// count, so "days remaining" includes today when today is a business
    /// day. Returns 0 when `to < from`.
    pub fn count_business_days(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        let mut count = 0;
        let mut date = from;
        while date <= to {
            if self.is_business_day(date) {
                count += 1;
            }
            date = date + Duration::days(1);
        }
        count
    }
}
