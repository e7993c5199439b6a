use crate::business_day::{BusinessCalendar, DateArithmeticError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statutory appeal window after a judgment, in business days.
pub const APPEAL_DEADLINE_BUSINESS_DAYS: i64 = 10;
/// Statutory clarification-motion window after a judgment, in business days.
pub const CLARIFICATION_DEADLINE_BUSINESS_DAYS: i64 = 5;

/// The kind of procedural date an alert or deadline record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeadlineType {
    Appeal,
    ClarificationMotion,
    Hearing,
    DocketUpdate,
}

/// The deadlines that follow from a recorded judgment.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryDeadlines {
    pub appeal: NaiveDate,
    pub clarification_motion: NaiveDate,
}

pub fn derive_from_judgment(
    calendar: &BusinessCalendar,
    judgment_date: NaiveDate,
) -> Result<StatutoryDeadlines, DateArithmeticError> {
    Ok(StatutoryDeadlines {
        appeal: calendar.add_business_days(judgment_date, APPEAL_DEADLINE_BUSINESS_DAYS)?,
        clarification_motion: calendar
            .add_business_days(judgment_date, CLARIFICATION_DEADLINE_BUSINESS_DAYS)?,
    })
}

/// How pressing an upcoming due date is, as shown on the case dashboard.
/// The business-day count carried by `Urgent` and `Normal` includes `as_of`
/// itself when it is a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    DueToday,
    Urgent(i64),
    Normal(i64),
}

/// Classifies `due_date` relative to `as_of`. The overdue check compares
/// calendar days, not business-day membership; only the remaining-days figure
/// uses business-day counting.
pub fn classify_urgency(
    calendar: &BusinessCalendar,
    due_date: NaiveDate,
    as_of: NaiveDate,
    urgent_threshold_business_days: i64,
) -> Urgency {
    if due_date < as_of {
        return Urgency::Overdue;
    }

    let remaining = calendar.count_business_days(as_of, due_date);
    if remaining == 0 {
        Urgency::DueToday
    } else if remaining <= urgent_threshold_business_days {
        Urgency::Urgent(remaining)
    } else {
        Urgency::Normal(remaining)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const URGENT_THRESHOLD: i64 = 3;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> BusinessCalendar {
        BusinessCalendar::default()
    }

    #[test]
    fn derives_deadlines_from_judgment() {
        let deadlines = derive_from_judgment(&calendar(), date(2024, 6, 7)).unwrap();
        assert_eq!(deadlines.appeal, date(2024, 6, 21));
        assert_eq!(deadlines.clarification_motion, date(2024, 6, 14));
    }

    #[test]
    fn classifies_past_dates_as_overdue() {
        let urgency = classify_urgency(&calendar(), date(2024, 6, 6), date(2024, 6, 7), URGENT_THRESHOLD);
        assert_eq!(urgency, Urgency::Overdue);
    }

    #[test]
    fn due_date_on_a_non_business_today_is_not_overdue() {
        // 2024-06-09 is a Sunday; same-day due dates report DueToday, never
        // Overdue, regardless of business-day membership
        let urgency = classify_urgency(&calendar(), date(2024, 6, 9), date(2024, 6, 9), URGENT_THRESHOLD);
        assert_eq!(urgency, Urgency::DueToday);
    }

    #[test]
    fn christmas_eve_deadline_is_urgent() {
        // Due on Christmas (a holiday), asked on Dec 24: only the 24th counts
        let urgency = classify_urgency(
            &calendar(),
            date(2024, 12, 25),
            date(2024, 12, 24),
            URGENT_THRESHOLD,
        );
        assert_eq!(urgency, Urgency::Urgent(1));
    }

    #[test]
    fn far_deadlines_are_normal() {
        let urgency = classify_urgency(&calendar(), date(2024, 6, 21), date(2024, 6, 7), URGENT_THRESHOLD);
        assert_eq!(urgency, Urgency::Normal(11));
    }

    #[test]
    fn classification_is_pure() {
        let calendar = calendar();
        let first = classify_urgency(&calendar, date(2024, 12, 25), date(2024, 12, 24), URGENT_THRESHOLD);
        let second = classify_urgency(&calendar, date(2024, 12, 25), date(2024, 12, 24), URGENT_THRESHOLD);
        assert_eq!(first, second);
    }
}
