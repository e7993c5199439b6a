use chrono::{Datelike, Duration, NaiveDate};
use itertools::Itertools;

/// A non-working date in the national court calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

/// The national holiday calendar recognized by the courts: eight fixed-date
/// holidays plus the Easter-derived set for the year.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    /// Carnival is a customary rather than statutory non-working day, so
    /// firms can opt out of it.
    include_carnival: bool,
}

impl HolidayCalendar {
    pub fn new(include_carnival: bool) -> Self {
        Self { include_carnival }
    }

    /// The holidays falling in `year`, sorted by date. Deterministic and free
    /// of side effects, so callers may cache the result per year.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let easter = easter_sunday(year);

        let mut holidays = vec![
            Holiday {
                date: ymd(year, 1, 1),
                name: "New Year's Day",
            },
            Holiday {
                date: ymd(year, 4, 21),
                name: "Tiradentes Day",
            },
            Holiday {
                date: ymd(year, 5, 1),
                name: "Labour Day",
            },
            Holiday {
                date: ymd(year, 9, 7),
                name: "Independence Day",
            },
            Holiday {
                date: ymd(year, 10, 12),
                name: "Our Lady of Aparecida",
            },
            Holiday {
                date: ymd(year, 11, 2),
                name: "All Souls' Day",
            },
            Holiday {
                date: ymd(year, 11, 15),
                name: "Republic Day",
            },
            Holiday {
                date: ymd(year, 12, 25),
                name: "Christmas Day",
            },
            Holiday {
                date: easter - Duration::days(2),
                name: "Good Friday",
            },
            Holiday {
                date: easter,
                name: "Easter Sunday",
            },
            Holiday {
                date: easter + Duration::days(60),
                name: "Corpus Christi",
            },
        ];

        if self.include_carnival {
            holidays.push(Holiday {
                date: easter - Duration::days(47),
                name: "Carnival",
            });
        }

        holidays
            .into_iter()
            .sorted_by_key(|holiday| holiday.date)
            .collect()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_for_year(date.year())
            .iter()
            .any(|holiday| holiday.date == date)
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Easter Sunday for `year`, by the Meeus/Jones/Butcher algorithm. Integer
/// arithmetic only, valid for all Gregorian years.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    ymd(year, month as u32, day as u32)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid calendar date")
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_years() {
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
    }

    #[test]
    fn easter_derived_holidays_2024() {
        let calendar = HolidayCalendar::default();
        let holidays = calendar.holidays_for_year(2024);

        let find = |name: &str| holidays.iter().find(|h| h.name == name).unwrap().date;
        assert_eq!(find("Carnival"), date(2024, 2, 13));
        assert_eq!(find("Good Friday"), date(2024, 3, 29));
        assert_eq!(find("Easter Sunday"), date(2024, 3, 31));
        assert_eq!(find("Corpus Christi"), date(2024, 5, 30));
    }

    #[test]
    fn twelve_holidays_per_year() {
        let calendar = HolidayCalendar::default();
        for year in 2020..2030 {
            assert_eq!(calendar.holidays_for_year(year).len(), 12);
        }
    }

    #[test]
    fn same_year_same_dates() {
        let calendar = HolidayCalendar::default();
        assert_eq!(
            calendar.holidays_for_year(2024),
            calendar.holidays_for_year(2024)
        );
    }

    #[test]
    fn holidays_are_sorted_by_date() {
        let calendar = HolidayCalendar::default();
        let holidays = calendar.holidays_for_year(2025);
        for pair in holidays.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn carnival_can_be_opted_out() {
        let calendar = HolidayCalendar::new(false);
        let holidays = calendar.holidays_for_year(2024);
        assert_eq!(holidays.len(), 11);
        assert!(!calendar.is_holiday(date(2024, 2, 13)));
    }

    #[test]
    fn fixed_holidays_2024() {
        let calendar = HolidayCalendar::default();
        for (m, d) in &[
            (1, 1),
            (4, 21),
            (5, 1),
            (9, 7),
            (10, 12),
            (11, 2),
            (11, 15),
            (12, 25),
        ] {
            assert!(calendar.is_holiday(date(2024, *m, *d)));
        }
        assert!(!calendar.is_holiday(date(2024, 6, 14)));
    }
}
