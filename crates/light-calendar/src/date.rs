//! Month arithmetic on calendar dates.
//!
//! All month math goes through an absolute month index (`year * 12 + month0`)
//! so differences stay exact across any number of years; nothing here steps
//! through days.

use chrono::{Datelike, NaiveDate, Weekday};

/// First calendar month of a fiscal year.
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Month-level helpers for [`NaiveDate`].
pub trait CalendarDateExt {
    /// The first day of this date's month.
    fn first_of_month(&self) -> NaiveDate;

    /// Whole months from `base` to `self`, both truncated to their month.
    ///
    /// Negative when `self` lies in an earlier month than `base`.
    fn months_after(&self, base: NaiveDate) -> i64;

    /// Shift by `months`, clamping the day to the target month's length.
    ///
    /// Saturates at the limits of [`NaiveDate`].
    fn plus_months(&self, months: i64) -> NaiveDate;

    /// Number of days in this date's month.
    fn days_in_month(&self) -> u32;

    /// Number of grid rows needed to show this date's month when weeks start
    /// on `first_day`.
    fn weeks_in_month(&self, first_day: Weekday) -> u32;

    /// Column (0-6) of this date's weekday when weeks start on `first_day`.
    fn weekday_column(&self, first_day: Weekday) -> u32;

    /// Whether both dates fall in the same calendar month.
    fn is_same_month(&self, other: NaiveDate) -> bool;

    /// The fiscal year this date belongs to (years start on April 1).
    fn fiscal_year(&self) -> i32;
}

impl CalendarDateExt for NaiveDate {
    fn first_of_month(&self) -> NaiveDate {
        self.with_day(1).unwrap_or(*self)
    }

    fn months_after(&self, base: NaiveDate) -> i64 {
        month_index(*self) - month_index(base)
    }

    fn plus_months(&self, months: i64) -> NaiveDate {
        let Some(index) = month_index(*self).checked_add(months) else {
            return if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
        };
        let year = index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u32;

        let Ok(year) = i32::try_from(year) else {
            return if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
        };
        let day = self.day().min(days_in(year, month));
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if months < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    fn days_in_month(&self) -> u32 {
        days_in(self.year(), self.month())
    }

    fn weeks_in_month(&self, first_day: Weekday) -> u32 {
        let lead = self.first_of_month().weekday_column(first_day);
        (lead + self.days_in_month()).div_ceil(7)
    }

    fn weekday_column(&self, first_day: Weekday) -> u32 {
        (self.weekday().num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7
    }

    fn is_same_month(&self, other: NaiveDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    fn fiscal_year(&self) -> i32 {
        if self.month() >= FISCAL_YEAR_START_MONTH {
            self.year()
        } else {
            self.year() - 1
        }
    }
}

/// The default carousel range for `today`: April of the current fiscal year
/// through March of the next calendar year.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = today.fiscal_year();
    let from = NaiveDate::from_ymd_opt(year, FISCAL_YEAR_START_MONTH, 1)
        .unwrap_or_else(|| today.first_of_month());
    let to = from.plus_months(11);
    (from, to)
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_after_truncates_days() {
        assert_eq!(ymd(2016, 4, 30).months_after(ymd(2016, 4, 1)), 0);
        assert_eq!(ymd(2016, 5, 1).months_after(ymd(2016, 4, 30)), 1);
        assert_eq!(ymd(2017, 3, 1).months_after(ymd(2016, 4, 1)), 11);
        assert_eq!(ymd(2016, 3, 31).months_after(ymd(2016, 4, 1)), -1);
    }

    #[test]
    fn test_months_after_multi_year_is_exact() {
        assert_eq!(ymd(2116, 4, 1).months_after(ymd(2016, 4, 1)), 1200);
        assert_eq!(ymd(1900, 1, 31).months_after(ymd(2000, 12, 1)), -1211);
    }

    #[test]
    fn test_month_boundary_maps_to_own_month() {
        let base = ymd(2020, 1, 1);
        assert_eq!(ymd(2020, 2, 1).months_after(base), 1);
        assert_eq!(ymd(2020, 1, 31).months_after(base), 0);
        assert_eq!(ymd(2020, 2, 29).months_after(base), 1);
    }

    #[test]
    fn test_plus_months_clamps_day() {
        assert_eq!(ymd(2016, 1, 31).plus_months(1), ymd(2016, 2, 29));
        assert_eq!(ymd(2017, 1, 31).plus_months(1), ymd(2017, 2, 28));
        assert_eq!(ymd(2016, 4, 1).plus_months(11), ymd(2017, 3, 1));
        assert_eq!(ymd(2016, 4, 1).plus_months(-4), ymd(2015, 12, 1));
    }

    #[test]
    fn test_plus_months_inverts_months_after() {
        let base = ymd(2016, 4, 1);
        for k in -30..30 {
            assert_eq!(base.plus_months(k).months_after(base), k);
        }
    }

    #[test]
    fn test_plus_months_saturates() {
        assert_eq!(ymd(2016, 4, 1).plus_months(i64::MAX), NaiveDate::MAX);
        assert_eq!(ymd(2016, 4, 1).plus_months(i64::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(ymd(2016, 2, 10).days_in_month(), 29);
        assert_eq!(ymd(1900, 2, 10).days_in_month(), 28);
        assert_eq!(ymd(2000, 2, 10).days_in_month(), 29);
        assert_eq!(ymd(2016, 4, 10).days_in_month(), 30);
    }

    #[test]
    fn test_weeks_in_month() {
        // February 2015 starts on a Sunday and has 28 days.
        assert_eq!(ymd(2015, 2, 1).weeks_in_month(Weekday::Sun), 4);
        assert_eq!(ymd(2015, 2, 1).weeks_in_month(Weekday::Mon), 5);
        // October 2016 starts on a Saturday and has 31 days.
        assert_eq!(ymd(2016, 10, 1).weeks_in_month(Weekday::Sun), 6);
    }

    #[test]
    fn test_weekday_column() {
        // 2016-04-01 is a Friday.
        assert_eq!(ymd(2016, 4, 1).weekday_column(Weekday::Sun), 5);
        assert_eq!(ymd(2016, 4, 1).weekday_column(Weekday::Mon), 4);
    }

    #[test]
    fn test_fiscal_year() {
        assert_eq!(ymd(2016, 4, 1).fiscal_year(), 2016);
        assert_eq!(ymd(2016, 3, 31).fiscal_year(), 2015);
        assert_eq!(ymd(2017, 3, 31).fiscal_year(), 2016);
        assert_eq!(ymd(2016, 12, 31).fiscal_year(), 2016);
    }

    #[test]
    fn test_default_range() {
        assert_eq!(default_range(ymd(2016, 8, 18)), (ymd(2016, 4, 1), ymd(2017, 3, 1)));
        assert_eq!(default_range(ymd(2017, 2, 1)), (ymd(2016, 4, 1), ymd(2017, 3, 1)));
    }
}
