use crate::{domain::requests::PeriodType, errors::ServiceError};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Half-open window `[start, end)` of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub kind: PeriodType,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// Period of the given kind that contains `reference`. Weeks start on Monday.
pub fn compute_interval(kind: PeriodType, reference: NaiveDate) -> Result<Period, ServiceError> {
    let start_date = match kind {
        PeriodType::Day => Some(reference),
        PeriodType::Week => reference.checked_sub_days(Days::new(
            reference.weekday().num_days_from_monday() as u64,
        )),
        PeriodType::Month => reference.with_day(1),
        PeriodType::Quarter => {
            let first_month = (reference.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(reference.year(), first_month, 1)
        }
        PeriodType::Year => NaiveDate::from_ymd_opt(reference.year(), 1, 1),
    }
    .ok_or_else(|| out_of_range(kind, reference))?;

    let start = start_date.and_time(NaiveTime::MIN);
    let end = advance(start, kind)?;

    Ok(Period { kind, start, end })
}

/// Start of the period following the one beginning at `start`.
///
/// Month arithmetic clamps to the last valid day of the target month.
pub fn advance(start: NaiveDateTime, kind: PeriodType) -> Result<NaiveDateTime, ServiceError> {
    match kind {
        PeriodType::Day => start.checked_add_days(Days::new(1)),
        PeriodType::Week => start.checked_add_days(Days::new(7)),
        PeriodType::Month => start.checked_add_months(Months::new(1)),
        PeriodType::Quarter => start.checked_add_months(Months::new(3)),
        PeriodType::Year => start.checked_add_months(Months::new(12)),
    }
    .ok_or_else(|| out_of_range(kind, start))
}

fn out_of_range(kind: PeriodType, at: impl std::fmt::Display) -> ServiceError {
    ServiceError::InternalServerError(format!("{kind} period around {at} is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_time(NaiveTime::MIN)
    }

    fn sample_dates() -> impl Iterator<Item = NaiveDate> {
        let first = date(2023, 12, 1);
        (0..500).map(move |offset| first + Duration::days(offset))
    }

    #[test]
    fn month_of_january() {
        let period = compute_interval(PeriodType::Month, date(2024, 1, 10)).unwrap();
        assert_eq!(period.start, midnight(2024, 1, 1));
        assert_eq!(period.end, midnight(2024, 2, 1));
    }

    #[test]
    fn quarter_of_may() {
        let period = compute_interval(PeriodType::Quarter, date(2024, 5, 15)).unwrap();
        assert_eq!(period.start, midnight(2024, 4, 1));
        assert_eq!(period.end, midnight(2024, 7, 1));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-01-07 is a Sunday.
        let period = compute_interval(PeriodType::Week, date(2024, 1, 7)).unwrap();
        assert_eq!(period.start, midnight(2024, 1, 1));
        assert_eq!(period.end, midnight(2024, 1, 8));
    }

    #[test]
    fn day_and_year() {
        let day = compute_interval(PeriodType::Day, date(2024, 2, 29)).unwrap();
        assert_eq!(day.start, midnight(2024, 2, 29));
        assert_eq!(day.end, midnight(2024, 3, 1));

        let year = compute_interval(PeriodType::Year, date(2024, 12, 31)).unwrap();
        assert_eq!(year.start, midnight(2024, 1, 1));
        assert_eq!(year.end, midnight(2025, 1, 1));
    }

    #[test]
    fn reference_always_inside_window() {
        for kind in PeriodType::ALL {
            for reference in sample_dates() {
                let period = compute_interval(kind, reference).unwrap();
                let at = reference.and_time(NaiveTime::MIN);
                assert!(period.contains(at), "{kind} {reference}");
                assert!(period.contains(reference.and_hms_opt(23, 59, 59).unwrap()));
                assert_eq!(period.kind, kind);
            }
        }
    }

    #[test]
    fn window_length_matches_unit() {
        for reference in sample_dates() {
            let len = |kind| {
                let p = compute_interval(kind, reference).unwrap();
                (p.end - p.start).num_days()
            };

            assert_eq!(len(PeriodType::Day), 1);
            assert_eq!(len(PeriodType::Week), 7);
            assert!((28..=31).contains(&len(PeriodType::Month)));
            assert!((89..=92).contains(&len(PeriodType::Quarter)));
            assert!((365..=366).contains(&len(PeriodType::Year)));

            let week = compute_interval(PeriodType::Week, reference).unwrap();
            assert_eq!(week.start.weekday(), Weekday::Mon);
        }
    }

    #[test]
    fn advance_agrees_with_computed_end() {
        for kind in PeriodType::ALL {
            for reference in sample_dates() {
                let period = compute_interval(kind, reference).unwrap();
                assert_eq!(advance(period.start, kind).unwrap(), period.end);

                let again = compute_interval(kind, period.start.date()).unwrap();
                assert_eq!(again, period);
            }
        }
    }

    #[test]
    fn month_advance_clamps_to_last_day() {
        assert_eq!(
            advance(midnight(2024, 1, 31), PeriodType::Month).unwrap(),
            midnight(2024, 2, 29)
        );
        assert_eq!(
            advance(midnight(2023, 1, 31), PeriodType::Month).unwrap(),
            midnight(2023, 2, 28)
        );
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        let result = compute_interval(PeriodType::Year, NaiveDate::MAX);
        assert!(matches!(result, Err(ServiceError::InternalServerError(_))));

        let result = advance(NaiveDateTime::MAX, PeriodType::Day);
        assert!(matches!(result, Err(ServiceError::InternalServerError(_))));
    }
}
