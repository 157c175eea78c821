use chrono::NaiveDate;
use sjl_utils::dates::year_bounds;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Every day of a calendar year, Jan 1 through Dec 31.
    ///
    /// Returns `None` when chrono can't represent the year.
    pub fn calendar_year(year: i32) -> Option<DateRange> {
        year_bounds(year).map(|(first, last)| DateRange(first, last))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        match current.succ_opt() {
            Some(next) => self.0 = next,
            // Reached NaiveDate::MAX; make the range empty.
            None => self.1 = NaiveDate::MIN,
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
        let range = DateRange(start, end);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[4], end);
    }

    #[test]
    fn test_date_range_single_day() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let range = DateRange(start, start);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0], start);
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        let range = DateRange(start, end);
        let dates: Vec<NaiveDate> = range.collect();
        assert_eq!(dates.len(), 0);
    }

    #[test]
    fn test_calendar_year_leap() {
        let dates: Vec<NaiveDate> = DateRange::calendar_year(2020).unwrap().collect();
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(dates[365], NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()));
    }

    #[test]
    fn test_calendar_year_common() {
        assert_eq!(DateRange::calendar_year(2023).unwrap().count(), 365);
    }

    #[test]
    fn test_range_ending_at_max_terminates() {
        let range = DateRange(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(range.count(), 1);
    }
}
