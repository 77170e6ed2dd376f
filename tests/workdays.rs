#[cfg(test)]
mod tests {
    use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
    use clockfill::libs::workdays::{is_working_day, month_to_date, parse_time, working_days, WorkHours};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_working_days_skip_weekend() {
        // Friday to Monday
        let days = working_days(date(2024, 3, 1), date(2024, 3, 4));
        assert_eq!(days, vec![date(2024, 3, 1), date(2024, 3, 4)]);
    }

    #[test]
    fn test_working_days_full_month() {
        let days = working_days(date(2024, 3, 1), date(2024, 3, 31));
        assert_eq!(days.len(), 21);
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(days.iter().all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
        assert_eq!(days.first(), Some(&date(2024, 3, 1)));
        assert_eq!(days.last(), Some(&date(2024, 3, 29)));
    }

    #[test]
    fn test_working_days_inclusive_endpoints() {
        // Tuesday to Thursday
        let days = working_days(date(2024, 3, 5), date(2024, 3, 7));
        assert_eq!(days, vec![date(2024, 3, 5), date(2024, 3, 6), date(2024, 3, 7)]);

        let single = working_days(date(2024, 3, 5), date(2024, 3, 5));
        assert_eq!(single, vec![date(2024, 3, 5)]);
    }

    #[test]
    fn test_working_days_weekend_only_and_reversed_range() {
        assert!(working_days(date(2024, 3, 2), date(2024, 3, 3)).is_empty());
        assert!(working_days(date(2024, 3, 10), date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn test_working_days_matches_weekday_filter() {
        let start = date(2024, 2, 1);
        let end = date(2024, 4, 30);
        let expected: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).filter(|d| d.weekday().number_from_monday() <= 5).collect();
        assert_eq!(working_days(start, end), expected);
    }

    #[test]
    fn test_is_working_day() {
        assert!(is_working_day(date(2024, 3, 4))); // Monday
        assert!(is_working_day(date(2024, 3, 8))); // Friday
        assert!(!is_working_day(date(2024, 3, 9))); // Saturday
        assert!(!is_working_day(date(2024, 3, 10))); // Sunday
    }

    #[test]
    fn test_month_to_date_after_workday_start() {
        let now = date(2024, 3, 14).and_time(time(10, 15));
        assert_eq!(month_to_date(now, time(9, 0)), (date(2024, 3, 1), date(2024, 3, 14)));
    }

    #[test]
    fn test_month_to_date_before_workday_start() {
        let now = date(2024, 3, 14).and_time(time(8, 59));
        assert_eq!(month_to_date(now, time(9, 0)), (date(2024, 3, 1), date(2024, 3, 13)));
    }

    #[test]
    fn test_month_to_date_first_of_month_morning_is_empty() {
        let now = date(2024, 3, 1).and_time(time(7, 30));
        let (first, last) = month_to_date(now, time(9, 0));
        assert_eq!(first, date(2024, 3, 1));
        assert!(working_days(first, last).is_empty());
    }

    #[test]
    fn test_default_work_hours() {
        let hours = WorkHours::default();
        assert_eq!(hours.start, time(9, 0));
        assert_eq!(hours.end, time(16, 30));
    }

    #[test]
    fn test_work_hours_validation() {
        assert!(WorkHours::parse("08:00", "17:00").is_ok());
        assert!(WorkHours::parse("17:00", "08:00").is_err());
        assert!(WorkHours::parse("09:00", "09:00").is_err());
        assert!(WorkHours::parse("9am", "17:00").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:00").unwrap(), time(9, 0));
        assert_eq!(parse_time(" 16:30 ").unwrap(), time(16, 30));
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn test_window_in_utc() {
        let window = WorkHours::default().window_in(&Utc, date(2024, 3, 4)).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap());
        assert_eq!(window.start_rfc3339(), "2024-03-04T09:00:00Z");
        assert_eq!(window.end_rfc3339(), "2024-03-04T16:30:00Z");
    }

    #[test]
    fn test_window_in_offset_zone_is_sent_as_utc() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let window = WorkHours::default().window_in(&cet, date(2024, 3, 4)).unwrap();
        assert_eq!(window.start_rfc3339(), "2024-03-04T08:00:00Z");
        assert_eq!(window.end_rfc3339(), "2024-03-04T15:30:00Z");
    }
}
