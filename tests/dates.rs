#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use timeclaim::libs::date::{format_display, parse_canonical, parse_display, to_canonical, to_display};
    use timeclaim::libs::error::FormatError;

    #[test]
    fn test_to_display() {
        assert_eq!(to_display("2025-03-05").unwrap(), "05/03/2025");
        assert_eq!(to_display("1999-12-31").unwrap(), "31/12/1999");
    }

    #[test]
    fn test_to_canonical() {
        assert_eq!(to_canonical("05/03/2025").unwrap(), "2025-03-05");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(to_display("").unwrap(), "");
        assert_eq!(to_canonical("").unwrap(), "");
    }

    #[test]
    fn test_round_trip_across_a_leap_year() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            let canonical = date.format("%Y-%m-%d").to_string();
            assert_eq!(to_canonical(&to_display(&canonical).unwrap()).unwrap(), canonical);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_invalid_dates_fail_loudly() {
        for bad in ["2025-02-30", "2025-13-01", "2025-3-5", "25-03-05", "2025/03/05", "yyyy-mm-dd"] {
            assert!(matches!(parse_canonical(bad), Err(FormatError::Date(_))), "accepted {:?}", bad);
        }
        for bad in ["30/02/2025", "5/3/2025", "2025-03-05"] {
            assert!(matches!(parse_display(bad), Err(FormatError::Date(_))), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_format_display() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(format_display(&date), "01/04/2025");
    }
}
