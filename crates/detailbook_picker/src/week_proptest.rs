#[cfg(test)]
mod tests {
    use crate::week::WeekWindow;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        // A generous range around the site's lifetime
        (0i64..36_500).prop_map(|offset| {
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
        })
    }

    proptest! {
        #[test]
        fn every_window_starts_on_sunday_and_spans_seven_days(date in arb_date()) {
            let window = WeekWindow::containing(date);
            prop_assert_eq!(window.start().weekday(), Weekday::Sun);
            prop_assert_eq!(window.end() - window.start(), Duration::days(6));
            prop_assert!(window.contains(date));
            prop_assert_eq!(window.dates().count(), 7);
        }

        #[test]
        fn navigation_preserves_the_week_boundary(date in arb_date()) {
            let window = WeekWindow::containing(date);
            prop_assert_eq!(window.next().start().weekday(), Weekday::Sun);
            prop_assert_eq!(window.prev().start().weekday(), Weekday::Sun);
            prop_assert_eq!(window.next().prev(), window);
        }
    }
}
