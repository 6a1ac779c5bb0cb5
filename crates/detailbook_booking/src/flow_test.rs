#[cfg(test)]
mod tests {
    use crate::flow::BookingFlow;
    use crate::form::BookingForm;
    use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::America::Denver;
    use detailbook_catalog::ServiceCatalog;
    use detailbook_common::{
        upstream_error, BookingConfirmation, BookingError, BookingOrder, BoxFuture,
        SchedulingService,
    };
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    fn catalog() -> Arc<ServiceCatalog> {
        let packages = r#"{
            "packages": [
                { "name": "Express Wash", "price": 79, "description": "Quick exterior wash." }
            ]
        }"#;
        Arc::new(ServiceCatalog::from_json(packages, None).unwrap())
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Avery Calder".to_string(),
            email: "avery@example.com".to_string(),
            phone: "(435) 555-0142".to_string(),
            street: "123 Main St".to_string(),
            city: "St. George".to_string(),
            state: "UT".to_string(),
            zip: "84770".to_string(),
            vehicle: "2021 Subaru Outback".to_string(),
        }
    }

    /// A venue-local start instant on the given day.
    fn local_slot(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
        Denver
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[derive(Default)]
    struct PageScheduler {
        slots: Mutex<BTreeMap<NaiveDate, Vec<DateTime<Utc>>>>,
        bookings: Mutex<Vec<BookingOrder>>,
        rejection: Mutex<Option<(u16, String)>>,
    }

    impl PageScheduler {
        fn put_slots(&self, date: NaiveDate, times: Vec<DateTime<Utc>>) {
            self.slots.lock().unwrap().insert(date, times);
        }

        fn reject_with(&self, status: u16, message: &str) {
            *self.rejection.lock().unwrap() = Some((status, message.to_string()));
        }

        fn booking_count(&self) -> usize {
            self.bookings.lock().unwrap().len()
        }
    }

    impl SchedulingService for PageScheduler {
        fn slots_for_date(
            &self,
            _event_type_slug: &str,
            date: NaiveDate,
        ) -> BoxFuture<'_, Vec<DateTime<Utc>>, BookingError> {
            let times = self
                .slots
                .lock()
                .unwrap()
                .get(&date)
                .cloned()
                .unwrap_or_default();
            Box::pin(async move { Ok(times) })
        }

        fn create_booking(
            &self,
            order: BookingOrder,
        ) -> BoxFuture<'_, BookingConfirmation, BookingError> {
            self.bookings.lock().unwrap().push(order);
            let rejection = self.rejection.lock().unwrap().clone();
            Box::pin(async move {
                match rejection {
                    Some((status, message)) => Err(upstream_error(status, message)),
                    None => Ok(BookingConfirmation {
                        reference: "bk_42".to_string(),
                        status: "accepted".to_string(),
                    }),
                }
            })
        }
    }

    /// Walks the page to a committed date-time choice: select the service,
    /// open the picker, move to next week (all of it lies in the future),
    /// pick the day and confirm the slot.
    async fn commit_a_selection(flow: &BookingFlow, scheduler: &PageScheduler) -> DateTime<Utc> {
        flow.selector().select("express-wash").unwrap();
        let snapshot = flow.picker().open().await.unwrap();
        let target = snapshot.window.next().start() + Duration::days(3);
        let slot = local_slot(target, 14, 0);
        scheduler.put_slots(target, vec![slot]);

        flow.picker().next_week().await.unwrap();
        flow.picker().select_day(target).unwrap();
        flow.picker().confirm_time(slot).unwrap();
        slot
    }

    #[tokio::test]
    async fn missing_email_fails_validation_without_a_network_call() {
        let scheduler = Arc::new(PageScheduler::default());
        let flow = BookingFlow::new(catalog(), scheduler.clone(), Denver, "en");
        commit_a_selection(&flow, &scheduler).await;

        let mut form = filled_form();
        form.email = String::new();
        let result = flow.submit(&mut form).await;

        match result {
            Err(BookingError::Validation(message)) => {
                assert!(message.contains("valid email"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert_eq!(scheduler.booking_count(), 0);
        // Nothing was reset; the visitor fixes the field and resubmits
        assert!(flow.picker().selection().is_complete());
        assert_eq!(form.name, "Avery Calder");
    }

    #[tokio::test]
    async fn missing_service_and_time_are_reported_together() {
        let scheduler = Arc::new(PageScheduler::default());
        let flow = BookingFlow::new(catalog(), scheduler.clone(), Denver, "en");

        let mut form = filled_form();
        let result = flow.submit(&mut form).await;
        match result {
            Err(BookingError::Validation(message)) => {
                assert!(message.contains("select a service"));
                assert!(message.contains("select a date and time"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert_eq!(scheduler.booking_count(), 0);
    }

    #[tokio::test]
    async fn slot_conflict_keeps_the_selection_for_a_retry() {
        let scheduler = Arc::new(PageScheduler::default());
        scheduler.reject_with(409, "slot no longer available");
        let flow = BookingFlow::new(catalog(), scheduler.clone(), Denver, "en");
        let slot = commit_a_selection(&flow, &scheduler).await;

        let mut form = filled_form();
        let result = flow.submit(&mut form).await;
        match result {
            Err(BookingError::Upstream { status_code, .. }) => assert_eq!(status_code, 409),
            other => panic!("expected an upstream error, got {other:?}"),
        }

        // The visitor can pick a different time without restarting
        let selection = flow.picker().selection();
        assert_eq!(selection.time(), Some(slot));
        assert!(flow.selector().selected().is_some());
        assert_eq!(form.name, "Avery Calder");
    }

    #[tokio::test]
    async fn a_confirmed_booking_resets_the_whole_page() {
        let scheduler = Arc::new(PageScheduler::default());
        let flow = BookingFlow::new(catalog(), scheduler.clone(), Denver, "en");
        commit_a_selection(&flow, &scheduler).await;

        let mut form = filled_form();
        let confirmation = flow.submit(&mut form).await.unwrap();
        assert_eq!(confirmation.reference, "bk_42");
        assert_eq!(scheduler.booking_count(), 1);

        assert!(flow.selector().selected().is_none());
        let selection = flow.picker().selection();
        assert!(selection.date().is_none());
        assert!(selection.time().is_none());
        assert!(form.name.is_empty());

        let order = &scheduler.bookings.lock().unwrap()[0];
        assert_eq!(order.event_type_slug, "express-wash");
        assert_eq!(order.attendee.time_zone, "America/Denver");
    }
}
