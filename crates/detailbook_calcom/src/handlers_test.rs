#[cfg(test)]
mod tests {
    use crate::client::CalcomClient;
    use crate::handlers::get_slots_handler;
    use crate::models::SlotsQuery;
    use axum::extract::{Query, State};
    use detailbook_common::BookingError;
    use std::sync::Arc;

    // Port 9 is the discard port; validation must fail before any request
    // would be attempted.
    fn client() -> Arc<CalcomClient> {
        Arc::new(CalcomClient::relayed(
            "http://127.0.0.1:9",
            "southern-utah-detailing",
        ))
    }

    fn query(start: &str, end: &str) -> SlotsQuery {
        SlotsQuery {
            username: "southern-utah-detailing".to_string(),
            event_type_slug: "express-wash".to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_start_date() {
        let result = get_slots_handler(State(client()), Query(query("01/05/2025", "2025-01-11"))).await;
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_inverted_range() {
        let result = get_slots_handler(State(client()), Query(query("2025-01-11", "2025-01-05"))).await;
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }
}
