// --- File: crates/detailbook_calcom/src/client.rs ---
use crate::error::CalcomError;
use crate::models::{
    AttendeeInput, BookingMetadata, CreateBookingRequest, CreateBookingResponse, SlotsResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use detailbook_common::{
    BookingConfirmation, BookingError, BookingOrder, BoxFuture, SchedulingService, HTTP_CLIENT,
};
use detailbook_config::CalcomConfig;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.cal.com/v2";
pub const DEFAULT_API_VERSION: &str = "2024-08-13";

#[derive(Clone)]
struct ApiCredentials {
    api_key: String,
    api_version: String,
}

/// Client for the Cal.com v2 availability and booking endpoints.
///
/// Two modes share one implementation: `direct` holds the API key and is
/// only ever constructed inside the relay process; `relayed` carries no
/// credentials and points its base URL at the relay, which is the mode any
/// untrusted client runs in.
#[derive(Clone)]
pub struct CalcomClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    credentials: Option<ApiCredentials>,
}

impl CalcomClient {
    /// Credentialed client talking straight to the API.
    pub fn direct(config: &CalcomConfig) -> Result<Self, CalcomError> {
        let api_key = config.api_key.clone().ok_or(CalcomError::ConfigError)?;
        Ok(CalcomClient {
            http: HTTP_CLIENT.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            username: config.username.clone(),
            credentials: Some(ApiCredentials {
                api_key,
                api_version: config
                    .api_version
                    .clone()
                    .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            }),
        })
    }

    /// Credential-free client that goes through the relay.
    pub fn relayed(relay_base_url: impl Into<String>, username: impl Into<String>) -> Self {
        CalcomClient {
            http: HTTP_CLIENT.clone(),
            base_url: relay_base_url.into(),
            username: username.into(),
            credentials: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => request
                .bearer_auth(&credentials.api_key)
                .header("cal-api-version", &credentials.api_version),
            None => request,
        }
    }

    /// Raw availability query over an inclusive date range. Dates are
    /// venue-local `YYYY-MM-DD` strings and are forwarded verbatim.
    pub async fn slots_in_range(
        &self,
        event_type_slug: &str,
        start: &str,
        end: &str,
    ) -> Result<SlotsResponse, CalcomError> {
        let url = format!("{}/slots", self.base_url);
        let request = self.http.get(&url).query(&[
            ("username", self.username.as_str()),
            ("eventTypeSlug", event_type_slug),
            ("start", start),
            ("end", end),
        ]);

        let response = self.apply_auth(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, event_type_slug, "slots query rejected");
            return Err(CalcomError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Bookable start instants for one service on one venue-local calendar
    /// day. An absent key means no availability, which is a valid empty
    /// result rather than an error.
    pub async fn slots_for_date(
        &self,
        event_type_slug: &str,
        date: NaiveDate,
    ) -> Result<Vec<DateTime<Utc>>, CalcomError> {
        // The calendar date is the venue's business day. It must cross the
        // wire and index the response as the same string; converting it to
        // UTC first would shift evening slots onto the wrong day for most
        // timezones west of the venue.
        let day = date.format("%Y-%m-%d").to_string();
        let response = self.slots_in_range(event_type_slug, &day, &day).await?;

        let mut times: Vec<DateTime<Utc>> = response
            .data
            .get(&day)
            .map(|slots| slots.iter().map(|slot| slot.start).collect())
            .unwrap_or_default();
        // Upstream order is ascending today but not contractual
        times.sort_unstable();
        debug!(event_type_slug, %day, count = times.len(), "fetched day availability");
        Ok(times)
    }

    /// Submit a booking. Non-2xx responses surface the upstream status and
    /// body so slot conflicts (409) stay distinguishable.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<CreateBookingResponse, CalcomError> {
        let url = format!("{}/bookings", self.base_url);
        let response = self
            .apply_auth(self.http.post(&url).json(request))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, "booking rejected by scheduling service");
            return Err(CalcomError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn confirmation_from(response: CreateBookingResponse) -> Result<BookingConfirmation, BookingError> {
    let data = response
        .data
        .ok_or_else(|| BookingError::Parse("booking response missing data".to_string()))?;
    let reference = data
        .uid
        .or_else(|| data.id.map(|id| id.to_string()))
        .ok_or_else(|| {
            BookingError::Parse("booking response missing a confirmation identifier".to_string())
        })?;
    Ok(BookingConfirmation {
        reference,
        status: data.status.unwrap_or_else(|| "accepted".to_string()),
    })
}

impl SchedulingService for CalcomClient {
    fn slots_for_date(
        &self,
        event_type_slug: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<DateTime<Utc>>, BookingError> {
        let slug = event_type_slug.to_string();
        Box::pin(async move {
            CalcomClient::slots_for_date(self, &slug, date)
                .await
                .map_err(Into::into)
        })
    }

    fn create_booking(
        &self,
        order: BookingOrder,
    ) -> BoxFuture<'_, BookingConfirmation, BookingError> {
        Box::pin(async move {
            let request = CreateBookingRequest {
                username: self.username.clone(),
                event_type_slug: order.event_type_slug,
                start: order.start,
                attendee: AttendeeInput {
                    name: order.attendee.name,
                    email: order.attendee.email,
                    time_zone: order.attendee.time_zone,
                    language: order.attendee.language,
                },
                location: order.location,
                metadata: BookingMetadata { phone: order.phone },
            };
            let response = CalcomClient::create_booking(self, &request)
                .await
                .map_err(BookingError::from)?;
            confirmation_from(response)
        })
    }
}
