use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;

use crate::clients::http::get_text_authorized;
use crate::error::Result;
use crate::models::event::{CalendarEvent, parse_events_response};

pub struct EventQuery<'a> {
    pub api_base: &'a str,
    pub calendar_id: &'a str,
    pub access_token: &'a str,
    pub max_results: u32,
    pub time_min: DateTime<Utc>,
}

/// Upcoming single events ordered by start time, starting at `time_min`.
pub async fn list_upcoming_events(client: &Client, query: &EventQuery<'_>) -> Result<Vec<CalendarEvent>> {
    let url = events_url(query.api_base, query.calendar_id);
    let params = [
        ("timeMin", query.time_min.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ("maxResults", query.max_results.to_string()),
        ("singleEvents", "true".to_string()),
        ("orderBy", "startTime".to_string()),
    ];
    let body = get_text_authorized(client, &url, &params, query.access_token).await?;
    parse_events_response(&body)
}

fn events_url(api_base: &str, calendar_id: &str) -> String {
    format!(
        "{}/calendars/{}/events",
        api_base.trim_end_matches('/'),
        urlencoding::encode(calendar_id)
    )
}
