use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{DashboardError, Result};

pub const UNTITLED_EVENT: &str = "(No title)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStart {
    At(DateTime<Utc>),
    AllDay(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: EventStart,
}

impl CalendarEvent {
    /// Two-line display form: start on the first line, `- summary` on the second.
    pub fn display(&self, tz: Tz) -> String {
        let start = match &self.start {
            EventStart::At(at) => at.with_timezone(&tz).format("%a, %b %d at %I:%M %p").to_string(),
            EventStart::AllDay(day) => day.format("%a, %b %d (All-day)").to_string(),
        };
        format!("{}\n- {}", start, self.summary)
    }
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    items: Vec<EventItem>,
}

#[derive(Debug, Deserialize)]
struct EventItem {
    summary: Option<String>,
    start: EventTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTime {
    date_time: Option<String>,
    date: Option<String>,
}

impl EventTime {
    fn parse(&self) -> Result<EventStart> {
        if let Some(date_time) = &self.date_time {
            let at = DateTime::parse_from_rfc3339(date_time)
                .map_err(|e| DashboardError::Parse(format!("event dateTime `{}`: {}", date_time, e)))?;
            return Ok(EventStart::At(at.with_timezone(&Utc)));
        }
        if let Some(date) = &self.date {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| DashboardError::Parse(format!("event date `{}`: {}", date, e)))?;
            return Ok(EventStart::AllDay(day));
        }
        Err(DashboardError::Parse("event has neither dateTime nor date".to_string()))
    }
}

/// Parses a Google Calendar `events.list` response body.
pub fn parse_events_response(body: &str) -> Result<Vec<CalendarEvent>> {
    let response: EventsResponse = serde_json::from_str(body)
        .map_err(|e| DashboardError::Parse(format!("events payload: {}", e)))?;
    response
        .items
        .into_iter()
        .map(|item| {
            Ok(CalendarEvent {
                summary: item.summary.unwrap_or_else(|| UNTITLED_EVENT.to_string()),
                start: item.start.parse()?,
            })
        })
        .collect()
}
