use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::clients::calendar_client::{EventQuery, list_upcoming_events};
use crate::clients::http::{Fetched, build_client};
use crate::clients::meme_client::{fetch_image, fetch_trending_meme_url};
use crate::clients::quotes_client::{Quote, fetch_quotes};
use crate::clients::recipe_client::fetch_random_recipe;
use crate::config::{DashboardSettings, SourceUrls};
use crate::error::Result;
use crate::models::event::CalendarEvent;
use crate::models::recipe::Recipe;

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quotes(&self) -> Result<Vec<Quote>>;
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn random_recipe(&self) -> Result<Recipe>;
}

#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// `Ok(None)` when no calendar credentials are configured.
    async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Option<Vec<CalendarEvent>>>;
}

#[async_trait]
pub trait MemeSource: Send + Sync {
    async fn trending_meme_url(&self) -> Result<Option<String>>;
    async fn download(&self, url: &str) -> Result<Fetched>;
}

/// Live sources backed by one shared HTTP client.
pub struct HttpSources {
    client: Client,
    urls: SourceUrls,
    calendar_token: Option<String>,
    calendar_id: String,
    max_events: u32,
}

impl HttpSources {
    pub fn new(settings: &DashboardSettings) -> Result<Self> {
        Ok(Self {
            client: build_client(settings.http_timeout)?,
            urls: settings.urls.clone(),
            calendar_token: settings.calendar_token.clone(),
            calendar_id: settings.calendar_id.clone(),
            max_events: settings.max_events,
        })
    }
}

#[async_trait]
impl QuoteSource for HttpSources {
    async fn quotes(&self) -> Result<Vec<Quote>> {
        fetch_quotes(&self.client, &self.urls.quotes).await
    }
}

#[async_trait]
impl RecipeSource for HttpSources {
    async fn random_recipe(&self) -> Result<Recipe> {
        fetch_random_recipe(&self.client, &self.urls.recipe).await
    }
}

#[async_trait]
impl CalendarSource for HttpSources {
    async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Option<Vec<CalendarEvent>>> {
        let Some(token) = &self.calendar_token else {
            return Ok(None);
        };
        let query = EventQuery {
            api_base: &self.urls.calendar_api,
            calendar_id: &self.calendar_id,
            access_token: token,
            max_results: self.max_events,
            time_min: now,
        };
        Ok(Some(list_upcoming_events(&self.client, &query).await?))
    }
}

#[async_trait]
impl MemeSource for HttpSources {
    async fn trending_meme_url(&self) -> Result<Option<String>> {
        fetch_trending_meme_url(&self.client, &self.urls.memes).await
    }

    async fn download(&self, url: &str) -> Result<Fetched> {
        fetch_image(&self.client, url).await
    }
}
