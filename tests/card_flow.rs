use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use dailyDashboard::clients::http::Fetched;
use dailyDashboard::clients::quotes_client::Quote;
use dailyDashboard::error::{DashboardError, Result};
use dailyDashboard::models::card::{Card, CardContent, CardKind, Section};
use dailyDashboard::models::event::{CalendarEvent, EventStart};
use dailyDashboard::models::recipe::Recipe;
use dailyDashboard::service::activity_service::ActivityService;
use dailyDashboard::service::card_service::{
    CALENDAR_UNAVAILABLE, CardService, MEME_MISSING, NO_EVENTS, NO_QUOTES, QUOTE_FAILED,
    RECIPE_FAILED,
};
use dailyDashboard::service::dashboard_state::DashboardState;
use dailyDashboard::service::sources::{CalendarSource, MemeSource, QuoteSource, RecipeSource};
use dailyDashboard::tasks::activity_loop::activity_tick;
use dailyDashboard::tasks::card_refresh::refresh_external_cards;

#[derive(Clone)]
struct FakeSources {
    quotes: std::result::Result<Vec<Quote>, String>,
    recipe: std::result::Result<Recipe, String>,
    events: std::result::Result<Option<Vec<CalendarEvent>>, String>,
    meme_url: std::result::Result<Option<String>, String>,
    image: std::result::Result<Vec<u8>, String>,
}

fn failure(message: &str) -> DashboardError {
    DashboardError::Parse(message.to_string())
}

#[async_trait::async_trait]
impl QuoteSource for FakeSources {
    async fn quotes(&self) -> Result<Vec<Quote>> {
        self.quotes.clone().map_err(|e| failure(&e))
    }
}

#[async_trait::async_trait]
impl RecipeSource for FakeSources {
    async fn random_recipe(&self) -> Result<Recipe> {
        self.recipe.clone().map_err(|e| failure(&e))
    }
}

#[async_trait::async_trait]
impl CalendarSource for FakeSources {
    async fn upcoming_events(&self, _now: DateTime<Utc>) -> Result<Option<Vec<CalendarEvent>>> {
        self.events.clone().map_err(|e| failure(&e))
    }
}

#[async_trait::async_trait]
impl MemeSource for FakeSources {
    async fn trending_meme_url(&self) -> Result<Option<String>> {
        self.meme_url.clone().map_err(|e| failure(&e))
    }

    async fn download(&self, _url: &str) -> Result<Fetched> {
        match &self.image {
            Ok(bytes) => Ok(Fetched {
                content_type: Some("image/png".to_string()),
                body: bytes.clone(),
            }),
            Err(e) => Err(failure(e)),
        }
    }
}

fn healthy() -> FakeSources {
    FakeSources {
        quotes: Ok(vec![Quote {
            text: "“Stay curious.”".to_string(),
            author: "Someone".to_string(),
        }]),
        recipe: Ok(Recipe {
            title: "Omelette".to_string(),
            ingredients: vec!["2 Eggs".to_string()],
            instructions: "Whisk.\r\nCook.".to_string(),
        }),
        events: Ok(Some(vec![
            CalendarEvent {
                summary: "Dentist".to_string(),
                start: EventStart::At(Utc.with_ymd_and_hms(2026, 2, 10, 15, 30, 0).unwrap()),
            },
            CalendarEvent {
                summary: "Holiday".to_string(),
                start: EventStart::AllDay(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()),
            },
        ])),
        meme_url: Ok(Some("https://i.imgflip.com/a.png".to_string())),
        image: Ok(vec![137, 80, 78, 71]),
    }
}

fn service(fake: FakeSources) -> CardService {
    let fake = Arc::new(fake);
    CardService::new(
        fake.clone(),
        fake.clone(),
        fake.clone(),
        fake,
        chrono_tz::America::New_York,
    )
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 9, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn healthy_sources_fill_every_card() {
    let cards = service(healthy()).external_cards(now()).await;
    let kinds: Vec<CardKind> = cards.iter().map(|card| card.kind).collect();
    assert_eq!(
        kinds,
        vec![CardKind::Quote, CardKind::Recipe, CardKind::Events, CardKind::Humor]
    );
    assert_eq!(cards[0], Card::text(CardKind::Quote, "“Stay curious.”\n- Someone"));
    assert_eq!(
        cards[2].content,
        CardContent::Text {
            sections: vec![
                Section::plain("Tue, Feb 10 at 10:30 AM\n- Dentist"),
                Section::plain("Sat, Feb 14 (All-day)\n- Holiday"),
            ]
        }
    );
    match &cards[3].content {
        CardContent::Image {
            source_url,
            content_type,
            bytes,
        } => {
            assert_eq!(source_url, "https://i.imgflip.com/a.png");
            assert_eq!(content_type, "image/png");
            assert_eq!(bytes.len(), 4);
        }
        other => panic!("expected image, got {:?}", other),
    }
}

#[tokio::test]
async fn failures_degrade_to_placeholders() {
    let fake = FakeSources {
        quotes: Err("offline".to_string()),
        recipe: Err("offline".to_string()),
        events: Err("token expired".to_string()),
        meme_url: Err("offline".to_string()),
        image: Err("unused".to_string()),
    };
    let cards = service(fake).external_cards(now()).await;
    assert_eq!(cards[0], Card::text(CardKind::Quote, QUOTE_FAILED));
    assert_eq!(cards[1], Card::text(CardKind::Recipe, RECIPE_FAILED));
    assert_eq!(
        cards[2],
        Card::text(
            CardKind::Events,
            "Error fetching events: unexpected payload: token expired"
        )
    );
    assert_eq!(cards[3], Card::text(CardKind::Humor, MEME_MISSING));
}

#[tokio::test]
async fn empty_results_use_their_own_messages() {
    let mut fake = healthy();
    fake.quotes = Ok(Vec::new());
    fake.events = Ok(Some(Vec::new()));
    fake.meme_url = Ok(None);
    let svc = service(fake);
    assert_eq!(svc.quote_card().await, Card::text(CardKind::Quote, NO_QUOTES));
    assert_eq!(svc.event_lines(now()).await, vec![NO_EVENTS.to_string()]);
    assert_eq!(svc.humor_card().await, Card::text(CardKind::Humor, MEME_MISSING));
}

#[tokio::test]
async fn missing_calendar_credentials_report_unavailable() {
    let mut fake = healthy();
    fake.events = Ok(None);
    let lines = service(fake).event_lines(now()).await;
    assert_eq!(lines, vec![CALENDAR_UNAVAILABLE.to_string()]);
}

#[tokio::test]
async fn image_download_failure_is_reported_in_the_card() {
    let mut fake = healthy();
    fake.image = Err("connection reset".to_string());
    let card = service(fake).humor_card().await;
    assert_eq!(
        card,
        Card::text(
            CardKind::Humor,
            "Error loading meme: unexpected payload: connection reset"
        )
    );
}

#[tokio::test]
async fn refresh_publishes_into_state_and_tick_updates_activity() {
    let state = DashboardState::new();
    let svc = service(healthy());
    refresh_external_cards(&state, &svc).await;
    assert_eq!(
        state.get(CardKind::Quote).await,
        Some(Card::text(CardKind::Quote, "“Stay curious.”\n- Someone"))
    );

    let activity = ActivityService::builtin(chrono_tz::UTC);
    // Monday 09:00 UTC.
    let current = activity_tick(&state, &activity, now() - chrono::Duration::hours(3)).await;
    assert_eq!(current.activity, "Study & Coursework");
    let card = state.get(CardKind::Activity).await.unwrap();
    assert_eq!(
        card.content,
        CardContent::Text {
            sections: vec![Section::titled(
                "Study & Coursework",
                vec![
                    "Focused academic work, lectures, readings, and assignments. Minimize distractions."
                        .to_string()
                ],
            )]
        }
    );
}
