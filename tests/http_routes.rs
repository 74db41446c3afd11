use std::sync::Arc;

use chrono::{DateTime, Utc};
use dailyDashboard::clients::http::Fetched;
use dailyDashboard::clients::quotes_client::Quote;
use dailyDashboard::error::{DashboardError, Result};
use dailyDashboard::handlers::http::{AppContext, routes};
use dailyDashboard::models::card::{Card, CardContent, CardKind};
use dailyDashboard::models::event::CalendarEvent;
use dailyDashboard::models::recipe::Recipe;
use dailyDashboard::service::activity_service::ActivityService;
use dailyDashboard::service::card_service::CardService;
use dailyDashboard::service::dashboard_state::DashboardState;
use dailyDashboard::service::sources::{CalendarSource, MemeSource, QuoteSource, RecipeSource};
use serde_json::Value;

struct OfflineSources;

#[async_trait::async_trait]
impl QuoteSource for OfflineSources {
    async fn quotes(&self) -> Result<Vec<Quote>> {
        Ok(vec![Quote {
            text: "“Refreshed.”".to_string(),
            author: "Tester".to_string(),
        }])
    }
}

#[async_trait::async_trait]
impl RecipeSource for OfflineSources {
    async fn random_recipe(&self) -> Result<Recipe> {
        Err(DashboardError::Parse("offline".to_string()))
    }
}

#[async_trait::async_trait]
impl CalendarSource for OfflineSources {
    async fn upcoming_events(&self, _now: DateTime<Utc>) -> Result<Option<Vec<CalendarEvent>>> {
        Ok(None)
    }
}

#[async_trait::async_trait]
impl MemeSource for OfflineSources {
    async fn trending_meme_url(&self) -> Result<Option<String>> {
        Ok(None)
    }

    async fn download(&self, _url: &str) -> Result<Fetched> {
        Err(DashboardError::Parse("offline".to_string()))
    }
}

fn context() -> Arc<AppContext> {
    let sources = Arc::new(OfflineSources);
    Arc::new(AppContext {
        state: Arc::new(DashboardState::new()),
        activity: ActivityService::builtin(chrono_tz::UTC),
        cards: Arc::new(CardService::new(
            sources.clone(),
            sources.clone(),
            sources.clone(),
            sources,
            chrono_tz::UTC,
        )),
    })
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn activity_endpoint_resolves_requested_instant() {
    let filter = routes(context());
    let res = warp::test::request()
        .method("GET")
        .path("/api/activity?day_type=wednesday&at=13:40")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 200);
    let body = json_body(res.body());
    assert_eq!(body["day_type"], "wednesday");
    assert_eq!(body["activity"], "Kid Pick-up (Early)");
    assert_eq!(body["description"], "Drive to school/daycare for early pickup.");
}

#[tokio::test]
async fn activity_endpoint_accepts_weekday_index() {
    let filter = routes(context());
    let res = warp::test::request()
        .method("GET")
        .path("/api/activity?weekday=6&at=06:00")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 200);
    let body = json_body(res.body());
    assert_eq!(body["day_type"], "weekend");
    assert_eq!(body["activity"], "Sleep");
}

#[tokio::test]
async fn activity_endpoint_rejects_unknown_day_type() {
    let filter = routes(context());
    let res = warp::test::request()
        .method("GET")
        .path("/api/activity?day_type=holiday&at=09:00")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 400);
    let body = json_body(res.body());
    assert!(body["error"].as_str().unwrap().contains("holiday"));
}

#[tokio::test]
async fn activity_endpoint_without_query_uses_now() {
    let filter = routes(context());
    let res = warp::test::request()
        .method("GET")
        .path("/api/activity")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 200);
    assert!(json_body(res.body())["activity"].is_string());
}

#[tokio::test]
async fn index_renders_all_cards() {
    let filter = routes(context());
    let res = warp::test::request().method("GET").path("/").reply(&filter).await;
    assert_eq!(res.status(), 200);
    let html = String::from_utf8(res.body().to_vec()).unwrap();
    for kind in CardKind::ALL {
        assert!(html.contains(kind.title()), "missing {}", kind.title());
    }
}

#[tokio::test]
async fn humor_image_is_served_once_loaded() {
    let ctx = context();
    let filter = routes(ctx.clone());
    let missing = warp::test::request()
        .method("GET")
        .path("/cards/humor/image")
        .reply(&filter)
        .await;
    assert_eq!(missing.status(), 404);

    ctx.state
        .set(Card::new(
            CardKind::Humor,
            CardContent::Image {
                source_url: "https://i.imgflip.com/a.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            },
        ))
        .await;
    let res = warp::test::request()
        .method("GET")
        .path("/cards/humor/image")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "image/png");
    assert_eq!(res.body().as_ref(), &[1, 2, 3]);
}

#[tokio::test]
async fn refresh_endpoint_refetches_cards() {
    let ctx = context();
    let filter = routes(ctx.clone());
    let res = warp::test::request()
        .method("POST")
        .path("/api/refresh")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), 200);
    let body = json_body(res.body());
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(
        ctx.state.get(CardKind::Quote).await,
        Some(Card::text(CardKind::Quote, "“Refreshed.”\n- Tester"))
    );
    assert_eq!(
        ctx.state.get(CardKind::Recipe).await,
        Some(Card::text(CardKind::Recipe, "Failed to fetch recipe."))
    );

    let cards = warp::test::request()
        .method("GET")
        .path("/api/cards")
        .reply(&filter)
        .await;
    let listed = json_body(cards.body());
    assert_eq!(listed[0]["kind"], "activity");
    assert_eq!(listed[1]["title"], "Quote of the Day");
}
