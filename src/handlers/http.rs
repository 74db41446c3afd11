use std::convert::Infallible;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use log::warn;
use serde::Deserialize;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::error::{DashboardError, Result};
use crate::models::card::{CardContent, CardKind};
use crate::models::schedule::{DayType, day_type_for, parse_clock, select_day_type};
use crate::service::activity_service::{ActivityService, CurrentActivity};
use crate::service::card_service::CardService;
use crate::service::dashboard_state::DashboardState;
use crate::service::render::render_html;
use crate::tasks::card_refresh::refresh_external_cards;

pub struct AppContext {
    pub state: Arc<DashboardState>,
    pub activity: ActivityService,
    pub cards: Arc<CardService>,
}

/// Optional overrides for `/api/activity`; without them "now" is used.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    pub at: Option<String>,
    pub day_type: Option<String>,
    pub weekday: Option<u32>,
}

pub fn resolve_query(activity: &ActivityService, query: &ActivityQuery) -> Result<CurrentActivity> {
    let local_now = Utc::now().with_timezone(&activity.timezone());
    let time = match &query.at {
        Some(at) => parse_clock(at)?,
        None => local_now.time(),
    };
    let day_type = match (&query.day_type, query.weekday) {
        (Some(_), Some(_)) => {
            return Err(DashboardError::InvalidArgument(
                "pass either day_type or weekday, not both".to_string(),
            ));
        }
        (Some(name), None) => name.parse::<DayType>()?,
        (None, Some(index)) => select_day_type(index)?,
        (None, None) => day_type_for(local_now.weekday()),
    };
    Ok(activity.at(day_type, time))
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    let body = warp::reply::json(&serde_json::json!({ "error": message }));
    warp::reply::with_status(body, status).into_response()
}

async fn index(ctx: Arc<AppContext>) -> std::result::Result<Response, Infallible> {
    let cards = ctx.state.snapshot().await;
    Ok(warp::reply::html(render_html(&cards)).into_response())
}

async fn activity(
    query: ActivityQuery,
    ctx: Arc<AppContext>,
) -> std::result::Result<Response, Infallible> {
    match resolve_query(&ctx.activity, &query) {
        Ok(current) => Ok(warp::reply::json(&current).into_response()),
        Err(err) => {
            warn!("event=http_activity status=bad_request error={}", err);
            Ok(error_reply(StatusCode::BAD_REQUEST, &err.to_string()))
        }
    }
}

async fn cards(ctx: Arc<AppContext>) -> std::result::Result<Response, Infallible> {
    let cards = ctx.state.snapshot().await;
    Ok(warp::reply::json(&cards).into_response())
}

async fn humor_image(ctx: Arc<AppContext>) -> std::result::Result<Response, Infallible> {
    match ctx.state.get(CardKind::Humor).await.map(|card| card.content) {
        Some(CardContent::Image {
            content_type,
            bytes,
            ..
        }) => Ok(warp::reply::with_header(bytes, "content-type", content_type).into_response()),
        _ => Ok(error_reply(StatusCode::NOT_FOUND, "no image loaded")),
    }
}

async fn refresh(ctx: Arc<AppContext>) -> std::result::Result<Response, Infallible> {
    let cards = refresh_external_cards(&ctx.state, &ctx.cards).await;
    Ok(warp::reply::json(&cards).into_response())
}

pub fn routes(
    ctx: Arc<AppContext>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let with_ctx = warp::any().map(move || ctx.clone());

    let index_route = warp::path::end()
        .and(warp::get())
        .and(with_ctx.clone())
        .and_then(index);
    let activity_route = warp::path!("api" / "activity")
        .and(warp::get())
        .and(warp::query::<ActivityQuery>())
        .and(with_ctx.clone())
        .and_then(activity);
    let cards_route = warp::path!("api" / "cards")
        .and(warp::get())
        .and(with_ctx.clone())
        .and_then(cards);
    let refresh_route = warp::path!("api" / "refresh")
        .and(warp::post())
        .and(with_ctx.clone())
        .and_then(refresh);
    let image_route = warp::path!("cards" / "humor" / "image")
        .and(warp::get())
        .and(with_ctx)
        .and_then(humor_image);

    index_route
        .or(activity_route)
        .unify()
        .or(cards_route)
        .unify()
        .or(refresh_route)
        .unify()
        .or(image_route)
        .unify()
}
