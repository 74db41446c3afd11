use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::models::card::Card;
use crate::service::card_service::CardService;
use crate::service::dashboard_state::DashboardState;

/// Fetches the external cards once and publishes them.
pub async fn refresh_external_cards(state: &DashboardState, cards: &CardService) -> Vec<Card> {
    info!("event=card_refresh status=start");
    let fresh = cards.external_cards(Utc::now()).await;
    state.set_all(fresh.clone()).await;
    fresh
}

pub async fn run_initial_refresh(state: Arc<DashboardState>, cards: Arc<CardService>) {
    refresh_external_cards(&state, &cards).await;
}
