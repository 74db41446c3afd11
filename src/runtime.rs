use std::sync::Arc;

use log::info;

use crate::config::DashboardSettings;
use crate::error::Result;
use crate::handlers::http::{AppContext, routes};
use crate::service::activity_service::ActivityService;
use crate::service::card_service::CardService;
use crate::service::dashboard_state::DashboardState;
use crate::service::sources::HttpSources;
use crate::tasks::activity_loop;
use crate::tasks::card_refresh;
use crate::tasks::task_runner::TaskRunner;

pub fn build_card_service(settings: &DashboardSettings) -> Result<CardService> {
    let sources = Arc::new(HttpSources::new(settings)?);
    Ok(CardService::new(
        sources.clone(),
        sources.clone(),
        sources.clone(),
        sources,
        settings.timezone,
    ))
}

pub async fn run_api(settings: DashboardSettings) -> Result<()> {
    let activity = ActivityService::load(settings.schedule_file.as_deref(), settings.timezone)?;
    let cards = Arc::new(build_card_service(&settings)?);
    let state = Arc::new(DashboardState::new());

    let mut task_runner = TaskRunner::new();
    task_runner.add_task("activity_loop", {
        let state = state.clone();
        let activity = activity.clone();
        move || {
            tokio::spawn(async move {
                activity_loop::run_activity_loop(state, activity).await;
            });
        }
    });
    task_runner.add_task("initial_refresh", {
        let state = state.clone();
        let cards = cards.clone();
        move || {
            tokio::spawn(async move {
                card_refresh::run_initial_refresh(state, cards).await;
            });
        }
    });
    task_runner.start_all();

    let ctx = Arc::new(AppContext {
        state,
        activity,
        cards,
    });
    info!("event=server_start addr={} timezone={}", settings.addr, settings.timezone);
    warp::serve(routes(ctx)).run(settings.addr).await;
    info!("event=server_stop addr={}", settings.addr);
    Ok(())
}
