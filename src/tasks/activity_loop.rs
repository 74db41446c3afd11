use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::time::{MissedTickBehavior, interval};

use crate::service::activity_service::{ActivityService, CurrentActivity};
use crate::service::card_service::activity_card;
use crate::service::dashboard_state::DashboardState;

const ACTIVITY_REFRESH: Duration = Duration::from_secs(1);

pub async fn run_activity_loop(state: Arc<DashboardState>, activity: ActivityService) {
    let mut ticker = interval(ACTIVITY_REFRESH);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last: Option<CurrentActivity> = None;
    loop {
        ticker.tick().await;
        let current = activity_tick(&state, &activity, Utc::now()).await;
        if last.as_ref() != Some(&current) {
            debug!(
                "event=activity_change day_type={} activity={}",
                current.day_type, current.activity
            );
            last = Some(current);
        }
    }
}

pub async fn activity_tick(
    state: &DashboardState,
    activity: &ActivityService,
    now: DateTime<Utc>,
) -> CurrentActivity {
    let current = activity.current(now);
    state.set(activity_card(&current)).await;
    current
}
