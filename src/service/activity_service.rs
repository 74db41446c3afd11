use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use chrono_tz::Tz;
use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::models::schedule::{DayType, Resolution, ScheduleTable, day_type_for, select_day_type};
use crate::models::schedule_data::shared_builtin_schedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentActivity {
    pub day_type: DayType,
    pub activity: String,
    pub description: String,
}

impl CurrentActivity {
    fn new(day_type: DayType, resolution: Resolution) -> Self {
        Self {
            day_type,
            activity: resolution.activity,
            description: resolution.description,
        }
    }
}

/// Resolves the schedule against wall-clock time in the dashboard's zone.
#[derive(Clone)]
pub struct ActivityService {
    table: Arc<ScheduleTable>,
    timezone: Tz,
}

impl ActivityService {
    pub fn new(table: Arc<ScheduleTable>, timezone: Tz) -> Self {
        Self { table, timezone }
    }

    pub fn builtin(timezone: Tz) -> Self {
        Self::new(shared_builtin_schedule(), timezone)
    }

    /// Built-in table, or the validated table at `schedule_file` when given.
    pub fn load(schedule_file: Option<&str>, timezone: Tz) -> Result<Self> {
        match schedule_file {
            Some(path) => {
                let table = ScheduleTable::load(path)?;
                info!("event=schedule_load source={} status=ok", path);
                Ok(Self::new(Arc::new(table), timezone))
            }
            None => Ok(Self::builtin(timezone)),
        }
    }

    pub fn table(&self) -> &ScheduleTable {
        &self.table
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn at(&self, day_type: DayType, time: NaiveTime) -> CurrentActivity {
        CurrentActivity::new(day_type, self.table.resolve(day_type, time))
    }

    pub fn at_weekday_index(&self, weekday_index: u32, time: NaiveTime) -> Result<CurrentActivity> {
        Ok(self.at(select_day_type(weekday_index)?, time))
    }

    pub fn current(&self, now: DateTime<Utc>) -> CurrentActivity {
        let local = now.with_timezone(&self.timezone);
        self.at(day_type_for(local.weekday()), local.time())
    }
}
