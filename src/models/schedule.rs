use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

pub const DEFAULT_ACTIVITY: &str = "Unscheduled Time";
pub const DEFAULT_DESCRIPTION: &str = "Flexible time for tasks or relaxation.";

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Wednesday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 3] = [DayType::Weekday, DayType::Wednesday, DayType::Weekend];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Wednesday => "wednesday",
            DayType::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekday" => Ok(DayType::Weekday),
            "wednesday" => Ok(DayType::Wednesday),
            "weekend" => Ok(DayType::Weekend),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown day type `{}`",
                other
            ))),
        }
    }
}

/// Maps a Monday-based weekday index (0..=6) to its day type.
pub fn select_day_type(weekday_index: u32) -> Result<DayType> {
    match weekday_index {
        2 => Ok(DayType::Wednesday),
        0 | 1 | 3 | 4 => Ok(DayType::Weekday),
        5 | 6 => Ok(DayType::Weekend),
        other => Err(DashboardError::InvalidArgument(format!(
            "weekday index {} is outside 0..=6",
            other
        ))),
    }
}

pub fn day_type_for(weekday: Weekday) -> DayType {
    match weekday {
        Weekday::Wed => DayType::Wednesday,
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBlock {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub activity: String,
    pub description: String,
}

impl TimeBlock {
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub activity: String,
    pub description: String,
}

impl Resolution {
    pub fn unscheduled() -> Self {
        Self {
            activity: DEFAULT_ACTIVITY.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn is_unscheduled(&self) -> bool {
        self.activity == DEFAULT_ACTIVITY && self.description == DEFAULT_DESCRIPTION
    }
}

impl From<&TimeBlock> for Resolution {
    fn from(block: &TimeBlock) -> Self {
        Self {
            activity: block.activity.clone(),
            description: block.description.clone(),
        }
    }
}

/// Raw block as authored in a schedule file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub start: String,
    pub end: String,
    pub activity: String,
    #[serde(default)]
    pub description: String,
}

impl RawBlock {
    fn into_block(self) -> Result<TimeBlock> {
        Ok(TimeBlock {
            start: parse_clock(&self.start)?,
            end: parse_clock(&self.end)?,
            activity: self.activity,
            description: self.description,
        })
    }
}

pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|e| {
        DashboardError::InvalidArgument(format!("`{}` is not an HH:MM time: {}", value, e))
    })
}

#[derive(Debug, Clone)]
pub struct ScheduleTable {
    days: HashMap<DayType, Vec<TimeBlock>>,
}

impl ScheduleTable {
    pub fn from_raw(raw: HashMap<DayType, Vec<RawBlock>>) -> Result<Self> {
        let mut days = HashMap::new();
        for (day_type, blocks) in raw {
            let blocks = blocks
                .into_iter()
                .map(RawBlock::into_block)
                .collect::<Result<Vec<_>>>()?;
            days.insert(day_type, blocks);
        }
        Ok(Self { days })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<DayType, Vec<RawBlock>> = serde_json::from_str(json)
            .map_err(|e| DashboardError::Schedule(format!("failed to parse schedule: {}", e)))?;
        let table = Self::from_raw(raw)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn blocks(&self, day_type: DayType) -> &[TimeBlock] {
        self.days.get(&day_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First block containing `time`, or the unscheduled default.
    pub fn resolve(&self, day_type: DayType, time: NaiveTime) -> Resolution {
        self.blocks(day_type)
            .iter()
            .find(|block| block.contains(time))
            .map(Resolution::from)
            .unwrap_or_else(Resolution::unscheduled)
    }

    pub fn resolve_named(&self, day_type: &str, time: NaiveTime) -> Result<Resolution> {
        let day_type = day_type.parse::<DayType>()?;
        Ok(self.resolve(day_type, time))
    }

    /// Every day type present, each list sorted with `start < end` and no overlap.
    pub fn validate(&self) -> Result<()> {
        for day_type in DayType::ALL {
            let Some(blocks) = self.days.get(&day_type) else {
                return Err(DashboardError::Schedule(format!(
                    "no blocks defined for {}",
                    day_type
                )));
            };
            for (idx, block) in blocks.iter().enumerate() {
                if block.start >= block.end {
                    return Err(DashboardError::Schedule(format!(
                        "{} block {} ({}) starts at {} but ends at {}",
                        day_type,
                        idx,
                        block.activity,
                        block.start.format(TIME_FORMAT),
                        block.end.format(TIME_FORMAT)
                    )));
                }
                if let Some(prev) = idx.checked_sub(1).map(|p| &blocks[p]) {
                    if block.start < prev.start {
                        return Err(DashboardError::Schedule(format!(
                            "{} block {} ({}) is out of order",
                            day_type, idx, block.activity
                        )));
                    }
                    if block.start < prev.end {
                        return Err(DashboardError::Schedule(format!(
                            "{} block {} ({}) overlaps {}",
                            day_type, idx, block.activity, prev.activity
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
