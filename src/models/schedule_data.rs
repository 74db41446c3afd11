use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::models::schedule::{DayType, RawBlock, ScheduleTable};

// (start, end, activity, description)
type Entry = (&'static str, &'static str, &'static str, &'static str);

const WEEKDAY: &[Entry] = &[
    ("00:00", "06:00", "Sleep", "Essential rest period, focus on deep sleep for recovery."),
    ("06:00", "07:00", "Personal Care", "Morning routine including hygiene, dressing, and quick personal prep."),
    ("07:00", "08:30", "Kid Morning Prep/Drop-off", "Prepare breakfast, get kids ready, pack lunches, drive to school."),
    ("08:30", "12:00", "Study & Coursework", "Focused academic work, lectures, readings, and assignments. Minimize distractions."),
    ("12:00", "13:00", "Personal Care (Lunch/Chore)", "Lunch break, short rest, or quick house tidying. Recharge for the afternoon."),
    ("13:00", "15:25", "Study & Coursework", "Continued academic work and project development. Maintain focus."),
    ("15:25", "15:45", "Kid Pick-up", "Drive to school/daycare. Must leave on time."),
    ("15:45", "20:00", "Afternoon Coordination", "Manage homework, after-school activities, play time, and prepare for dinner."),
    ("20:00", "21:00", "Kid Bedtime/Quick Tidy", "Evening routine for kids, including story time and light cleanup."),
    ("21:00", "23:00", "Study/Chores/Personal Time", "Flexible time for self-improvement, household tasks, or relaxation."),
    ("23:00", "23:59", "Sleep", "Wind-down and prepare for bed. Aim for consistent sleep schedule."),
];

// Early school pickup shortens the afternoon study block.
const WEDNESDAY: &[Entry] = &[
    ("00:00", "06:00", "Sleep", "Essential rest period, focus on deep sleep for recovery."),
    ("06:00", "07:00", "Personal Care", "Morning routine including hygiene, dressing, and quick personal prep."),
    ("07:00", "08:30", "Kid Morning Prep/Drop-off", "Prepare breakfast, get kids ready, pack lunches, drive to school."),
    ("08:30", "12:00", "Study & Coursework", "Focused academic work, lectures, readings, and assignments. Minimize distractions."),
    ("12:00", "13:00", "Personal Care (Lunch/Chore)", "Lunch break, short rest, or quick house tidying. Recharge for the afternoon."),
    ("13:00", "13:30", "Study & Coursework", "Final wrap-up of academic work before pickup."),
    ("13:30", "13:50", "Kid Pick-up (Early)", "Drive to school/daycare for early pickup."),
    ("13:50", "20:00", "Afternoon Coordination", "Manage homework, after-school activities, play time, and prepare for dinner."),
    ("20:00", "21:00", "Kid Bedtime/Quick Tidy", "Evening routine for kids, including story time and light cleanup."),
    ("21:00", "23:00", "Study/Chores/Personal Time", "Flexible time for self-improvement, household tasks, or relaxation."),
    ("23:00", "23:59", "Sleep", "Wind-down and prepare for bed. Aim for consistent sleep schedule."),
];

const WEEKEND: &[Entry] = &[
    ("00:00", "07:00", "Sleep", "Extended rest and recuperation."),
    ("07:00", "08:00", "Personal Care", "Morning routine, typically at a relaxed pace."),
    ("08:00", "13:00", "Family/Chores", "Quality time, kid's activities, or household tasks."),
    ("13:00", "14:00", "Lunch/Family Time", "Enjoy lunch with family."),
    ("14:00", "19:00", "Family Activities/Study/Chores", "Family outings, personal study, or larger chores."),
    ("19:00", "21:00", "Dinner/Evening Kidcare", "Dinner prep and meal, oversee kid's evening activities."),
    ("21:00", "23:00", "Personal/Partner Time", "Time for hobbies, unwinding, or connecting with a partner."),
    ("23:00", "23:59", "Sleep", "Prepare for the next day."),
];

fn to_raw(entries: &[Entry]) -> Vec<RawBlock> {
    entries
        .iter()
        .map(|(start, end, activity, description)| RawBlock {
            start: start.to_string(),
            end: end.to_string(),
            activity: activity.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn build() -> ScheduleTable {
    let mut raw = HashMap::new();
    raw.insert(DayType::Weekday, to_raw(WEEKDAY));
    raw.insert(DayType::Wednesday, to_raw(WEDNESDAY));
    raw.insert(DayType::Weekend, to_raw(WEEKEND));
    // Entries above are compile-time literals in HH:MM form.
    ScheduleTable::from_raw(raw).expect("built-in schedule uses valid HH:MM times")
}

static BUILTIN: Lazy<Arc<ScheduleTable>> = Lazy::new(|| Arc::new(build()));

/// The representative daily schedule shipped with the dashboard.
pub fn builtin_schedule() -> &'static ScheduleTable {
    &BUILTIN
}

/// Shared handle to the built-in table; clones the `Arc`, never the blocks.
pub fn shared_builtin_schedule() -> Arc<ScheduleTable> {
    Arc::clone(&BUILTIN)
}
