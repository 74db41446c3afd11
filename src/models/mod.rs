pub mod card;
pub mod event;
pub mod recipe;
pub mod schedule;
pub mod schedule_data;
