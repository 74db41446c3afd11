pub mod activity_loop;
pub mod card_refresh;
pub mod task_runner;
