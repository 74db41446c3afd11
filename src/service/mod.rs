pub mod activity_service;
pub mod card_service;
pub mod dashboard_state;
pub mod render;
pub mod sources;
