pub mod calendar_client;
pub mod html;
pub mod http;
pub mod meme_client;
pub mod quotes_client;
pub mod recipe_client;
