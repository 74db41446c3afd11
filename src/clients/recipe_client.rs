use reqwest::Client;

use crate::clients::http::get_text;
use crate::error::Result;
use crate::models::recipe::{Recipe, parse_meal_response};

pub async fn fetch_random_recipe(client: &Client, url: &str) -> Result<Recipe> {
    let body = get_text(client, url).await?;
    parse_meal_response(&body)
}
