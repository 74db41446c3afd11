use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{error, info, warn};
use rand::seq::IndexedRandom;

use crate::clients::quotes_client::Quote;
use crate::models::card::{Card, CardContent, CardKind, Section};
use crate::models::recipe::Recipe;
use crate::service::activity_service::CurrentActivity;
use crate::service::sources::{CalendarSource, MemeSource, QuoteSource, RecipeSource};

pub const QUOTE_FAILED: &str = "Failed to fetch wisdom quote.";
pub const NO_QUOTES: &str = "No quotes found.";
pub const RECIPE_FAILED: &str = "Failed to fetch recipe.";
pub const CALENDAR_UNAVAILABLE: &str = "Google Calendar service not available.";
pub const NO_EVENTS: &str = "No upcoming events found.";
pub const MEME_MISSING: &str = "Could not fetch meme.";
const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

pub fn activity_card(current: &CurrentActivity) -> Card {
    Card::new(
        CardKind::Activity,
        CardContent::Text {
            sections: vec![Section::titled(
                &current.activity,
                vec![current.description.clone()],
            )],
        },
    )
}

fn pick_quote(quotes: &[Quote]) -> Option<String> {
    quotes.choose(&mut rand::rng()).map(Quote::display)
}

pub fn recipe_card(recipe: &Recipe) -> Card {
    let instructions = recipe.instructions.replace("\r\n", "\n");
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("- {}", ingredient))
        .collect();
    Card::new(
        CardKind::Recipe,
        CardContent::Text {
            sections: vec![
                Section::titled(&recipe.title, Vec::new()),
                Section::titled("Ingredients:", ingredients),
                Section::titled(
                    "Instructions:",
                    instructions.lines().map(str::to_string).collect(),
                ),
            ],
        },
    )
}

/// Builds the externally sourced cards. Every failure degrades to a
/// placeholder card and is logged; nothing is retried.
pub struct CardService {
    quotes: Arc<dyn QuoteSource>,
    recipes: Arc<dyn RecipeSource>,
    calendar: Arc<dyn CalendarSource>,
    memes: Arc<dyn MemeSource>,
    timezone: Tz,
}

impl CardService {
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        recipes: Arc<dyn RecipeSource>,
        calendar: Arc<dyn CalendarSource>,
        memes: Arc<dyn MemeSource>,
        timezone: Tz,
    ) -> Self {
        Self {
            quotes,
            recipes,
            calendar,
            memes,
            timezone,
        }
    }

    pub async fn quote_card(&self) -> Card {
        let text = match self.quotes.quotes().await {
            Ok(quotes) => match pick_quote(&quotes) {
                Some(text) => text,
                None => {
                    warn!("event=card_refresh card=quote status=empty");
                    NO_QUOTES.to_string()
                }
            },
            Err(err) => {
                error!("event=card_refresh card=quote status=error error={}", err);
                QUOTE_FAILED.to_string()
            }
        };
        Card::text(CardKind::Quote, &text)
    }

    pub async fn recipe_card(&self) -> Card {
        match self.recipes.random_recipe().await {
            Ok(recipe) => recipe_card(&recipe),
            Err(err) => {
                error!("event=card_refresh card=recipe status=error error={}", err);
                Card::text(CardKind::Recipe, RECIPE_FAILED)
            }
        }
    }

    pub async fn event_lines(&self, now: DateTime<Utc>) -> Vec<String> {
        match self.calendar.upcoming_events(now).await {
            Ok(None) => {
                warn!("event=card_refresh card=events status=unavailable");
                vec![CALENDAR_UNAVAILABLE.to_string()]
            }
            Ok(Some(events)) if events.is_empty() => vec![NO_EVENTS.to_string()],
            Ok(Some(events)) => events
                .iter()
                .map(|event| event.display(self.timezone))
                .collect(),
            Err(err) => {
                error!("event=card_refresh card=events status=error error={}", err);
                vec![format!("Error fetching events: {}", err)]
            }
        }
    }

    pub async fn events_card(&self, now: DateTime<Utc>) -> Card {
        let sections = self
            .event_lines(now)
            .await
            .iter()
            .map(|line| Section::plain(line))
            .collect();
        Card::new(CardKind::Events, CardContent::Text { sections })
    }

    pub async fn humor_card(&self) -> Card {
        let url = match self.memes.trending_meme_url().await {
            Ok(Some(url)) => url,
            Ok(None) => {
                warn!("event=card_refresh card=humor status=no_image");
                return Card::text(CardKind::Humor, MEME_MISSING);
            }
            Err(err) => {
                error!("event=card_refresh card=humor status=error error={}", err);
                return Card::text(CardKind::Humor, MEME_MISSING);
            }
        };
        match self.memes.download(&url).await {
            Ok(fetched) => Card::new(
                CardKind::Humor,
                CardContent::Image {
                    source_url: url,
                    content_type: fetched
                        .content_type
                        .unwrap_or(DEFAULT_IMAGE_TYPE.to_string()),
                    bytes: fetched.body,
                },
            ),
            Err(err) => {
                error!("event=card_refresh card=humor status=error url={} error={}", url, err);
                Card::text(CardKind::Humor, &format!("Error loading meme: {}", err))
            }
        }
    }

    /// Quote, recipe, events and humor cards, fetched concurrently.
    pub async fn external_cards(&self, now: DateTime<Utc>) -> Vec<Card> {
        let (quote, recipe, events, humor) = tokio::join!(
            self.quote_card(),
            self.recipe_card(),
            self.events_card(now),
            self.humor_card()
        );
        info!("event=card_refresh status=done cards=4");
        vec![quote, recipe, events, humor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_card_normalises_line_endings() {
        let recipe = Recipe {
            title: "Soup".to_string(),
            ingredients: vec!["1 Onion".to_string(), "2 cups Water".to_string()],
            instructions: "Chop.\r\nBoil.\nServe.".to_string(),
        };
        let card = recipe_card(&recipe);
        let CardContent::Text { sections } = card.content else {
            panic!("expected text content");
        };
        assert_eq!(sections[0].heading.as_deref(), Some("Soup"));
        assert_eq!(sections[1].lines, vec!["- 1 Onion", "- 2 cups Water"]);
        assert_eq!(sections[2].lines, vec!["Chop.", "Boil.", "Serve."]);
    }
}
