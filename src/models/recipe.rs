use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DashboardError, Result};

const MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[derive(Debug, Deserialize)]
struct MealResponse {
    meals: Option<Vec<serde_json::Map<String, Value>>>,
}

fn field<'a>(meal: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    meal.get(key).and_then(Value::as_str)
}

/// Parses a TheMealDB `random.php` payload into a recipe.
pub fn parse_meal_response(body: &str) -> Result<Recipe> {
    let response: MealResponse = serde_json::from_str(body)
        .map_err(|e| DashboardError::Parse(format!("recipe payload: {}", e)))?;
    let meal = response
        .meals
        .and_then(|meals| meals.into_iter().next())
        .ok_or_else(|| DashboardError::Parse("recipe payload has no meals".to_string()))?;

    let title = field(&meal, "strMeal")
        .ok_or_else(|| DashboardError::Parse("meal is missing strMeal".to_string()))?
        .to_string();

    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENTS {
        let Some(ingredient) = field(&meal, &format!("strIngredient{}", i)) else {
            continue;
        };
        if ingredient.trim().is_empty() {
            continue;
        }
        let measure = field(&meal, &format!("strMeasure{}", i)).unwrap_or("");
        ingredients.push(format!("{} {}", measure, ingredient).trim().to_string());
    }

    let instructions = field(&meal, "strInstructions")
        .unwrap_or("No instructions provided.")
        .to_string();

    Ok(Recipe {
        title,
        ingredients,
        instructions,
    })
}
