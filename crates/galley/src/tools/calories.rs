use std::collections::BTreeMap;

use galley_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calories per 100g of each known ingredient.
const CALORIE_DATA: &[(&str, u32)] = &[
    ("chicken", 165),
    ("beef", 250),
    ("pork", 242),
    ("fish", 120),
    ("rice", 130),
    ("pasta", 157),
    ("potatoes", 77),
    ("bread", 265),
    ("flour", 364),
    ("butter", 717),
    ("oil", 884),
    ("milk", 61),
    ("cheese", 402),
    ("eggs", 155),
    ("tomatoes", 18),
    ("onions", 40),
    ("garlic", 149),
    ("carrots", 41),
    ("lettuce", 15),
    ("spinach", 23),
    ("broccoli", 34),
    ("mushrooms", 22),
    ("apples", 52),
    ("bananas", 89),
    ("oranges", 47),
    ("strawberries", 32),
    ("blueberries", 57),
    ("sugar", 387),
    ("salt", 0),
    ("pepper", 251),
    ("olive oil", 884),
    ("soy sauce", 53),
    ("vinegar", 18),
    ("honey", 304),
    ("almonds", 579),
    ("peanuts", 567),
    ("walnuts", 654),
];

fn default_servings() -> u32 {
    4
}

#[derive(Deserialize, JsonSchema)]
pub struct CalculateCaloriesParameters {
    #[schemars(
        description = "The full recipe text including ingredients and instructions."
    )]
    recipe_text: String,
    #[schemars(
        description = "Number of servings the recipe makes, default to 4."
    )]
    #[serde(default = "default_servings")]
    servings: u32,
}

#[derive(Debug, Serialize)]
struct CalorieReport {
    total_calories_per_serving: u32,
    total_calories_recipe: u32,
    servings: u32,
    ingredient_breakdown: BTreeMap<&'static str, u32>,
}

/// A tool for estimating the calories of one portion of a dish.
pub struct CalculateCaloriesTool {
    parameter_schema: Value,
}

impl CalculateCaloriesTool {
    /// Creates a new calorie calculation tool.
    #[inline]
    pub fn new() -> Self {
        CalculateCaloriesTool {
            parameter_schema: schema_for!(CalculateCaloriesParameters)
                .to_value(),
        }
    }
}

impl Default for CalculateCaloriesTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CalculateCaloriesTool {
    type Input = CalculateCaloriesParameters;

    fn name(&self) -> &str {
        "calculate_calories"
    }

    fn description(&self) -> &str {
        r#"
Estimates the total calories of one serving of the given recipe.
Each recognized ingredient is counted as 100g. Returns a JSON report with per-serving and whole-recipe totals and a per-ingredient breakdown."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CalculateCaloriesParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let report =
                estimate_calories(&input.recipe_text, input.servings);
            serde_json::to_string(&report).map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            })
        }
    }
}

fn estimate_calories(recipe_text: &str, servings: u32) -> CalorieReport {
    let recipe_lower = recipe_text.to_lowercase();

    let mut ingredient_breakdown = BTreeMap::new();
    let mut total_calories = 0;
    for (ingredient, calories_per_100g) in CALORIE_DATA.iter().copied() {
        if recipe_lower.contains(ingredient) {
            ingredient_breakdown.insert(ingredient, calories_per_100g);
            total_calories += calories_per_100g;
        }
    }

    let total_calories_per_serving = if servings > 0 {
        (f64::from(total_calories) / f64::from(servings)).round() as u32
    } else {
        total_calories
    };

    CalorieReport {
        total_calories_per_serving,
        total_calories_recipe: total_calories,
        servings,
        ingredient_breakdown,
    }
}
