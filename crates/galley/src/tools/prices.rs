use galley_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Price and sales unit of each known ingredient.
const PRICE_DATA: &[(&str, f64, &str)] = &[
    ("chicken", 5.99, "lb"),
    ("beef", 8.99, "lb"),
    ("pork", 6.49, "lb"),
    ("fish", 12.99, "lb"),
    ("rice", 2.49, "lb"),
    ("pasta", 1.99, "lb"),
    ("potatoes", 0.79, "lb"),
    ("bread", 3.49, "loaf"),
    ("flour", 2.99, "lb"),
    ("butter", 4.99, "lb"),
    ("oil", 6.99, "bottle"),
    ("milk", 3.49, "gallon"),
    ("cheese", 5.99, "lb"),
    ("eggs", 4.99, "dozen"),
    ("tomatoes", 2.99, "lb"),
    ("onions", 1.49, "lb"),
    ("garlic", 0.99, "head"),
    ("carrots", 1.29, "lb"),
    ("lettuce", 1.99, "head"),
    ("spinach", 3.99, "bag"),
    ("broccoli", 2.49, "head"),
    ("mushrooms", 4.99, "lb"),
    ("apples", 2.99, "lb"),
    ("bananas", 0.59, "lb"),
    ("oranges", 1.99, "lb"),
    ("strawberries", 4.99, "pint"),
    ("blueberries", 5.99, "pint"),
    ("sugar", 2.49, "lb"),
    ("salt", 1.99, "container"),
    ("pepper", 3.99, "container"),
    ("olive oil", 8.99, "bottle"),
    ("soy sauce", 3.49, "bottle"),
    ("vinegar", 2.99, "bottle"),
    ("honey", 6.99, "jar"),
    ("almonds", 9.99, "lb"),
    ("peanuts", 3.99, "lb"),
    ("walnuts", 11.99, "lb"),
];

#[derive(Deserialize, JsonSchema)]
pub struct IngredientPricesParameters {
    #[schemars(description = "List of ingredient names to price.")]
    ingredients: Vec<String>,
}

/// A tool for looking up grocery prices of ingredients.
pub struct IngredientPricesTool {
    parameter_schema: Value,
}

impl IngredientPricesTool {
    /// Creates a new ingredient price tool.
    #[inline]
    pub fn new() -> Self {
        IngredientPricesTool {
            parameter_schema: schema_for!(IngredientPricesParameters)
                .to_value(),
        }
    }
}

impl Default for IngredientPricesTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for IngredientPricesTool {
    type Input = IngredientPricesParameters;

    fn name(&self) -> &str {
        "get_ingredient_prices"
    }

    fn description(&self) -> &str {
        r#"
Looks up the price of each given ingredient.
Unknown ingredients are reported as "N/A". Each priced ingredient is counted as one unit towards the estimated total cost in USD."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: IngredientPricesParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let report = price_ingredients(&input.ingredients);
            serde_json::to_string(&report).map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            })
        }
    }
}

fn price_ingredients(ingredients: &[String]) -> Value {
    let mut prices = Map::new();
    let mut total_cost = 0.0;

    for ingredient in ingredients {
        let ingredient_lower = ingredient.to_lowercase();
        let ingredient_lower = ingredient_lower.trim();
        let entry = PRICE_DATA
            .iter()
            .find(|(key, _, _)| ingredient_lower.contains(key));

        let price = match entry {
            Some((_, price, unit)) => {
                total_cost += price;
                json!({ "price": price, "unit": unit })
            }
            None => json!({ "price": "N/A", "unit": "N/A" }),
        };
        prices.insert(ingredient.clone(), price);
    }

    json!({
        "ingredient_prices": prices,
        "estimated_total_cost": (total_cost * 100.0).round() / 100.0,
        "currency": "USD",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_known_ingredients() {
        let report = price_ingredients(&[
            "chicken".to_owned(),
            "fresh garlic".to_owned(),
        ]);

        assert_eq!(report["ingredient_prices"]["chicken"]["price"], 5.99);
        assert_eq!(
            report["ingredient_prices"]["fresh garlic"]["unit"],
            "head"
        );
        assert_eq!(report["estimated_total_cost"], 6.98);
        assert_eq!(report["currency"], "USD");
    }

    #[test]
    fn test_unknown_ingredient_is_not_available() {
        let report = price_ingredients(&["saffron".to_owned()]);

        assert_eq!(report["ingredient_prices"]["saffron"]["price"], "N/A");
        assert_eq!(report["estimated_total_cost"], 0.0);
    }
}
