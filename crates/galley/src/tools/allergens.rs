use galley_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const GLUTEN_SOURCES: &[&str] = &[
    "wheat", "flour", "bread", "pasta", "barley", "rye",
    // Cross-contamination possible.
    "oats",
];

const NUT_SOURCES: &[&str] = &[
    "almonds",
    "peanuts",
    "walnuts",
    "cashews",
    "pecans",
    "hazelnuts",
    "pistachios",
    "macadamia",
    "brazil nuts",
    "pine nuts",
    "chestnuts",
];

#[derive(Deserialize, JsonSchema)]
pub struct CheckAllergensParameters {
    #[schemars(
        description = "The dish name, ingredients, or full recipe text to analyze."
    )]
    recipe_text: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct AllergenReport {
    gluten: bool,
    nuts: bool,
    gluten_ingredients: Vec<&'static str>,
    nut_ingredients: Vec<&'static str>,
    allergens_found: Vec<&'static str>,
}

/// A tool for spotting gluten and nut sources in a recipe.
pub struct CheckAllergensTool {
    parameter_schema: Value,
}

impl CheckAllergensTool {
    /// Creates a new allergen check tool.
    #[inline]
    pub fn new() -> Self {
        CheckAllergensTool {
            parameter_schema: schema_for!(CheckAllergensParameters)
                .to_value(),
        }
    }
}

impl Default for CheckAllergensTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CheckAllergensTool {
    type Input = CheckAllergensParameters;

    fn name(&self) -> &str {
        "check_allergens"
    }

    fn description(&self) -> &str {
        r#"
Checks whether a recipe contains gluten or nuts.
Scans the given text for known allergen sources and returns a JSON report with boolean flags and the detected ingredients."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CheckAllergensParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let report = scan_for_allergens(&input.recipe_text);
            serde_json::to_string(&report).map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            })
        }
    }
}

fn scan_for_allergens(recipe_text: &str) -> AllergenReport {
    let recipe_lower = recipe_text.to_lowercase();

    let gluten_ingredients: Vec<_> = GLUTEN_SOURCES
        .iter()
        .copied()
        .filter(|source| recipe_lower.contains(source))
        .collect();
    let nut_ingredients: Vec<_> = NUT_SOURCES
        .iter()
        .copied()
        .filter(|source| recipe_lower.contains(source))
        .collect();

    let mut allergens_found = gluten_ingredients.clone();
    allergens_found.extend_from_slice(&nut_ingredients);

    AllergenReport {
        gluten: !gluten_ingredients.is_empty(),
        nuts: !nut_ingredients.is_empty(),
        gluten_ingredients,
        nut_ingredients,
        allergens_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_gluten_and_nuts() {
        let report =
            scan_for_allergens("Banana bread with flour and walnuts");
        assert!(report.gluten);
        assert!(report.nuts);
        assert_eq!(report.gluten_ingredients, vec!["flour", "bread"]);
        assert_eq!(report.nut_ingredients, vec!["walnuts"]);
        assert_eq!(report.allergens_found.len(), 3);
    }

    #[test]
    fn test_clean_recipe_reports_nothing() {
        let report = scan_for_allergens("Grilled chicken with rice");
        assert!(!report.gluten);
        assert!(!report.nuts);
        assert!(report.allergens_found.is_empty());
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let report = scan_for_allergens("PASTA with ALMONDS");
        assert!(report.gluten);
        assert!(report.nuts);
    }
}
