use galley_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::{Value, json};

/// Conversion rates between supported currencies.
///
/// Hardcoded for demonstration. A production deployment would replace
/// this with an API call for real-time rates.
const CONVERSION_RATES: &[(&str, &[(&str, f64)])] = &[
    ("USD", &[("EUR", 0.85), ("GBP", 0.73), ("JPY", 110.0)]),
    ("EUR", &[("USD", 1.18), ("GBP", 0.86), ("JPY", 129.0)]),
    ("GBP", &[("USD", 1.37), ("EUR", 1.16), ("JPY", 150.0)]),
    ("JPY", &[("USD", 0.0091), ("EUR", 0.0078), ("GBP", 0.0067)]),
];

const CARD_FEES: &[(&str, f64)] =
    &[("visa", 2.0), ("mastercard", 2.5), ("amex", 3.0)];

#[derive(Deserialize, JsonSchema)]
pub struct CardFeeParameters {
    #[schemars(
        description = "The type of card (e.g., visa, mastercard, amex)."
    )]
    card_type: String,
}

/// A tool for looking up the processing fee of a card type.
pub struct CardFeeTool {
    parameter_schema: Value,
}

impl CardFeeTool {
    /// Creates a new card fee tool.
    #[inline]
    pub fn new() -> Self {
        CardFeeTool {
            parameter_schema: schema_for!(CardFeeParameters).to_value(),
        }
    }
}

impl Default for CardFeeTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CardFeeTool {
    type Input = CardFeeParameters;

    fn name(&self) -> &str {
        "fees_percentage"
    }

    fn description(&self) -> &str {
        r#"
Determines the fees percentage based on the card type.
Returns a JSON record with a status and either the fee percentage or an error message."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CardFeeParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let report = card_fee(&input.card_type);
            serde_json::to_string(&report).map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            })
        }
    }
}

fn card_fee(card_type: &str) -> Value {
    let card_type_lower = card_type.to_lowercase();
    let fee = CARD_FEES
        .iter()
        .find(|(known, _)| *known == card_type_lower)
        .map(|(_, fee)| *fee);

    match fee {
        Some(fee_percentage) => json!({
            "status": "success",
            "fee_percentage": fee_percentage,
        }),
        None => json!({
            "status": "error",
            "error_message": format!(
                "Unknown card type '{card_type}'. \
                 Supported types: visa, mastercard, amex."
            ),
        }),
    }
}

#[derive(Deserialize, JsonSchema)]
pub struct ConversionRateParameters {
    #[schemars(description = "The source currency code (e.g., USD, EUR).")]
    from_currency: String,
    #[schemars(description = "The target currency code (e.g., USD, EUR).")]
    to_currency: String,
}

/// A tool for looking up the conversion rate between two currencies.
pub struct ConversionRateTool {
    parameter_schema: Value,
}

impl ConversionRateTool {
    /// Creates a new conversion rate tool.
    #[inline]
    pub fn new() -> Self {
        ConversionRateTool {
            parameter_schema: schema_for!(ConversionRateParameters)
                .to_value(),
        }
    }
}

impl Default for ConversionRateTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ConversionRateTool {
    type Input = ConversionRateParameters;

    fn name(&self) -> &str {
        "get_conversion_rate"
    }

    fn description(&self) -> &str {
        r#"
Determines the conversion rate between two currencies.
Returns a JSON record with a status and either the rate or an error message."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: ConversionRateParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let report =
                conversion_rate(&input.from_currency, &input.to_currency);
            serde_json::to_string(&report).map_err(|err| {
                ToolError::execution_error().with_reason(format!("{err}"))
            })
        }
    }
}

fn conversion_rate(from_currency: &str, to_currency: &str) -> Value {
    let rate = CONVERSION_RATES
        .iter()
        .find(|(from, _)| *from == from_currency)
        .and_then(|(_, rates)| {
            rates.iter().find(|(to, _)| *to == to_currency)
        })
        .map(|(_, rate)| *rate);

    match rate {
        Some(rate) => json!({
            "status": "success",
            "rate": rate,
        }),
        None => json!({
            "status": "error",
            "error_message": format!(
                "Conversion rate from {from_currency} to {to_currency} \
                 not available."
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fee_lookup() {
        let report = card_fee("Visa");
        assert_eq!(report["status"], "success");
        assert_eq!(report["fee_percentage"], 2.0);
    }

    #[test]
    fn test_unknown_card_type() {
        let report = card_fee("diners");
        assert_eq!(report["status"], "error");
        assert!(
            report["error_message"]
                .as_str()
                .unwrap()
                .contains("Unknown card type 'diners'")
        );
    }

    #[test]
    fn test_conversion_rate_lookup() {
        let report = conversion_rate("USD", "JPY");
        assert_eq!(report["status"], "success");
        assert_eq!(report["rate"], 110.0);
    }

    #[test]
    fn test_unavailable_conversion_pair() {
        let report = conversion_rate("USD", "CHF");
        assert_eq!(report["status"], "error");
        assert!(
            report["error_message"]
                .as_str()
                .unwrap()
                .contains("USD to CHF")
        );
    }
}
