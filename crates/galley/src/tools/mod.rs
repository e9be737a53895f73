//! Built-in tools.

mod allergens;
mod calories;
mod currency;
mod prices;
mod remote;
mod shipping;

pub use allergens::CheckAllergensTool;
pub use calories::CalculateCaloriesTool;
pub use currency::{CardFeeTool, ConversionRateTool};
pub use prices::IngredientPricesTool;
pub use remote::{RemoteTool, everything_tools};
pub use shipping::CoordinateShippingTool;
