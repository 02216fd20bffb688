//! Price rules shared by rooms and food items.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Prices carry two decimal places.
pub const PRICE_SCALE: u32 = 2;

/// Largest room price, the range of `rooms.price NUMERIC(10, 2)`.
pub const ROOM_MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE);

/// Largest food price, the range of `food.price NUMERIC(8, 2)`.
pub const FOOD_MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, PRICE_SCALE);

/// Reject negative, over-precise or out-of-range prices.
pub fn validate_price(price: Decimal, max: Decimal) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::validation(
            "price",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(CoreError::validation(
            "price",
            format!("Ensure that there are no more than {PRICE_SCALE} decimal places."),
        ));
    }
    if price > max {
        return Err(CoreError::validation(
            "price",
            format!("Ensure this value is less than or equal to {max}."),
        ));
    }
    Ok(())
}

/// Parse a price submitted as a form field, capped at `max`.
pub fn parse_price(raw: &str, max: Decimal) -> Result<Decimal, CoreError> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::validation("price", "A valid number is required."))?;
    validate_price(price, max)?;
    Ok(price)
}
