use serde::Deserialize;
use sqlx::types::Decimal;

use crate::error::AppError;

pub const TITLE_MAX_LEN: usize = 60;

/// `NUMERIC(10, 2)` upper bound (exclusive).
const PRICE_LIMIT: i64 = 100_000_000;

/// Price as sent by clients: `"12.50"` or `12.5`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Text(String),
    Number(serde_json::Number),
}

pub fn normalize_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::Validation(format!(
            "title must be at most {} characters",
            TITLE_MAX_LEN
        )));
    }
    Ok(title.to_string())
}

pub fn normalize_optional_title(raw: Option<&str>) -> Result<Option<String>, AppError> {
    raw.map(normalize_title).transpose()
}

pub fn parse_price(input: &PriceInput) -> Result<Decimal, AppError> {
    let text = match input {
        PriceInput::Text(s) => s.trim().to_string(),
        PriceInput::Number(n) => n.to_string(),
    };
    let price = text
        .parse::<Decimal>()
        .map_err(|_| AppError::Validation(format!("invalid price: {:?}", text)))?
        .normalize();

    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Validation("price must not be negative".into()));
    }
    if price.scale() > 2 {
        return Err(AppError::Validation(
            "price must have at most 2 decimal places".into(),
        ));
    }
    if price >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::Validation("price is too large".into()));
    }
    Ok(price)
}

pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(normalize_title("  Lunch  ").unwrap(), "Lunch");
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = normalize_title("   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn long_title_is_rejected() {
        let title = "x".repeat(TITLE_MAX_LEN + 1);
        assert!(normalize_title(&title).is_err());
        assert!(normalize_title(&"x".repeat(TITLE_MAX_LEN)).is_ok());
    }

    #[test]
    fn title_length_counts_characters() {
        let title = "щ".repeat(TITLE_MAX_LEN);
        assert!(normalize_title(&title).is_ok());
    }

    #[test]
    fn price_from_text_and_number() {
        let text = parse_price(&PriceInput::Text("12.50".into())).unwrap();
        assert_eq!(format_price(text), "12.50");

        let number: PriceInput = serde_json::from_str("7").unwrap();
        assert_eq!(format_price(parse_price(&number).unwrap()), "7.00");

        let fractional: PriceInput = serde_json::from_str("3.5").unwrap();
        assert_eq!(format_price(parse_price(&fractional).unwrap()), "3.50");
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        let price = parse_price(&PriceInput::Text("1.2500".into())).unwrap();
        assert_eq!(format_price(price), "1.25");
    }

    #[test]
    fn bad_prices_are_rejected() {
        for raw in ["abc", "-1", "1.234", "100000000"] {
            let res = parse_price(&PriceInput::Text(raw.into()));
            assert!(res.is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let price = parse_price(&PriceInput::Text("0".into())).unwrap();
        assert_eq!(format_price(price), "0.00");
    }
}
