use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::value::RawValue;

use wallet_application::error::AppError;

const MAX_EXPONENT: u32 = 28;

/// Amount exactly as it appeared in the request body. Clients may send a
/// JSON string (`"14.65"`) or a JSON number (`14.65`); both are parsed from
/// their literal text so no digit is lost before precision checks.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: Box<RawValue>,
}

impl AmountRequest {
    pub fn to_decimal(&self) -> Result<Decimal, AppError> {
        let raw = self.amount.get().trim();

        let text = if raw.starts_with('"') {
            serde_json::from_str::<String>(raw)
                .map_err(|_| invalid_amount(raw))?
                .trim()
                .to_string()
        } else if raw.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            raw.to_string()
        } else {
            return Err(AppError::InvalidAmount {
                message: "amount must be a decimal string or number".to_string(),
            });
        };

        parse_exact(&text).ok_or_else(|| invalid_amount(&text))
    }
}

fn invalid_amount(text: &str) -> AppError {
    AppError::InvalidAmount {
        message: format!("'{text}' is not an exactly representable decimal number"),
    }
}

/// Parses plain (`14.65`) or scientific (`1.465e1`) notation without
/// rounding; input carrying more digits than `Decimal` can hold is refused.
fn parse_exact(text: &str) -> Option<Decimal> {
    let Some((mantissa, exponent)) = text.split_once(['e', 'E']) else {
        return Decimal::from_str_exact(text).ok();
    };

    let mantissa = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    let magnitude = exponent.unsigned_abs();
    if magnitude > MAX_EXPONENT {
        return None;
    }

    if exponent >= 0 {
        (0..magnitude).try_fold(mantissa, |value, _| value.checked_mul(Decimal::TEN))
    } else {
        let scale = mantissa.scale().checked_add(magnitude)?;
        Decimal::try_from_i128_with_scale(mantissa.mantissa(), scale).ok()
    }
}
