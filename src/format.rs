//! Price formatting.
//!
//! Renders decimal amounts the way the ad copy shows them: German
//! grouping, two fraction digits, trailing Euro sign — `1.234,50 €`.

use crate::types::PriceValue;

/// Format a numeric amount as a German-locale Euro price.
///
/// Zero counts as "no price" and formats to the empty string, matching
/// the falsy check the rest of the wizard relies on.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return String::new();
    }

    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    // format! with {:.2} always yields one '.'
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{} €", sign, grouped, frac_part)
}

/// Format a decimal-as-string price.
///
/// Empty and unparseable inputs format to the empty string; the string
/// `"0"` is a real price and formats to `"0,00 €"`.
pub fn format_price(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value == 0.0 => "0,00 €".to_string(),
        Ok(value) => format_amount(value),
        Err(_) => String::new(),
    }
}

/// Format the string-or-number price shape the listing endpoint returns.
pub fn format_price_value(price: Option<&PriceValue>) -> String {
    match price {
        Some(PriceValue::Number(n)) => format_amount(*n),
        Some(PriceValue::Text(s)) => format_price(s),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_format_to_empty() {
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("   "), "");
        assert_eq!(format_amount(0.0), "");
        assert_eq!(format_price_value(None), "");
    }

    #[test]
    fn unparseable_input_formats_to_empty() {
        assert_eq!(format_price("Preis auf Anfrage"), "");
    }

    #[test]
    fn german_grouping_and_two_decimals() {
        assert_eq!(format_amount(1234.5), "1.234,50 €");
        assert_eq!(format_amount(55.0), "55,00 €");
        assert_eq!(format_amount(999.0), "999,00 €");
        assert_eq!(format_amount(1_000_000.0), "1.000.000,00 €");
        assert_eq!(format_amount(1234567.89), "1.234.567,89 €");
    }

    #[test]
    fn string_prices_parse_before_formatting() {
        assert_eq!(format_price("49.99"), "49,99 €");
        assert_eq!(format_price("1234.5"), "1.234,50 €");
        // String zero is a real price, unlike the number zero
        assert_eq!(format_price("0"), "0,00 €");
    }

    #[test]
    fn negative_amounts_keep_the_sign_in_front() {
        assert_eq!(format_amount(-1234.5), "-1.234,50 €");
    }

    #[test]
    fn listing_price_values_format_either_way() {
        assert_eq!(
            format_price_value(Some(&PriceValue::Number(55.0))),
            "55,00 €"
        );
        assert_eq!(
            format_price_value(Some(&PriceValue::Text("49.99".to_string()))),
            "49,99 €"
        );
    }
}
