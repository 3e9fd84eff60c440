//! # Quantity Parser
//!
//! This module splits a free-text ingredient quantity into a numeric amount,
//! a unit and any trailing note.
//!
//! ## Features
//!
//! - Integers, decimals and simple fractions (`2`, `1.5`, `1/2`)
//! - Mixed numbers and vulgar-fraction glyphs (`1 1/2`, `1½`, `¾`)
//! - Units from a fixed vocabulary, matched case-insensitively
//! - Anything else ("as needed", "to taste", "2-3 cups") degrades to a raw
//!   quantity with no amount. Parsing never fails.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::quantity_parser::parse_quantity;
//!
//! let parsed = parse_quantity("1/2 tsp");
//! assert_eq!(parsed.amount, Some(0.5));
//! assert_eq!(parsed.unit, "tsp");
//!
//! let parsed = parse_quantity("to taste");
//! assert_eq!(parsed.amount, None);
//! assert_eq!(parsed.raw, "to taste");
//! ```

use crate::quantity_patterns::{FRACTION_GLYPHS, QUANTITY_REGEX, RANGE_REGEX};
use log::{debug, trace};

/// Result of parsing a quantity string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    /// Numeric amount, `None` when the string does not follow the grammar
    pub amount: Option<f64>,
    /// Lower-cased unit, empty when absent
    pub unit: String,
    /// Free text after the amount and unit (e.g., "finely chopped")
    pub note: String,
    /// The original input, verbatim
    pub raw: String,
}

impl ParsedQuantity {
    /// A quantity that did not match the grammar
    pub fn unparsed(raw: &str) -> Self {
        Self {
            amount: None,
            unit: String::new(),
            note: String::new(),
            raw: raw.to_string(),
        }
    }

    /// Check whether a numeric amount was extracted
    pub fn is_numeric(&self) -> bool {
        self.amount.is_some()
    }
}

/// Parse a free-text quantity
pub fn parse_quantity(quantity: &str) -> ParsedQuantity {
    if RANGE_REGEX.is_match(quantity) {
        debug!("Quantity '{}' is a range, keeping it verbatim", quantity);
        return ParsedQuantity::unparsed(quantity);
    }

    let Some(captures) = QUANTITY_REGEX.captures(quantity) else {
        trace!("Quantity '{}' does not start with an amount", quantity);
        return ParsedQuantity::unparsed(quantity);
    };

    let Some(amount) = evaluate_amount(&captures["amount"]) else {
        debug!("Quantity '{}' has an amount that cannot be evaluated", quantity);
        return ParsedQuantity::unparsed(quantity);
    };

    let unit = captures
        .name("unit")
        .map(|m| m.as_str().trim().to_lowercase())
        .unwrap_or_default();
    let note = captures
        .name("note")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    trace!(
        "Parsed quantity '{}' -> amount={}, unit='{}', note='{}'",
        quantity,
        amount,
        unit,
        note
    );

    ParsedQuantity {
        amount: Some(amount),
        unit,
        note,
        raw: quantity.to_string(),
    }
}

/// Evaluate an amount token to its decimal value.
///
/// Returns `None` for a zero denominator.
pub fn evaluate_amount(token: &str) -> Option<f64> {
    let token = token.trim();

    if let Some((whole, fraction)) = split_mixed(token) {
        return Some(whole + evaluate_fraction(fraction)?);
    }

    if token.contains('/') {
        return evaluate_fraction(token);
    }

    if let Some(glyph) = token.chars().last().and_then(glyph_value) {
        let whole_part = token[..token.len() - token.chars().last()?.len_utf8()].trim();
        let whole = if whole_part.is_empty() {
            0.0
        } else {
            whole_part.parse::<f64>().ok()?
        };
        return Some(whole + glyph);
    }

    token.parse::<f64>().ok()
}

/// Split "1 1/2" into (1.0, "1/2")
fn split_mixed(token: &str) -> Option<(f64, &str)> {
    let (whole, rest) = token.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if !rest.contains('/') || rest.starts_with('/') {
        return None;
    }
    Some((whole.parse::<f64>().ok()?, rest))
}

fn evaluate_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn glyph_value(c: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected an amount");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_integer_with_unit() {
        let parsed = parse_quantity("2 cups");
        assert_eq!(parsed.amount, Some(2.0));
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.note, "");
        assert_eq!(parsed.raw, "2 cups");
    }

    #[test]
    fn test_parse_fraction() {
        let parsed = parse_quantity("1/2 tsp");
        assert_eq!(parsed.amount, Some(0.5));
        assert_eq!(parsed.unit, "tsp");
    }

    #[test]
    fn test_parse_decimal() {
        let parsed = parse_quantity("1.5 lbs");
        assert_eq!(parsed.amount, Some(1.5));
        assert_eq!(parsed.unit, "lbs");

        let parsed = parse_quantity(".25 cup");
        assert_eq!(parsed.amount, Some(0.25));
    }

    #[test]
    fn test_parse_mixed_number() {
        let parsed = parse_quantity("1 1/2 cups");
        assert_eq!(parsed.amount, Some(1.5));
        assert_eq!(parsed.unit, "cups");
    }

    #[test]
    fn test_parse_vulgar_fractions() {
        assert_close(parse_quantity("½ cup").amount, 0.5);
        assert_close(parse_quantity("1½ cups").amount, 1.5);
        assert_close(parse_quantity("⅓ cup").amount, 1.0 / 3.0);
    }

    #[test]
    fn test_parse_unit_case_insensitive() {
        let parsed = parse_quantity("2 Tbsp");
        assert_eq!(parsed.unit, "tbsp");
        let parsed = parse_quantity("3 CLOVES");
        assert_eq!(parsed.unit, "cloves");
    }

    #[test]
    fn test_parse_no_unit() {
        let parsed = parse_quantity("3");
        assert_eq!(parsed.amount, Some(3.0));
        assert_eq!(parsed.unit, "");

        let parsed = parse_quantity("2 eggs");
        assert_eq!(parsed.amount, Some(2.0));
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.note, "eggs");
    }

    #[test]
    fn test_parse_size_words() {
        let parsed = parse_quantity("2 large");
        assert_eq!(parsed.unit, "large");
        let parsed = parse_quantity("1 whole chicken");
        assert_eq!(parsed.unit, "whole");
        assert_eq!(parsed.note, "chicken");
    }

    #[test]
    fn test_parse_trailing_note() {
        let parsed = parse_quantity("1 can (14 oz) diced");
        assert_eq!(parsed.amount, Some(1.0));
        assert_eq!(parsed.unit, "can");
        assert_eq!(parsed.note, "(14 oz) diced");
    }

    #[test]
    fn test_parse_attached_unit() {
        let parsed = parse_quantity("500g");
        assert_eq!(parsed.amount, Some(500.0));
        assert_eq!(parsed.unit, "g");
    }

    #[test]
    fn test_parse_unit_with_period() {
        let parsed = parse_quantity("2 tbsp. melted");
        assert_eq!(parsed.unit, "tbsp");
        assert_eq!(parsed.note, "melted");
    }

    #[test]
    fn test_parse_unparseable_is_verbatim() {
        for text in ["as needed", "to taste", "a pinch", ""] {
            let parsed = parse_quantity(text);
            assert_eq!(parsed.amount, None, "{text}");
            assert_eq!(parsed.unit, "");
            assert_eq!(parsed.raw, text);
        }
    }

    #[test]
    fn test_parse_range_is_verbatim() {
        let parsed = parse_quantity("2-3 cups");
        assert!(!parsed.is_numeric());
        assert_eq!(parsed.raw, "2-3 cups");
    }

    #[test]
    fn test_parse_zero_denominator_is_verbatim() {
        let parsed = parse_quantity("1/0 cup");
        assert_eq!(parsed.amount, None);
        assert_eq!(parsed.raw, "1/0 cup");
    }

    #[test]
    fn test_parse_zero_amount() {
        let parsed = parse_quantity("0 cups");
        assert_eq!(parsed.amount, Some(0.0));
    }

    #[test]
    fn test_evaluate_amount() {
        assert_eq!(evaluate_amount("3"), Some(3.0));
        assert_eq!(evaluate_amount("3/4"), Some(0.75));
        assert_eq!(evaluate_amount("2 1/4"), Some(2.25));
        assert_eq!(evaluate_amount("2¾"), Some(2.75));
        assert_eq!(evaluate_amount("5/0"), None);
    }
}
