//! # Quantity Patterns Module
//!
//! This module contains the unit vocabulary and the compiled regex patterns
//! used to split a free-text quantity into amount, unit and trailing note.

use lazy_static::lazy_static;
use regex::Regex;

/// Units the parser recognizes after a leading amount.
///
/// Matching is case-insensitive. Anything not listed here is left in the
/// trailing note.
pub const UNIT_VOCABULARY: &[&str] = &[
    // Volume
    "cup", "cups",
    "tablespoon", "tablespoons", "tbsp", "tbsps", "tbs",
    "teaspoon", "teaspoons", "tsp", "tsps",
    "fl oz", "pint", "pints", "quart", "quarts", "gallon", "gallons",
    "ml", "milliliter", "milliliters", "millilitre", "millilitres",
    "l", "liter", "liters", "litre", "litres",
    // Weight
    "oz", "ounce", "ounces",
    "lb", "lbs", "pound", "pounds",
    "g", "gram", "grams", "kg", "kilogram", "kilograms",
    // Count and produce
    "clove", "cloves", "can", "cans", "jar", "jars", "bottle", "bottles",
    "package", "packages", "pkg", "bag", "bags", "box", "boxes",
    "bunch", "bunches", "head", "heads", "stalk", "stalks",
    "piece", "pieces", "slice", "slices", "sprig", "sprigs",
    "pinch", "pinches", "dash", "dashes", "handful", "handfuls",
    "stick", "sticks", "leaf", "leaves", "fillet", "fillets",
    // Size words
    "large", "medium", "small", "whole",
];

/// Amount token: mixed number, fraction, vulgar-fraction glyph, decimal or integer
pub const AMOUNT_PATTERN: &str =
    r"\d+\s+\d+\s*/\s*\d+|\d+\s*/\s*\d+|\d*\s*[½⅓⅔¼¾⅛⅜⅝⅞]|\d*\.\d+|\d+";

/// Vulgar-fraction glyphs and their decimal values
pub const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Build the full quantity pattern from the vocabulary.
///
/// Units are tried longest first so "lbs" wins over "lb" and "tablespoons"
/// over "tablespoon".
pub fn build_quantity_pattern(units: &[&str]) -> String {
    let mut sorted: Vec<&str> = units.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = sorted
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|");

    format!(
        r"(?i)^\s*(?P<amount>{AMOUNT_PATTERN})(?:\s*(?P<unit>{alternation})(?:\b|$)\.?)?\s*(?P<note>.*?)\s*$"
    )
}

lazy_static! {
    /// Compiled quantity pattern over [`UNIT_VOCABULARY`]
    pub static ref QUANTITY_REGEX: Regex = Regex::new(&build_quantity_pattern(UNIT_VOCABULARY))
        .expect("Quantity pattern should be valid");

    /// Ranges like "2-3 cups" or "1 to 2 tbsp"; these are carried verbatim
    pub static ref RANGE_REGEX: Regex =
        Regex::new(r"(?i)^\s*[\d./½⅓⅔¼¾⅛⅜⅝⅞\s]+\s*(?:-|–|—|to|or)\s*[\d½⅓⅔¼¾⅛⅜⅝⅞]")
            .expect("Range pattern should be valid");
}
