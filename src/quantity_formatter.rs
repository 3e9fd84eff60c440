//! # Quantity Formatter
//!
//! Renders a merged amount and unit back into a shopping-list string, using
//! fraction text for the common kitchen remainders ("1 1/2 cups") and a fixed
//! singular/plural table for units.

/// Rounded remainders that render as fractions
const FRACTION_TEXT: &[(f64, &str)] = &[
    (0.25, "1/4"),
    (0.33, "1/3"),
    (0.5, "1/2"),
    (0.67, "2/3"),
    (0.75, "3/4"),
];

/// Singular to plural unit spellings. Identical pairs are units that do not
/// change in the plural.
pub const UNIT_PLURALS: &[(&str, &str)] = &[
    ("cup", "cups"),
    ("tablespoon", "tablespoons"),
    ("tbsp", "tbsp"),
    ("teaspoon", "teaspoons"),
    ("tsp", "tsp"),
    ("fl oz", "fl oz"),
    ("pint", "pints"),
    ("quart", "quarts"),
    ("gallon", "gallons"),
    ("ml", "ml"),
    ("milliliter", "milliliters"),
    ("millilitre", "millilitres"),
    ("l", "l"),
    ("liter", "liters"),
    ("litre", "litres"),
    ("oz", "oz"),
    ("ounce", "ounces"),
    ("lb", "lbs"),
    ("pound", "pounds"),
    ("g", "g"),
    ("gram", "grams"),
    ("kg", "kg"),
    ("kilogram", "kilograms"),
    ("clove", "cloves"),
    ("can", "cans"),
    ("jar", "jars"),
    ("bottle", "bottles"),
    ("package", "packages"),
    ("pkg", "pkg"),
    ("bag", "bags"),
    ("box", "boxes"),
    ("bunch", "bunches"),
    ("head", "heads"),
    ("stalk", "stalks"),
    ("piece", "pieces"),
    ("slice", "slices"),
    ("sprig", "sprigs"),
    ("pinch", "pinches"),
    ("dash", "dashes"),
    ("handful", "handfuls"),
    ("stick", "sticks"),
    ("leaf", "leaves"),
    ("fillet", "fillets"),
    ("large", "large"),
    ("medium", "medium"),
    ("small", "small"),
    ("whole", "whole"),
];

/// Plural spelling of a unit, or the unit itself when it is not in the table
pub fn pluralize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    UNIT_PLURALS
        .iter()
        .find(|(singular, _)| *singular == lower)
        .map(|(_, plural)| plural.to_string())
        .unwrap_or_else(|| unit.trim().to_string())
}

/// Canonical bucket spelling of a unit: trimmed, lower-cased, and mapped back
/// to its singular when it is a known plural.
///
/// "Cups" and "cup" share a bucket; "tbsp" and "tablespoon" do not.
pub fn singularize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    UNIT_PLURALS
        .iter()
        .find(|(_, plural)| *plural == lower)
        .map(|(singular, _)| singular.to_string())
        .unwrap_or(lower)
}

/// Render a number the way a shopping list shows it: "3", "1/2", "1 1/4", "0.1"
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        return format!("{}", amount as i64);
    }

    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    let remainder = ((rounded - whole) * 100.0).round() / 100.0;

    if remainder == 0.0 {
        return format!("{}", whole as i64);
    }

    match FRACTION_TEXT
        .iter()
        .find(|(value, _)| (remainder - value).abs() < 1e-9)
    {
        Some((_, fraction)) if whole == 0.0 => fraction.to_string(),
        Some((_, fraction)) => format!("{} {}", whole as i64, fraction),
        None => format!("{}", rounded),
    }
}

/// Render an amount with its unit, pluralizing the unit when `amount > 1`
pub fn format_quantity(amount: f64, unit: &str) -> String {
    let amount_text = format_amount(amount);
    let unit = unit.trim();
    if unit.is_empty() {
        return amount_text;
    }

    let unit_text = if amount > 1.0 {
        pluralize_unit(unit)
    } else {
        unit.to_string()
    };
    format!("{amount_text} {unit_text}")
}
