//! # Aggregator
//!
//! Merges ingredient contributions from any number of recipes into grocery
//! items: one item per normalized name, with a merged display quantity, an
//! aisle, and the ordered list of contributions that produced it.
//!
//! ## Merging rules
//!
//! - A single contribution keeps its quantity string unchanged.
//! - Several contributions are parsed and summed per unit. "cup" and "cups"
//!   share a bucket; "tbsp" and "tablespoon" do not, and nothing is converted
//!   between unit systems.
//! - Quantities that do not parse are appended verbatim, joined with `" + "`.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::aggregator::Aggregator;
//! use grocery_list::grocery_model::{AggregationEntry, Ingredient};
//!
//! let aggregator = Aggregator::new();
//! let items = aggregator.aggregate(&[
//!     AggregationEntry::new(Ingredient::new("flour", "2 cups"), "r1", "Bread"),
//!     AggregationEntry::new(Ingredient::new("Flour", "1 cup"), "r2", "Cake"),
//! ]);
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].display_quantity, "3 cups");
//! ```

use crate::aisle_classifier::classify;
use crate::grocery_model::{AggregationEntry, GroceryItem, Source};
use crate::name_normalizer::{NaiveDepluralizer, NameNormalizer};
use crate::quantity_formatter::{format_quantity, singularize_unit};
use crate::quantity_parser::parse_quantity;
use chrono::Utc;
use log::{debug, trace};
use std::collections::HashMap;
use uuid::Uuid;

/// Bucket key for amounts that carry no unit
const UNITLESS: &str = "";

/// Contributions sharing one normalization key
#[derive(Debug)]
struct IngredientGroup {
    display_name: String,
    sources: Vec<Source>,
}

/// Groups and merges ingredient contributions
#[derive(Debug, Clone, Default)]
pub struct Aggregator<N: NameNormalizer = NaiveDepluralizer> {
    normalizer: N,
}

impl Aggregator<NaiveDepluralizer> {
    /// Create an aggregator using the naive depluralizing normalizer
    pub fn new() -> Self {
        Self {
            normalizer: NaiveDepluralizer,
        }
    }
}

impl<N: NameNormalizer> Aggregator<N> {
    /// Create an aggregator with a custom name normalizer
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// The normalizer used to build grouping keys
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Grouping key for a name
    pub fn key_for(&self, name: &str) -> String {
        self.normalizer.normalize(name)
    }

    /// Aggregate contributions into grocery items.
    ///
    /// Items come out in order of each key's first appearance. Every item is
    /// fresh: new id, unchecked, `added_at` set to now.
    pub fn aggregate(&self, entries: &[AggregationEntry]) -> Vec<GroceryItem> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<IngredientGroup> = Vec::new();

        for entry in entries {
            let key = self.normalizer.normalize(&entry.ingredient.name);
            if key.is_empty() {
                debug!(
                    "Dropping ingredient with empty name from recipe {}",
                    entry.recipe_id
                );
                continue;
            }

            let source = Source {
                recipe_id: entry.recipe_id.clone(),
                recipe_title: entry.recipe_title.clone(),
                quantity: entry.ingredient.quantity.clone(),
            };

            match index.get(&key) {
                Some(&position) => groups[position].sources.push(source),
                None => {
                    index.insert(key, groups.len());
                    groups.push(IngredientGroup {
                        display_name: entry.ingredient.name.trim().to_string(),
                        sources: vec![source],
                    });
                }
            }
        }

        debug!(
            "Aggregated {} contributions into {} items",
            entries.len(),
            groups.len()
        );

        groups.into_iter().map(build_item).collect()
    }
}

fn build_item(group: IngredientGroup) -> GroceryItem {
    let quantities: Vec<&str> = group.sources.iter().map(|s| s.quantity.as_str()).collect();
    let display_quantity = merge_quantities(&quantities);
    let aisle = classify(&group.display_name);

    trace!(
        "Built item '{}' ({}) in {}",
        group.display_name,
        display_quantity,
        aisle
    );

    GroceryItem {
        id: Uuid::new_v4().to_string(),
        name: group.display_name,
        display_quantity,
        aisle,
        checked: false,
        sources: group.sources,
        added_at: Utc::now(),
    }
}

/// Merge the quantity strings contributed to one item into a display string
pub fn merge_quantities(quantities: &[&str]) -> String {
    if let [only] = quantities {
        return only.to_string();
    }

    let mut buckets: Vec<(String, f64)> = Vec::new();
    let mut raw_remainder: Vec<String> = Vec::new();

    for quantity in quantities {
        let parsed = parse_quantity(quantity);
        match parsed.amount {
            Some(amount) => {
                let unit = if parsed.unit.is_empty() {
                    UNITLESS.to_string()
                } else {
                    singularize_unit(&parsed.unit)
                };
                match buckets.iter_mut().find(|(bucket, _)| *bucket == unit) {
                    Some((_, total)) => *total += amount,
                    None => buckets.push((unit, amount)),
                }
            }
            None if parsed.raw.trim().is_empty() => {}
            None => raw_remainder.push(parsed.raw),
        }
    }

    if buckets.is_empty() {
        return raw_remainder.into_iter().next().unwrap_or_default();
    }

    buckets
        .iter()
        .map(|(unit, total)| format_quantity(*total, unit))
        .chain(raw_remainder)
        .collect::<Vec<_>>()
        .join(" + ")
}
