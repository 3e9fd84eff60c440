//! # Grocery List Data Model
//!
//! This module defines the data structures that flow through the grocery-list
//! engine: the raw ingredients a recipe contributes, the merged shopping items
//! that get persisted, and the aisle categories items are filed under.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: a single recipe's raw (name, quantity) pair
//! - **Source**: provenance of one contribution to a grocery item
//! - **GroceryItem**: a merged shopping-list entry for one normalized name
//! - **AisleCategory**: the shopping aisle an item is grouped under
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::grocery_model::{AggregationEntry, Ingredient};
//!
//! let entry = AggregationEntry::new(Ingredient::new("flour", "2 cups"), "r1", "Pancakes");
//! assert_eq!(entry.ingredient.quantity, "2 cups");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ingredient as extracted from a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The ingredient name as written in the recipe (e.g., "Red Onions")
    pub name: String,

    /// Free-text quantity (e.g., "2 cups", "1/2 tsp", "as needed")
    #[serde(default)]
    pub quantity: String,

    /// Optional category hint supplied by the recipe source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    /// Create a new ingredient with a name and a free-text quantity
    pub fn new(name: &str, quantity: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: None,
        }
    }

    /// Attach a category hint
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// A recipe as returned by the recipe lookup collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(title: &str, ingredients: Vec<Ingredient>) -> Self {
        Self {
            title: title.to_string(),
            ingredients,
        }
    }
}

/// Provenance record: one recipe's contribution to a grocery item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub recipe_id: String,
    pub recipe_title: String,
    /// The quantity string exactly as the recipe contributed it
    pub quantity: String,
}

/// A merged, persisted shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name, taken from the first-seen contribution
    pub name: String,

    /// Merged quantity rendered for display (e.g., "3 cups + a pinch")
    pub display_quantity: String,

    /// Shopping aisle this item is filed under
    pub aisle: AisleCategory,

    /// Whether the user has checked this item off
    #[serde(default)]
    pub checked: bool,

    /// Contributions, in the order they were aggregated. Never empty.
    pub sources: Vec<Source>,

    /// When the item first appeared on the list
    pub added_at: DateTime<Utc>,
}

impl GroceryItem {
    /// Check whether a recipe contributes to this item
    pub fn has_source(&self, recipe_id: &str) -> bool {
        self.sources.iter().any(|s| s.recipe_id == recipe_id)
    }

    /// Titles of the contributing recipes, deduplicated in first-seen order
    pub fn recipe_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !titles.contains(&source.recipe_title.as_str()) {
                titles.push(&source.recipe_title);
            }
        }
        titles
    }
}

/// Shopping aisle categories. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AisleCategory {
    Produce,
    MeatSeafood,
    DairyEggs,
    Bakery,
    Frozen,
    Pantry,
    SpicesSeasonings,
    CondimentsSauces,
    Beverages,
    Other,
}

impl AisleCategory {
    /// All categories in display order
    pub const ALL: [AisleCategory; 10] = [
        AisleCategory::Produce,
        AisleCategory::MeatSeafood,
        AisleCategory::DairyEggs,
        AisleCategory::Bakery,
        AisleCategory::Frozen,
        AisleCategory::Pantry,
        AisleCategory::SpicesSeasonings,
        AisleCategory::CondimentsSauces,
        AisleCategory::Beverages,
        AisleCategory::Other,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            AisleCategory::Produce => "produce",
            AisleCategory::MeatSeafood => "meat-seafood",
            AisleCategory::DairyEggs => "dairy-eggs",
            AisleCategory::Bakery => "bakery",
            AisleCategory::Frozen => "frozen",
            AisleCategory::Pantry => "pantry",
            AisleCategory::SpicesSeasonings => "spices-seasonings",
            AisleCategory::CondimentsSauces => "condiments-sauces",
            AisleCategory::Beverages => "beverages",
            AisleCategory::Other => "other",
        }
    }

    /// Position of this category in display order
    pub fn display_rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for AisleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ingredient contribution attributed to a recipe; the aggregator's input
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationEntry {
    pub ingredient: Ingredient,
    pub recipe_id: String,
    pub recipe_title: String,
}

impl AggregationEntry {
    pub fn new(ingredient: Ingredient, recipe_id: &str, recipe_title: &str) -> Self {
        Self {
            ingredient,
            recipe_id: recipe_id.to_string(),
            recipe_title: recipe_title.to_string(),
        }
    }

    /// Replay a persisted source under the item's display name
    pub fn from_source(item_name: &str, source: &Source) -> Self {
        Self {
            ingredient: Ingredient::new(item_name, &source.quantity),
            recipe_id: source.recipe_id.clone(),
            recipe_title: source.recipe_title.clone(),
        }
    }
}
