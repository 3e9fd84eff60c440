//! # Grocery List
//!
//! Turns recipe ingredient lists into one consolidated shopping list:
//! duplicate ingredients are merged by normalized name, their quantities are
//! summed per unit, and each item is assigned a store aisle. The list is
//! persisted behind a key-value store and supports adding and withdrawing
//! whole recipes.

pub mod aggregator;
pub mod aisle_classifier;
pub mod config;
pub mod errors;
pub mod grocery_model;
pub mod grocery_store;
pub mod list_display;
pub mod localization;
pub mod name_normalizer;
pub mod quantity_formatter;
pub mod quantity_parser;
pub mod quantity_patterns;
pub mod recipe_source;
pub mod storage;

pub use aggregator::{merge_quantities, Aggregator};
pub use aisle_classifier::classify;
pub use errors::GroceryError;
pub use grocery_model::{AggregationEntry, AisleCategory, GroceryItem, Ingredient, Recipe, Source};
pub use grocery_store::GroceryListStore;
pub use name_normalizer::{NaiveDepluralizer, NameNormalizer};
pub use quantity_parser::{parse_quantity, ParsedQuantity};
pub use recipe_source::{RecipeBook, RecipeSource};
pub use storage::{JsonFileStorage, ListStorage, MemoryStorage};
