//! # Grocery List Store
//!
//! Owns the persisted grocery list and implements the mutation protocol the
//! UI calls into. Every operation loads the list, applies one change and saves
//! it back; callers are expected to issue one operation at a time.
//!
//! Adding a recipe rebuilds the whole list from the retained per-recipe
//! contributions instead of patching totals, so re-adding a recipe replaces
//! its earlier contributions rather than double-counting them.

use crate::aggregator::Aggregator;
use crate::errors::GroceryError;
use crate::grocery_model::{AggregationEntry, GroceryItem, Ingredient};
use crate::name_normalizer::{NaiveDepluralizer, NameNormalizer};
use crate::recipe_source::RecipeSource;
use crate::storage::{load_list, save_list, ListStorage};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Persisted grocery list with recipe-level add and remove
pub struct GroceryListStore<S, R, N: NameNormalizer = NaiveDepluralizer> {
    storage: S,
    recipes: R,
    aggregator: Aggregator<N>,
    storage_key: String,
}

impl<S: ListStorage, R: RecipeSource> GroceryListStore<S, R, NaiveDepluralizer> {
    /// Create a store with the default aggregator
    pub fn new(storage: S, recipes: R, storage_key: &str) -> Self {
        Self::with_aggregator(storage, recipes, storage_key, Aggregator::new())
    }
}

impl<S: ListStorage, R: RecipeSource, N: NameNormalizer> GroceryListStore<S, R, N> {
    /// Create a store with a custom aggregator
    pub fn with_aggregator(
        storage: S,
        recipes: R,
        storage_key: &str,
        aggregator: Aggregator<N>,
    ) -> Self {
        Self {
            storage,
            recipes,
            aggregator,
            storage_key: storage_key.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The current list; empty if nothing is stored or the blob is unreadable
    pub async fn get_list(&self) -> Vec<GroceryItem> {
        load_list(&self.storage, &self.storage_key).await
    }

    async fn save(&self, items: &[GroceryItem]) -> Result<(), GroceryError> {
        save_list(&self.storage, &self.storage_key, items).await
    }

    /// Look up a recipe and merge its ingredients into the list.
    ///
    /// An unknown recipe leaves the list untouched.
    pub async fn add_recipe(&self, recipe_id: &str) -> Result<(), GroceryError> {
        let Some(recipe) = self.recipes.get_ingredients(recipe_id).await? else {
            warn!(recipe_id, "Recipe not found, list unchanged");
            return Ok(());
        };

        self.add_recipe_ingredients(recipe_id, &recipe.title, &recipe.ingredients)
            .await
    }

    /// Merge a recipe's ingredients into the list, replacing any earlier
    /// contributions from the same recipe.
    pub async fn add_recipe_ingredients(
        &self,
        recipe_id: &str,
        recipe_title: &str,
        ingredients: &[Ingredient],
    ) -> Result<(), GroceryError> {
        let previous = self.get_list().await;
        let items = self.rebuild_with_recipe(&previous, recipe_id, recipe_title, ingredients);

        info!(
            recipe_id,
            ingredient_count = ingredients.len(),
            item_count = items.len(),
            "Added recipe to grocery list"
        );
        self.save(&items).await
    }

    /// Withdraw every contribution from a recipe
    pub async fn remove_recipe(&self, recipe_id: &str) -> Result<(), GroceryError> {
        let previous = self.get_list().await;
        let before = previous.len();
        let items = self.without_recipe(previous, recipe_id);

        info!(
            recipe_id,
            removed_items = before - items.len(),
            item_count = items.len(),
            "Removed recipe from grocery list"
        );
        self.save(&items).await
    }

    /// Flip the checked flag of one item; unknown ids are ignored
    pub async fn toggle_checked(&self, item_id: &str) -> Result<(), GroceryError> {
        let mut items = self.get_list().await;
        let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
            debug!(item_id, "Toggle on unknown item ignored");
            return Ok(());
        };

        item.checked = !item.checked;
        debug!(item_id, checked = item.checked, "Toggled item");
        self.save(&items).await
    }

    /// Delete one item; unknown ids are ignored
    pub async fn remove_item(&self, item_id: &str) -> Result<(), GroceryError> {
        let mut items = self.get_list().await;
        let before = items.len();
        items.retain(|i| i.id != item_id);

        if items.len() == before {
            debug!(item_id, "Remove on unknown item ignored");
            return Ok(());
        }

        debug!(item_id, "Removed item");
        self.save(&items).await
    }

    /// Delete every checked item
    pub async fn clear_checked(&self) -> Result<(), GroceryError> {
        let mut items = self.get_list().await;
        let before = items.len();
        items.retain(|i| !i.checked);

        info!(cleared = before - items.len(), "Cleared checked items");
        self.save(&items).await
    }

    /// Empty the list
    pub async fn clear_all(&self) -> Result<(), GroceryError> {
        info!("Clearing grocery list");
        self.save(&[]).await
    }

    /// Whether any item carries a contribution from `recipe_id`
    pub async fn is_recipe_in_list(&self, recipe_id: &str) -> bool {
        self.get_list()
            .await
            .iter()
            .any(|item| item.has_source(recipe_id))
    }

    /// Rebuild the list from every contribution not owned by `recipe_id`
    /// plus the recipe's new ingredients.
    ///
    /// Checked state, id and `added_at` follow the normalized name from the
    /// previous list.
    pub fn rebuild_with_recipe(
        &self,
        previous: &[GroceryItem],
        recipe_id: &str,
        recipe_title: &str,
        ingredients: &[Ingredient],
    ) -> Vec<GroceryItem> {
        let mut entries: Vec<AggregationEntry> = previous
            .iter()
            .flat_map(|item| {
                item.sources
                    .iter()
                    .filter(|source| source.recipe_id != recipe_id)
                    .map(|source| AggregationEntry::from_source(&item.name, source))
            })
            .collect();
        entries.extend(
            ingredients
                .iter()
                .map(|ingredient| AggregationEntry::new(ingredient.clone(), recipe_id, recipe_title)),
        );

        let checked_keys: HashSet<String> = previous
            .iter()
            .filter(|item| item.checked)
            .map(|item| self.aggregator.key_for(&item.name))
            .collect();

        let mut identities: HashMap<String, &GroceryItem> = HashMap::new();
        for item in previous {
            identities
                .entry(self.aggregator.key_for(&item.name))
                .or_insert(item);
        }

        let mut items = self.aggregator.aggregate(&entries);
        for item in &mut items {
            let key = self.aggregator.key_for(&item.name);
            if checked_keys.contains(&key) {
                item.checked = true;
            }
            if let Some(earlier) = identities.get(&key) {
                item.id = earlier.id.clone();
                item.added_at = earlier.added_at;
            }
        }

        debug!(
            recipe_id,
            entry_count = entries.len(),
            item_count = items.len(),
            "Rebuilt grocery list"
        );
        items
    }

    /// Drop `recipe_id`'s contributions item by item.
    ///
    /// Items left without sources disappear; items that only shrank are
    /// re-merged from their remaining sources and keep id, checked state and
    /// `added_at`; untouched items are returned as they were.
    pub fn without_recipe(&self, previous: Vec<GroceryItem>, recipe_id: &str) -> Vec<GroceryItem> {
        previous
            .into_iter()
            .filter_map(|item| {
                if !item.has_source(recipe_id) {
                    return Some(item);
                }

                let entries: Vec<AggregationEntry> = item
                    .sources
                    .iter()
                    .filter(|source| source.recipe_id != recipe_id)
                    .map(|source| AggregationEntry::from_source(&item.name, source))
                    .collect();
                if entries.is_empty() {
                    debug!(recipe_id, item = %item.name, "Item lost its last source");
                    return None;
                }

                let merged = self.aggregator.aggregate(&entries).into_iter().next()?;
                Some(GroceryItem {
                    display_quantity: merged.display_quantity,
                    aisle: merged.aisle,
                    sources: merged.sources,
                    ..item
                })
            })
            .collect()
    }
}
