//! # Recipe Source
//!
//! The recipe lookup collaborator. The grocery store only needs a recipe's
//! title and ingredients, so the seam is a single async lookup.

use crate::errors::GroceryError;
use crate::grocery_model::Recipe;
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Looks up a recipe's title and ingredients by id
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// `Ok(None)` when the recipe is unknown
    async fn get_ingredients(&self, recipe_id: &str) -> Result<Option<Recipe>, GroceryError>;
}

/// In-memory recipe collection, keyed by recipe id.
///
/// Serializes as a JSON object mapping id to `{ "title", "ingredients" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a recipe
    pub fn insert(&mut self, recipe_id: &str, recipe: Recipe) {
        self.recipes.insert(recipe_id.to_string(), recipe);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_recipe(mut self, recipe_id: &str, recipe: Recipe) -> Self {
        self.insert(recipe_id, recipe);
        self
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Parse a recipe book from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, GroceryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a recipe book from a JSON file
    pub async fn from_json_file(path: &Path) -> Result<Self, GroceryError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            GroceryError::RecipeLookup(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let book = Self::from_json_str(&content)?;
        info!("Loaded {} recipes from {}", book.len(), path.display());
        Ok(book)
    }
}

#[async_trait]
impl RecipeSource for RecipeBook {
    async fn get_ingredients(&self, recipe_id: &str) -> Result<Option<Recipe>, GroceryError> {
        Ok(self.recipes.get(recipe_id).cloned())
    }
}
