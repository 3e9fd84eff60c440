//! # Display Tests
//!
//! Renders lists built by the store in each bundled language.

use anyhow::Result;
use grocery_list::list_display::{group_by_aisle, render_list};
use grocery_list::localization::LocalizationManager;
use grocery_list::{AisleCategory, GroceryListStore, Ingredient, MemoryStorage, RecipeBook};

async fn sample_list() -> Result<Vec<grocery_list::GroceryItem>> {
    let store = GroceryListStore::new(MemoryStorage::new(), RecipeBook::new(), "list");
    store
        .add_recipe_ingredients(
            "curry",
            "Chickpea Curry",
            &[
                Ingredient::new("chickpeas", "2 cans"),
                Ingredient::new("onion", "1"),
                Ingredient::new("curry powder", "2 tbsp"),
                Ingredient::new("coconut milk", "1 can"),
            ],
        )
        .await?;
    store
        .add_recipe_ingredients(
            "rice",
            "Steamed Rice",
            &[Ingredient::new("basmati rice", "1 cup")],
        )
        .await?;
    Ok(store.get_list().await)
}

#[tokio::test]
async fn test_sections_follow_aisle_order() -> Result<()> {
    let items = sample_list().await?;
    let sections = group_by_aisle(&items);

    let aisles: Vec<AisleCategory> = sections.iter().map(|s| s.aisle).collect();
    assert_eq!(
        aisles,
        vec![
            AisleCategory::Produce,
            AisleCategory::Pantry,
            AisleCategory::SpicesSeasonings
        ]
    );

    let pantry: Vec<&str> = sections[1].items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(pantry, vec!["basmati rice", "chickpeas", "coconut milk"]);
    Ok(())
}

#[tokio::test]
async fn test_render_in_english_and_french() -> Result<()> {
    let items = sample_list().await?;
    let l10n = LocalizationManager::new()?;

    let english = render_list(&items, &l10n, "en");
    assert!(english.starts_with("Shopping list (5 items)"));
    assert!(english.contains("  [ ] onion: 1 (from Chickpea Curry)\n"));
    assert!(english.contains("  [ ] basmati rice: 1 cup (from Steamed Rice)\n"));

    let french = render_list(&items, &l10n, "fr-CA");
    assert!(french.contains("Fruits et légumes"));
    assert!(!french.contains("Produce"));
    Ok(())
}
