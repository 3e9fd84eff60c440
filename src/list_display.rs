//! # List Display
//!
//! Groups grocery items into aisle sections and renders them as plain text.
//! The store keeps items in aggregation order; callers that want a shopping
//! route use [`group_by_aisle`].

use crate::grocery_model::{AisleCategory, GroceryItem};
use crate::localization::LocalizationManager;

/// One aisle heading with its items
#[derive(Debug, Clone, PartialEq)]
pub struct AisleSection<'a> {
    pub aisle: AisleCategory,
    pub items: Vec<&'a GroceryItem>,
}

/// Group items by aisle in [`AisleCategory::ALL`] order, skipping empty
/// aisles. Within an aisle, unchecked items come first, then by name.
pub fn group_by_aisle(items: &[GroceryItem]) -> Vec<AisleSection<'_>> {
    AisleCategory::ALL
        .iter()
        .filter_map(|aisle| {
            let mut section: Vec<&GroceryItem> =
                items.iter().filter(|item| item.aisle == *aisle).collect();
            if section.is_empty() {
                return None;
            }
            section.sort_by(|a, b| {
                a.checked
                    .cmp(&b.checked)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });
            Some(AisleSection {
                aisle: *aisle,
                items: section,
            })
        })
        .collect()
}

/// Render one item line, e.g. `[x] garlic: 3 cloves (from Soup, Tart)`
pub fn format_item_line(item: &GroceryItem, l10n: &LocalizationManager, language: &str) -> String {
    let mark = if item.checked { "x" } else { " " };
    let mut line = format!("[{}] {}", mark, item.name);
    if !item.display_quantity.is_empty() {
        line.push_str(&format!(": {}", item.display_quantity));
    }

    let recipes = item.recipe_titles().join(", ");
    let from = l10n.get_message_with_args("list-from", language, &[("recipes", &recipes)]);
    line.push_str(&format!(" ({from})"));
    line
}

/// Render the whole list grouped by aisle
pub fn render_list(items: &[GroceryItem], l10n: &LocalizationManager, language: &str) -> String {
    if items.is_empty() {
        return format!("{}\n", l10n.get_message_in_language("list-empty", language, None));
    }

    let count = items.len().to_string();
    let mut output = String::new();
    output.push_str(&l10n.get_message_with_args("list-title", language, &[("count", &count)]));
    output.push('\n');

    for section in group_by_aisle(items) {
        output.push('\n');
        output.push_str(&l10n.aisle_label(section.aisle, language));
        output.push('\n');
        for item in section.items {
            output.push_str(&format!("  {}\n", format_item_line(item, l10n, language)));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery_model::Source;
    use chrono::Utc;

    fn item(name: &str, aisle: AisleCategory, checked: bool) -> GroceryItem {
        GroceryItem {
            id: name.to_string(),
            name: name.to_string(),
            display_quantity: "2".to_string(),
            aisle,
            checked,
            sources: vec![Source {
                recipe_id: "r1".to_string(),
                recipe_title: "Stew".to_string(),
                quantity: "2".to_string(),
            }],
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_aisle_order() {
        let items = vec![
            item("salt", AisleCategory::SpicesSeasonings, false),
            item("carrot", AisleCategory::Produce, true),
            item("Apple", AisleCategory::Produce, false),
            item("beef", AisleCategory::MeatSeafood, false),
        ];

        let sections = group_by_aisle(&items);
        let aisles: Vec<_> = sections.iter().map(|s| s.aisle).collect();
        assert_eq!(
            aisles,
            vec![
                AisleCategory::Produce,
                AisleCategory::MeatSeafood,
                AisleCategory::SpicesSeasonings
            ]
        );

        let produce: Vec<_> = sections[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(produce, vec!["Apple", "carrot"]);
    }

    #[test]
    fn test_render_list() {
        let l10n = LocalizationManager::new().unwrap();
        let items = vec![
            item("garlic", AisleCategory::Produce, true),
            item("milk", AisleCategory::DairyEggs, false),
        ];

        let text = render_list(&items, &l10n, "en");
        assert!(text.starts_with("Shopping list (2 items)\n"));
        assert!(text.contains("\nProduce\n  [x] garlic: 2 (from Stew)\n"));
        assert!(text.contains("\nDairy & Eggs\n  [ ] milk: 2 (from Stew)\n"));
    }

    #[test]
    fn test_render_empty_list() {
        let l10n = LocalizationManager::new().unwrap();
        assert_eq!(render_list(&[], &l10n, "fr"), "Votre liste de courses est vide.\n");
    }
}
