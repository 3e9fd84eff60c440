//! # Aggregation Tests
//!
//! End-to-end checks of the pure merge pipeline: name folding, quantity
//! summing and aisle assignment across several recipes.

use grocery_list::{
    classify, merge_quantities, AggregationEntry, Aggregator, AisleCategory, Ingredient,
    NameNormalizer,
};

fn entries(recipe_id: &str, ingredients: &[(&str, &str)]) -> Vec<AggregationEntry> {
    ingredients
        .iter()
        .map(|(name, quantity)| {
            AggregationEntry::new(
                Ingredient::new(name, quantity),
                recipe_id,
                &format!("{recipe_id} title"),
            )
        })
        .collect()
}

#[test]
fn test_weeknight_menu_aggregation() {
    let mut all = entries(
        "chili",
        &[
            ("Onions", "2"),
            ("ground beef", "1 lb"),
            ("Tomato Paste", "2 tbsp"),
            ("chili powder", "1 tbsp"),
        ],
    );
    all.extend(entries(
        "tacos",
        &[
            ("onion", "1"),
            ("Ground Beef", "1/2 lb"),
            ("tortillas", "8"),
            ("salsa", "as needed"),
        ],
    ));
    all.extend(entries(
        "salad",
        &[("roma tomatoes", "3"), ("olive oil", "2 tbsp"), ("salt", "")],
    ));

    let items = Aggregator::new().aggregate(&all);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Onions",
            "ground beef",
            "Tomato Paste",
            "chili powder",
            "tortillas",
            "salsa",
            "roma tomatoes",
            "olive oil",
            "salt"
        ]
    );

    let onions = &items[0];
    assert_eq!(onions.display_quantity, "3");
    assert_eq!(onions.sources.len(), 2);
    assert_eq!(onions.aisle, AisleCategory::Produce);

    let beef = &items[1];
    assert_eq!(beef.display_quantity, "1 1/2 lbs");
    assert_eq!(beef.aisle, AisleCategory::MeatSeafood);

    assert_eq!(items[2].aisle, AisleCategory::Pantry);
    assert_eq!(items[3].aisle, AisleCategory::SpicesSeasonings);
    assert_eq!(items[4].aisle, AisleCategory::Bakery);
    assert_eq!(items[5].display_quantity, "as needed");
    assert_eq!(items[5].aisle, AisleCategory::CondimentsSauces);
    assert_eq!(items[6].aisle, AisleCategory::Produce);
    assert_eq!(items[8].display_quantity, "");

    assert!(items.iter().all(|i| !i.checked));
    let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn test_merge_sum() {
    assert_eq!(merge_quantities(&["2 cups", "1 cup"]), "3 cups");
    assert_eq!(merge_quantities(&["1/2 cup", "1/4 cup"]), "3/4 cup");
    assert_eq!(merge_quantities(&["1 1/2 cups", "1 cup"]), "2 1/2 cups");
}

#[test]
fn test_merge_keeps_units_apart() {
    assert_eq!(merge_quantities(&["1 cup", "2 tbsp"]), "1 cup + 2 tbsp");
    assert_eq!(merge_quantities(&["2", "1 can"]), "2 + 1 can");
}

#[test]
fn test_pass_through() {
    assert_eq!(merge_quantities(&["as needed"]), "as needed");
    assert_eq!(merge_quantities(&["as needed", "as needed"]), "as needed");
    assert_eq!(merge_quantities(&["2 cups", "to taste"]), "2 cups + to taste");
}

#[test]
fn test_depluralization_fold() {
    let aggregator = Aggregator::new();
    assert_eq!(aggregator.key_for("onion"), aggregator.key_for("onions"));
    assert_eq!(aggregator.key_for("Tomatoes"), aggregator.key_for("tomato"));
    assert_eq!(aggregator.key_for("  Green   Onions "), "green onion");
    assert_eq!(aggregator.normalizer().normalize("glass"), "glass");
}

#[test]
fn test_aisle_determinism() {
    assert_eq!(classify("roma tomato"), AisleCategory::Produce);
    assert_eq!(classify("Tomato Paste"), AisleCategory::Pantry);
    for _ in 0..3 {
        assert_eq!(classify("Tomato Paste"), classify("tomato paste"));
    }
    assert_eq!(classify("unobtainium"), AisleCategory::Other);
}

struct ExactNames;

impl NameNormalizer for ExactNames {
    fn normalize(&self, name: &str) -> String {
        name.trim().to_string()
    }
}

#[test]
fn test_custom_normalizer() {
    let aggregator = Aggregator::with_normalizer(ExactNames);
    let all = entries("a", &[("onion", "1"), ("onions", "2"), ("onion", "1")]);

    let items = aggregator.aggregate(&all);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].display_quantity, "2");
    assert_eq!(items[1].display_quantity, "2");
}
