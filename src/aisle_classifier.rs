//! # Aisle Classifier
//!
//! Files an ingredient under a shopping aisle by keyword matching.
//!
//! The keyword table is an ordered slice evaluated top to bottom: the first
//! row with a keyword contained in the lower-cased name wins, and `Other` is
//! returned when nothing matches. A category may appear in several rows so
//! that narrow phrases can be checked ahead of broad keywords in other aisles
//! ("eggplant" before the dairy "egg", "garlic powder" before the produce
//! "garlic", "unsalted butter" before the spice "salt").

use crate::grocery_model::AisleCategory;
use log::trace;

/// Keyword rows in priority order
pub const AISLE_KEYWORDS: &[(AisleCategory, &[&str])] = &[
    (
        AisleCategory::Produce,
        &["eggplant", "butternut", "snap pea", "honeydew"],
    ),
    (
        AisleCategory::Frozen,
        &["frozen", "ice cream", "popsicle", "sorbet"],
    ),
    (
        AisleCategory::CondimentsSauces,
        &[
            "ketchup", "mustard", "mayonnaise", "mayo", "sauce", "sriracha", "vinegar",
            "salsa", "worcestershire", "pesto", "relish", "pickle", "dressing", "hoisin",
        ],
    ),
    (
        AisleCategory::Pantry,
        &[
            "tomato paste", "canned", "broth", "stock", "flour", "sugar", "rice", "pasta",
            "spaghetti", "macaroni", "noodle", "oats", "barley", "lentil", "chickpea",
            "black bean", "kidney bean", "baking soda", "baking powder", "cream of tartar",
            "yeast", "honey", "syrup", "oil", "cornstarch", "cornmeal", "popcorn", "quinoa",
            "breadcrumb", "peanut", "coconut", "almond", "walnut", "pecan", "cashew",
            "chocolate", "cocoa", "cracker", "cereal",
        ],
    ),
    (
        AisleCategory::Bakery,
        &[
            "bread", "bun", "bagel", "tortilla", "pita", "croissant", "baguette", "muffin",
            "naan", "roll", "pastry", "pie crust", "brioche",
        ],
    ),
    (
        AisleCategory::Beverages,
        &[
            "orange juice", "apple juice", "cranberry juice", "coffee", "espresso",
            "green tea", "black tea", "tea bag", "wine", "beer", "soda", "sparkling water",
            "kombucha", "lemonade",
        ],
    ),
    (
        AisleCategory::DairyEggs,
        &[
            "milk", "cheese", "butter", "cream", "yogurt", "egg", "half and half", "ghee",
            "parmesan", "mozzarella", "cheddar", "feta", "ricotta",
        ],
    ),
    (
        AisleCategory::SpicesSeasonings,
        &[
            "garlic powder", "onion powder", "ground ginger", "black pepper", "peppercorn",
            "pepper flake", "chili flake", "chili powder", "cayenne", "paprika", "cumin",
            "cinnamon", "nutmeg", "oregano", "curry", "turmeric", "seasoning", "spice",
            "dried", "bay lea", "vanilla", "salt",
        ],
    ),
    (
        AisleCategory::Produce,
        &[
            "tomato", "onion", "garlic", "lettuce", "carrot", "celery", "bell pepper",
            "jalapeno", "jalapeño", "chili", "chile", "cucumber", "zucchini", "broccoli",
            "cauliflower", "spinach", "kale", "cabbage", "potato", "mushroom", "green bean",
            "peas", "corn", "avocado", "squash", "ginger", "cilantro", "parsley", "basil",
            "mint", "thyme", "rosemary", "dill", "scallion", "shallot", "leek", "arugula",
            "beet", "radish", "asparagus", "lemon", "lime", "orange", "apple", "banana",
            "berry", "berries", "grape", "mango", "pineapple", "melon", "peach", "pear",
            "cherr", "herb", "fruit", "vegetable",
        ],
    ),
    (
        AisleCategory::MeatSeafood,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "ham", "steak",
            "veal", "duck", "chorizo", "prosciutto", "pancetta", "salmon", "tuna", "shrimp",
            "prawn", "fish", "cod", "tilapia", "crab", "lobster", "scallop", "anchov",
        ],
    ),
];

/// Classify an ingredient name into an aisle
pub fn classify(name: &str) -> AisleCategory {
    let lower = name.to_lowercase();

    for (aisle, keywords) in AISLE_KEYWORDS {
        if let Some(keyword) = keywords.iter().find(|k| lower.contains(*k)) {
            trace!("Classified '{}' as {} via '{}'", name, aisle, keyword);
            return *aisle;
        }
    }

    trace!("No aisle keyword for '{}', using other", name);
    AisleCategory::Other
}
