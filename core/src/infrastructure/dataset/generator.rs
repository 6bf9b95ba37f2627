//! Synthetic training table generator.
//!
//! Produces a realistic labeled dataset: per-category nutrition ranges and
//! hand-tuned suitability-score heuristics, seeded for reproducibility.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::{food::value_objects::FoodCategory, training::entities::DatasetRow};

fn menu(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::SaladsAndGreens => &[
            "Grilled Chicken Salad",
            "Caesar Salad",
            "Greek Salad",
            "Kale Salad",
            "Spinach Salad",
            "Garden Salad",
            "Tuna Salad",
            "Cobb Salad",
            "Asian Chicken Salad",
            "Quinoa Salad",
            "Caprese Salad",
            "Nicoise Salad",
            "Waldorf Salad",
            "Arugula Salad",
            "Mediterranean Salad",
        ],
        FoodCategory::LowCarbMeals => &[
            "Zucchini Noodles with Pesto",
            "Cauliflower Rice Bowl",
            "Egg White Scramble",
            "Lettuce Wrap Tacos",
            "Grilled Steak with Asparagus",
            "Shirataki Noodle Stir Fry",
            "Cabbage Rolls",
            "Stuffed Bell Peppers",
            "Cloud Bread Sandwich",
            "Eggplant Lasagna",
            "Spaghetti Squash",
            "Keto Pizza",
            "Cheese Crisps",
        ],
        FoodCategory::HighProtein => &[
            "Grilled Chicken Breast",
            "Protein Smoothie Bowl",
            "Egg White Omelette",
            "Turkey Breast",
            "Tuna Steak",
            "Cottage Cheese Bowl",
            "Greek Yogurt Parfait",
            "Chicken Burrito Bowl",
            "Beef Stir Fry",
            "Salmon Fillet",
            "Shrimp Skewers",
            "Protein Pancakes",
            "Chicken Wrap",
        ],
        FoodCategory::HeartHealthy => &[
            "Baked Salmon with Vegetables",
            "Oatmeal with Berries",
            "Avocado Toast",
            "Chia Seed Pudding",
            "Walnut Crusted Fish",
            "Olive Oil Pasta",
            "Almond Butter Toast",
            "Mediterranean Bowl",
            "Flaxseed Muffin",
            "Omega-3 Smoothie",
            "Sardine Salad",
            "Mackerel Grill",
        ],
        FoodCategory::DiabeticFriendly => &[
            "Cinnamon Oatmeal",
            "Sugar-Free Berry Bowl",
            "Veggie Omelette",
            "Grilled Fish with Greens",
            "Lentil Soup",
            "Chickpea Curry",
            "Roasted Vegetables",
            "Baked Tofu",
            "Steamed Broccoli with Chicken",
            "Cauliflower Mash",
            "Green Bean Casserole",
            "Mushroom Soup",
        ],
        FoodCategory::WholeGrains => &[
            "Brown Rice Bowl",
            "Quinoa Pilaf",
            "Whole Wheat Pasta",
            "Barley Soup",
            "Oatmeal Bowl",
            "Bulgur Salad",
            "Farro Bowl",
            "Wild Rice Mix",
            "Whole Grain Bread",
            "Buckwheat Pancakes",
            "Millet Porridge",
            "Amaranth Bowl",
            "Whole Wheat Pizza",
        ],
        FoodCategory::LeanProtein => &[
            "Baked Chicken Breast",
            "Grilled Turkey",
            "Cod Fillet",
            "Tilapia Baked",
            "Shrimp Cocktail",
            "Egg Whites",
            "Turkey Meatballs",
            "Chicken Skewers",
            "Fish Tacos",
            "Lean Beef Patty",
            "Venison Steak",
            "Rabbit Stew",
            "Bison Burger",
        ],
        FoodCategory::Vegetarian => &[
            "Veggie Burger",
            "Tofu Stir Fry",
            "Lentil Dal",
            "Chickpea Curry",
            "Black Bean Burrito",
            "Falafel Wrap",
            "Vegetable Curry",
            "Paneer Tikka",
            "Tempeh Bowl",
            "Seitan Stir Fry",
            "Edamame Bowl",
            "Bean Chili",
            "Veggie Pizza",
        ],
        FoodCategory::Soups => &[
            "Vegetable Soup",
            "Chicken Broth",
            "Tomato Soup",
            "Lentil Soup",
            "Minestrone",
            "Miso Soup",
            "Butternut Squash Soup",
            "French Onion Soup",
            "Split Pea Soup",
            "Mushroom Soup",
            "Gazpacho",
            "Pho",
            "Ramen",
        ],
        FoodCategory::GrilledItems => &[
            "Grilled Salmon",
            "BBQ Chicken",
            "Grilled Vegetables",
            "Kebabs",
            "Grilled Shrimp",
            "Steak",
            "Pork Chops",
            "Lamb Chops",
            "Grilled Portobello",
            "Grilled Halloumi",
            "Grilled Corn",
            "Mixed Grill",
            "Tandoori Chicken",
            "Grilled Eggplant",
            "BBQ Tofu",
        ],
    }
}

struct NutritionRange {
    calories: (u32, u32),
    protein: (u32, u32),
    carbohydrates: (u32, u32),
}

fn nutrition_range(category: FoodCategory) -> NutritionRange {
    let (calories, protein, carbohydrates) = match category {
        FoodCategory::SaladsAndGreens => ((150, 350), (10, 35), (10, 30)),
        FoodCategory::LowCarbMeals => ((200, 400), (20, 40), (5, 25)),
        FoodCategory::HighProtein => ((200, 450), (30, 50), (10, 40)),
        FoodCategory::HeartHealthy => ((200, 400), (15, 35), (20, 45)),
        FoodCategory::DiabeticFriendly => ((150, 350), (15, 35), (10, 30)),
        FoodCategory::WholeGrains => ((250, 450), (8, 20), (40, 65)),
        FoodCategory::LeanProtein => ((150, 300), (25, 45), (0, 15)),
        FoodCategory::Vegetarian => ((200, 450), (10, 25), (30, 60)),
        FoodCategory::Soups => ((100, 300), (5, 20), (15, 40)),
        FoodCategory::GrilledItems => ((250, 500), (25, 45), (10, 35)),
    };
    NutritionRange {
        calories,
        protein,
        carbohydrates,
    }
}

fn score_between(rng: &mut StdRng, low: u32, high: u32) -> f64 {
    f64::from(rng.gen_range(low..high))
}

/// Suitability score heuristics, one per condition, in label order.
fn health_scores(
    rng: &mut StdRng,
    calories: f64,
    protein: f64,
    carbohydrates: f64,
    category: FoodCategory,
) -> [f64; 6] {
    // diabetes: favor low carbs and low calories
    let mut diabetes = if carbohydrates < 20.0 && calories < 300.0 {
        score_between(rng, 8, 11)
    } else if carbohydrates > 50.0 || calories > 600.0 {
        score_between(rng, 1, 4)
    } else {
        score_between(rng, 4, 8)
    };
    if category == FoodCategory::DiabeticFriendly {
        diabetes = (diabetes + 2.0).min(10.0);
    }

    // hypertension: low sodium proxied by low calories and carbs
    let mut hypertension = if calories < 300.0 && carbohydrates < 40.0 {
        score_between(rng, 7, 11)
    } else if calories > 600.0 {
        score_between(rng, 1, 4)
    } else {
        score_between(rng, 4, 8)
    };
    if matches!(
        category,
        FoodCategory::Soups | FoodCategory::SaladsAndGreens
    ) {
        hypertension = hypertension.max(6.0);
    }

    // heart disease: favor lean protein, low fat
    let mut heart_disease = if protein > 25.0 && calories < 400.0 {
        score_between(rng, 7, 11)
    } else if calories > 600.0 {
        score_between(rng, 1, 5)
    } else {
        score_between(rng, 4, 8)
    };
    if matches!(
        category,
        FoodCategory::HeartHealthy | FoodCategory::LeanProtein
    ) {
        heart_disease = (heart_disease + 2.0).min(10.0);
    }

    // cholesterol: favor plant-based and lean proteins
    let cholesterol = if matches!(
        category,
        FoodCategory::Vegetarian | FoodCategory::SaladsAndGreens | FoodCategory::WholeGrains
    ) {
        score_between(rng, 7, 11)
    } else if protein > 30.0
        && matches!(
            category,
            FoodCategory::LeanProtein | FoodCategory::GrilledItems
        )
    {
        score_between(rng, 6, 9)
    } else {
        score_between(rng, 3, 7)
    };

    // obesity (weight loss): favor low calories, high protein
    let mut obesity = if calories < 250.0 && protein > 20.0 {
        score_between(rng, 8, 11)
    } else if calories > 500.0 {
        score_between(rng, 1, 4)
    } else {
        score_between(rng, 4, 8)
    };
    if category == FoodCategory::LowCarbMeals {
        obesity = (obesity + 2.0).min(10.0);
    }

    // kidney disease: moderate protein, low sodium
    let kidney = if protein < 25.0 && calories < 400.0 {
        score_between(rng, 6, 10)
    } else if protein > 40.0 {
        score_between(rng, 1, 4)
    } else {
        score_between(rng, 4, 7)
    };

    [
        diabetes,
        hypertension,
        heart_disease,
        cholesterol,
        obesity,
        kidney,
    ]
}

/// Generate the full labeled table, one row per menu item.
pub fn generate_rows(seed: u64) -> Vec<DatasetRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();
    let mut food_id = 1u32;

    for category in FoodCategory::ALL {
        let range = nutrition_range(category);
        for food_name in menu(category) {
            let calories = f64::from(rng.gen_range(range.calories.0..range.calories.1));
            let protein = f64::from(rng.gen_range(range.protein.0..range.protein.1));
            let carbohydrates =
                f64::from(rng.gen_range(range.carbohydrates.0..range.carbohydrates.1));
            let scores = health_scores(&mut rng, calories, protein, carbohydrates, category);

            rows.push(DatasetRow {
                food_id,
                food_name: food_name.to_string(),
                category: category.name().to_string(),
                calories,
                protein,
                carbohydrates,
                diabetes_score: scores[0],
                hypertension_score: scores[1],
                heart_disease_score: scores[2],
                cholesterol_score: scores[3],
                obesity_score: scores[4],
                kidney_score: scores[5],
            });
            food_id += 1;
        }
    }
    rows
}
