/// Candidate meal names for one cuisine, per slot. Every list is non-empty.
#[derive(Debug)]
pub struct CuisineMeals {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snack: &'static [&'static str],
}

pub const DEFAULT_CUISINE: &str = "default";

static DEFAULT_MEALS: CuisineMeals = CuisineMeals {
    breakfast: &["Oat porridge with fruit", "Eggs and whole wheat toast"],
    lunch: &["Mixed salad with lean protein and grains", "Soup with whole grain roll"],
    dinner: &["Grilled lean protein with vegetables", "Stir-fry with brown rice"],
    snack: &["Nuts", "Yogurt"],
};

static CATALOG: &[(&str, &CuisineMeals)] = &[
    ("indian", &CuisineMeals {
        breakfast: &["Poha with veggies", "Oats idli", "Vegetable upma"],
        lunch: &["Brown rice with dal and sabzi", "Roti with paneer bhurji and salad"],
        dinner: &["Grilled fish/chicken with salad", "Mixed vegetable curry with millet rotis"],
        snack: &["Roasted chana", "Fruit chaat"],
    }),
    ("mediterranean", &CuisineMeals {
        breakfast: &["Greek yogurt with nuts and honey", "Tomato & cucumber toast"],
        lunch: &["Grain bowl with chickpeas & veggies", "Grilled chicken salad"],
        dinner: &["Baked fish with lemon and herbs", "Lentil stew with whole grain bread"],
        snack: &["Hummus with carrots", "Olives & cheese"],
    }),
    ("asian", &CuisineMeals {
        breakfast: &["Congee with egg", "Soy milk and steamed bun"],
        lunch: &["Stir-fried veggies with tofu and rice", "Noodle soup with lean protein"],
        dinner: &["Grilled fish with steamed greens", "Vegetable curry with rice"],
        snack: &["Edamame", "Fresh fruit"],
    }),
    (DEFAULT_CUISINE, &DEFAULT_MEALS),
];

pub fn lookup(cuisine: &str) -> Option<&'static CuisineMeals> {
    CATALOG.iter().find(|(key, _)| *key == cuisine).map(|(_, meals)| *meals)
}

/// Resolves a lowercased cuisine key, falling back to the default entry.
pub fn meals_for(cuisine: &str) -> &'static CuisineMeals {
    lookup(cuisine).unwrap_or(&DEFAULT_MEALS)
}

pub fn cuisines() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(key, _)| *key)
}
