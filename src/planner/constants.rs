use crate::models::{ActivityLevel, Goal, MacroRatios, MealCategory, MealSlot, Sex};

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict (revised) coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// `(base, per kg, per cm, per year)` for the BMR formula.
#[derive(Debug, Clone, Copy)]
pub struct BmrCoefficients {
    pub base: f64,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
}

pub const MALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

pub const FEMALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

/// Daily deficit applied for weight loss.
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Daily surplus applied for muscle gain.
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal assembly defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Share of a meal's calories given to each of its two sources.
pub const SOURCE_CALORIE_SHARE: f64 = 0.4;

/// Random pick is made among this many best-ranked foods.
pub const TOP_K_SOURCES: usize = 5;

/// Quantities are multiples of this many portions, and never below it.
pub const QUANTITY_STEP: f64 = 0.5;

/// Staple pool must have at least this many foods to be used.
pub const STAPLE_MIN_POOL: usize = 2;

/// The six daily slots. Ratios sum to 1.0.
pub const MEAL_SLOTS: [MealSlot; 6] = [
    MealSlot {
        name: "Café da manhã",
        time_of_day: "07:00",
        calorie_ratio: 0.25,
        category: MealCategory::Breakfast,
    },
    MealSlot {
        name: "Lanche da manhã",
        time_of_day: "10:00",
        calorie_ratio: 0.10,
        category: MealCategory::Snack,
    },
    MealSlot {
        name: "Almoço",
        time_of_day: "12:30",
        calorie_ratio: 0.30,
        category: MealCategory::Lunch,
    },
    MealSlot {
        name: "Lanche da tarde",
        time_of_day: "16:00",
        calorie_ratio: 0.10,
        category: MealCategory::Snack,
    },
    MealSlot {
        name: "Jantar",
        time_of_day: "19:30",
        calorie_ratio: 0.20,
        category: MealCategory::Dinner,
    },
    MealSlot {
        name: "Ceia",
        time_of_day: "22:00",
        calorie_ratio: 0.05,
        category: MealCategory::Snack,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Keyword tables (accent-folded, lowercase)
// ─────────────────────────────────────────────────────────────────────────────

const BREAKFAST_KEYWORDS: &[&str] = &[
    "pao", "ovo", "leite", "iogurte", "aveia", "queijo", "banana", "mamao", "cafe", "tapioca",
    "granola", "fruta", "maca", "cuscuz", "requeijao", "whey", "manteiga", "presunto", "peito de peru",
    "mel", "morango",
];

const MAIN_MEAL_KEYWORDS: &[&str] = &[
    "arroz", "feijao", "frango", "carne", "peixe", "batata", "macarrao", "salada", "legume",
    "ovo", "mandioca", "patinho", "tilapia", "salmao", "atum", "brocolis", "abobora", "file",
    "lentilha", "grao de bico", "quinoa", "alface", "tomate", "cenoura", "inhame", "sardinha",
];

const SNACK_KEYWORDS: &[&str] = &[
    "fruta", "banana", "maca", "iogurte", "castanha", "amendoim", "whey", "barra", "pao", "queijo",
    "granola", "biscoito", "morango", "aveia", "pasta de amendoim", "uva", "pera", "laranja",
    "mamao", "tapioca",
];

const BREAKFAST_STAPLES: &[&str] = &["ovo", "pao", "aveia", "iogurte", "banana", "tapioca"];

const MAIN_MEAL_STAPLES: &[&str] = &["arroz", "feijao", "frango", "patinho", "batata", "tilapia"];

const SNACK_STAPLES: &[&str] = &["banana", "iogurte", "whey", "castanha", "maca"];

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Macro split for a goal.
pub fn macro_ratios(goal: Goal) -> MacroRatios {
    match goal {
        Goal::WeightLoss => MacroRatios {
            protein: 0.40,
            fat: 0.35,
            carbs: 0.25,
        },
        Goal::MuscleGain => MacroRatios {
            protein: 0.30,
            fat: 0.20,
            carbs: 0.50,
        },
        Goal::Maintenance => MacroRatios {
            protein: 0.30,
            fat: 0.35,
            carbs: 0.35,
        },
    }
}

pub fn bmr_coefficients(sex: Sex) -> BmrCoefficients {
    match sex {
        Sex::Male => MALE_BMR,
        Sex::Female => FEMALE_BMR,
    }
}

/// Keywords that place a food in a meal category.
pub fn category_keywords(category: MealCategory) -> &'static [&'static str] {
    match category {
        MealCategory::Breakfast => BREAKFAST_KEYWORDS,
        MealCategory::Lunch | MealCategory::Dinner => MAIN_MEAL_KEYWORDS,
        MealCategory::Snack => SNACK_KEYWORDS,
    }
}

/// Keywords of the preferred staple foods for a meal category.
pub fn staple_keywords(category: MealCategory) -> &'static [&'static str] {
    match category {
        MealCategory::Breakfast => BREAKFAST_STAPLES,
        MealCategory::Lunch | MealCategory::Dinner => MAIN_MEAL_STAPLES,
        MealCategory::Snack => SNACK_STAPLES,
    }
}
