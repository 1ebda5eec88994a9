use crate::models::MealSlot;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict (revised) coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_WEIGHT: f64 = 9.247;
pub const FEMALE_BMR_HEIGHT: f64 = 3.098;
pub const FEMALE_BMR_AGE: f64 = 4.330;

/// Fixed moderate-activity multiplier. Not user-selectable.
pub const ACTIVITY_MULTIPLIER: f64 = 1.55;

// ─────────────────────────────────────────────────────────────────────────────
// Objective adjustments (kcal/day relative to TDEE)
// ─────────────────────────────────────────────────────────────────────────────

pub const LOSE_WEIGHT_DELTA: f64 = -500.0;
pub const LOSE_WEIGHT_GAIN_MUSCLE_DELTA: f64 = -300.0;
pub const DEFINE_AND_GAIN_MUSCLE_DELTA: f64 = 0.0;
pub const GAIN_MUSCLE_DELTA: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal distribution and macros
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the daily target allocated to each slot.
///
/// These sum to 1.20, not 1.0, so the planned meals add up to 120% of the
/// target. Kept as-is; `PlanOptions::normalize_meal_weights` rescales them.
pub fn meal_weight(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::MorningSnack => 0.15,
        MealSlot::Lunch => 0.35,
        MealSlot::AfternoonSnack => 0.15,
        MealSlot::Dinner => 0.30,
    }
}

/// Sum of all slot weights.
pub fn meal_weight_total() -> f64 {
    MealSlot::ALL.into_iter().map(meal_weight).sum()
}

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fraction of a meal's calories from each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Split used when a slot name is not recognized.
pub const DEFAULT_MACRO_SPLIT: MacroSplit = MacroSplit {
    protein: 0.30,
    carbs: 0.40,
    fats: 0.30,
};

pub fn macro_split(slot: MealSlot) -> MacroSplit {
    let (protein, carbs, fats) = match slot {
        MealSlot::Breakfast => (0.25, 0.50, 0.25),
        MealSlot::MorningSnack => (0.30, 0.45, 0.25),
        MealSlot::Lunch => (0.30, 0.45, 0.25),
        MealSlot::AfternoonSnack => (0.35, 0.40, 0.25),
        MealSlot::Dinner => (0.40, 0.30, 0.30),
    };
    MacroSplit {
        protein,
        carbs,
        fats,
    }
}

/// Look up the split by slot name, falling back to `DEFAULT_MACRO_SPLIT`.
pub fn macro_split_by_name(name: &str) -> MacroSplit {
    name.parse::<MealSlot>()
        .map(macro_split)
        .unwrap_or(DEFAULT_MACRO_SPLIT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection rules
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum foods a slot needs before a plan can be computed.
pub const MIN_SELECTIONS_PER_SLOT: usize = 2;

/// Foods sampled per meal: `min(MAX, max(MIN, selected))`.
pub const MIN_SAMPLED_FOODS: usize = 3;
pub const MAX_SAMPLED_FOODS: usize = 4;

/// Fuzzy-match score needed to suggest a catalog food for typed input.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Share of the overall progress carried by personal fields (rest is meals).
pub const FORM_PROGRESS_WEIGHT: f64 = 50.0;

/// Progress percentage at which the form is considered ready.
pub const READY_PROGRESS: f64 = 80.0;

// ─────────────────────────────────────────────────────────────────────────────
// Static guidance text
// ─────────────────────────────────────────────────────────────────────────────

/// Portion suggestions shown with each meal.
pub fn suggestions(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &[
            "1 cup of coffee with skimmed milk (150ml)",
            "2 slices of wholegrain bread or tapioca",
            "1 scrambled egg or white cheese (30g)",
            "1 medium fruit (banana, apple or papaya)",
            "1 tablespoon of oats (optional)",
        ],
        MealSlot::MorningSnack => &[
            "1 scoop of whey protein (30g) or natural yogurt",
            "1 medium banana or apple",
            "1 small handful of nuts (10-15 units)",
            "200ml of water or green tea",
        ],
        MealSlot::Lunch => &[
            "150-200g of lean protein (chicken, beef or fish)",
            "4-5 tablespoons of brown rice or sweet potato",
            "2 tablespoons of beans or lentils",
            "Green salad at will with olive oil (1 tablespoon)",
            "Sauteed vegetables (carrot, zucchini)",
        ],
        MealSlot::AfternoonSnack => &[
            "1 natural yogurt or whey protein",
            "1 fruit or small tapioca",
            "1 slice of wholegrain bread with cheese",
            "200ml of water or natural juice",
        ],
        MealSlot::Dinner => &[
            "120-150g of grilled lean protein",
            "Complete salad with green leaves",
            "Cooked or sauteed vegetables",
            "1 small sweet potato (optional)",
            "Digestive tea after the meal",
        ],
    }
}

pub const SCHEDULE_TIP: &str = "Keep 3-4 hour intervals between meals";

pub const GENERAL_TIPS: [&str; 5] = [
    "Drink at least 2-3 liters of water during the day",
    "Adjust portions to your hunger and satiety",
    "Exercise regularly",
    "See a nutritionist for personalized follow-up",
    "Track your weight and how you feel on the diet",
];

/// Default meal times offered by the interactive form.
pub const DEFAULT_MEAL_TIMES: &str = "07:00,10:00,12:30,15:30,19:30";

/// Foods offered for each slot in the interactive form.
pub fn food_catalog(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &[
            "Coffee with milk",
            "Wholegrain bread",
            "Tapioca",
            "Scrambled eggs",
            "White cheese",
            "Banana",
            "Papaya",
            "Oats",
            "Natural yogurt",
        ],
        MealSlot::MorningSnack => &[
            "Whey protein",
            "Natural yogurt",
            "Banana",
            "Apple",
            "Nuts",
            "Green tea",
            "Rice cake",
        ],
        MealSlot::Lunch => &[
            "Chicken breast",
            "Lean beef",
            "Fish",
            "Brown rice",
            "Sweet potato",
            "Beans",
            "Lentils",
            "Green salad",
            "Sauteed vegetables",
        ],
        MealSlot::AfternoonSnack => &[
            "Natural yogurt",
            "Whey protein",
            "Fruit",
            "Tapioca",
            "Wholegrain bread with cheese",
            "Natural juice",
            "Peanut butter",
        ],
        MealSlot::Dinner => &[
            "Grilled chicken",
            "Grilled fish",
            "Omelette",
            "Complete salad",
            "Cooked vegetables",
            "Sweet potato",
            "Soup",
            "Digestive tea",
        ],
    }
}
