/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.20462;

/// Centimeters per inch.
pub const CM_PER_IN: f64 = 2.54;

/// Inches per foot.
pub const IN_PER_FT: f64 = 12.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Suggested fat-loss target below TDEE.
pub const CALORIE_DEFICIT: f64 = 500.0;

/// Suggested muscle-gain target above TDEE.
pub const CALORIE_SURPLUS: f64 = 300.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI and body fat
// ─────────────────────────────────────────────────────────────────────────────

/// BMI category lower bounds (inclusive).
pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

/// BMI-based body fat estimate: `BF_BMI_COEF * bmi + BF_AGE_COEF * age - offset`.
pub const BF_BMI_COEF: f64 = 1.20;
pub const BF_AGE_COEF: f64 = 0.23;
pub const BF_MALE_OFFSET: f64 = 16.2;
pub const BF_FEMALE_OFFSET: f64 = 5.4;

/// Body fat category upper bounds (exclusive): essential, athletic, fitness, average.
pub const BF_MALE_BOUNDS: [f64; 4] = [6.0, 14.0, 18.0, 25.0];
pub const BF_FEMALE_BOUNDS: [f64; 4] = [14.0, 21.0, 25.0, 32.0];

// ─────────────────────────────────────────────────────────────────────────────
// Macros
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calorie and macro ratio policy for one goal. Carbs take the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroPolicy {
    pub kcal_per_kg: f64,
    pub protein_ratio: f64,
    pub fat_ratio: f64,
}

impl MacroPolicy {
    pub fn carb_ratio(&self) -> f64 {
        1.0 - self.protein_ratio - self.fat_ratio
    }
}

pub const WEIGHT_LOSS_MACROS: MacroPolicy = MacroPolicy {
    kcal_per_kg: 22.0,
    protein_ratio: 0.40,
    fat_ratio: 0.30,
};

pub const MUSCLE_GAIN_MACROS: MacroPolicy = MacroPolicy {
    kcal_per_kg: 33.0,
    protein_ratio: 0.30,
    fat_ratio: 0.25,
};

pub const MAINTENANCE_MACROS: MacroPolicy = MacroPolicy {
    kcal_per_kg: 28.0,
    protein_ratio: 0.30,
    fat_ratio: 0.30,
};

// ─────────────────────────────────────────────────────────────────────────────
// One-rep max and ideal weight
// ─────────────────────────────────────────────────────────────────────────────

/// Epley divisor: `orm = w * (1 + reps / EPLEY_DIVISOR)`.
pub const EPLEY_DIVISOR: f64 = 30.0;

/// Sub-maximal training percentages of the one-rep max.
pub const ORM_PERCENTAGES: [f64; 3] = [0.9, 0.8, 0.7];

/// Robinson-style ideal weight, referenced to inches over 5 ft.
pub const IDEAL_BASE_HEIGHT_IN: f64 = 60.0;
pub const IDEAL_MALE_BASE_KG: f64 = 50.0;
pub const IDEAL_FEMALE_BASE_KG: f64 = 45.5;
pub const IDEAL_KG_PER_INCH: f64 = 2.3;

/// Healthy range around the ideal weight (±10%).
pub const IDEAL_RANGE_FRACTION: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Onboarding
// ─────────────────────────────────────────────────────────────────────────────

/// Activity factor assumed when onboarding has not asked for one (moderate).
pub const ONBOARDING_ACTIVITY_FACTOR: f64 = 1.55;

/// Daily water recommendation in liters per kilogram of body weight.
pub const WATER_LITERS_PER_KG: f64 = 0.033;
