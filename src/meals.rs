use chrono::{DateTime, Utc};

use crate::catalog::{self, CuisineMeals};
use crate::error::PlanError;
use crate::metabolic;
use crate::models::{DayMeals, Meal, MealDay, MealPlan};
use crate::profile::{Goal, Profile};

pub const DAYS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot { Breakfast, Lunch, Dinner, Snack }

impl MealSlot {
    /// Fraction of the daily target; each slot is truncated on its own.
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }

    fn candidates(self, meals: &CuisineMeals) -> &'static [&'static str] {
        match self {
            MealSlot::Breakfast => meals.breakfast,
            MealSlot::Lunch => meals.lunch,
            MealSlot::Dinner => meals.dinner,
            MealSlot::Snack => meals.snack,
        }
    }

    fn pick(self, meals: &CuisineMeals, day: u8, target: i64) -> Meal {
        let items = self.candidates(meals);
        Meal {
            item: items[usize::from(day) % items.len()].to_string(),
            cal: (target as f64 * self.share()) as i64,
        }
    }
}

pub fn target_calories(calories: i64, goal: Goal) -> Result<i64, PlanError> {
    match goal {
        Goal::WeightLoss => metabolic::to_whole(calories as f64 * 0.8, "target_calories"),
        Goal::MuscleGain => metabolic::to_whole(calories as f64 * 1.15, "target_calories"),
        Goal::Maintain => Ok(calories),
    }
}

/// Nearest two-decimal value, ties to even, without scaling the amount.
fn round_cents(amount: f64) -> Result<f64, PlanError> {
    let rounded = format!("{amount:.2}")
        .parse::<f64>()
        .map_err(|e| PlanError::validation("budget_per_day", e.to_string()))?;
    if !rounded.is_finite() {
        return Err(PlanError::non_finite("budget_per_day"));
    }
    Ok(rounded)
}

pub fn generate_meal_plan(profile: &Profile) -> Result<MealPlan, PlanError> {
    build_meal_plan(profile, Utc::now())
}

pub fn build_meal_plan(profile: &Profile, created_at: DateTime<Utc>) -> Result<MealPlan, PlanError> {
    let calories = metabolic::profile_caloric_needs(profile)?;
    let target = target_calories(calories, profile.goal)?;
    let meals = catalog::meals_for(&profile.cuisine);
    if catalog::lookup(&profile.cuisine).is_none() {
        tracing::debug!(
            cuisine = %profile.cuisine,
            known = ?catalog::cuisines().collect::<Vec<_>>(),
            "unknown cuisine, using default meals"
        );
    }
    tracing::debug!(calories, target, "building meal plan");

    let estimated_cost = round_cents(profile.budget_per_day)?;
    let daily = (1..=DAYS)
        .map(|day| MealDay {
            day,
            calories_target: target,
            meals: DayMeals {
                breakfast: MealSlot::Breakfast.pick(meals, day, target),
                lunch: MealSlot::Lunch.pick(meals, day, target),
                dinner: MealSlot::Dinner.pick(meals, day, target),
                snack: MealSlot::Snack.pick(meals, day, target),
            },
            estimated_cost,
        })
        .collect();

    Ok(MealPlan { created_at, daily, target_calories: target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Gender};
    use pretty_assertions::assert_eq;

    fn reference_profile() -> Profile {
        Profile {
            name: "Ravi".into(),
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            goal_text: "lose weight".into(),
            goal: Goal::WeightLoss,
            activity_level: ActivityLevel::Moderate,
            cuisine: "indian".into(),
            budget_per_day: 300.0,
        }
    }

    #[test]
    fn reference_profile_partitions_calories() {
        let plan = generate_meal_plan(&reference_profile()).unwrap();
        assert_eq!(plan.target_calories, 2207);

        let day1 = &plan.daily[0];
        assert_eq!(day1.day, 1);
        assert_eq!(day1.calories_target, 2207);
        assert_eq!(day1.meals.breakfast, Meal { item: "Oats idli".into(), cal: 551 });
        assert_eq!(day1.meals.lunch, Meal { item: "Roti with paneer bhurji and salad".into(), cal: 772 });
        assert_eq!(day1.meals.dinner, Meal { item: "Mixed vegetable curry with millet rotis".into(), cal: 662 });
        assert_eq!(day1.meals.snack, Meal { item: "Fruit chaat".into(), cal: 220 });
        assert_eq!(day1.estimated_cost, 300.0);
    }

    #[test]
    fn truncation_drift_is_kept() {
        let plan = generate_meal_plan(&reference_profile()).unwrap();
        let m = &plan.daily[0].meals;
        let total = m.breakfast.cal + m.lunch.cal + m.dinner.cal + m.snack.cal;
        assert_eq!(total, 2205);
    }

    #[test]
    fn slots_rotate_independently() {
        let plan = generate_meal_plan(&reference_profile()).unwrap();
        assert_eq!(plan.daily.len(), 7);
        // breakfast has three options, the other slots two
        assert_eq!(plan.daily[2].meals.breakfast.item, "Poha with veggies");
        assert_eq!(plan.daily[2].meals.lunch.item, "Roti with paneer bhurji and salad");
        assert_eq!(plan.daily[1].meals.breakfast.item, "Vegetable upma");
        assert_eq!(plan.daily[1].meals.lunch.item, "Brown rice with dal and sabzi");
    }

    #[test]
    fn goal_adjusts_target() {
        assert_eq!(target_calories(2759, Goal::WeightLoss).unwrap(), 2207);
        assert_eq!(target_calories(2759, Goal::MuscleGain).unwrap(), 3172);
        assert_eq!(target_calories(2759, Goal::Maintain).unwrap(), 2759);
    }

    #[test]
    fn surplus_beyond_integer_range_is_rejected() {
        let err = target_calories(i64::MAX - 1, Goal::MuscleGain).unwrap_err();
        assert_eq!(err, PlanError::non_finite("target_calories"));
    }

    #[test]
    fn unknown_cuisine_falls_back_to_default() {
        let profile = Profile { cuisine: "french".into(), ..reference_profile() };
        let plan = generate_meal_plan(&profile).unwrap();
        assert_eq!(plan.daily[0].meals.breakfast.item, "Eggs and whole wheat toast");
        assert_eq!(plan.daily[0].meals.snack.item, "Yogurt");
    }

    #[test]
    fn cost_is_budget_rounded_to_cents() {
        let profile = Profile { budget_per_day: 123.456, ..reference_profile() };
        let plan = generate_meal_plan(&profile).unwrap();
        assert!(plan.daily.iter().all(|d| d.estimated_cost == 123.46));
    }

    #[test]
    fn cent_rounding_sends_ties_to_even() {
        assert_eq!(round_cents(10.125).unwrap(), 10.12);
        assert_eq!(round_cents(0.125).unwrap(), 0.12);
        // 2.675 is stored just below the tie
        assert_eq!(round_cents(2.675).unwrap(), 2.67);
        assert_eq!(round_cents(300.0).unwrap(), 300.0);
    }

    #[test]
    fn huge_budget_is_echoed_not_nulled() {
        let profile = Profile { budget_per_day: 1e307, ..reference_profile() };
        let plan = generate_meal_plan(&profile).unwrap();
        assert_eq!(plan.daily[0].estimated_cost, 1e307);

        let json = serde_json::to_value(&plan.daily[0]).unwrap();
        assert_eq!(json["estimated_cost"].as_f64(), Some(1e307));
    }

    #[test]
    fn non_finite_budget_is_rejected() {
        let profile = Profile { budget_per_day: f64::INFINITY, ..reference_profile() };
        assert_eq!(generate_meal_plan(&profile).unwrap_err(), PlanError::non_finite("budget_per_day"));
    }

    #[test]
    fn zero_height_produces_no_plan() {
        let profile = Profile { height_cm: 0.0, ..reference_profile() };
        assert!(matches!(generate_meal_plan(&profile), Err(PlanError::DivisionByZero { .. })));
    }
}
