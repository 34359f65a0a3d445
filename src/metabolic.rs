//! Body-mass index and daily energy expenditure (Mifflin-St Jeor).

use crate::error::PlanError;
use crate::profile::{ActivityLevel, Gender, Profile};

fn ensure_height(height_cm: f64) -> Result<(), PlanError> {
    if height_cm == 0.0 {
        return Err(PlanError::DivisionByZero { field: "height_cm".into() });
    }
    Ok(())
}

/// Truncates toward zero, refusing NaN, infinities and values outside `i64`.
pub fn to_whole(value: f64, field: &str) -> Result<i64, PlanError> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(PlanError::non_finite(field));
    }
    Ok(value as i64)
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, PlanError> {
    ensure_height(height_cm)?;
    let h = height_cm / 100.0;
    let value = weight_kg / (h * h);
    if !value.is_finite() {
        return Err(PlanError::non_finite("height_cm"));
    }
    Ok(value)
}

/// BMR scaled by the activity multiplier, truncated toward zero.
pub fn caloric_needs(
    age: u32,
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
) -> Result<i64, PlanError> {
    ensure_height(height_cm)?;
    let weight_term = 10.0 * weight_kg;
    let height_term = 6.25 * height_cm;
    // blame whichever input dominates the overflow
    let culprit = if weight_term.abs() >= height_term.abs() { "weight_kg" } else { "height_cm" };
    if !weight_term.is_finite() || !height_term.is_finite() {
        return Err(PlanError::non_finite(culprit));
    }
    let bmr = weight_term + height_term - 5.0 * f64::from(age) + gender.bmr_offset();
    to_whole(bmr * activity.multiplier(), culprit)
}

pub fn profile_caloric_needs(profile: &Profile) -> Result<i64, PlanError> {
    caloric_needs(profile.age, profile.gender, profile.weight_kg, profile.height_cm, profile.activity_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bmi_for_reference_adult() {
        let value = bmi(80.0, 180.0).unwrap();
        assert!((value - 24.691).abs() < 0.001);
        assert_eq!(format!("{value:.1}"), "24.7");
    }

    #[test]
    fn zero_height_fails_fast() {
        let expected = PlanError::DivisionByZero { field: "height_cm".into() };
        assert_eq!(bmi(80.0, 0.0).unwrap_err(), expected);
        assert_eq!(caloric_needs(30, Gender::Male, 80.0, 0.0, ActivityLevel::Light).unwrap_err(), expected);
    }

    #[test]
    fn tiny_height_bmi_is_rejected() {
        assert_eq!(bmi(80.0, 1e-200).unwrap_err(), PlanError::non_finite("height_cm"));
    }

    #[test]
    fn overflowing_inputs_are_rejected() {
        let huge_weight = caloric_needs(30, Gender::Male, 1e308, 180.0, ActivityLevel::Light);
        assert_eq!(huge_weight.unwrap_err(), PlanError::non_finite("weight_kg"));

        // inf - inf would be NaN and truncate to 0
        let cancelling = caloric_needs(30, Gender::Male, 1e308, -1e308, ActivityLevel::Light);
        assert!(matches!(cancelling, Err(PlanError::NonFinite { .. })));

        let huge_height = caloric_needs(30, Gender::Male, 80.0, 1e300, ActivityLevel::Light);
        assert_eq!(huge_height.unwrap_err(), PlanError::non_finite("height_cm"));
    }

    #[test]
    fn whole_conversion_refuses_out_of_range() {
        assert_eq!(to_whole(2759.9, "x").unwrap(), 2759);
        assert_eq!(to_whole(-3.7, "x").unwrap(), -3);
        assert!(to_whole(f64::NAN, "x").is_err());
        assert!(to_whole(f64::INFINITY, "x").is_err());
        assert!(to_whole(1e19, "x").is_err());
    }

    #[test]
    fn male_moderate_reference_tdee() {
        // BMR 1780 * 1.55
        let tdee = caloric_needs(30, Gender::Male, 80.0, 180.0, ActivityLevel::Moderate).unwrap();
        assert_eq!(tdee, 2759);
    }

    #[test]
    fn non_male_uses_lower_offset() {
        // BMR 1780 - 5 - 161 = 1614, * 1.2 = 1936.8
        let tdee = caloric_needs(30, Gender::Other, 80.0, 180.0, ActivityLevel::Sedentary).unwrap();
        assert_eq!(tdee, 1936);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = caloric_needs(45, Gender::Other, 62.5, 158.0, ActivityLevel::Active).unwrap();
        let b = caloric_needs(45, Gender::Other, 62.5, 158.0, ActivityLevel::Active).unwrap();
        assert_eq!(a, b);
    }
}
