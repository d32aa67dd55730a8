// ABOUTME: Exercise name resolution and working-set load calculation
// ABOUTME: Ordered rule table maps free-form names to lift categories with explicit precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use super::benchmarks::{
    estimate_missing_maxes, field_value, is_present, AthleteBenchmarks, BenchmarkField, Provenance,
};
use crate::constants::ratios;
use serde::{Deserialize, Serialize};

/// Canonical lift categories a free-form exercise name can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftCategory {
    /// Full clean & jerk
    CleanAndJerk,
    /// Clean variations without a jerk, loaded at a fraction of C&J
    PowerClean,
    /// Snatch and variations
    Snatch,
    /// Front squat
    FrontSquat,
    /// Back squat
    BackSquat,
    /// Overhead press / strict press
    OverheadPress,
    /// Bench press
    BenchPress,
    /// Deadlift and variations
    Deadlift,
}

impl LiftCategory {
    /// Benchmark field this category prescribes from
    #[must_use]
    pub const fn benchmark_field(&self) -> BenchmarkField {
        match self {
            Self::CleanAndJerk | Self::PowerClean => BenchmarkField::CleanAndJerk,
            Self::Snatch => BenchmarkField::Snatch,
            Self::FrontSquat => BenchmarkField::FrontSquat,
            Self::BackSquat => BenchmarkField::Squat,
            Self::OverheadPress => BenchmarkField::OverheadPress,
            Self::BenchPress => BenchmarkField::Bench,
            Self::Deadlift => BenchmarkField::Deadlift,
        }
    }

    /// Scale applied to the benchmark before the percentage
    ///
    /// Clean variations without a jerk are loaded at a fraction of the full
    /// clean & jerk max; everything else uses its benchmark directly.
    #[must_use]
    pub const fn base_scale(&self) -> f64 {
        match self {
            Self::PowerClean => ratios::POWER_CLEAN_FROM_CLEAN_AND_JERK,
            _ => 1.0,
        }
    }
}

type NamePredicate = fn(&str) -> bool;

/// Ordered name-resolution rules, highest precedence first
///
/// Evaluated top to bottom against the lowercased exercise name. Order
/// matters: "clean and jerk" must win over bare "clean", "front squat" over
/// "squat", and press variants must exclude "bench".
const LIFT_RULES: &[(NamePredicate, LiftCategory)] = &[
    (
        |n| n.contains("clean") && n.contains("jerk"),
        LiftCategory::CleanAndJerk,
    ),
    (|n| n.contains("clean"), LiftCategory::PowerClean),
    (|n| n.contains("snatch"), LiftCategory::Snatch),
    (|n| n.contains("front squat"), LiftCategory::FrontSquat),
    (
        |n| n.contains("squat") && !n.contains("split"),
        LiftCategory::BackSquat,
    ),
    (
        |n| {
            (n.contains("overhead") || n.contains("ohp") || n.contains("press"))
                && !n.contains("bench")
        },
        LiftCategory::OverheadPress,
    ),
    (|n| n.contains("bench"), LiftCategory::BenchPress),
    (|n| n.contains("deadlift"), LiftCategory::Deadlift),
];

/// Resolve a free-form exercise name to a lift category
///
/// Case-insensitive substring matching with fixed precedence. Unrecognized
/// names return `None`; the caller surfaces that as `needs_calibration`.
#[must_use]
pub fn resolve_lift(exercise_name: &str) -> Option<LiftCategory> {
    let name = exercise_name.to_lowercase();
    LIFT_RULES
        .iter()
        .find(|(matches, _)| matches(&name))
        .map(|&(_, category)| category)
}

/// Prescribed load for one exercise at a percentage of estimated 1RM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingSet {
    /// Prescribed weight, rounded to the nearest whole unit
    pub weight: f64,
    /// True when the underlying max was not directly measured
    pub is_estimate: bool,
    /// Human-readable provenance label, when a base max was resolvable
    pub source: Option<String>,
    /// True when no base max could be resolved at all
    pub needs_calibration: bool,
}

/// Compute the working-set weight for an exercise at a percentage of 1RM
///
/// Runs the estimation cascade on the profile, resolves the exercise name
/// through the ordered rule table, and prescribes
/// `round(base x scale x percent)`. Total function: an unrecognized name
/// yields `weight = 0` with `needs_calibration = true` rather than an error.
#[must_use]
pub fn calculate_working_set(
    exercise_name: &str,
    percent_of_max: f64,
    profile: &AthleteBenchmarks,
) -> WorkingSet {
    let Some(category) = resolve_lift(exercise_name) else {
        return WorkingSet {
            weight: 0.0,
            is_estimate: true,
            source: None,
            needs_calibration: true,
        };
    };

    let estimated = estimate_missing_maxes(profile);
    let field = category.benchmark_field();
    let base = field_value(&estimated.benchmarks, field)
        .filter(|v| *v > 0.0)
        .unwrap_or(0.0)
        * category.base_scale();

    let source = estimated.provenance(field).map(|p| match p {
        Provenance::Measured => "Personal Record".to_owned(),
        Provenance::Derived { anchor } => format!("Estimated from {anchor}"),
        Provenance::Baseline => "Baseline Estimate".to_owned(),
    });

    WorkingSet {
        weight: (base * percent_of_max).round(),
        is_estimate: !is_present(field_value(profile, field)),
        source,
        needs_calibration: base <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_200_300() -> AthleteBenchmarks {
        AthleteBenchmarks {
            bench_max: Some(200.0),
            squat_max: Some(300.0),
            ..AthleteBenchmarks::default()
        }
    }

    #[test]
    fn test_bench_at_80_percent_of_measured_max() {
        let set = calculate_working_set("Bench Press", 0.80, &profile_200_300());
        assert_eq!(set.weight, 160.0);
        assert!(!set.is_estimate);
        assert_eq!(set.source.as_deref(), Some("Personal Record"));
        assert!(!set.needs_calibration);
    }

    #[test]
    fn test_deadlift_estimated_from_squat() {
        let set = calculate_working_set("Deadlift", 0.70, &profile_200_300());
        assert_eq!(set.weight, 252.0);
        assert!(set.is_estimate);
        assert_eq!(set.source.as_deref(), Some("Estimated from back squat"));
    }

    #[test]
    fn test_clean_and_jerk_beats_bare_clean() {
        assert_eq!(
            resolve_lift("Clean and Jerk"),
            Some(LiftCategory::CleanAndJerk)
        );
        assert_eq!(resolve_lift("Hang Power Clean"), Some(LiftCategory::PowerClean));
    }

    #[test]
    fn test_power_clean_scaled_from_clean_and_jerk() {
        let profile = AthleteBenchmarks {
            clean_and_jerk_max: Some(200.0),
            bench_max: Some(180.0),
            ..AthleteBenchmarks::default()
        };
        let set = calculate_working_set("Power Clean", 1.0, &profile);
        assert_eq!(set.weight, 170.0);
        assert!(!set.is_estimate);
    }

    #[test]
    fn test_front_squat_beats_back_squat() {
        assert_eq!(resolve_lift("Front Squat"), Some(LiftCategory::FrontSquat));
        assert_eq!(resolve_lift("Back Squat"), Some(LiftCategory::BackSquat));
        assert_eq!(resolve_lift("Split Squat"), None);
    }

    #[test]
    fn test_press_excludes_bench() {
        assert_eq!(resolve_lift("Strict Press"), Some(LiftCategory::OverheadPress));
        assert_eq!(resolve_lift("OHP"), Some(LiftCategory::OverheadPress));
        assert_eq!(resolve_lift("Bench Press"), Some(LiftCategory::BenchPress));
    }

    #[test]
    fn test_unrecognized_name_needs_calibration() {
        let set = calculate_working_set("Lateral Raise", 0.80, &profile_200_300());
        assert_eq!(set.weight, 0.0);
        assert!(set.needs_calibration);
        assert!(set.source.is_none());
    }

    #[test]
    fn test_empty_profile_prescribes_from_baseline() {
        let set = calculate_working_set("Back Squat", 0.50, &AthleteBenchmarks::default());
        assert_eq!(set.weight, 68.0); // round(135 * 0.5)
        assert!(set.is_estimate);
        assert_eq!(set.source.as_deref(), Some("Baseline Estimate"));
        assert!(!set.needs_calibration);
    }
}
