// ABOUTME: Integration tests for exercise resolution and working-set prescription
// ABOUTME: Exercises rule precedence, provenance labels, and calibration flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

mod common;

use atlas_coach::intelligence::{calculate_working_set, AthleteBenchmarks};

fn measured_profile() -> AthleteBenchmarks {
    AthleteBenchmarks {
        bench_max: Some(200.0),
        squat_max: Some(300.0),
        ..AthleteBenchmarks::default()
    }
}

#[test]
fn test_measured_bench_at_eighty_percent() {
    common::init_test_logging();
    let set = calculate_working_set("Bench Press", 0.80, &measured_profile());
    assert_eq!(set.weight, 160.0);
    assert!(!set.is_estimate);
    assert!(!set.needs_calibration);
    assert_eq!(set.source.as_deref(), Some("Personal Record"));
}

#[test]
fn test_estimated_deadlift_at_seventy_percent() {
    let set = calculate_working_set("Deadlift", 0.70, &measured_profile());
    assert_eq!(set.weight, 252.0);
    assert!(set.is_estimate);
    assert_eq!(set.source.as_deref(), Some("Estimated from back squat"));
}

#[test]
fn test_name_resolution_precedence() {
    let profile = AthleteBenchmarks {
        clean_and_jerk_max: Some(200.0),
        snatch_max: Some(160.0),
        front_squat_max: Some(250.0),
        squat_max: Some(300.0),
        bench_max: Some(200.0),
        ..AthleteBenchmarks::default()
    };

    // Clean & jerk wins over bare clean
    let cj = calculate_working_set("Clean and Jerk", 1.0, &profile);
    assert_eq!(cj.weight, 200.0);

    // Bare clean prescribes at 85% of clean & jerk
    let clean = calculate_working_set("Hang Clean", 1.0, &profile);
    assert_eq!(clean.weight, 170.0);

    // Front squat wins over squat
    let front = calculate_working_set("Front Squat", 1.0, &profile);
    assert_eq!(front.weight, 250.0);

    // Back squat still matches plain "squat" names
    let back = calculate_working_set("Tempo Squat", 1.0, &profile);
    assert_eq!(back.weight, 300.0);
}

#[test]
fn test_press_variants_exclude_bench() {
    let profile = AthleteBenchmarks {
        bench_max: Some(200.0),
        overhead_press_max: Some(120.0),
        ..AthleteBenchmarks::default()
    };
    let ohp = calculate_working_set("Overhead Press", 1.0, &profile);
    assert_eq!(ohp.weight, 120.0);

    let bench = calculate_working_set("Close Grip Bench Press", 1.0, &profile);
    assert_eq!(bench.weight, 200.0);
}

#[test]
fn test_split_squat_is_unrecognized() {
    let set = calculate_working_set("Bulgarian Split Squat", 0.5, &measured_profile());
    assert!(set.needs_calibration);
    assert_eq!(set.weight, 0.0);
}

#[test]
fn test_unknown_exercise_needs_calibration_not_error() {
    let set = calculate_working_set("Face Pull", 0.60, &measured_profile());
    assert_eq!(set.weight, 0.0);
    assert!(set.is_estimate);
    assert!(set.needs_calibration);
    assert!(set.source.is_none());
}

#[test]
fn test_empty_profile_baseline_prescription() {
    let set = calculate_working_set("Deadlift", 0.80, &AthleteBenchmarks::default());
    assert_eq!(set.weight, 148.0); // round(185 * 0.80)
    assert!(set.is_estimate);
    assert!(!set.needs_calibration);
    assert_eq!(set.source.as_deref(), Some("Baseline Estimate"));
}
