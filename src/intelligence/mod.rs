// ABOUTME: Benchmark estimation and prescription engine module root
// ABOUTME: Pure-function transforms from partial athlete benchmarks to prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

//! # Benchmark Estimation & Prescription Engine
//!
//! Given any subset of strength maxes, cardio times, and power output, this
//! module fills in missing benchmarks via anchor-based ratios (with a
//! synthetic baseline fallback), computes working-set loads at a percentage
//! of estimated 1RM, and derives training paces from time-trial benchmarks.
//!
//! Every function here is total: unknown exercises and missing anchors come
//! back as `needs_calibration` flags or unchanged template text, never as
//! errors. A caller must always be able to render *something*.

/// Athlete benchmark types and the missing-max estimation cascade
pub mod benchmarks;

/// Exercise name resolution and working-set load calculation
pub mod working_set;

/// Pace derivation, heart rate zones, and workout template substitution
pub mod pace_zones;

pub use benchmarks::{
    estimate_missing_maxes, AthleteBenchmarks, BenchmarkField, EstimatedBenchmarks, Provenance,
};
pub use pace_zones::{
    calculate_2k_row_derived_paces, calculate_400m_pace_from_mile, calculate_5k_derived_paces,
    format_pace, heart_rate_zones, parse_workout_template, FiveKPaces, HeartRateZone, RowPaces,
};
pub use working_set::{calculate_working_set, LiftCategory, WorkingSet};
