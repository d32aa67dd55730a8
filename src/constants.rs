// ABOUTME: Prescription and estimation constant tables
// ABOUTME: Baseline benchmarks, estimation ratios, HR zones, pace offsets, and router policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

//! Prescription and estimation constants based on strength-ratio research
//!
//! This module contains the fixed tables used by the benchmark estimation
//! cascade, heart rate zone computation, and pace derivation. Values are
//! drawn from published strength-ratio norms and training-zone-to-race-pace
//! deltas; they are deliberately conservative defaults for athletes with no
//! recorded benchmarks.

/// Synthetic baseline benchmarks used when no anchor lift is known
///
/// When neither primary anchor (bench press, back squat) has been measured,
/// the prescription engine seeds every benchmark from this table so a
/// working set can always be produced. Values target a deconditioned
/// beginner; the UI surfaces these as "Calibration Required".
pub mod baselines {
    /// Bench press 1RM baseline (lb)
    pub const BENCH_MAX: f64 = 95.0;

    /// Back squat 1RM baseline (lb)
    pub const SQUAT_MAX: f64 = 135.0;

    /// Deadlift 1RM baseline (lb)
    pub const DEADLIFT_MAX: f64 = 185.0;

    /// Overhead press 1RM baseline (lb)
    pub const OVERHEAD_PRESS_MAX: f64 = 65.0;

    /// Front squat 1RM baseline (lb)
    pub const FRONT_SQUAT_MAX: f64 = 115.0;

    /// Clean & jerk 1RM baseline (lb)
    pub const CLEAN_AND_JERK_MAX: f64 = 115.0;

    /// Snatch 1RM baseline (lb)
    pub const SNATCH_MAX: f64 = 95.0;

    /// Mile run baseline (seconds, 9:00 mile)
    pub const MILE_TIME_SECS: f64 = 540.0;

    /// 2k row baseline (seconds, 9:00 piece)
    pub const ROW_2K_SECS: f64 = 540.0;

    /// Peak bike output baseline (watts)
    pub const BIKE_MAX_WATTS: f64 = 200.0;
}

/// Cross-benchmark estimation ratios
///
/// Ratios between lifts track published strength-balance norms (e.g. the
/// back squat to bench press relationship in intermediate lifters). Each
/// ratio maps an anchor benchmark to a derived one; derived values are
/// rounded to the nearest whole unit.
pub mod ratios {
    /// Back squat estimated from bench press
    pub const SQUAT_FROM_BENCH: f64 = 1.35;

    /// Bench press estimated from back squat
    pub const BENCH_FROM_SQUAT: f64 = 0.75;

    /// Deadlift estimated from back squat
    pub const DEADLIFT_FROM_SQUAT: f64 = 1.20;

    /// Front squat estimated from back squat
    pub const FRONT_SQUAT_FROM_SQUAT: f64 = 0.85;

    /// Overhead press estimated from bench press
    pub const OVERHEAD_PRESS_FROM_BENCH: f64 = 0.60;

    /// Clean & jerk estimated from bench press
    pub const CLEAN_AND_JERK_FROM_BENCH: f64 = 1.10;

    /// Snatch estimated from clean & jerk
    pub const SNATCH_FROM_CLEAN_AND_JERK: f64 = 0.80;

    /// Power clean prescribed as a fraction of clean & jerk
    pub const POWER_CLEAN_FROM_CLEAN_AND_JERK: f64 = 0.85;

    /// Peak bike watts estimated from back squat (W per lb)
    pub const BIKE_WATTS_FROM_SQUAT: f64 = 3.0;

    /// Mile time default when no cardio anchor exists (seconds)
    pub const DEFAULT_MILE_TIME_SECS: f64 = 480.0;

    /// 2k row default when no cardio anchor exists (seconds)
    pub const DEFAULT_ROW_2K_SECS: f64 = 480.0;
}

/// Heart rate zone bands as percentages of max heart rate
pub mod heart_rate {
    /// Default max heart rate when the athlete has not recorded one (bpm)
    pub const DEFAULT_MAX_HR: f64 = 196.0;

    /// Zone 1 (recovery) band, percent of max HR
    pub const ZONE1_PERCENT: (f64, f64) = (0.65, 0.72);

    /// Zone 2 (aerobic base) band, percent of max HR
    pub const ZONE2_PERCENT: (f64, f64) = (0.73, 0.82);

    /// Zone 3 (tempo) band, percent of max HR
    pub const ZONE3_PERCENT: (f64, f64) = (0.83, 0.86);

    /// Zone 4 (threshold) band, percent of max HR
    pub const ZONE4_PERCENT: (f64, f64) = (0.87, 0.94);

    /// Zone 5 (anaerobic) floor, percent of max HR; no upper bound
    pub const ZONE5_FLOOR_PERCENT: f64 = 0.95;
}

/// Pace derivation constants
///
/// Offsets encode the midpoint of published training-zone-to-race-pace
/// deltas for recreational endurance athletes.
pub mod pace {
    /// 5k distance in miles
    pub const MILES_PER_5K: f64 = 3.106_86;

    /// Zone 2 pace offset over 5k race pace (seconds per mile)
    pub const ZONE2_OFFSET_SECS: f64 = 67.5;

    /// Tempo pace offset over 5k race pace (seconds per mile)
    pub const TEMPO_OFFSET_SECS: f64 = 25.0;

    /// Aerobic interval offset over 2k row pace (seconds per 500m)
    pub const ROW_AEROBIC_OFFSET_SECS: f64 = 9.0;

    /// Sprint deduction from 2k row pace before halving to 250m (seconds)
    pub const ROW_SPRINT_DEDUCT_SECS: f64 = 15.0;

    /// 400m repeat deduction from quarter-mile split (seconds)
    pub const SPRINT_400M_DEDUCT_SECS: f64 = 10.0;
}

/// Token accounting for system prompt assembly
pub mod tokens {
    /// Average characters per token for prompt text
    pub const CHARS_PER_TOKEN: usize = 4;

    /// Budget for the always-included core routine block
    pub const CORE_ROUTINE_BUDGET: usize = 500;

    /// Budget for the injury intent block (largest; substitution context)
    pub const INJURY_BUDGET: usize = 1500;

    /// Budget for the progress intent block
    pub const PROGRESS_BUDGET: usize = 1000;

    /// Budget for the logistics intent block (today's routine only)
    pub const LOGISTICS_BUDGET: usize = 800;

    /// Budget for the general intent block (phase summary only)
    pub const GENERAL_BUDGET: usize = 600;

    /// Budget for the recently-discussed-exercises block
    pub const RECENCY_BUDGET: usize = 150;

    /// Overall ceiling on injected context regardless of intent
    pub const MAX_CONTEXT_TOKENS: usize = 4000;
}

/// Context router policy constants
pub mod router {
    /// Weeks where real max re-testing occurs; phase 5 content stays live
    pub const TESTING_WEEKS: [u32; 3] = [37, 44, 51];

    /// Phase that phase 5 redirects to outside testing weeks
    pub const REENTRY_PHASE: u32 = 1;

    /// Capacity of the per-router query analytics ring buffer
    pub const ANALYTICS_CAPACITY: usize = 1000;

    /// Assistant messages scanned for exercise name continuity
    pub const RECENCY_MESSAGE_COUNT: usize = 2;

    /// Max exercise lines carried over from recent assistant messages
    pub const RECENCY_MAX_LINES: usize = 5;

    /// Messages shorter than this are treated as follow-up candidates
    pub const SHORT_FOLLOW_UP_MAX_CHARS: usize = 20;
}
