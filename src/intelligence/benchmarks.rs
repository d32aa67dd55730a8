// ABOUTME: Athlete benchmark types and the anchor-based estimation cascade
// ABOUTME: Fills missing strength and cardio benchmarks from known anchors or baselines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::constants::{baselines, ratios};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial athlete benchmark profile
///
/// Any field may be absent; a zero or negative value is treated the same as
/// `None`. The estimation cascade never requires all fields populated and
/// never mutates the caller's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteBenchmarks {
    /// Bench press 1RM (lb)
    pub bench_max: Option<f64>,
    /// Back squat 1RM (lb)
    pub squat_max: Option<f64>,
    /// Deadlift 1RM (lb)
    pub deadlift_max: Option<f64>,
    /// Front squat 1RM (lb)
    pub front_squat_max: Option<f64>,
    /// Overhead press 1RM (lb)
    pub overhead_press_max: Option<f64>,
    /// Clean & jerk 1RM (lb)
    pub clean_and_jerk_max: Option<f64>,
    /// Snatch 1RM (lb)
    pub snatch_max: Option<f64>,
    /// Mile run time (seconds)
    pub mile_time_secs: Option<f64>,
    /// 5k run time (seconds)
    pub five_k_time_secs: Option<f64>,
    /// 400m sprint time (seconds)
    pub sprint_400m_secs: Option<f64>,
    /// 2k row time (seconds)
    pub row_2k_secs: Option<f64>,
    /// 500m row time (seconds)
    pub row_500m_secs: Option<f64>,
    /// 1k ski erg time (seconds)
    pub ski_1k_secs: Option<f64>,
    /// Peak bike output (watts)
    pub bike_max_watts: Option<f64>,
    /// Max heart rate (bpm)
    pub max_heart_rate: Option<f64>,
}

/// Benchmark fields the estimation cascade can populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkField {
    /// Bench press 1RM
    Bench,
    /// Back squat 1RM
    Squat,
    /// Deadlift 1RM
    Deadlift,
    /// Front squat 1RM
    FrontSquat,
    /// Overhead press 1RM
    OverheadPress,
    /// Clean & jerk 1RM
    CleanAndJerk,
    /// Snatch 1RM
    Snatch,
    /// Mile run time
    MileTime,
    /// 2k row time
    Row2k,
    /// Peak bike watts
    BikeWatts,
}

impl BenchmarkField {
    /// Human-readable name used in provenance labels
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Bench => "bench press",
            Self::Squat => "back squat",
            Self::Deadlift => "deadlift",
            Self::FrontSquat => "front squat",
            Self::OverheadPress => "overhead press",
            Self::CleanAndJerk => "clean & jerk",
            Self::Snatch => "snatch",
            Self::MileTime => "mile time",
            Self::Row2k => "2k row",
            Self::BikeWatts => "peak bike watts",
        }
    }
}

/// Where an estimated benchmark value came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Provenance {
    /// Directly measured by the athlete ("Personal Record")
    Measured,
    /// Derived from a measured anchor via a fixed ratio ("Estimated")
    Derived {
        /// Display name of the anchor benchmark
        anchor: String,
    },
    /// Seeded from the synthetic baseline table ("Calibration Required")
    Baseline,
}

/// A benchmark profile with all derivable gaps filled
///
/// Carries per-field provenance so calling code can surface "Personal
/// Record" vs "Estimated" vs "Calibration Required" to the athlete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedBenchmarks {
    /// Filled benchmark values
    pub benchmarks: AthleteBenchmarks,
    provenance: HashMap<BenchmarkField, Provenance>,
}

impl EstimatedBenchmarks {
    /// Provenance for a field, if it is populated
    ///
    /// `None` means the field has no value even after estimation and the
    /// athlete needs to record a benchmark.
    #[must_use]
    pub fn provenance(&self, field: BenchmarkField) -> Option<&Provenance> {
        self.provenance.get(&field)
    }
}

/// True when a benchmark value is actually usable
pub(crate) fn is_present(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

fn round_whole(value: f64) -> f64 {
    value.round()
}

/// Fill all derivable gaps in a partial benchmark profile
///
/// Total function: never fails, never un-sets a value that was present in
/// the input. Stages run in order and each only fills fields still empty:
///
/// 1. Baseline fallback when *both* primary anchors (bench, squat) are
///    absent: every derivable field is seeded from the baseline table.
/// 2. Cross-anchor recovery between bench and squat.
/// 3. Lower-body cascade from squat (deadlift, front squat).
/// 4. Upper-body cascade from bench (overhead press, clean & jerk).
/// 5. Olympic cascade (snatch from clean & jerk).
/// 6. Power/cardio defaults (bike watts from squat, fixed mile/2k times).
#[must_use]
pub fn estimate_missing_maxes(profile: &AthleteBenchmarks) -> EstimatedBenchmarks {
    let mut out = profile.clone();
    let mut provenance = HashMap::new();

    record_measured(profile, &mut provenance);

    // Stage 1: no anchor at all, seed everything from the baseline table
    if !is_present(profile.bench_max) && !is_present(profile.squat_max) {
        seed_baselines(&mut out, &mut provenance);
    }

    let mut fill = |slot: &mut Option<f64>, field: BenchmarkField, value: f64, from: Provenance| {
        if !is_present(*slot) {
            *slot = Some(round_whole(value));
            provenance.insert(field, from);
        }
    };

    let derived = |anchor: BenchmarkField| Provenance::Derived {
        anchor: anchor.display_name().to_owned(),
    };

    // Stage 2: cross-anchor recovery
    if is_present(out.bench_max) {
        let bench = out.bench_max.unwrap_or_default();
        fill(
            &mut out.squat_max,
            BenchmarkField::Squat,
            bench * ratios::SQUAT_FROM_BENCH,
            derived(BenchmarkField::Bench),
        );
    }
    if is_present(out.squat_max) {
        let squat = out.squat_max.unwrap_or_default();
        fill(
            &mut out.bench_max,
            BenchmarkField::Bench,
            squat * ratios::BENCH_FROM_SQUAT,
            derived(BenchmarkField::Squat),
        );
    }

    // Stage 3: lower-body cascade
    if is_present(out.squat_max) {
        let squat = out.squat_max.unwrap_or_default();
        fill(
            &mut out.deadlift_max,
            BenchmarkField::Deadlift,
            squat * ratios::DEADLIFT_FROM_SQUAT,
            derived(BenchmarkField::Squat),
        );
        fill(
            &mut out.front_squat_max,
            BenchmarkField::FrontSquat,
            squat * ratios::FRONT_SQUAT_FROM_SQUAT,
            derived(BenchmarkField::Squat),
        );
    }

    // Stage 4: upper-body and Olympic cascade from bench
    if is_present(out.bench_max) {
        let bench = out.bench_max.unwrap_or_default();
        fill(
            &mut out.overhead_press_max,
            BenchmarkField::OverheadPress,
            bench * ratios::OVERHEAD_PRESS_FROM_BENCH,
            derived(BenchmarkField::Bench),
        );
        fill(
            &mut out.clean_and_jerk_max,
            BenchmarkField::CleanAndJerk,
            bench * ratios::CLEAN_AND_JERK_FROM_BENCH,
            derived(BenchmarkField::Bench),
        );
    }

    // Stage 5: snatch follows clean & jerk
    if is_present(out.clean_and_jerk_max) {
        let cj = out.clean_and_jerk_max.unwrap_or_default();
        fill(
            &mut out.snatch_max,
            BenchmarkField::Snatch,
            cj * ratios::SNATCH_FROM_CLEAN_AND_JERK,
            derived(BenchmarkField::CleanAndJerk),
        );
    }

    // Stage 6: power and cardio defaults
    if is_present(out.squat_max) {
        let squat = out.squat_max.unwrap_or_default();
        fill(
            &mut out.bike_max_watts,
            BenchmarkField::BikeWatts,
            squat * ratios::BIKE_WATTS_FROM_SQUAT,
            derived(BenchmarkField::Squat),
        );
    }
    fill(
        &mut out.mile_time_secs,
        BenchmarkField::MileTime,
        ratios::DEFAULT_MILE_TIME_SECS,
        Provenance::Baseline,
    );
    fill(
        &mut out.row_2k_secs,
        BenchmarkField::Row2k,
        ratios::DEFAULT_ROW_2K_SECS,
        Provenance::Baseline,
    );

    EstimatedBenchmarks {
        benchmarks: out,
        provenance,
    }
}

fn record_measured(
    profile: &AthleteBenchmarks,
    provenance: &mut HashMap<BenchmarkField, Provenance>,
) {
    let measured = [
        (BenchmarkField::Bench, profile.bench_max),
        (BenchmarkField::Squat, profile.squat_max),
        (BenchmarkField::Deadlift, profile.deadlift_max),
        (BenchmarkField::FrontSquat, profile.front_squat_max),
        (BenchmarkField::OverheadPress, profile.overhead_press_max),
        (BenchmarkField::CleanAndJerk, profile.clean_and_jerk_max),
        (BenchmarkField::Snatch, profile.snatch_max),
        (BenchmarkField::MileTime, profile.mile_time_secs),
        (BenchmarkField::Row2k, profile.row_2k_secs),
        (BenchmarkField::BikeWatts, profile.bike_max_watts),
    ];
    for (field, value) in measured {
        if is_present(value) {
            provenance.insert(field, Provenance::Measured);
        }
    }
}

fn seed_baselines(
    out: &mut AthleteBenchmarks,
    provenance: &mut HashMap<BenchmarkField, Provenance>,
) {
    let seeds = [
        (BenchmarkField::Bench, baselines::BENCH_MAX),
        (BenchmarkField::Squat, baselines::SQUAT_MAX),
        (BenchmarkField::Deadlift, baselines::DEADLIFT_MAX),
        (BenchmarkField::FrontSquat, baselines::FRONT_SQUAT_MAX),
        (BenchmarkField::OverheadPress, baselines::OVERHEAD_PRESS_MAX),
        (BenchmarkField::CleanAndJerk, baselines::CLEAN_AND_JERK_MAX),
        (BenchmarkField::Snatch, baselines::SNATCH_MAX),
        (BenchmarkField::MileTime, baselines::MILE_TIME_SECS),
        (BenchmarkField::Row2k, baselines::ROW_2K_SECS),
        (BenchmarkField::BikeWatts, baselines::BIKE_MAX_WATTS),
    ];
    for (field, value) in seeds {
        let slot = field_slot(out, field);
        if !is_present(*slot) {
            *slot = Some(value);
            provenance.insert(field, Provenance::Baseline);
        }
    }
}

fn field_slot(benchmarks: &mut AthleteBenchmarks, field: BenchmarkField) -> &mut Option<f64> {
    match field {
        BenchmarkField::Bench => &mut benchmarks.bench_max,
        BenchmarkField::Squat => &mut benchmarks.squat_max,
        BenchmarkField::Deadlift => &mut benchmarks.deadlift_max,
        BenchmarkField::FrontSquat => &mut benchmarks.front_squat_max,
        BenchmarkField::OverheadPress => &mut benchmarks.overhead_press_max,
        BenchmarkField::CleanAndJerk => &mut benchmarks.clean_and_jerk_max,
        BenchmarkField::Snatch => &mut benchmarks.snatch_max,
        BenchmarkField::MileTime => &mut benchmarks.mile_time_secs,
        BenchmarkField::Row2k => &mut benchmarks.row_2k_secs,
        BenchmarkField::BikeWatts => &mut benchmarks.bike_max_watts,
    }
}

/// Read the value of a derivable field from a profile
#[must_use]
pub(crate) fn field_value(benchmarks: &AthleteBenchmarks, field: BenchmarkField) -> Option<f64> {
    match field {
        BenchmarkField::Bench => benchmarks.bench_max,
        BenchmarkField::Squat => benchmarks.squat_max,
        BenchmarkField::Deadlift => benchmarks.deadlift_max,
        BenchmarkField::FrontSquat => benchmarks.front_squat_max,
        BenchmarkField::OverheadPress => benchmarks.overhead_press_max,
        BenchmarkField::CleanAndJerk => benchmarks.clean_and_jerk_max,
        BenchmarkField::Snatch => benchmarks.snatch_max,
        BenchmarkField::MileTime => benchmarks.mile_time_secs,
        BenchmarkField::Row2k => benchmarks.row_2k_secs,
        BenchmarkField::BikeWatts => benchmarks.bike_max_watts,
    }
}
