// ABOUTME: Training pace derivation, heart rate zones, and workout template substitution
// ABOUTME: Turns time-trial benchmarks into prescribed interval paces and zone bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use super::benchmarks::{estimate_missing_maxes, AthleteBenchmarks};
use crate::constants::{heart_rate, pace};
use serde::{Deserialize, Serialize};

/// Training paces derived from a 5k time trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveKPaces {
    /// Zone 2 easy pace (seconds per mile)
    pub zone2_pace_per_mile: f64,
    /// Tempo pace (seconds per mile)
    pub tempo_pace_per_mile: f64,
}

/// Interval paces derived from a 2k row time trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowPaces {
    /// Aerobic interval pace (seconds per 500m)
    pub aerobic_interval_500m: f64,
    /// Anaerobic sprint pace (seconds per 250m)
    pub anaerobic_sprint_250m: f64,
}

/// One heart rate training zone as a bpm band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Zone number, 1 through 5
    pub zone: u8,
    /// Lower bound (bpm)
    pub lower_bpm: u32,
    /// Upper bound (bpm); `None` for the open-ended top zone
    pub upper_bpm: Option<u32>,
}

impl HeartRateZone {
    /// Render the band as shown to athletes, e.g. "143-161 bpm" or "186+ bpm"
    #[must_use]
    pub fn band_label(&self) -> String {
        self.upper_bpm.map_or_else(
            || format!("{}+ bpm", self.lower_bpm),
            |upper| format!("{}-{} bpm", self.lower_bpm, upper),
        )
    }
}

/// Derive zone 2 and tempo paces from a 5k time
///
/// Pace per mile is the 5k split over 3.10686 miles; offsets encode the
/// midpoint of published training-zone-to-race-pace deltas.
#[must_use]
pub fn calculate_5k_derived_paces(five_k_time_secs: f64) -> FiveKPaces {
    let pace_per_mile = five_k_time_secs / pace::MILES_PER_5K;
    FiveKPaces {
        zone2_pace_per_mile: (pace_per_mile + pace::ZONE2_OFFSET_SECS).round(),
        tempo_pace_per_mile: (pace_per_mile + pace::TEMPO_OFFSET_SECS).round(),
    }
}

/// Derive aerobic and sprint interval paces from a 2k row time
#[must_use]
pub fn calculate_2k_row_derived_paces(row_2k_secs: f64) -> RowPaces {
    let pace_500m = row_2k_secs / 4.0;
    RowPaces {
        aerobic_interval_500m: (pace_500m + pace::ROW_AEROBIC_OFFSET_SECS).round(),
        anaerobic_sprint_250m: ((pace_500m - pace::ROW_SPRINT_DEDUCT_SECS) / 2.0).round(),
    }
}

/// Derive a 400m repeat target from a mile time
#[must_use]
pub fn calculate_400m_pace_from_mile(mile_time_secs: f64) -> f64 {
    (mile_time_secs / 4.0 - pace::SPRINT_400M_DEDUCT_SECS).round()
}

/// Compute the five heart rate zones for a max heart rate
///
/// Bands are fixed percentages of max HR: zone 1 65-72%, zone 2 73-82%,
/// zone 3 83-86%, zone 4 87-94%, zone 5 from 95% with no upper bound.
#[must_use]
pub fn heart_rate_zones(max_hr: f64) -> [HeartRateZone; 5] {
    let band = |zone: u8, (lo, hi): (f64, f64)| HeartRateZone {
        zone,
        lower_bpm: (max_hr * lo).round() as u32,
        upper_bpm: Some((max_hr * hi).round() as u32),
    };
    [
        band(1, heart_rate::ZONE1_PERCENT),
        band(2, heart_rate::ZONE2_PERCENT),
        band(3, heart_rate::ZONE3_PERCENT),
        band(4, heart_rate::ZONE4_PERCENT),
        HeartRateZone {
            zone: 5,
            lower_bpm: (max_hr * heart_rate::ZONE5_FLOOR_PERCENT).round() as u32,
            upper_bpm: None,
        },
    ]
}

/// Format a pace in seconds as M:SS
#[must_use]
pub fn format_pace(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Substitute `{{token}}` placeholders in workout text with computed values
///
/// Returns the text unchanged when the profile is absent or no placeholders
/// exist. Unrecognized tokens are left verbatim so malformed templates stay
/// visibly malformed instead of silently vanishing.
///
/// Recognized tokens: `zone2_pace`, `tempo_pace`, `interval_400m`,
/// `row_aerobic_500m`, `row_sprint_250m`, `hr_zone1`..`hr_zone5`, `max_hr`.
#[must_use]
pub fn parse_workout_template(text: &str, profile: Option<&AthleteBenchmarks>) -> String {
    let Some(profile) = profile else {
        return text.to_owned();
    };
    if !text.contains("{{") {
        return text.to_owned();
    }

    let estimated = estimate_missing_maxes(profile).benchmarks;
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            // Unterminated placeholder, keep the tail verbatim
            output.push_str(&rest[start..]);
            return output;
        };
        let token = after_open[..end].trim();
        match substitute_token(token, &estimated) {
            Some(value) => output.push_str(&value),
            // Unknown tokens keep their original spelling, spaces included
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }
    output.push_str(rest);
    output
}

fn substitute_token(token: &str, estimated: &AthleteBenchmarks) -> Option<String> {
    let max_hr = estimated
        .max_heart_rate
        .filter(|v| *v > 0.0)
        .unwrap_or(heart_rate::DEFAULT_MAX_HR);

    // Estimation guarantees a mile time; a missing 5k falls back to mile
    // pace over the 5k distance.
    let mile = estimated.mile_time_secs.filter(|v| *v > 0.0);
    let five_k = estimated
        .five_k_time_secs
        .filter(|v| *v > 0.0)
        .or_else(|| mile.map(|m| m * pace::MILES_PER_5K));

    match token {
        "zone2_pace" => {
            five_k.map(|t| format!("{}/mi", format_pace(calculate_5k_derived_paces(t).zone2_pace_per_mile)))
        }
        "tempo_pace" => {
            five_k.map(|t| format!("{}/mi", format_pace(calculate_5k_derived_paces(t).tempo_pace_per_mile)))
        }
        "interval_400m" => mile.map(|m| format_pace(calculate_400m_pace_from_mile(m))),
        "row_aerobic_500m" => estimated
            .row_2k_secs
            .filter(|v| *v > 0.0)
            .map(|t| format!("{}/500m", format_pace(calculate_2k_row_derived_paces(t).aerobic_interval_500m))),
        "row_sprint_250m" => estimated
            .row_2k_secs
            .filter(|v| *v > 0.0)
            .map(|t| format!("{}/250m", format_pace(calculate_2k_row_derived_paces(t).anaerobic_sprint_250m))),
        "max_hr" => Some(format!("{} bpm", max_hr.round() as u32)),
        "hr_zone1" | "hr_zone2" | "hr_zone3" | "hr_zone4" | "hr_zone5" => {
            let zones = heart_rate_zones(max_hr);
            let index = token.as_bytes().last().copied()? - b'1';
            zones.get(usize::from(index)).map(HeartRateZone::band_label)
        }
        _ => None,
    }
}
