// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Quiet logging setup and a realistic master-plan fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness
#![allow(dead_code)]

//! Shared test helpers for `atlas_coach` integration tests

use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A realistic master plan covering phases 1, 2, and 5 with mixed day styles
pub const MASTER_PLAN: &str = "\
# Hybrid Athlete Master Plan

## PHASE 1: Foundation
Base strength and aerobic capacity. Weeks 1-8.
Three lifting days, two conditioning days.

#### MONDAY - Lower Body
- Back Squat 5x5 @ 75%
- Romanian Deadlift 3x8
- Split Squat 3x10 each leg
Keep rest under two minutes.

#### TUESDAY - Conditioning
- Row 4x500m at {{row_aerobic_500m}}
- Easy run 30min in {{hr_zone2}}

* **WEDNESDAY**
1. Bench Press 5x5 @ 75%
2. Strict Press 3x8
3. Pull-ups 3xAMRAP

## PHASE 2: Build
Intensification block. Weeks 9-16.

#### MONDAY
- Back Squat 5x3 @ 85%
- Power Clean 5x2

## PHASE 5: Testing
Max testing and benchmark re-validation.

#### MONDAY
- Back Squat work to 1RM
- Bench Press work to 1RM
";

/// Write the master plan fixture to a temp file and return its path
///
/// The returned file handle must be kept alive for the path to stay valid.
pub fn master_plan_file() -> (NamedTempFile, PathBuf) {
    let mut file = NamedTempFile::new().expect("create temp plan file");
    file.write_all(MASTER_PLAN.as_bytes())
        .expect("write plan fixture");
    let path = file.path().to_path_buf();
    (file, path)
}
