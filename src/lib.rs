// ABOUTME: Library entry point for the atlas-coach training prescription engine
// ABOUTME: Exposes the estimation engine and conversational context router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

#![deny(unsafe_code)]

//! # Atlas Coach
//!
//! Training prescription and AI coach context engine for hybrid athletes.
//! Two independent pure-logic subsystems:
//!
//! - **Benchmark Estimation & Prescription Engine** ([`intelligence`]):
//!   fills missing strength/cardio benchmarks from known anchors via fixed
//!   ratios, computes working-set loads at a percentage of estimated 1RM,
//!   and derives training paces from time-trial results.
//! - **Conversational Context Router** ([`router`]): classifies chat intent
//!   (injury / progress / logistics / general) with carry-over for short
//!   follow-ups, then assembles a token-budgeted system-prompt fragment
//!   from the master training-plan document.
//!
//! Both are consumed by external presentation and transport layers (workout
//! pages, the chat endpoint); this crate owns no CLI, no server, and no
//! persistence.
//!
//! ## Example
//!
//! ```rust
//! use atlas_coach::intelligence::{calculate_working_set, AthleteBenchmarks};
//!
//! let profile = AthleteBenchmarks {
//!     bench_max: Some(200.0),
//!     squat_max: Some(300.0),
//!     ..AthleteBenchmarks::default()
//! };
//! let set = calculate_working_set("Bench Press", 0.80, &profile);
//! assert_eq!(set.weight, 160.0);
//! assert!(!set.is_estimate);
//! ```

/// Environment-driven configuration for budgets and routing policy
pub mod config;

/// Prescription and estimation constant tables
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Benchmark estimation and prescription engine
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Conversation and context value types
pub mod models;

/// Conversational context router
pub mod router;

pub use config::{RouterConfig, TokenBudgetConfig};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ChatMessage, ContextPayload, Intent, MessageRole};
