// ABOUTME: Conversational context router module root
// ABOUTME: Intent classification, plan extraction, token budgeting, and query analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

//! # Conversational Context Router
//!
//! Given a message history and the athlete's current program week and phase,
//! this module classifies the conversational intent (with stateful
//! carry-over for short follow-ups) and assembles a token-bounded
//! system-prompt fragment from the master training-plan document, selecting
//! a differentiated tool set per intent.
//!
//! The "state" of the carry-over machine is re-derived from history each
//! call; nothing is persisted between requests. The only I/O is a single
//! async read of the plan document, and a load failure degrades to an empty
//! GENERAL payload instead of raising.

/// Bounded query analytics ring buffer
pub mod analytics;

/// Token-budgeted context assembly
pub mod context;

/// Intent classification with carry-over
pub mod intent;

/// Typed training-plan document tree
pub mod plan_document;

/// Token estimation and truncation heuristics
pub mod tokens;

pub use analytics::{QueryAnalytics, QueryRecord};
pub use context::ContextRouter;
pub use intent::{classify_message, detect_intent};
pub use plan_document::{PlanDay, PlanDocument, PlanPhase};
pub use tokens::{estimate_tokens, truncate_to_tokens};
