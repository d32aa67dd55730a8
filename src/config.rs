// ABOUTME: Environment-driven configuration for token budgets and routing policy
// ABOUTME: Typed defaults with per-field env overrides, no configuration files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::constants::{router, tokens};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Per-intent token budgets for system prompt assembly
///
/// Different intents need categorically different amounts of supporting
/// context: an injury query needs broad substitution context, a "what's
/// today" query needs almost none. Budgets keep each branch under the
/// overall context-window cost ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBudgetConfig {
    /// Budget for the always-included core routine block
    pub core_routine: usize,
    /// Budget for the injury intent block
    pub injury: usize,
    /// Budget for the progress intent block
    pub progress: usize,
    /// Budget for the logistics intent block
    pub logistics: usize,
    /// Budget for the general intent block
    pub general: usize,
    /// Overall context ceiling regardless of intent
    pub max_context: usize,
}

impl Default for TokenBudgetConfig {
    fn default() -> Self {
        Self {
            core_routine: tokens::CORE_ROUTINE_BUDGET,
            injury: tokens::INJURY_BUDGET,
            progress: tokens::PROGRESS_BUDGET,
            logistics: tokens::LOGISTICS_BUDGET,
            general: tokens::GENERAL_BUDGET,
            max_context: tokens::MAX_CONTEXT_TOKENS,
        }
    }
}

impl TokenBudgetConfig {
    /// Load token budget configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            core_routine: env::var("COACH_TOKENS_CORE_ROUTINE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::CORE_ROUTINE_BUDGET),
            injury: env::var("COACH_TOKENS_INJURY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::INJURY_BUDGET),
            progress: env::var("COACH_TOKENS_PROGRESS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::PROGRESS_BUDGET),
            logistics: env::var("COACH_TOKENS_LOGISTICS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::LOGISTICS_BUDGET),
            general: env::var("COACH_TOKENS_GENERAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::GENERAL_BUDGET),
            max_context: env::var("COACH_TOKENS_MAX_CONTEXT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tokens::MAX_CONTEXT_TOKENS),
        }
    }

    /// Budget for a given intent's instruction block
    #[must_use]
    pub const fn for_intent(&self, intent: crate::models::Intent) -> usize {
        match intent {
            crate::models::Intent::Injury => self.injury,
            crate::models::Intent::Progress => self.progress,
            crate::models::Intent::Logistics => self.logistics,
            crate::models::Intent::General => self.general,
        }
    }
}

/// Context router configuration
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Path to the master training-plan markdown document
    pub plan_path: PathBuf,
    /// Weeks where phase 5 testing content stays live
    pub testing_weeks: Vec<u32>,
    /// Capacity of the query analytics ring buffer
    pub analytics_capacity: usize,
    /// Per-intent token budgets
    pub budgets: TokenBudgetConfig,
}

impl RouterConfig {
    /// Create a router configuration for the given plan document path
    pub fn new(plan_path: impl Into<PathBuf>) -> Self {
        Self {
            plan_path: plan_path.into(),
            testing_weeks: router::TESTING_WEEKS.to_vec(),
            analytics_capacity: router::ANALYTICS_CAPACITY,
            budgets: TokenBudgetConfig::default(),
        }
    }

    /// Load router configuration from environment
    ///
    /// Reads `COACH_PLAN_PATH` for the plan document location; all other
    /// fields take defaults with `COACH_TOKENS_*` overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let plan_path = env::var("COACH_PLAN_PATH")
            .map_or_else(|_| PathBuf::from("plans/master_plan.md"), PathBuf::from);

        Self {
            plan_path,
            testing_weeks: router::TESTING_WEEKS.to_vec(),
            analytics_capacity: env::var("COACH_ANALYTICS_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(router::ANALYTICS_CAPACITY),
            budgets: TokenBudgetConfig::from_env(),
        }
    }
}
