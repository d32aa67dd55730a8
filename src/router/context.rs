// ABOUTME: Token-budgeted system-prompt context assembly per conversational intent
// ABOUTME: Core routine block plus recency buffer plus intent-specific instruction block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use super::analytics::{QueryAnalytics, QueryRecord};
use super::plan_document::{is_exercise_line, PlanDocument, PlanPhase};
use super::tokens::{estimate_tokens, truncate_to_tokens};
use crate::config::RouterConfig;
use crate::constants::router::{RECENCY_MAX_LINES, RECENCY_MESSAGE_COUNT, REENTRY_PHASE};
use crate::constants::tokens::RECENCY_BUDGET;
use crate::models::{ChatMessage, ContextPayload, Intent, MessageRole};
use chrono::Local;
use tracing::{debug, warn};

/// Tools suggested when the athlete reports pain or asks for substitutions
const INJURY_TOOLS: &[&str] = &["find_exercise_substitute", "get_injury_log", "log_pain_report"];

/// Data-retrieval tools suggested for progress questions
const PROGRESS_TOOLS: &[&str] = &[
    "get_strength_history",
    "get_benchmark_trends",
    "get_workout_logs",
];

/// Tools suggested for scheduling questions
const LOGISTICS_TOOLS: &[&str] = &["get_today_workout", "get_week_schedule"];

/// Default tool set for general conversation
const GENERAL_TOOLS: &[&str] = &["get_today_workout"];

/// Assembles per-turn system-prompt context from the master training plan
///
/// One router per request-handling context; it owns its configuration and
/// its analytics buffer. The plan document is re-read per call — it is a
/// single small file and the call sits on a request path that already
/// tolerates file latency.
#[derive(Debug)]
pub struct ContextRouter {
    config: RouterConfig,
    analytics: QueryAnalytics,
}

impl ContextRouter {
    /// Create a router for the given configuration
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        let analytics = QueryAnalytics::new(config.analytics_capacity);
        Self { config, analytics }
    }

    /// Read access to the recorded query analytics
    #[must_use]
    pub fn analytics(&self) -> &QueryAnalytics {
        &self.analytics
    }

    /// Assemble the token-budgeted context for one chat turn
    ///
    /// Always returns a payload. A plan document that fails to load degrades
    /// to an empty GENERAL payload (logged, not raised) — the chat must
    /// still function, just with less grounding.
    ///
    /// `day_override` replaces the system-clock weekday, mainly for tests
    /// and "show me tomorrow" flows.
    pub async fn build_dynamic_context(
        &mut self,
        intent: Intent,
        current_phase: u32,
        current_week: u32,
        messages: &[ChatMessage],
        day_override: Option<&str>,
    ) -> ContextPayload {
        let document = match PlanDocument::load(&self.config.plan_path).await {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "plan document unavailable, degrading to general context");
                let payload = ContextPayload {
                    intent: Intent::General,
                    system_prompt_additions: String::new(),
                    suggested_tools: to_tool_list(GENERAL_TOOLS),
                    token_estimate: 0,
                };
                self.analytics
                    .record(QueryRecord::new(payload.intent, current_phase, current_week, 0));
                return payload;
            }
        };

        let target_phase = self.resolve_target_phase(current_phase, current_week);
        let day = day_override.map_or_else(today_weekday, |d| d.trim().to_uppercase());
        let phase = document.phase(target_phase);

        let mut sections: Vec<String> = Vec::new();

        // Core routine block, always included regardless of intent
        sections.push(self.core_routine_block(phase, &day));

        // Recency buffer keeps exercise-name continuity across turns; it
        // carries its own small budget so long assistant messages cannot
        // inflate the payload past the per-intent ceiling.
        let recent = recent_exercise_lines(messages);
        if !recent.is_empty() {
            sections.push(truncate_to_tokens(
                &format!("RECENTLY DISCUSSED EXERCISES:\n{}", recent.join("\n")),
                RECENCY_BUDGET,
            ));
        }

        let (block, tools) = self.intent_block(intent, phase, &day);
        if !block.is_empty() {
            sections.push(block);
        }

        let combined = sections.join("\n\n");
        let combined = truncate_to_tokens(&combined, self.config.budgets.max_context);
        let token_estimate = estimate_tokens(&combined);

        debug!(
            intent = intent.as_str(),
            phase = target_phase,
            week = current_week,
            day = %day,
            tokens = token_estimate,
            "assembled dynamic context"
        );
        self.analytics.record(QueryRecord::new(
            intent,
            current_phase,
            current_week,
            token_estimate,
        ));

        ContextPayload {
            intent,
            system_prompt_additions: combined,
            suggested_tools: to_tool_list(tools),
            token_estimate,
        }
    }

    /// Phase 5 re-entry rule: testing content only stays live on checkpoint
    /// weeks; otherwise the athlete is cycled back onto phase 1 material.
    fn resolve_target_phase(&self, current_phase: u32, current_week: u32) -> u32 {
        if current_phase == 5 && !self.config.testing_weeks.contains(&current_week) {
            REENTRY_PHASE
        } else {
            current_phase
        }
    }

    fn core_routine_block(&self, phase: Option<&PlanPhase>, day: &str) -> String {
        let routine = phase
            .and_then(|p| p.day(day))
            .map(|d| d.exercise_lines.join("\n"))
            .filter(|lines| !lines.is_empty())
            .unwrap_or_else(|| "No prescription found for today.".to_owned());
        truncate_to_tokens(
            &format!("TODAY'S PRESCRIBED WORK ({day}):\n{routine}"),
            self.config.budgets.core_routine,
        )
    }

    fn intent_block(
        &self,
        intent: Intent,
        phase: Option<&PlanPhase>,
        day: &str,
    ) -> (String, &'static [&'static str]) {
        let budget = self.config.budgets.for_intent(intent);
        match intent {
            Intent::Injury => {
                // Safety needs the broadest context: the whole phase body so
                // the assistant can reason about substitutions across days.
                let phase_body = phase.map(|p| p.body.clone()).unwrap_or_default();
                let block = format!(
                    "INJURY PROTOCOL:\nThe athlete reports pain or asks for a substitution. \
                     Prioritize safety: recommend stopping any movement that reproduces pain, \
                     offer regressions from the current phase, and suggest consulting a \
                     professional for persistent symptoms.\n\nCURRENT PHASE CONTENT:\n{phase_body}"
                );
                (truncate_to_tokens(&block, budget), INJURY_TOOLS)
            }
            Intent::Progress => {
                let summary = phase.map(PlanPhase::summary).unwrap_or_default();
                let block = format!(
                    "PROGRESS REVIEW:\nGround every claim in retrieved training data; use the \
                     suggested tools to pull history before answering.\n\nPHASE SUMMARY:\n{summary}"
                );
                (truncate_to_tokens(&block, budget), PROGRESS_TOOLS)
            }
            Intent::Logistics => {
                let routine = phase
                    .and_then(|p| p.day(day))
                    .map(|d| d.exercise_lines.join("\n"))
                    .unwrap_or_default();
                let block = format!(
                    "SCHEDULING:\nAnswer from today's prescription; keep it brief.\n\n{routine}"
                );
                (truncate_to_tokens(&block, budget), LOGISTICS_TOOLS)
            }
            Intent::General => {
                let summary = phase.map(PlanPhase::summary).unwrap_or_default();
                let block = format!("PHASE SUMMARY:\n{summary}");
                (truncate_to_tokens(&block, budget), GENERAL_TOOLS)
            }
        }
    }
}

/// Current weekday name from the system clock, uppercased
fn today_weekday() -> String {
    Local::now().format("%A").to_string().to_uppercase()
}

fn to_tool_list(tools: &[&str]) -> Vec<String> {
    tools.iter().map(|t| (*t).to_owned()).collect()
}

/// Exercise-like lines mentioned in the most recent assistant messages
///
/// Scans the last two assistant messages in chronological order and keeps
/// up to five list-style lines, so exercise names stay consistent across
/// turns even when the user's message never repeats them.
fn recent_exercise_lines(messages: &[ChatMessage]) -> Vec<String> {
    let mut recent_assistant: Vec<&ChatMessage> = messages
        .iter()
        .rev()
        .filter(|m| m.role == MessageRole::Assistant)
        .take(RECENCY_MESSAGE_COUNT)
        .collect();
    recent_assistant.reverse();

    let mut lines = Vec::new();
    for message in recent_assistant {
        for line in message.content.lines() {
            if lines.len() == RECENCY_MAX_LINES {
                return lines;
            }
            if is_exercise_line(line) {
                lines.push(line.trim().to_owned());
            }
        }
    }
    lines
}
