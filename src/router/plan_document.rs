// ABOUTME: Typed training-plan document tree parsed once from markdown
// ABOUTME: Line-based parser for phase sections, weekday subsections, and exercise lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::errors::{AppError, AppResult, ErrorCode};
use std::path::Path;

/// Uppercase weekday names recognized as day-section markers
pub const WEEKDAYS: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

/// One day's prescription within a phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    /// Uppercase weekday name
    pub weekday: String,
    /// Exercise-list lines only (lines starting with `-`, `*`, or `N.`)
    pub exercise_lines: Vec<String>,
}

/// One `## PHASE <n>` section of the master plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPhase {
    /// Phase number from the heading
    pub number: u32,
    /// Full heading text after `## `
    pub title: String,
    /// Non-empty lines between the heading and the first day marker
    pub intro_lines: Vec<String>,
    /// Day subsections in document order
    pub days: Vec<PlanDay>,
    /// Raw section body used for broad-context truncation
    pub body: String,
}

impl PlanPhase {
    /// Find a day subsection by weekday name (case-insensitive)
    #[must_use]
    pub fn day(&self, weekday: &str) -> Option<&PlanDay> {
        let target = weekday.trim().to_uppercase();
        self.days.iter().find(|d| d.weekday == target)
    }

    /// Phase summary: title plus intro lines
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.intro_lines.iter().cloned());
        lines.join("\n")
    }
}

/// Parsed master training-plan document
///
/// The structural convention is a de facto external contract: top-level
/// sections headed `## PHASE <n>`, day subsections headed by a weekday name
/// in a `####` heading or a `* **WEEKDAY**` bullet, exercise lines starting
/// with `-`, `*`, or `N.`. Documents violating the convention parse to
/// empty trees; nothing here is fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanDocument {
    /// Phase sections in document order
    pub phases: Vec<PlanPhase>,
}

impl PlanDocument {
    /// Parse plan markdown into a typed tree
    ///
    /// Total: malformed input yields fewer (or zero) phases, never an error.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut phases: Vec<PlanPhase> = Vec::new();
        let mut current_phase: Option<PlanPhase> = None;
        let mut current_day: Option<PlanDay> = None;

        for line in content.lines() {
            if let Some(heading) = line.strip_prefix("## ") {
                // Any level-2 heading closes the open phase
                close_day(&mut current_phase, &mut current_day);
                if let Some(phase) = current_phase.take() {
                    phases.push(phase);
                }
                if let Some(number) = parse_phase_number(heading) {
                    current_phase = Some(PlanPhase {
                        number,
                        title: heading.trim().to_owned(),
                        intro_lines: Vec::new(),
                        days: Vec::new(),
                        body: String::new(),
                    });
                }
                continue;
            }

            if current_phase.is_none() {
                continue;
            }

            if let Some(phase) = current_phase.as_mut() {
                phase.body.push_str(line);
                phase.body.push('\n');
            }

            if let Some(weekday) = day_marker(line) {
                close_day(&mut current_phase, &mut current_day);
                current_day = Some(PlanDay {
                    weekday: weekday.to_owned(),
                    exercise_lines: Vec::new(),
                });
                continue;
            }

            if let Some(day) = current_day.as_mut() {
                if is_exercise_line(line) {
                    day.exercise_lines.push(line.trim().to_owned());
                }
            } else if !line.trim().is_empty() {
                if let Some(phase) = current_phase.as_mut() {
                    phase.intro_lines.push(line.trim().to_owned());
                }
            }
        }

        close_day(&mut current_phase, &mut current_day);
        if let Some(phase) = current_phase.take() {
            phases.push(phase);
        }

        Self { phases }
    }

    /// Load and parse a plan document from disk
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::StorageError`] when the file cannot be read.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::new(
                ErrorCode::StorageError,
                format!("Failed to read plan document {}: {e}", path.display()),
            )
        })?;
        Ok(Self::parse(&content))
    }

    /// Find a phase by number
    #[must_use]
    pub fn phase(&self, number: u32) -> Option<&PlanPhase> {
        self.phases.iter().find(|p| p.number == number)
    }
}

fn close_day(phase: &mut Option<PlanPhase>, day: &mut Option<PlanDay>) {
    if let (Some(phase), Some(day)) = (phase.as_mut(), day.take()) {
        phase.days.push(day);
    }
}

fn parse_phase_number(heading: &str) -> Option<u32> {
    let upper = heading.trim().to_uppercase();
    let rest = upper.strip_prefix("PHASE")?.trim_start();
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Detect a day-section marker in either supported style
///
/// Either a `####` heading or a `* **WEEKDAY**` / `- **WEEKDAY**` bullet
/// opens a day. Mixed styles within a phase parse deterministically: a day
/// closes at the next day marker or `##` heading, whichever comes first.
fn day_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    let candidate = trimmed.strip_prefix("####").map(str::trim).or_else(|| {
        (trimmed.starts_with("* **") || trimmed.starts_with("- **")).then_some(trimmed)
    })?;
    let upper = candidate.to_uppercase();
    WEEKDAYS.iter().find(|d| upper.contains(*d)).copied()
}

/// True for lines that look like exercise-list entries
pub(crate) fn is_exercise_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        return true;
    }
    // Numbered list: "1. Back squat 5x5"
    let mut chars = trimmed.chars();
    let has_digits = chars.by_ref().take_while(char::is_ascii_digit).count() > 0;
    has_digits && trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).starts_with('.')
}
