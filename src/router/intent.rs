// ABOUTME: Conversational intent classification with short-follow-up carry-over
// ABOUTME: Keyword precedence: injury always wins, progress beats logistics on ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::constants::router::SHORT_FOLLOW_UP_MAX_CHARS;
use crate::models::{ChatMessage, Intent, MessageRole};

/// Keywords that force the injury intent, checked first and unconditionally
///
/// A message mentioning both an injury term and a logistics term must always
/// be treated as injury; safety context is never superseded.
const INJURY_KEYWORDS: &[&str] = &[
    "pain",
    "pains",
    "hurt",
    "hurts",
    "hurting",
    "injury",
    "injured",
    "sore",
    "soreness",
    "ache",
    "aches",
    "aching",
    "tweak",
    "tweaked",
    "strain",
    "strained",
    "pinch",
    "dizzy",
    "nauseous",
    "numb",
    "swollen",
    "substitute",
    "substitution",
    "regression",
    "rehab",
];

/// Keywords counting toward the progress intent
const PROGRESS_KEYWORDS: &[&str] = &[
    "progress",
    "progressing",
    "stronger",
    "improve",
    "improving",
    "improvement",
    "gains",
    "trend",
    "trends",
    "history",
    "personal record",
    "1rm",
    "one rep max",
    "benchmark",
    "benchmarks",
    "stats",
    "faster",
    "plateau",
];

/// Keywords counting toward the logistics intent
const LOGISTICS_KEYWORDS: &[&str] = &[
    "workout",
    "today",
    "tomorrow",
    "schedule",
    "session",
    "program",
    "week",
    "equipment",
    "rest day",
    "warm up",
    "warmup",
    "how long",
    "what day",
    "sets",
    "reps",
];

/// Continuation markers that mark a short message as a follow-up
const CONTINUATION_KEYWORDS: &[&str] = &["more", "why", "else", "again", "also", "what about"];

/// Word-boundary keyword match on lowercased text
///
/// Multi-word keywords fall back to substring matching; single words match
/// whole alphanumeric tokens so "time" does not hit "sometimes".
fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        return text.contains(keyword);
    }
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word == keyword)
}

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|k| contains_keyword(text, k))
        .count()
}

/// Classify a single message by keyword scan
///
/// Precedence: any injury keyword returns [`Intent::Injury`] immediately;
/// otherwise progress wins ties against logistics (asymmetric, deliberate:
/// "how is my squat progressing this week" is a progress question).
#[must_use]
pub fn classify_message(content: &str) -> Intent {
    let text = content.to_lowercase();

    if INJURY_KEYWORDS.iter().any(|k| contains_keyword(&text, k)) {
        return Intent::Injury;
    }

    let progress = count_hits(&text, PROGRESS_KEYWORDS);
    let logistics = count_hits(&text, LOGISTICS_KEYWORDS);

    if progress > 0 && progress >= logistics {
        Intent::Progress
    } else if logistics > 0 {
        Intent::Logistics
    } else {
        Intent::General
    }
}

/// True when a message looks like a short follow-up to the previous turn
fn is_short_follow_up(content: &str) -> bool {
    if content.chars().count() < SHORT_FOLLOW_UP_MAX_CHARS {
        return true;
    }
    let text = content.to_lowercase();
    CONTINUATION_KEYWORDS
        .iter()
        .any(|k| contains_keyword(&text, k))
}

/// Detect the intent of the conversation's current turn
///
/// Classifies the last user message. When that classification is GENERAL
/// and the message looks like a short follow-up, the most recent prior user
/// message with a non-GENERAL classification supplies the intent instead
/// (carry-over). Injury keywords in the *current* message always win; the
/// carry-over path is only reachable for messages with no intent signal of
/// their own.
#[must_use]
pub fn detect_intent(messages: &[ChatMessage]) -> Intent {
    let user_messages: Vec<&ChatMessage> = messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .collect();

    let Some((last, prior)) = user_messages.split_last() else {
        return Intent::General;
    };

    let current = classify_message(&last.content);
    if current != Intent::General {
        return current;
    }

    if is_short_follow_up(&last.content) {
        for message in prior.iter().rev() {
            let carried = classify_message(&message.content);
            if carried != Intent::General {
                return carried;
            }
        }
    }

    Intent::General
}
