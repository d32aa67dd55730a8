// ABOUTME: Conversation and context value types shared across the router
// ABOUTME: DTOs for chat messages, classified intents, and assembled context payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use serde::{Deserialize, Serialize};

/// Role of a message sender within a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// End user (athlete)
    User,
    /// AI coach response
    Assistant,
    /// Injected system instruction
    System,
    /// Tool invocation result
    Tool,
}

impl MessageRole {
    /// String form matching the wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Tool => "tool",
        }
    }
}

/// A single conversation message
///
/// Only `user` and `assistant` roles feed intent detection; system and tool
/// messages are carried for completeness but ignored by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the sender
    pub role: MessageRole,
    /// Message text content
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Classified conversational intent
///
/// Closed set. `Injury` always wins when its keywords appear in the current
/// message; safety context is never superseded by carry-over logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// Pain, discomfort, or exercise substitution requests
    Injury,
    /// Performance trends and benchmark history
    Progress,
    /// Scheduling, equipment, and "what's today" questions
    Logistics,
    /// Everything else
    General,
}

impl Intent {
    /// String form used in logs and analytics
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Injury => "INJURY",
            Self::Progress => "PROGRESS",
            Self::Logistics => "LOGISTICS",
            Self::General => "GENERAL",
        }
    }
}

/// Assembled system-prompt context for one chat turn
///
/// Ephemeral: computed fresh per turn and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextPayload {
    /// Intent the context was assembled for
    pub intent: Intent,
    /// Text appended to the system prompt
    pub system_prompt_additions: String,
    /// Tool names the assistant should prefer for this intent
    pub suggested_tools: Vec<String>,
    /// Estimated token cost of `system_prompt_additions`
    pub token_estimate: usize,
}
