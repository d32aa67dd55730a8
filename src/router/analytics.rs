// ABOUTME: Bounded query analytics ring buffer owned by the request context
// ABOUTME: Fixed-capacity FIFO eviction, record and snapshot are the only operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::constants::router::ANALYTICS_CAPACITY;
use crate::models::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// One recorded context-routing query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Unique record id
    pub id: Uuid,
    /// When the query was routed
    pub timestamp: DateTime<Utc>,
    /// Intent the context was assembled for
    pub intent: Intent,
    /// Program phase at the time of the query
    pub phase: u32,
    /// Program week at the time of the query
    pub week: u32,
    /// Estimated token cost of the assembled context
    pub token_estimate: usize,
}

impl QueryRecord {
    /// Create a record stamped with the current time
    #[must_use]
    pub fn new(intent: Intent, phase: u32, week: u32, token_estimate: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            intent,
            phase,
            week,
            token_estimate,
        }
    }
}

/// Bounded in-memory analytics buffer
///
/// Explicitly scoped and injected: each router owns its own buffer rather
/// than sharing a process-wide singleton, so tests and multi-instance
/// deployments stay isolated. Best-effort telemetry only.
#[derive(Debug, Clone)]
pub struct QueryAnalytics {
    entries: VecDeque<QueryRecord>,
    capacity: usize,
}

impl Default for QueryAnalytics {
    fn default() -> Self {
        Self::new(ANALYTICS_CAPACITY)
    }
}

impl QueryAnalytics {
    /// Create a buffer with the given capacity (minimum 1)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Record a query, evicting the oldest entry when full
    pub fn record(&mut self, record: QueryRecord) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Copy of the current entries, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<QueryRecord> {
        self.entries.iter().cloned().collect()
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
