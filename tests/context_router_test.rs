// ABOUTME: Integration tests for token-budgeted context assembly
// ABOUTME: Covers intent branches, budget ceilings, phase redirect, and degrade path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

mod common;

use atlas_coach::router::{estimate_tokens, ContextRouter};
use atlas_coach::{ChatMessage, Intent, RouterConfig};

fn router_with_fixture() -> (tempfile::NamedTempFile, ContextRouter) {
    common::init_test_logging();
    let (file, path) = common::master_plan_file();
    (file, ContextRouter::new(RouterConfig::new(path)))
}

#[tokio::test]
async fn test_core_routine_always_included() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::General, 1, 3, &[], Some("MONDAY"))
        .await;
    assert_eq!(payload.intent, Intent::General);
    assert!(payload
        .system_prompt_additions
        .contains("TODAY'S PRESCRIBED WORK (MONDAY)"));
    assert!(payload.system_prompt_additions.contains("Back Squat 5x5"));
}

#[tokio::test]
async fn test_injury_branch_gets_broad_phase_context() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::Injury, 1, 3, &[], Some("MONDAY"))
        .await;
    assert!(payload.system_prompt_additions.contains("INJURY PROTOCOL"));
    // Injury context spans the phase, not just today
    assert!(payload.system_prompt_additions.contains("Pull-ups"));
    assert_eq!(
        payload.suggested_tools,
        vec![
            "find_exercise_substitute".to_owned(),
            "get_injury_log".to_owned(),
            "log_pain_report".to_owned(),
        ]
    );
}

#[tokio::test]
async fn test_progress_branch_suggests_data_tools() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::Progress, 2, 10, &[], Some("MONDAY"))
        .await;
    assert!(payload.system_prompt_additions.contains("PROGRESS REVIEW"));
    assert!(payload
        .suggested_tools
        .contains(&"get_strength_history".to_owned()));
}

#[tokio::test]
async fn test_logistics_branch_is_smallest() {
    let (_file, mut router) = router_with_fixture();
    let logistics = router
        .build_dynamic_context(Intent::Logistics, 1, 3, &[], Some("MONDAY"))
        .await;
    let injury = router
        .build_dynamic_context(Intent::Injury, 1, 3, &[], Some("MONDAY"))
        .await;
    assert!(logistics.token_estimate <= injury.token_estimate);
    assert_eq!(
        logistics.suggested_tools,
        vec!["get_today_workout".to_owned(), "get_week_schedule".to_owned()]
    );
}

#[tokio::test]
async fn test_token_estimate_matches_payload_text() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::Injury, 1, 3, &[], Some("TUESDAY"))
        .await;
    assert_eq!(
        payload.token_estimate,
        estimate_tokens(&payload.system_prompt_additions)
    );
}

#[tokio::test]
async fn test_budget_ceiling_bounds_every_branch() {
    let (_file, mut router) = router_with_fixture();
    let config = RouterConfig::new("unused");
    for intent in [
        Intent::Injury,
        Intent::Progress,
        Intent::Logistics,
        Intent::General,
    ] {
        let payload = router
            .build_dynamic_context(intent, 1, 3, &[], Some("MONDAY"))
            .await;
        let ceiling = config.budgets.for_intent(intent) + config.budgets.core_routine;
        // Joined sections add small fixed separators; allow a few tokens
        assert!(
            payload.token_estimate <= ceiling + 16,
            "{} payload exceeded ceiling: {} > {}",
            intent.as_str(),
            payload.token_estimate,
            ceiling
        );
    }
}

#[tokio::test]
async fn test_phase_five_redirects_to_phase_one_content() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::General, 5, 20, &[], Some("MONDAY"))
        .await;
    // Week 20 is not a testing week, so phase 1 content appears
    assert!(payload.system_prompt_additions.contains("Foundation"));
}

#[tokio::test]
async fn test_phase_five_testing_week_keeps_testing_content() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::General, 5, 37, &[], Some("MONDAY"))
        .await;
    assert!(payload.system_prompt_additions.contains("work to 1RM"));
}

#[tokio::test]
async fn test_recency_buffer_carries_assistant_exercises() {
    let (_file, mut router) = router_with_fixture();
    let messages = vec![
        ChatMessage::user("what did you suggest?"),
        ChatMessage::assistant("Try these:\n- Goblet Squat 3x12\n- Box Step-ups 3x10"),
    ];
    let payload = router
        .build_dynamic_context(Intent::General, 1, 3, &messages, Some("MONDAY"))
        .await;
    assert!(payload
        .system_prompt_additions
        .contains("RECENTLY DISCUSSED EXERCISES"));
    assert!(payload.system_prompt_additions.contains("Goblet Squat 3x12"));
}

#[tokio::test]
async fn test_huge_recent_messages_cannot_blow_the_budget() {
    let (_file, mut router) = router_with_fixture();
    let config = RouterConfig::new("unused");

    // One assistant message whose exercise lines alone are ~5000 tokens
    let content = (0..5)
        .map(|i| format!("- Exercise {i} {}", "x".repeat(4000)))
        .collect::<Vec<_>>()
        .join("\n");
    let messages = vec![ChatMessage::assistant(content)];

    let payload = router
        .build_dynamic_context(Intent::General, 1, 3, &messages, Some("MONDAY"))
        .await;
    let ceiling = config.budgets.for_intent(Intent::General)
        + config.budgets.core_routine
        + atlas_coach::constants::tokens::RECENCY_BUDGET;
    assert!(
        payload.token_estimate <= ceiling + 16,
        "payload exceeded ceiling: {} > {}",
        payload.token_estimate,
        ceiling
    );
}

#[tokio::test]
async fn test_missing_plan_degrades_to_general() {
    common::init_test_logging();
    let mut router = ContextRouter::new(RouterConfig::new("/nonexistent/plan.md"));
    let payload = router
        .build_dynamic_context(Intent::Injury, 1, 3, &[], Some("MONDAY"))
        .await;
    assert_eq!(payload.intent, Intent::General);
    assert!(payload.system_prompt_additions.is_empty());
    assert_eq!(payload.token_estimate, 0);
    assert_eq!(payload.suggested_tools, vec!["get_today_workout".to_owned()]);
}

#[tokio::test]
async fn test_analytics_records_every_call() {
    let (_file, mut router) = router_with_fixture();
    router
        .build_dynamic_context(Intent::General, 1, 3, &[], Some("MONDAY"))
        .await;
    router
        .build_dynamic_context(Intent::Injury, 1, 4, &[], Some("TUESDAY"))
        .await;

    let snapshot = router.analytics().snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].intent, Intent::General);
    assert_eq!(snapshot[1].intent, Intent::Injury);
    assert_eq!(snapshot[1].week, 4);
    assert!(snapshot[1].token_estimate > 0);
}

#[tokio::test]
async fn test_unknown_day_still_produces_payload() {
    let (_file, mut router) = router_with_fixture();
    let payload = router
        .build_dynamic_context(Intent::Logistics, 1, 3, &[], Some("SUNDAY"))
        .await;
    assert!(payload
        .system_prompt_additions
        .contains("No prescription found for today."));
}
