//! End-to-end tests for the reconciliation core over real file stores
//!
//! Run with: cargo test -p integration-tests --test reconcile_tests

use integration_tests::fixtures::{store, two_store_catalog, FakeMessage};
use integration_tests::context_with_catalog;

use lunchbot_core::{DomainError, Reactor, RECOMMEND_EMOJI};
use lunchbot_service::{
    LeaderboardService, ReconcileService, RecommendService, ServiceError,
};

// ============================================================================
// Reconciliation
// ============================================================================

#[tokio::test]
async fn test_reaction_event_updates_only_the_tracked_store() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let message = FakeMessage::for_store("A")
        .with_reactor(1, "alice", false)
        .with_reactor(2, "bob", false)
        .with_reactor(99, "lunchbot", true);
    let actor = Reactor::new(1, "alice", false);

    let stored = ReconcileService::new(&test.ctx)
        .handle_reaction_event(&message, RECOMMEND_EMOJI, &actor)
        .await
        .unwrap();
    assert_eq!(stored, Some(2));

    let catalog = test.ctx.catalog_repo().load().await.unwrap();
    assert_eq!(catalog[0].recommend_count, 2);
    assert_eq!(catalog[1].recommend_count, 3);
}

#[tokio::test]
async fn test_unknown_store_leaves_catalog_file_untouched() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let message = FakeMessage::for_store("C").with_reactor(1, "alice", false);

    let stored = ReconcileService::new(&test.ctx)
        .reconcile("C", &message, RECOMMEND_EMOJI)
        .await
        .unwrap();
    assert_eq!(stored, None);

    let catalog = test.ctx.catalog_repo().load().await.unwrap();
    assert_eq!(catalog, two_store_catalog());
}

#[tokio::test]
async fn test_reaction_removal_recomputes_down_to_zero() {
    let test = context_with_catalog(&[store("A", "한식", 4)]).await;
    // every 👍 has been removed; the snapshot has no matching aggregate
    let message = FakeMessage::for_store("A");

    let stored = ReconcileService::new(&test.ctx)
        .reconcile("A", &message, RECOMMEND_EMOJI)
        .await
        .unwrap();
    assert_eq!(stored, Some(0));
}

#[tokio::test]
async fn test_deleted_message_abandons_the_event_without_writing() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let message = FakeMessage::for_store("A")
        .with_reactor(1, "alice", false)
        .failing();

    let err = ReconcileService::new(&test.ctx)
        .reconcile("A", &message, RECOMMEND_EMOJI)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ReactionFetchFailed(_))
    ));

    let catalog = test.ctx.catalog_repo().load().await.unwrap();
    assert_eq!(catalog, two_store_catalog());
}

#[tokio::test]
async fn test_untracked_message_is_ignored() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let message = FakeMessage::untracked("A", "오늘의 점심 메뉴입니다");
    let actor = Reactor::new(1, "alice", false);

    let stored = ReconcileService::new(&test.ctx)
        .handle_reaction_event(&message, RECOMMEND_EMOJI, &actor)
        .await
        .unwrap();
    assert_eq!(stored, None);
}

#[tokio::test]
async fn test_corrupt_catalog_fails_the_event_without_partial_writes() {
    let test = context_with_catalog(&two_store_catalog()).await;
    std::fs::write(test.catalog_store.path(), "[{broken").unwrap();
    let message = FakeMessage::for_store("A").with_reactor(1, "alice", false);

    let err = ReconcileService::new(&test.ctx)
        .reconcile("A", &message, RECOMMEND_EMOJI)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "CORRUPT_CATALOG");

    // the broken file was not rewritten
    let raw = std::fs::read_to_string(test.catalog_store.path()).unwrap();
    assert_eq!(raw, "[{broken");
}

#[tokio::test]
async fn test_concurrent_reconciliations_both_land() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let service = ReconcileService::new(&test.ctx);

    let message_a = FakeMessage::for_store("A")
        .with_reactor(1, "alice", false)
        .with_reactor(2, "bob", false);
    let message_b = FakeMessage::for_store("B").with_reactor(3, "carol", false);

    let (a, b) = tokio::join!(
        service.reconcile("A", &message_a, RECOMMEND_EMOJI),
        service.reconcile("B", &message_b, RECOMMEND_EMOJI),
    );
    assert_eq!(a.unwrap(), Some(2));
    assert_eq!(b.unwrap(), Some(1));

    // neither write clobbered the other
    let catalog = test.ctx.catalog_repo().load().await.unwrap();
    assert_eq!(catalog[0].recommend_count, 2);
    assert_eq!(catalog[1].recommend_count, 1);
}

#[tokio::test]
async fn test_reset_counts_survives_reload() {
    let test = context_with_catalog(&[store("A", "한식", 4), store("B", "중식", 9)]).await;

    ReconcileService::new(&test.ctx).reset_counts().await.unwrap();

    let catalog = test.ctx.catalog_repo().load().await.unwrap();
    assert!(catalog.iter().all(|r| r.recommend_count == 0));
}

// ============================================================================
// Leaderboard
// ============================================================================

#[tokio::test]
async fn test_leaderboard_over_persisted_catalog() {
    let records = vec![
        store("A", "한식", 1),
        store("B", "중식", 5),
        store("C", "일식", 5),
        store("D", "분식", 2),
    ];
    let test = context_with_catalog(&records).await;

    let top = LeaderboardService::new(&test.ctx).top_stores(3).await.unwrap();
    let names: Vec<&str> = top.iter().map(|r| r.store_name.as_str()).collect();
    // B and C tie at 5; catalog order breaks the tie
    assert_eq!(names, ["B", "C", "A"]);
}

#[tokio::test]
async fn test_leaderboard_sees_reconciled_counts() {
    let test = context_with_catalog(&two_store_catalog()).await;
    let message = FakeMessage::for_store("A")
        .with_reactor(1, "alice", false)
        .with_reactor(2, "bob", false)
        .with_reactor(3, "carol", false)
        .with_reactor(4, "dave", false);

    ReconcileService::new(&test.ctx)
        .reconcile("A", &message, RECOMMEND_EMOJI)
        .await
        .unwrap();

    let top = LeaderboardService::new(&test.ctx).top_stores(5).await.unwrap();
    assert_eq!(top[0].store_name, "A");
    assert_eq!(top[0].recommend_count, 4);
}

// ============================================================================
// Recommendation picker + log
// ============================================================================

#[tokio::test]
async fn test_recommend_appends_to_the_jsonl_log_file() {
    let test = context_with_catalog(&[store("역전우동", "음식점 > 분식", 0)]).await;

    let picked = RecommendService::new(&test.ctx)
        .recommend(7, "seung", Some("분식"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(picked.store_name, "역전우동");

    let raw = std::fs::read_to_string(test.recommend_log.path()).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 1);

    let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["user_id"], 7);
    assert_eq!(entry["username"], "seung");
    assert_eq!(entry["store_name"], "역전우동");
    assert_eq!(entry["category"], "음식점 > 분식");
}

#[tokio::test]
async fn test_recommend_without_match_leaves_no_log_file() {
    let test = context_with_catalog(&[store("역전우동", "음식점 > 분식", 0)]).await;

    let picked = RecommendService::new(&test.ctx)
        .recommend(7, "seung", Some("양식"))
        .await
        .unwrap();
    assert!(picked.is_none());
    assert!(!test.recommend_log.path().exists());
}
