mod common;

use sqlx::PgPool;
use std::sync::Arc;
use visit_counter::domain::entities::NewVisit;
use visit_counter::domain::repositories::VisitRepository;
use visit_counter::infrastructure::persistence::PgVisitRepository;

#[sqlx::test]
async fn test_insert_visit(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    let visit = repo
        .insert(NewVisit::new(
            Some("Mozilla/5.0".to_string()),
            Some("203.0.113.7".to_string()),
        ))
        .await
        .unwrap();

    assert!(visit.id > 0);
    assert_eq!(visit.user_agent, "Mozilla/5.0");
    assert_eq!(visit.ip_address.as_deref(), Some("203.0.113.7"));
}

#[sqlx::test]
async fn test_insert_visit_defaults(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    let visit = repo.insert(NewVisit::new(None, None)).await.unwrap();

    assert_eq!(visit.user_agent, "unknown");
    assert!(visit.ip_address.is_none());
}

#[sqlx::test]
async fn test_ids_increase(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    let first = repo.insert(NewVisit::new(None, None)).await.unwrap();
    let second = repo.insert(NewVisit::new(None, None)).await.unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_count_empty(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_count_after_inserts(pool: PgPool) {
    for i in 0..3 {
        common::create_test_visit(&pool, &format!("agent-{i}"), None).await;
    }

    let repo = PgVisitRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    common::create_test_visit_at(&pool, "oldest", 300).await;
    common::create_test_visit_at(&pool, "middle", 200).await;
    common::create_test_visit_at(&pool, "newest", 100).await;

    let repo = PgVisitRepository::new(Arc::new(pool));
    let visits = repo.list(10, 0).await.unwrap();

    let agents: Vec<_> = visits.iter().map(|v| v.user_agent.as_str()).collect();
    assert_eq!(agents, ["newest", "middle", "oldest"]);
}

#[sqlx::test]
async fn test_list_same_time_breaks_ties_by_id(pool: PgPool) {
    sqlx::query(
        "INSERT INTO visits (user_agent, visit_time) \
         VALUES ('a', '2026-01-01T00:00:00Z'), ('b', '2026-01-01T00:00:00Z')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = PgVisitRepository::new(Arc::new(pool));
    let visits = repo.list(10, 0).await.unwrap();

    assert_eq!(visits.len(), 2);
    assert!(visits[0].id > visits[1].id);
}

#[sqlx::test]
async fn test_list_limit_and_offset(pool: PgPool) {
    for i in 0..5 {
        common::create_test_visit_at(&pool, &format!("agent-{i}"), 100 - i).await;
    }

    let repo = PgVisitRepository::new(Arc::new(pool));

    let page = repo.list(2, 2).await.unwrap();
    let agents: Vec<_> = page.iter().map(|v| v.user_agent.as_str()).collect();
    assert_eq!(agents, ["agent-2", "agent-1"]);

    let past_end = repo.list(2, 10).await.unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgVisitRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_closed_pool_is_unavailable(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgVisitRepository::new(pool.clone());
    pool.close().await;

    let err = repo.count().await.unwrap_err();

    assert!(err.is_unavailable());
}
