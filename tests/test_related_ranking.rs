//! Property-style tests for related content ranking.

use portfolio_mcp_server::domain::ContentId;
use portfolio_mcp_server::models::ContentItem;
use portfolio_mcp_server::ranking::{find_related, RelatedContentRanker, DEFAULT_MAX_RESULTS};

fn item(id: &str, service_type: &str, category: &str) -> ContentItem {
    ContentItem::new(ContentId::new(id).unwrap(), service_type, category)
}

/// A mixed catalog with varied overlap against `current()`.
fn pool() -> Vec<ContentItem> {
    vec![
        item("tender-nhs", "tender_management", "Tenders")
            .with_client("NHS Trust")
            .with_skills(["Bid Writing", "Compliance"])
            .featured(),
        item("shop-rebuild", "web_development", "Web Development")
            .with_client("Acme")
            .with_skills(["SEO", "Hosting", "Accessibility"])
            .with_technologies(["Next.js", "Postgres"]),
        item("brand-site", "web_development", "Branding").with_skills(["SEO"]),
        item("chatbot", "project_management", "AI").with_technologies(["Python", "Postgres"]),
        item("advisory", "consultation", "Advisory"),
        item("acme-audit", "consultation", "Advisory").with_client("Acme"),
        item("landing", "web_development", "Web Development").featured(),
    ]
}

fn current() -> ContentItem {
    item("acme-store", "web_development", "Web Development")
        .with_client("Acme")
        .with_skills(["SEO", "Hosting"])
        .with_technologies(["Next.js", "Postgres"])
}

#[test]
fn test_scenario_same_service_category_and_one_skill() {
    let current = item("a", "web_development", "Web Development").with_skills(["SEO", "Hosting"]);
    let candidate = item("b", "web_development", "Web Development").with_skills(["SEO"]);

    let ranked = RelatedContentRanker::new().rank(&current, &[candidate], 3);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 17);
}

#[test]
fn test_featured_only_candidate_ranks_last() {
    let current = item("a", "web_development", "Web Development");
    let pool = vec![
        item("featured-only", "tender_management", "Tenders").featured(),
        item("better", "web_development", "Other"),
    ];

    let ranked = RelatedContentRanker::new().rank(&current, &pool, 5);
    let ids: Vec<&str> = ranked.iter().map(|m| m.item.id.as_str()).collect();
    assert_eq!(ids, vec!["better", "featured-only"]);
    assert_eq!(ranked[1].score, 1);
}

#[test]
fn test_current_item_never_in_output() {
    let mut pool = pool();
    let current = current();
    pool.insert(3, current.clone());

    for max in 0..=pool.len() {
        let related = find_related(&current, &pool, max);
        assert!(related.iter().all(|i| i.id != current.id));
        assert!(related.len() <= max);
    }
}

#[test]
fn test_output_sorted_and_non_zero() {
    let pool = pool();
    let ranker = RelatedContentRanker::new();

    for current in &pool {
        let ranked = ranker.rank(current, &pool, pool.len());
        assert!(ranked.iter().all(|m| m.score > 0));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        for m in &ranked {
            assert_eq!(m.score, ranker.score(current, &m.item));
        }
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let pool = pool();
    let current = current();

    let first = find_related(&current, &pool, DEFAULT_MAX_RESULTS);
    let second = find_related(&current, &pool, DEFAULT_MAX_RESULTS);
    assert_eq!(first, second);
}

#[test]
fn test_expected_order_for_mixed_catalog() {
    let ranked = RelatedContentRanker::new().rank(&current(), &pool(), DEFAULT_MAX_RESULTS);
    let scored: Vec<(&str, u32)> = ranked
        .iter()
        .map(|m| (m.item.id.as_str(), m.score))
        .collect();

    // shop-rebuild: 10 + 5 + 5 + 2*2 + 2*2 = 28
    // landing: 10 + 5 + 1 = 16
    // brand-site: 10 + 2 = 12
    assert_eq!(
        scored,
        vec![("shop-rebuild", 28), ("landing", 16), ("brand-site", 12)]
    );
}

#[test]
fn test_unrelated_pool_yields_nothing() {
    let current = item("x", "consultation", "Strategy");
    let pool = vec![
        item("a", "web_development", "Web Development"),
        item("b", "project_management", "AI").with_skills(["Python"]),
    ];

    assert!(find_related(&current, &pool, 3).is_empty());
}
