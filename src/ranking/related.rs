//! Weighted-overlap ranking of related catalog items.
//!
//! Signals and their default weights:
//! - same service type: +10
//! - same category label: +5
//! - same non-empty client: +5
//! - +2 per skill present on both items
//! - +2 per technology present on both items (only when both define a set)
//! - featured candidate: +1
//!
//! Candidates scoring 0 are not related. Ties keep pool order.

use super::weights::RelatedWeights;
use crate::models::ContentItem;
use serde::Serialize;
use std::collections::HashSet;

/// Number of related items returned when the caller does not ask for more.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// A related item and the score that placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedMatch {
    #[serde(flatten)]
    pub item: ContentItem,
    pub score: u32,
}

/// Scores and ranks catalog items against the one being viewed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelatedContentRanker {
    weights: RelatedWeights,
}

impl RelatedContentRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: RelatedWeights) -> Self {
        Self { weights }
    }

    /// Similarity of `candidate` to `current`. Saturates at `u32::MAX`.
    pub fn score(&self, current: &ContentItem, candidate: &ContentItem) -> u32 {
        let w = &self.weights;
        let mut score: u32 = 0;

        if candidate.service_type == current.service_type {
            score = score.saturating_add(w.service_type);
        }
        if candidate.category == current.category {
            score = score.saturating_add(w.category);
        }
        if let (Some(a), Some(b)) = (current.client_name(), candidate.client_name()) {
            if a == b {
                score = score.saturating_add(w.client);
            }
        }

        let skills = shared_count(&current.skills, &candidate.skills);
        score = score.saturating_add(w.shared_skill.saturating_mul(skills));

        if let (Some(a), Some(b)) = (&current.technologies, &candidate.technologies) {
            score = score.saturating_add(w.shared_technology.saturating_mul(shared_count(a, b)));
        }

        if candidate.featured {
            score = score.saturating_add(w.featured);
        }

        score
    }

    /// Rank `pool` against `current`, best first, at most `max_results`.
    ///
    /// `current` itself (matched by id) and zero-score candidates are
    /// excluded. An empty result means there is no related content.
    pub fn rank(
        &self,
        current: &ContentItem,
        pool: &[ContentItem],
        max_results: usize,
    ) -> Vec<RelatedMatch> {
        let mut matches: Vec<RelatedMatch> = pool
            .iter()
            .filter(|candidate| candidate.id != current.id)
            .filter_map(|candidate| {
                let score = self.score(current, candidate);
                (score > 0).then(|| RelatedMatch {
                    item: candidate.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep pool order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(max_results);

        matches
    }

    /// Like [`rank`](Self::rank) but returns the items only.
    pub fn find_related(
        &self,
        current: &ContentItem,
        pool: &[ContentItem],
        max_results: usize,
    ) -> Vec<ContentItem> {
        self.rank(current, pool, max_results)
            .into_iter()
            .map(|m| m.item)
            .collect()
    }
}

/// Related items for `current` using the default weights.
pub fn find_related(
    current: &ContentItem,
    pool: &[ContentItem],
    max_results: usize,
) -> Vec<ContentItem> {
    RelatedContentRanker::new().find_related(current, pool, max_results)
}

/// Number of distinct tags present in both lists.
fn shared_count(current: &[String], candidate: &[String]) -> u32 {
    let current: HashSet<&str> = current.iter().map(String::as_str).collect();
    let candidate: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    u32::try_from(candidate.intersection(&current).count()).unwrap_or(u32::MAX)
}
