//! Related content ranking for the case-study catalog.
//!
//! Candidates are scored by weighted attribute overlap with the item being
//! viewed; zero-score candidates are dropped and the rest returned best first.

pub mod related;
pub mod weights;

pub use related::{find_related, RelatedContentRanker, RelatedMatch, DEFAULT_MAX_RESULTS};
pub use weights::{RelatedWeights, RELATED_WEIGHTS};
