/// Default weights for related case studies.
pub const RELATED_WEIGHTS: RelatedWeights = RelatedWeights {
    service_type: 10,
    category: 5,
    client: 5,
    shared_skill: 2,
    shared_technology: 2,
    featured: 1,
};

/// Points awarded per matching signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedWeights {
    /// Same service-type category
    pub service_type: u32,
    /// Same category label
    pub category: u32,
    /// Same non-empty client
    pub client: u32,
    /// Per skill present on both items
    pub shared_skill: u32,
    /// Per technology present on both items
    pub shared_technology: u32,
    /// Candidate is featured
    pub featured: u32,
}

impl Default for RelatedWeights {
    fn default() -> Self {
        RELATED_WEIGHTS
    }
}
