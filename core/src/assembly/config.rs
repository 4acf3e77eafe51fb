/// Tuning knobs for the playlist assembly heuristic
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Candidate pool is `count * pool_multiplier` tracks...
    pub pool_multiplier: usize,
    /// ...but never fewer than this
    pub min_pool_size: usize,
    /// Largest page the catalog serves in one request (Jamendo: 200)
    pub max_limit: usize,
    /// Upper bound (inclusive) for the random offset of the first tag search
    pub max_offset: usize,
    /// Offsets above this are retried once with a random offset in `0..=retry_offset`
    pub retry_offset: usize,
    /// Upper bound (inclusive) for the random offset of the popularity fallback
    pub popular_max_offset: usize,
}

impl AssemblyConfig {
    pub fn new(pool_multiplier: usize, min_pool_size: usize) -> Self {
        Self {
            pool_multiplier,
            min_pool_size,
            ..Self::default()
        }
    }

    /// Request limit for the similar and fill searches, capped at `max_limit`.
    pub fn pool_size(&self, count: usize) -> usize {
        count
            .saturating_mul(self.pool_multiplier)
            .max(self.min_pool_size)
            .min(self.max_limit)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            pool_multiplier: 5,
            min_pool_size: 50,
            max_limit: 200,
            max_offset: 500,
            retry_offset: 50,
            popular_max_offset: 1000,
        }
    }
}
