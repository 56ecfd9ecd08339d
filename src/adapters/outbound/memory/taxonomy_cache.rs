use crate::ports::outbound::TaxonomyCache;
use crate::workforce::domain::SkillId;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Single-process skill-lookup cache.
///
/// Lookups store the resolution of a lowercased alias to its skill id;
/// `invalidate` drops every entry and bumps the generation counter so a
/// reader can tell a fresh miss from a stale snapshot.
#[derive(Clone, Default)]
pub struct InMemoryTaxonomyCache {
    by_alias: Arc<DashMap<String, SkillId>>,
    generation: Arc<AtomicU64>,
}

impl InMemoryTaxonomyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached alias resolution, `None` on a miss
    pub fn lookup(&self, alias: &str) -> Option<SkillId> {
        self.by_alias.get(&alias.trim().to_lowercase()).map(|e| *e)
    }

    /// Records an alias resolution for later lookups
    pub fn store(&self, alias: &str, skill_id: SkillId) {
        self.by_alias.insert(alias.trim().to_lowercase(), skill_id);
    }

    /// Number of invalidations since startup
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }
}

impl TaxonomyCache for InMemoryTaxonomyCache {
    fn invalidate(&self) {
        self.by_alias.clear();
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}
