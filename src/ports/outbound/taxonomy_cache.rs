/// TaxonomyCache port for the single-process skill-lookup cache
///
/// Taxonomy-mutating commands call `invalidate()` after a successful save
/// so later alias/category lookups see fresh data. The call is
/// fire-and-forget: no parameters, no return value, at most one effect
/// per call. There is no distributed invalidation.
pub trait TaxonomyCache: Send + Sync {
    fn invalidate(&self);
}
