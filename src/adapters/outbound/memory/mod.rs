//! In-memory stores backed by DashMap.
//!
//! Each store is `Clone`; clones share the same underlying maps, so a
//! store can be handed to several use cases at once. Uniqueness
//! constraints (department name, employee email, skill identity) are
//! enforced atomically through the index maps' entry API, so a violation
//! that races past a handler-level check still cannot corrupt the store.

pub mod department_store;
pub mod document_store;
pub mod employee_skill_store;
pub mod employee_store;
pub mod required_skill_store;
pub mod skill_store;
pub mod taxonomy_cache;

pub use department_store::InMemoryDepartmentStore;
pub use document_store::InMemoryDocumentStore;
pub use employee_skill_store::InMemoryEmployeeSkillStore;
pub use employee_store::InMemoryEmployeeStore;
pub use required_skill_store::InMemoryRequiredSkillStore;
pub use skill_store::InMemorySkillStore;
pub use taxonomy_cache::InMemoryTaxonomyCache;
