/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod directory;
pub mod memory;

pub use directory::InMemoryUserDirectory;
pub use memory::{
    InMemoryDepartmentStore, InMemoryDocumentStore, InMemoryEmployeeSkillStore,
    InMemoryEmployeeStore, InMemoryRequiredSkillStore, InMemorySkillStore, InMemoryTaxonomyCache,
};
