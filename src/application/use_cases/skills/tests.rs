use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// Mock implementations for testing

#[derive(Default, Clone)]
struct MockSkillRepo {
    skills: Arc<Mutex<Vec<Skill>>>,
    writes: Arc<Mutex<u32>>,
}

impl MockSkillRepo {
    fn with(skills: Vec<Skill>) -> Self {
        Self {
            skills: Arc::new(Mutex::new(skills)),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn find(&self, id: SkillId) -> Option<Skill> {
        self.skills
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned()
    }
}

#[async_trait]
impl SkillRepository for MockSkillRepo {
    async fn get(&self, id: SkillId) -> Result<Option<Skill>> {
        Ok(self.find(id))
    }

    async fn find_by_identity(&self, name: &str, category: &str) -> Result<Option<Skill>> {
        let key = identity_key(name, category);
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.identity_key() == key)
            .cloned())
    }

    async fn list(&self, category: Option<&str>, include_inactive: bool) -> Result<Vec<Skill>> {
        Ok(self
            .skills
            .lock()
            .unwrap()
            .iter()
            .filter(|s| include_inactive || s.is_active())
            .filter(|s| {
                category
                    .map(|c| s.category().as_str().eq_ignore_ascii_case(c))
                    .unwrap_or(true)
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, skill: Skill) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        self.skills.lock().unwrap().push(skill);
        Ok(())
    }

    async fn update(&self, skill: Skill) -> Result<()> {
        *self.writes.lock().unwrap() += 1;
        let mut skills = self.skills.lock().unwrap();
        if let Some(slot) = skills.iter_mut().find(|s| s.id() == skill.id()) {
            *slot = skill;
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
struct MockTaxonomyCache {
    invalidations: Arc<AtomicUsize>,
}

impl MockTaxonomyCache {
    fn invalidation_count(&self) -> usize {
        self.invalidations.load(Ordering::Relaxed)
    }
}

impl TaxonomyCache for MockTaxonomyCache {
    fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
    }
}

fn skill(name: &str, category: &str) -> Skill {
    Skill::new(
        SkillName::new(name.to_string()).unwrap(),
        SkillCategory::new(category.to_string()).unwrap(),
        vec![],
    )
}

#[tokio::test]
async fn test_add_skill_includes_own_name_in_aliases() {
    let repo = MockSkillRepo::default();
    let cache = MockTaxonomyCache::default();
    let use_case = AddSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(AddSkillCommand {
            name: "PostgreSQL".to_string(),
            category: "Databases".to_string(),
            aliases: vec!["postgres".to_string(), "Postgres".to_string()],
        })
        .await
        .unwrap();

    match outcome {
        AddSkillOutcome::Added(dto) => {
            assert_eq!(dto.aliases, vec!["PostgreSQL", "postgres"]);
        }
        AddSkillOutcome::DuplicateSkill => panic!("expected Added"),
    }
    assert_eq!(cache.invalidation_count(), 1);
}

#[tokio::test]
async fn test_add_skill_duplicate_identity_conflicts_without_write() {
    let repo = MockSkillRepo::with(vec![skill("Rust", "Languages")]);
    let cache = MockTaxonomyCache::default();
    let use_case = AddSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(AddSkillCommand {
            name: "RUST".to_string(),
            category: "languages".to_string(),
            aliases: vec![],
        })
        .await
        .unwrap();

    assert!(matches!(outcome, AddSkillOutcome::DuplicateSkill));
    assert_eq!(repo.write_count(), 0);
    assert_eq!(cache.invalidation_count(), 0);
}

#[tokio::test]
async fn test_add_skill_same_name_different_category_is_allowed() {
    let repo = MockSkillRepo::with(vec![skill("Go", "Languages")]);
    let cache = MockTaxonomyCache::default();
    let use_case = AddSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(AddSkillCommand {
            name: "Go".to_string(),
            category: "Board Games".to_string(),
            aliases: vec![],
        })
        .await
        .unwrap();

    assert!(matches!(outcome, AddSkillOutcome::Added(_)));
}

#[tokio::test]
async fn test_update_skill_not_found() {
    let repo = MockSkillRepo::default();
    let cache = MockTaxonomyCache::default();
    let use_case = UpdateSkillUseCase::new(repo, cache.clone());

    let outcome = use_case
        .execute(UpdateSkillCommand {
            id: SkillId::new(),
            name: Some("Rust".to_string()),
            category: None,
            aliases: None,
        })
        .await
        .unwrap();

    assert!(matches!(outcome, UpdateSkillOutcome::NotFound));
    assert_eq!(cache.invalidation_count(), 0);
}

#[tokio::test]
async fn test_update_skill_identity_collision_conflicts() {
    let rust = skill("Rust", "Languages");
    let go = skill("Go", "Languages");
    let go_id = go.id();
    let repo = MockSkillRepo::with(vec![rust, go]);
    let cache = MockTaxonomyCache::default();
    let use_case = UpdateSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(UpdateSkillCommand {
            id: go_id,
            name: Some("rust".to_string()),
            category: None,
            aliases: None,
        })
        .await
        .unwrap();

    assert!(matches!(outcome, UpdateSkillOutcome::DuplicateSkill));
    assert_eq!(repo.write_count(), 0);
    assert_eq!(cache.invalidation_count(), 0);
}

#[tokio::test]
async fn test_update_skill_replaces_aliases_and_invalidates() {
    let pg = skill("PostgreSQL", "Databases");
    let id = pg.id();
    let repo = MockSkillRepo::with(vec![pg]);
    let cache = MockTaxonomyCache::default();
    let use_case = UpdateSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(UpdateSkillCommand {
            id,
            name: None,
            category: None,
            aliases: Some(vec!["pg".to_string(), "postgres".to_string()]),
        })
        .await
        .unwrap();

    match outcome {
        UpdateSkillOutcome::Updated(dto) => {
            assert_eq!(dto.aliases, vec!["PostgreSQL", "pg", "postgres"]);
        }
        _ => panic!("expected Updated"),
    }
    assert_eq!(cache.invalidation_count(), 1);
}

#[tokio::test]
async fn test_deactivate_skill() {
    let rust = skill("Rust", "Languages");
    let id = rust.id();
    let repo = MockSkillRepo::with(vec![rust]);
    let cache = MockTaxonomyCache::default();
    let use_case = DeactivateSkillUseCase::new(repo.clone(), cache.clone());

    let outcome = use_case
        .execute(DeactivateSkillCommand { id })
        .await
        .unwrap();

    assert_eq!(outcome, DeactivateSkillOutcome::Deactivated);
    assert!(!repo.find(id).unwrap().is_active());
    assert_eq!(cache.invalidation_count(), 1);

    let outcome = use_case
        .execute(DeactivateSkillCommand { id: SkillId::new() })
        .await
        .unwrap();
    assert_eq!(outcome, DeactivateSkillOutcome::NotFound);
}

#[tokio::test]
async fn test_list_skills_sorted_and_filtered() {
    let mut retired = skill("COBOL", "Languages");
    retired.deactivate();
    let repo = MockSkillRepo::with(vec![
        skill("Rust", "Languages"),
        skill("PostgreSQL", "Databases"),
        skill("Go", "Languages"),
        retired,
    ]);
    let use_case = ListSkillsUseCase::new(repo.clone());

    let skills = use_case.execute(ListSkillsQuery::default()).await.unwrap();
    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["PostgreSQL", "Go", "Rust"]);

    let with_inactive = use_case
        .execute(ListSkillsQuery {
            category: Some("Languages".to_string()),
            include_inactive: true,
        })
        .await
        .unwrap();
    let names: Vec<&str> = with_inactive.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["COBOL", "Go", "Rust"]);
}
