/// Integration tests for the application layer, wiring the use cases to
/// the real in-memory adapters.
use skillscope::prelude::*;

struct Stores {
    departments: InMemoryDepartmentStore,
    employees: InMemoryEmployeeStore,
    skills: InMemorySkillStore,
    employee_skills: InMemoryEmployeeSkillStore,
    required_skills: InMemoryRequiredSkillStore,
    documents: InMemoryDocumentStore,
    directory: InMemoryUserDirectory,
    taxonomy_cache: InMemoryTaxonomyCache,
}

fn stores() -> Stores {
    Stores {
        departments: InMemoryDepartmentStore::new(),
        employees: InMemoryEmployeeStore::new(),
        skills: InMemorySkillStore::new(),
        employee_skills: InMemoryEmployeeSkillStore::new(),
        required_skills: InMemoryRequiredSkillStore::new(),
        documents: InMemoryDocumentStore::new(),
        directory: InMemoryUserDirectory::new(),
        taxonomy_cache: InMemoryTaxonomyCache::new(),
    }
}

async fn create_department(stores: &Stores, name: &str) -> DepartmentDto {
    match CreateDepartmentUseCase::new(stores.departments.clone())
        .execute(CreateDepartmentCommand {
            name: name.to_string(),
        })
        .await
        .unwrap()
    {
        CreateDepartmentOutcome::Created(dto) => dto,
        other => panic!("department not created: {:?}", other),
    }
}

async fn add_skill(stores: &Stores, name: &str, category: &str) -> SkillDto {
    match AddSkillUseCase::new(stores.skills.clone(), stores.taxonomy_cache.clone())
        .execute(AddSkillCommand {
            name: name.to_string(),
            category: category.to_string(),
            aliases: vec![],
        })
        .await
        .unwrap()
    {
        AddSkillOutcome::Added(dto) => dto,
        other => panic!("skill not added: {:?}", other),
    }
}

async fn create_employee(
    stores: &Stores,
    name: &str,
    email: &str,
    role: Role,
    department_id: Option<DepartmentId>,
) -> EmployeeDto {
    match CreateEmployeeUseCase::new(
        stores.employees.clone(),
        stores.departments.clone(),
        stores.directory.clone(),
    )
    .execute(CreateEmployeeCommand {
        name: name.to_string(),
        email: email.to_string(),
        role,
        department_id,
    })
    .await
    .unwrap()
    {
        CreateEmployeeOutcome::Created(dto) => dto,
        other => panic!("employee not created: {:?}", other),
    }
}

async fn set_proficiency(
    stores: &Stores,
    actor_id: EmployeeId,
    employee_id: EmployeeId,
    skill_id: SkillId,
    level: u8,
) {
    let outcome = SetProficiencyUseCase::new(
        stores.employees.clone(),
        stores.skills.clone(),
        stores.employee_skills.clone(),
    )
    .execute(SetProficiencyCommand {
        actor_id,
        employee_id,
        skill_id,
        level,
    })
    .await
    .unwrap();
    assert!(matches!(outcome, SetProficiencyOutcome::Set));
}

#[tokio::test]
async fn test_department_skill_gap_flow() {
    let stores = stores();

    let engineering = create_department(&stores, "Engineering").await;
    let rust = add_skill(&stores, "Rust", "Languages").await;
    let sql = add_skill(&stores, "SQL", "Databases").await;

    for skill_id in [rust.id, sql.id] {
        let outcome = AddRequiredSkillUseCase::new(
            stores.departments.clone(),
            stores.skills.clone(),
            stores.required_skills.clone(),
        )
        .execute(AddRequiredSkillCommand {
            department_id: engineering.id,
            skill_id,
        })
        .await
        .unwrap();
        assert!(matches!(outcome, AddRequiredSkillOutcome::Added));
    }

    let admin = create_employee(&stores, "Ada", "ada@example.com", Role::Admin, None).await;
    let grace = create_employee(
        &stores,
        "Grace",
        "grace@example.com",
        Role::Member,
        Some(engineering.id),
    )
    .await;
    let alan = create_employee(
        &stores,
        "Alan",
        "alan@example.com",
        Role::Member,
        Some(engineering.id),
    )
    .await;

    // Grace holds both required skills, Alan only Rust
    set_proficiency(&stores, admin.id, grace.id, rust.id, 4).await;
    set_proficiency(&stores, admin.id, grace.id, sql.id, 3).await;
    set_proficiency(&stores, admin.id, alan.id, rust.id, 2).await;

    let gaps = GetSkillGapsUseCase::new(
        stores.departments.clone(),
        stores.employees.clone(),
        stores.skills.clone(),
        stores.employee_skills.clone(),
        stores.required_skills.clone(),
    )
    .execute(GetSkillGapsQuery {
        department_id: engineering.id,
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(gaps.len(), 2);
    // SQL has the bigger gap, so it sorts first
    assert_eq!(gaps[0].skill_name, "SQL");
    assert_eq!(gaps[0].employees_with_skill, 1);
    assert_eq!(gaps[0].total_employees, 2);
    assert_eq!(gaps[0].gap_percent, 50.0);
    assert_eq!(gaps[1].skill_name, "Rust");
    assert_eq!(gaps[1].gap_percent, 0.0);
}

#[tokio::test]
async fn test_duplicate_department_name_is_reported_case_insensitively() {
    let stores = stores();
    create_department(&stores, "Engineering").await;

    let outcome = CreateDepartmentUseCase::new(stores.departments.clone())
        .execute(CreateDepartmentCommand {
            name: "  engineering  ".to_string(),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, CreateDepartmentOutcome::DuplicateName));
}

#[tokio::test]
async fn test_delete_department_blocked_while_staffed() {
    let stores = stores();
    let department = create_department(&stores, "Sales").await;
    let rust = add_skill(&stores, "Negotiation", "Soft Skills").await;

    AddRequiredSkillUseCase::new(
        stores.departments.clone(),
        stores.skills.clone(),
        stores.required_skills.clone(),
    )
    .execute(AddRequiredSkillCommand {
        department_id: department.id,
        skill_id: rust.id,
    })
    .await
    .unwrap();

    let employee = create_employee(
        &stores,
        "Eve",
        "eve@example.com",
        Role::Member,
        Some(department.id),
    )
    .await;

    let delete = DeleteDepartmentUseCase::new(
        stores.departments.clone(),
        stores.employees.clone(),
        stores.required_skills.clone(),
    );

    let outcome = delete
        .execute(DeleteDepartmentCommand { id: department.id })
        .await
        .unwrap();
    assert!(matches!(outcome, DeleteDepartmentOutcome::HasEmployees));

    // Unassign the employee, then the delete cascades the requirements
    let outcome = UpdateEmployeeUseCase::new(stores.employees.clone(), stores.departments.clone())
        .execute(UpdateEmployeeCommand {
            id: employee.id,
            name: None,
            department_id: None,
        })
        .await
        .unwrap();
    assert!(matches!(outcome, UpdateEmployeeOutcome::Updated(_)));

    let outcome = delete
        .execute(DeleteDepartmentCommand { id: department.id })
        .await
        .unwrap();
    assert!(matches!(outcome, DeleteDepartmentOutcome::Deleted));
    assert!(!stores
        .required_skills
        .exists(department.id, rust.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_employee_lifecycle_and_search() {
    let stores = stores();
    let admin = create_employee(&stores, "Ada", "ada@example.com", Role::Admin, None).await;
    let member = create_employee(&stores, "Grace", "grace@example.com", Role::Member, None).await;

    let deactivate =
        DeactivateEmployeeUseCase::new(stores.employees.clone(), stores.directory.clone());

    // Self-deactivation is blocked
    let outcome = deactivate
        .execute(DeactivateEmployeeCommand {
            actor_id: admin.id,
            employee_id: admin.id,
        })
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        DeactivateEmployeeOutcome::CannotDeactivateSelf
    ));

    let outcome = deactivate
        .execute(DeactivateEmployeeCommand {
            actor_id: admin.id,
            employee_id: member.id,
        })
        .await
        .unwrap();
    assert!(matches!(outcome, DeactivateEmployeeOutcome::Deactivated));

    let search =
        SearchEmployeesUseCase::new(stores.employees.clone(), stores.employee_skills.clone());
    let result = search
        .execute(SearchEmployeesQuery {
            search_term: None,
            department_id: None,
            skill_id: None,
            active_only: true,
            page: 1,
            page_size: 20,
        })
        .await
        .unwrap();
    assert_eq!(result.total_count, 1);
    assert_eq!(result.items[0].name, "Ada");

    let outcome = ActivateEmployeeUseCase::new(stores.employees.clone(), stores.directory.clone())
        .execute(ActivateEmployeeCommand {
            actor_id: admin.id,
            employee_id: member.id,
        })
        .await
        .unwrap();
    assert!(matches!(outcome, ActivateEmployeeOutcome::Activated));
    assert_eq!(stores.directory.is_account_active(member.id), Some(true));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_before_the_directory() {
    let stores = stores();
    create_employee(&stores, "Ada", "ada@example.com", Role::Admin, None).await;

    let outcome = CreateEmployeeUseCase::new(
        stores.employees.clone(),
        stores.departments.clone(),
        stores.directory.clone(),
    )
    .execute(CreateEmployeeCommand {
        name: "Imposter".to_string(),
        email: "ADA@example.com".to_string(),
        role: Role::Member,
        department_id: None,
    })
    .await
    .unwrap();

    assert!(matches!(outcome, CreateEmployeeOutcome::DuplicateEmail));
    assert_eq!(stores.directory.account_count(), 1);
}

#[tokio::test]
async fn test_manual_proficiency_shows_on_the_profile() {
    let stores = stores();
    let admin = create_employee(&stores, "Ada", "ada@example.com", Role::Admin, None).await;
    let rust = add_skill(&stores, "Rust", "Languages").await;

    set_proficiency(&stores, admin.id, admin.id, rust.id, 5).await;

    let profile = GetEmployeeProfileUseCase::new(
        stores.employees.clone(),
        stores.departments.clone(),
        stores.employee_skills.clone(),
        stores.skills.clone(),
    )
    .execute(GetEmployeeProfileQuery { id: admin.id })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(profile.skills.len(), 1);
    assert_eq!(profile.skills[0].skill_name, "Rust");
    assert_eq!(profile.skills[0].level, 5);
    assert!(profile.skills[0].manual_override);

    // Removing the link empties the profile again
    let outcome = RemoveEmployeeSkillUseCase::new(stores.employee_skills.clone())
        .execute(RemoveEmployeeSkillCommand {
            actor_id: admin.id,
            employee_id: admin.id,
            skill_id: rust.id,
        })
        .await
        .unwrap();
    assert!(matches!(outcome, RemoveEmployeeSkillOutcome::Removed));
}

#[tokio::test]
async fn test_taxonomy_mutations_invalidate_the_cache() {
    let stores = stores();
    let rust = add_skill(&stores, "Rust", "Languages").await;
    assert_eq!(stores.taxonomy_cache.generation(), 1);

    stores.taxonomy_cache.store("rustlang", rust.id);
    assert_eq!(stores.taxonomy_cache.lookup("RustLang"), Some(rust.id));

    let outcome =
        DeactivateSkillUseCase::new(stores.skills.clone(), stores.taxonomy_cache.clone())
            .execute(DeactivateSkillCommand { id: rust.id })
            .await
            .unwrap();
    assert!(matches!(outcome, DeactivateSkillOutcome::Deactivated));
    assert_eq!(stores.taxonomy_cache.generation(), 2);
    assert_eq!(stores.taxonomy_cache.lookup("rustlang"), None);

    // Inactive skills stay visible when asked for
    let listed = ListSkillsUseCase::new(stores.skills.clone())
        .execute(ListSkillsQuery {
            category: None,
            include_inactive: true,
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].active);
}

#[tokio::test]
async fn test_document_pipeline_and_activity() {
    let stores = stores();

    let register = RegisterUploadUseCase::new(stores.documents.clone());
    let uploaded = register
        .execute(RegisterUploadCommand {
            document_type: DocumentType::Resume,
            filename: "  cv.pdf  ".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(uploaded.filename, "cv.pdf");
    assert_eq!(uploaded.status, DocumentStatus::Pending);

    let outcome = UpdateDocumentStatusUseCase::new(stores.documents.clone())
        .execute(UpdateDocumentStatusCommand {
            id: uploaded.id,
            status: DocumentStatus::Completed,
            error: None,
        })
        .await
        .unwrap();
    let UpdateDocumentStatusOutcome::Updated(updated) = outcome else {
        panic!("document not updated");
    };
    assert_eq!(updated.status, DocumentStatus::Completed);
    assert!(updated.processed_at.is_some());

    let completed = ListDocumentsUseCase::new(stores.documents.clone())
        .execute(ListDocumentsQuery {
            status: Some(DocumentStatus::Completed),
            page: 1,
            page_size: 20,
        })
        .await
        .unwrap();
    assert_eq!(completed.total_count, 1);

    let activity = GetUploadActivityUseCase::new(stores.documents.clone())
        .execute(GetUploadActivityQuery { days: 7 })
        .await
        .unwrap();
    assert_eq!(activity.len(), 7);
    let today = activity.last().unwrap();
    assert_eq!(today.resumes, 1);
    assert_eq!(today.certifications, 0);
}

#[tokio::test]
async fn test_top_skills_counts_holders_across_departments() {
    let stores = stores();
    let admin = create_employee(&stores, "Ada", "ada@example.com", Role::Admin, None).await;
    let grace = create_employee(&stores, "Grace", "grace@example.com", Role::Member, None).await;

    let rust = add_skill(&stores, "Rust", "Languages").await;
    let sql = add_skill(&stores, "SQL", "Databases").await;

    set_proficiency(&stores, admin.id, admin.id, rust.id, 5).await;
    set_proficiency(&stores, admin.id, grace.id, rust.id, 3).await;
    set_proficiency(&stores, admin.id, grace.id, sql.id, 2).await;

    let rows = GetTopSkillsUseCase::new(stores.skills.clone(), stores.employee_skills.clone())
        .execute(GetTopSkillsQuery { limit: 10 })
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].skill_name, "Rust");
    assert_eq!(rows[0].employee_count, 2);
    assert_eq!(rows[1].skill_name, "SQL");
    assert_eq!(rows[1].employee_count, 1);
}

#[tokio::test]
async fn test_validation_rejects_before_the_handler_runs() {
    let stores = stores();
    let use_case = CreateDepartmentUseCase::new(stores.departments.clone());

    let dispatched = dispatch(
        CreateDepartmentCommand {
            name: "   ".to_string(),
        },
        |command| use_case.execute(command),
    )
    .await
    .unwrap();

    match dispatched {
        Dispatched::Rejected(failure) => {
            assert_eq!(failure.errors.len(), 1);
            assert_eq!(failure.errors[0].field, "name");
        }
        Dispatched::Handled(_) => panic!("blank name should not reach the handler"),
    }
    assert!(stores.departments.list().await.unwrap().is_empty());
}
