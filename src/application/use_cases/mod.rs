//! Application use cases: one struct per operation, generic dependency
//! injection over the outbound ports, closed outcome enums instead of
//! thrown errors for every expected business condition.

pub mod analytics;
pub mod departments;
pub mod documents;
pub mod employee_skills;
pub mod employees;
pub mod skills;

pub use analytics::{
    GetSkillGapsQuery, GetSkillGapsUseCase, GetTopSkillsQuery, GetTopSkillsUseCase,
    GetUploadActivityQuery, GetUploadActivityUseCase,
};
pub use departments::{
    AddRequiredSkillCommand, AddRequiredSkillOutcome, AddRequiredSkillUseCase,
    CreateDepartmentCommand, CreateDepartmentOutcome, CreateDepartmentUseCase,
    DeleteDepartmentCommand, DeleteDepartmentOutcome, DeleteDepartmentUseCase,
    GetDepartmentQuery, GetDepartmentUseCase, ListDepartmentsUseCase, RemoveRequiredSkillCommand,
    RemoveRequiredSkillOutcome, RemoveRequiredSkillUseCase, RenameDepartmentCommand,
    RenameDepartmentOutcome, RenameDepartmentUseCase,
};
pub use documents::{
    GetDocumentQuery, GetDocumentUseCase, ListDocumentsQuery, ListDocumentsUseCase,
    RegisterUploadCommand, RegisterUploadUseCase, UpdateDocumentStatusCommand,
    UpdateDocumentStatusOutcome, UpdateDocumentStatusUseCase,
};
pub use employee_skills::{
    RemoveEmployeeSkillCommand, RemoveEmployeeSkillOutcome, RemoveEmployeeSkillUseCase,
    SetProficiencyCommand, SetProficiencyOutcome, SetProficiencyUseCase,
};
pub use employees::{
    ActivateEmployeeCommand, ActivateEmployeeOutcome, ActivateEmployeeUseCase,
    ChangeEmployeeRoleCommand, ChangeEmployeeRoleOutcome, ChangeEmployeeRoleUseCase,
    CreateEmployeeCommand, CreateEmployeeOutcome, CreateEmployeeUseCase,
    DeactivateEmployeeCommand, DeactivateEmployeeOutcome, DeactivateEmployeeUseCase,
    GetEmployeeProfileQuery, GetEmployeeProfileUseCase, SearchEmployeesQuery,
    SearchEmployeesUseCase, UpdateEmployeeCommand, UpdateEmployeeOutcome, UpdateEmployeeUseCase,
};
pub use skills::{
    AddSkillCommand, AddSkillOutcome, AddSkillUseCase, DeactivateSkillCommand,
    DeactivateSkillOutcome, DeactivateSkillUseCase, ListSkillsQuery, ListSkillsUseCase,
    UpdateSkillCommand, UpdateSkillOutcome, UpdateSkillUseCase,
};
