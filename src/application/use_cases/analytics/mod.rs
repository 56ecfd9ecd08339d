//! Analytics queries: skill gaps, top skills, upload activity.
//!
//! These queries compose repository counts with the domain services;
//! they never mutate anything.

use crate::application::dto::{SkillCountDto, SkillGapDto, UploadActivityDto};
use crate::application::validation::{ValidateRequest, ValidationFailure};
use crate::ports::outbound::{
    DepartmentRepository, DocumentRepository, EmployeeRepository, EmployeeSkillRepository,
    RequiredSkillRepository, SkillRepository,
};
use crate::shared::Result;
use crate::workforce::domain::DepartmentId;
use crate::workforce::policies::{effective_days, effective_limit};
use crate::workforce::services::{ActivitySeries, GapAnalysis};
use chrono::{Duration, Utc};
use std::collections::HashSet;

/// Query for a department's skill-gap report
#[derive(Debug, Clone)]
pub struct GetSkillGapsQuery {
    pub department_id: DepartmentId,
}

impl ValidateRequest for GetSkillGapsQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Computes the coverage gap for each of a department's required skills.
///
/// Returns `None` when the department does not exist. Rows are sorted by
/// gap percentage descending, ties broken by skill name.
pub struct GetSkillGapsUseCase<D, E, S, L, R>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
    S: SkillRepository,
    L: EmployeeSkillRepository,
    R: RequiredSkillRepository,
{
    departments: D,
    employees: E,
    skills: S,
    employee_skills: L,
    required_skills: R,
}

impl<D, E, S, L, R> GetSkillGapsUseCase<D, E, S, L, R>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
    S: SkillRepository,
    L: EmployeeSkillRepository,
    R: RequiredSkillRepository,
{
    pub fn new(
        departments: D,
        employees: E,
        skills: S,
        employee_skills: L,
        required_skills: R,
    ) -> Self {
        Self {
            departments,
            employees,
            skills,
            employee_skills,
            required_skills,
        }
    }

    pub async fn execute(&self, query: GetSkillGapsQuery) -> Result<Option<Vec<SkillGapDto>>> {
        if self.departments.get(query.department_id).await?.is_none() {
            return Ok(None);
        }

        let member_ids: HashSet<_> = self
            .employees
            .ids_in_department(query.department_id)
            .await?
            .into_iter()
            .collect();
        let total_employees = member_ids.len() as u64;

        let required = self
            .required_skills
            .list_for_department(query.department_id)
            .await?;

        let mut rows = Vec::with_capacity(required.len());
        for skill_id in required {
            let Some(skill) = self.skills.get(skill_id).await? else {
                continue;
            };

            let holders = self.employee_skills.employees_with_skill(skill_id).await?;
            let employees_with_skill = holders
                .iter()
                .filter(|id| member_ids.contains(id))
                .count() as u64;

            rows.push(SkillGapDto {
                skill_id,
                skill_name: skill.name().as_str().to_string(),
                employees_with_skill,
                total_employees,
                gap_percent: GapAnalysis::gap_percent(employees_with_skill, total_employees),
            });
        }

        rows.sort_by(|a, b| {
            b.gap_percent
                .partial_cmp(&a.gap_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.skill_name.to_lowercase().cmp(&b.skill_name.to_lowercase()))
        });

        Ok(Some(rows))
    }
}

/// Query for the organization-wide top-skills report. Out-of-range
/// limits are clamped.
#[derive(Debug, Clone)]
pub struct GetTopSkillsQuery {
    pub limit: i32,
}

impl ValidateRequest for GetTopSkillsQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Ranks skills by how many employees hold them, descending, ties broken
/// by skill name.
pub struct GetTopSkillsUseCase<S, L>
where
    S: SkillRepository,
    L: EmployeeSkillRepository,
{
    skills: S,
    employee_skills: L,
}

impl<S, L> GetTopSkillsUseCase<S, L>
where
    S: SkillRepository,
    L: EmployeeSkillRepository,
{
    pub fn new(skills: S, employee_skills: L) -> Self {
        Self {
            skills,
            employee_skills,
        }
    }

    pub async fn execute(&self, query: GetTopSkillsQuery) -> Result<Vec<SkillCountDto>> {
        let limit = effective_limit(query.limit);

        let counts = self.employee_skills.counts_by_skill().await?;
        let mut rows = Vec::with_capacity(counts.len());
        for (skill_id, employee_count) in counts {
            let Some(skill) = self.skills.get(skill_id).await? else {
                continue;
            };
            rows.push(SkillCountDto {
                skill_id,
                skill_name: skill.name().as_str().to_string(),
                category: skill.category().as_str().to_string(),
                employee_count,
            });
        }

        rows.sort_by(|a, b| {
            b.employee_count
                .cmp(&a.employee_count)
                .then_with(|| a.skill_name.to_lowercase().cmp(&b.skill_name.to_lowercase()))
        });
        rows.truncate(limit);

        Ok(rows)
    }
}

/// Query for the upload-activity chart. Out-of-range windows are clamped.
#[derive(Debug, Clone)]
pub struct GetUploadActivityQuery {
    pub days: i32,
}

impl ValidateRequest for GetUploadActivityQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Builds the zero-filled per-day upload series ending today (UTC)
pub struct GetUploadActivityUseCase<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> GetUploadActivityUseCase<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, query: GetUploadActivityQuery) -> Result<Vec<UploadActivityDto>> {
        let days = effective_days(query.days);
        let today = Utc::now().date_naive();
        let from = today - Duration::days(days as i64 - 1);

        let raw = self.documents.daily_counts(from, today).await?;
        let series = ActivitySeries::zero_fill(today, days, &raw);

        Ok(series.iter().map(UploadActivityDto::from_day).collect())
    }
}
