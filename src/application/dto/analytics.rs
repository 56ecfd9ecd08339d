use crate::workforce::domain::SkillId;
use crate::workforce::services::DayActivity;
use chrono::NaiveDate;
use serde::Serialize;

/// One required skill's coverage gap within a department
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapDto {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub employees_with_skill: u64,
    pub total_employees: u64,
    pub gap_percent: f64,
}

/// One row of the top-skills report
#[derive(Debug, Clone, Serialize)]
pub struct SkillCountDto {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub category: String,
    pub employee_count: u64,
}

/// One calendar day of the upload-activity chart
#[derive(Debug, Clone, Serialize)]
pub struct UploadActivityDto {
    pub day: NaiveDate,
    pub resumes: u64,
    pub certifications: u64,
    pub reviews: u64,
}

impl UploadActivityDto {
    pub fn from_day(day: &DayActivity) -> Self {
        Self {
            day: day.day,
            resumes: day.resumes,
            certifications: day.certifications,
            reviews: day.reviews,
        }
    }
}
