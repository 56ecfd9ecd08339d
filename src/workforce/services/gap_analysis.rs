//! Gap analysis: how far a department is from covering its required skills.

/// GapAnalysis domain service
///
/// Pure arithmetic over coverage counts supplied by the repositories.
pub struct GapAnalysis;

impl GapAnalysis {
    /// Computes the gap percentage for one required skill.
    ///
    /// Defined as `round(100 − with/total × 100, 1 decimal)`. A department
    /// with zero employees has a gap of exactly 100.0: nobody covers the
    /// skill, and the division is never evaluated.
    ///
    /// # Arguments
    /// * `employees_with_skill` - Employees in the department holding the skill
    /// * `total_employees` - Total employees in the department
    pub fn gap_percent(employees_with_skill: u64, total_employees: u64) -> f64 {
        if total_employees == 0 {
            return 100.0;
        }
        let coverage = employees_with_skill as f64 / total_employees as f64 * 100.0;
        ((100.0 - coverage) * 10.0).round() / 10.0
    }
}
