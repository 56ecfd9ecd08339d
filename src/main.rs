//! skillscope binary: loads a YAML seed file into the in-memory adapters
//! and answers workforce queries (departments, employees, skill gaps,
//! upload activity) as text or JSON.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use skillscope::cli::{Args, Command, OutputFormat};
use skillscope::config::{self, SeedFile};
use skillscope::prelude::*;
use skillscope::shared::error::{ExitCode, SkillscopeError};

#[tokio::main]
async fn main() {
    init_tracing();

    let code = match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", error);
            for cause in error.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();
            failure_exit_code(&error)
        }
    };

    process::exit(code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Maps an error surfaced from `run` to the process exit code
fn failure_exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SkillscopeError>() {
        Some(SkillscopeError::UnknownDepartment { .. })
        | Some(SkillscopeError::UnknownEmployee { .. })
        | Some(SkillscopeError::UnknownSkill { .. }) => ExitCode::NotFound,
        Some(SkillscopeError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let seed = match &args.data {
        Some(path) => config::load_seed_from_path(&PathBuf::from(path))?,
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_seed(&cwd)?.ok_or_else(|| SkillscopeError::SeedFileNotFound {
                path: cwd.join(config::SEED_FILENAME),
                suggestion: format!(
                    "Create a {} file in the current directory or pass --data with the path \
                     to an existing seed file",
                    config::SEED_FILENAME
                ),
            })?
        }
    };

    let world = seed_world(&seed).await?;
    execute_command(args.command, args.format, &world).await
}

/// The seeded adapter set plus name indexes for CLI lookups.
///
/// CLI arguments reference departments and employees by name; the
/// indexes map lowercased names to the ids minted during seeding.
/// Skills resolve through the taxonomy cache so alias spellings work.
struct World {
    departments: InMemoryDepartmentStore,
    employees: InMemoryEmployeeStore,
    skills: InMemorySkillStore,
    employee_skills: InMemoryEmployeeSkillStore,
    required_skills: InMemoryRequiredSkillStore,
    documents: InMemoryDocumentStore,
    taxonomy_cache: InMemoryTaxonomyCache,
    department_ids: HashMap<String, DepartmentId>,
    employee_ids: HashMap<String, EmployeeId>,
}

impl World {
    fn department_id(&self, name: &str) -> Result<DepartmentId> {
        self.department_ids
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| {
                SkillscopeError::UnknownDepartment {
                    name: name.to_string(),
                }
                .into()
            })
    }

    fn employee_id(&self, name: &str) -> Result<EmployeeId> {
        self.employee_ids
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| {
                SkillscopeError::UnknownEmployee {
                    name: name.to_string(),
                }
                .into()
            })
    }

    fn skill_id(&self, name: &str) -> Result<SkillId> {
        self.taxonomy_cache.lookup(name).ok_or_else(|| {
            SkillscopeError::UnknownSkill {
                name: name.to_string(),
            }
            .into()
        })
    }
}

/// Builds the in-memory world from a validated seed file.
///
/// Skills load first so departments and employees can reference them,
/// then departments with their required skills, then employees with
/// their directory accounts and proficiency links, then documents.
async fn seed_world(seed: &SeedFile) -> Result<World> {
    let departments = InMemoryDepartmentStore::new();
    let employees = InMemoryEmployeeStore::new();
    let skills = InMemorySkillStore::new();
    let employee_skills = InMemoryEmployeeSkillStore::new();
    let required_skills = InMemoryRequiredSkillStore::new();
    let documents = InMemoryDocumentStore::new();
    let directory = InMemoryUserDirectory::new();
    let taxonomy_cache = InMemoryTaxonomyCache::new();

    let now = Utc::now();

    let mut skill_ids: HashMap<String, SkillId> = HashMap::new();
    for entry in &seed.skills {
        let mut skill = Skill::new(
            SkillName::new(entry.name.clone())?,
            SkillCategory::new(entry.category.clone())?,
            entry.aliases.clone(),
        );
        if entry.inactive {
            skill.deactivate();
        }
        for alias in skill.aliases() {
            taxonomy_cache.store(alias, skill.id());
        }
        skill_ids.insert(entry.name.to_lowercase(), skill.id());
        skills.insert(skill).await?;
    }

    let mut department_ids: HashMap<String, DepartmentId> = HashMap::new();
    for entry in &seed.departments {
        let department = Department::new(DepartmentName::new(entry.name.clone())?);
        let department_id = department.id();
        department_ids.insert(entry.name.to_lowercase(), department_id);
        departments.insert(department).await?;

        for required in &entry.required_skills {
            let skill_id =
                skill_ids
                    .get(&required.to_lowercase())
                    .copied()
                    .ok_or_else(|| SkillscopeError::UnknownSkill {
                        name: required.clone(),
                    })?;
            required_skills.insert(department_id, skill_id).await?;
        }
    }

    let mut employee_ids: HashMap<String, EmployeeId> = HashMap::new();
    for entry in &seed.employees {
        let role = entry.role.parse::<Role>().map_err(anyhow::Error::msg)?;
        let department_id = match &entry.department {
            Some(name) => Some(department_ids.get(&name.to_lowercase()).copied().ok_or_else(
                || SkillscopeError::UnknownDepartment { name: name.clone() },
            )?),
            None => None,
        };

        let mut employee = Employee::new(
            entry.name.clone(),
            EmailAddress::new(entry.email.clone())?,
            role,
            department_id,
        );
        if entry.inactive {
            employee.deactivate();
        }

        let response = directory
            .create_account(employee.id(), employee.email(), employee.role())
            .await?;
        if !response.success {
            anyhow::bail!(
                "Invalid seed: the directory rejected an account for '{}' ({})",
                entry.name,
                entry.email
            );
        }

        let employee_id = employee.id();
        employee_ids.insert(entry.name.to_lowercase(), employee_id);
        employees.insert(employee).await?;

        for link in &entry.skills {
            let skill_id = skill_ids
                .get(&link.skill.to_lowercase())
                .copied()
                .ok_or_else(|| SkillscopeError::UnknownSkill {
                    name: link.skill.clone(),
                })?;
            let level = ProficiencyLevel::new(link.level)?;
            employee_skills
                .upsert(EmployeeSkill::extracted(employee_id, skill_id, level, now))
                .await?;
        }
    }

    for entry in &seed.documents {
        let document_type = entry
            .document_type
            .parse::<DocumentType>()
            .map_err(anyhow::Error::msg)?;
        let uploaded_at = now - Duration::days(entry.days_ago as i64);
        let mut document = Document::new(document_type, entry.filename.clone(), uploaded_at);
        if let Some(status) = &entry.status {
            let status = status
                .parse::<DocumentStatus>()
                .map_err(anyhow::Error::msg)?;
            if status != DocumentStatus::Pending {
                document.set_status(status, entry.error.clone(), uploaded_at);
            }
        }
        documents.insert(document).await?;
    }

    Ok(World {
        departments,
        employees,
        skills,
        employee_skills,
        required_skills,
        documents,
        taxonomy_cache,
        department_ids,
        employee_ids,
    })
}

async fn execute_command(command: Command, format: OutputFormat, world: &World) -> Result<ExitCode> {
    match command {
        Command::Departments => {
            let use_case = ListDepartmentsUseCase::new(world.departments.clone());
            let departments = use_case.execute().await?;
            match format {
                OutputFormat::Json => print_json(&departments)?,
                OutputFormat::Text => render_departments(&departments),
            }
            Ok(ExitCode::Success)
        }

        Command::Employees {
            term,
            department,
            skill,
            active_only,
            page,
            page_size,
        } => {
            let department_id = match department.as_deref() {
                Some(name) => Some(world.department_id(name)?),
                None => None,
            };
            let skill_id = match skill.as_deref() {
                Some(name) => Some(world.skill_id(name)?),
                None => None,
            };
            let use_case = SearchEmployeesUseCase::new(
                world.employees.clone(),
                world.employee_skills.clone(),
            );
            let query = SearchEmployeesQuery {
                search_term: term,
                department_id,
                skill_id,
                active_only,
                page,
                page_size,
            };
            match dispatch(query, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(result) => {
                    match format {
                        OutputFormat::Json => print_json(&result)?,
                        OutputFormat::Text => render_employees(&result),
                    }
                    Ok(ExitCode::Success)
                }
            }
        }

        Command::Profile { name } => {
            let id = world.employee_id(&name)?;
            let use_case = GetEmployeeProfileUseCase::new(
                world.employees.clone(),
                world.departments.clone(),
                world.employee_skills.clone(),
                world.skills.clone(),
            );
            match dispatch(GetEmployeeProfileQuery { id }, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(Some(profile)) => {
                    match format {
                        OutputFormat::Json => print_json(&profile)?,
                        OutputFormat::Text => render_profile(&profile),
                    }
                    Ok(ExitCode::Success)
                }
                Dispatched::Handled(None) => {
                    Err(SkillscopeError::UnknownEmployee { name }.into())
                }
            }
        }

        Command::Skills {
            category,
            include_inactive,
        } => {
            let use_case = ListSkillsUseCase::new(world.skills.clone());
            let query = ListSkillsQuery {
                category,
                include_inactive,
            };
            match dispatch(query, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(skills) => {
                    match format {
                        OutputFormat::Json => print_json(&skills)?,
                        OutputFormat::Text => render_skills(&skills),
                    }
                    Ok(ExitCode::Success)
                }
            }
        }

        Command::Gaps { department } => {
            let department_id = world.department_id(&department)?;
            let use_case = GetSkillGapsUseCase::new(
                world.departments.clone(),
                world.employees.clone(),
                world.skills.clone(),
                world.employee_skills.clone(),
                world.required_skills.clone(),
            );
            match dispatch(GetSkillGapsQuery { department_id }, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(Some(gaps)) => {
                    match format {
                        OutputFormat::Json => print_json(&gaps)?,
                        OutputFormat::Text => render_gaps(&department, &gaps),
                    }
                    Ok(ExitCode::Success)
                }
                Dispatched::Handled(None) => {
                    Err(SkillscopeError::UnknownDepartment { name: department }.into())
                }
            }
        }

        Command::TopSkills { limit } => {
            let use_case =
                GetTopSkillsUseCase::new(world.skills.clone(), world.employee_skills.clone());
            match dispatch(GetTopSkillsQuery { limit }, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(rows) => {
                    match format {
                        OutputFormat::Json => print_json(&rows)?,
                        OutputFormat::Text => render_top_skills(&rows),
                    }
                    Ok(ExitCode::Success)
                }
            }
        }

        Command::Activity { days } => {
            let use_case = GetUploadActivityUseCase::new(world.documents.clone());
            match dispatch(GetUploadActivityQuery { days }, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(rows) => {
                    match format {
                        OutputFormat::Json => print_json(&rows)?,
                        OutputFormat::Text => render_activity(&rows),
                    }
                    Ok(ExitCode::Success)
                }
            }
        }

        Command::Documents {
            status,
            page,
            page_size,
        } => {
            let status = match status {
                Some(s) => Some(
                    s.parse::<DocumentStatus>()
                        .map_err(|message| SkillscopeError::Validation { message })?,
                ),
                None => None,
            };
            let use_case = ListDocumentsUseCase::new(world.documents.clone());
            let query = ListDocumentsQuery {
                status,
                page,
                page_size,
            };
            match dispatch(query, |q| use_case.execute(q)).await? {
                Dispatched::Rejected(failure) => reject(&failure),
                Dispatched::Handled(result) => {
                    match format {
                        OutputFormat::Json => print_json(&result)?,
                        OutputFormat::Text => render_documents(&result),
                    }
                    Ok(ExitCode::Success)
                }
            }
        }
    }
}

fn reject(failure: &skillscope::application::validation::ValidationFailure) -> Result<ExitCode> {
    eprintln!("❌ Invalid request:");
    eprintln!("{}", failure);
    Ok(ExitCode::InvalidArguments)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_departments(departments: &[DepartmentDto]) {
    if departments.is_empty() {
        println!("No departments in the seed file.");
        return;
    }
    println!("{}", "Departments".bold());
    for department in departments {
        println!("  {}", department.name);
    }
}

fn render_employees(result: &PagedResult<EmployeeDto>) {
    println!(
        "{} ({} matching, page {}, size {})",
        "Employees".bold(),
        result.total_count,
        result.page,
        result.page_size
    );
    if result.items.is_empty() {
        println!("  no employees on this page");
        return;
    }
    for employee in &result.items {
        println!(
            "  {} <{}> {} [{}]",
            employee.name.bold(),
            employee.email,
            employee.role,
            active_marker(employee.active)
        );
    }
}

fn render_profile(profile: &EmployeeProfileDto) {
    println!("{}", profile.employee.name.bold());
    println!("  email:      {}", profile.employee.email);
    println!("  role:       {}", profile.employee.role);
    println!(
        "  department: {}",
        profile.department_name.as_deref().unwrap_or("-")
    );
    println!("  status:     {}", active_marker(profile.employee.active));
    if profile.skills.is_empty() {
        println!("  no skills recorded");
        return;
    }
    println!("  {}", "Skills".bold());
    for skill in &profile.skills {
        let origin = if skill.manual_override {
            " (manually set)"
        } else {
            ""
        };
        println!(
            "    {} ({}) level {}{}",
            skill.skill_name, skill.category, skill.level, origin
        );
    }
}

fn render_skills(skills: &[SkillDto]) {
    if skills.is_empty() {
        println!("No skills match.");
        return;
    }
    println!("{}", "Skills".bold());
    for skill in skills {
        // The alias list always leads with the skill's own name
        let aliases = if skill.aliases.len() > 1 {
            format!(" (aliases: {})", skill.aliases[1..].join(", "))
        } else {
            String::new()
        };
        let flag = if skill.active {
            String::new()
        } else {
            format!(" [{}]", "inactive".red())
        };
        println!("  {} / {}{}{}", skill.category, skill.name.bold(), aliases, flag);
    }
}

fn render_gaps(department: &str, gaps: &[SkillGapDto]) {
    println!("{} {}", "Skill gaps for".bold(), department.bold());
    if gaps.is_empty() {
        println!("  no required skills configured");
        return;
    }
    for gap in gaps {
        println!(
            "  {:<24} {:>5.1}% gap ({}/{} employees)",
            gap.skill_name, gap.gap_percent, gap.employees_with_skill, gap.total_employees
        );
    }
}

fn render_top_skills(rows: &[SkillCountDto]) {
    if rows.is_empty() {
        println!("No skills are held by anyone yet.");
        return;
    }
    println!("{}", "Top skills".bold());
    for (index, row) in rows.iter().enumerate() {
        println!(
            "  {:>2}. {} ({}) - {} employees",
            index + 1,
            row.skill_name.bold(),
            row.category,
            row.employee_count
        );
    }
}

fn render_activity(rows: &[UploadActivityDto]) {
    println!("{}", "Upload activity".bold());
    for row in rows {
        println!(
            "  {}  resumes {:>3}  certifications {:>3}  reviews {:>3}",
            row.day, row.resumes, row.certifications, row.reviews
        );
    }
}

fn render_documents(result: &PagedResult<DocumentDto>) {
    println!(
        "{} ({} matching, page {}, size {})",
        "Documents".bold(),
        result.total_count,
        result.page,
        result.page_size
    );
    if result.items.is_empty() {
        println!("  no documents on this page");
        return;
    }
    for document in &result.items {
        let status = match document.status {
            DocumentStatus::Completed => document.status.to_string().green().to_string(),
            DocumentStatus::Failed => document.status.to_string().red().to_string(),
            DocumentStatus::Processing => document.status.to_string().yellow().to_string(),
            DocumentStatus::Pending => document.status.to_string(),
        };
        println!(
            "  {}  {:<13} {}  {}",
            document.uploaded_at.format("%Y-%m-%d"),
            document.document_type,
            status,
            document.filename
        );
        if let Some(error) = &document.error {
            println!("      error: {}", error);
        }
    }
}

fn active_marker(active: bool) -> String {
    if active {
        "active".green().to_string()
    } else {
        "inactive".red().to_string()
    }
}
