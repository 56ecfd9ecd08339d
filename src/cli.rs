use clap::{Parser, Subcommand};

/// Output rendering for query results
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

/// Inspect a workforce seed file: departments, skills, gap reports
#[derive(Parser, Debug)]
#[command(name = "skillscope")]
#[command(version)]
#[command(about = "Inspect a workforce seed file: departments, skills, gap reports", long_about = None)]
pub struct Args {
    /// Output format: text or json
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Path to the seed data file (defaults to skillscope.data.yml in the
    /// current directory)
    #[arg(long, global = true)]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List departments
    Departments,

    /// Search employees
    Employees {
        /// Match against employee name or email
        #[arg(short, long)]
        term: Option<String>,

        /// Restrict to one department, by name
        #[arg(long)]
        department: Option<String>,

        /// Restrict to holders of one skill, by name
        #[arg(long)]
        skill: Option<String>,

        /// Exclude deactivated accounts
        #[arg(long)]
        active_only: bool,

        /// Page number (out-of-range values fall back to 1)
        #[arg(long, default_value_t = 1)]
        page: i32,

        /// Page size (out-of-range values fall back to 20)
        #[arg(long, default_value_t = 20)]
        page_size: i32,
    },

    /// Show one employee's full profile, by name
    Profile {
        /// Employee name as it appears in the seed file
        name: String,
    },

    /// List the skill taxonomy
    Skills {
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,

        /// Include retired skills
        #[arg(long)]
        include_inactive: bool,
    },

    /// Skill-gap report for a department, by name
    Gaps {
        /// Department name as it appears in the seed file
        department: String,
    },

    /// Most widely held skills across the organization
    TopSkills {
        /// Number of rows (out-of-range values fall back to 10)
        #[arg(short, long, default_value_t = 10)]
        limit: i32,
    },

    /// Per-day upload activity ending today
    Activity {
        /// Window length in days (out-of-range values fall back to 30)
        #[arg(short, long, default_value_t = 30)]
        days: i32,
    },

    /// List document upload records, newest first
    Documents {
        /// Restrict to one status: pending, processing, completed, failed
        #[arg(long)]
        status: Option<String>,

        /// Page number (out-of-range values fall back to 1)
        #[arg(long, default_value_t = 1)]
        page: i32,

        /// Page size (out-of-range values fall back to 20)
        #[arg(long, default_value_t = 20)]
        page_size: i32,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
