use std::path::PathBuf;

use clap::{Args, Parser};
use jobfinder_core::CriteriaField;

#[derive(Parser, Debug)]
#[command(name = "jobfinder")]
#[command(version)]
#[command(about = "Find relevant job opportunities across LinkedIn, Indeed, and Glassdoor")]
pub struct Cli {
    /// Path to a RON config file (default: ./jobfinder.ron if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the job search backend, e.g. http://localhost:8000
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Overall request timeout in seconds (transport default when unset)
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Prompt for the search form; implied when no criteria flags are given
    #[arg(short, long)]
    pub interactive: bool,

    #[command(flatten)]
    pub criteria: CriteriaArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct CriteriaArgs {
    /// Job title or position (required)
    #[arg(long)]
    pub position: Option<String>,

    /// Experience, free text such as "2 years" (required)
    #[arg(long)]
    pub experience: Option<String>,

    /// Expected salary, free text
    #[arg(long)]
    pub salary: Option<String>,

    /// remote, onsite or hybrid
    #[arg(long, value_name = "NATURE")]
    pub job_nature: Option<String>,

    /// Job location
    #[arg(long)]
    pub location: Option<String>,

    /// Skills, comma separated by convention (required)
    #[arg(long)]
    pub skills: Option<String>,
}

impl CriteriaArgs {
    /// Form edits implied by the given flags, in form order.
    pub fn field_values(&self) -> Vec<(CriteriaField, String)> {
        CriteriaField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    CriteriaField::Position => &self.position,
                    CriteriaField::Experience => &self.experience,
                    CriteriaField::Salary => &self.salary,
                    CriteriaField::JobNature => &self.job_nature,
                    CriteriaField::Location => &self.location,
                    CriteriaField::Skills => &self.skills,
                };
                value.clone().map(|value| (field, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_criteria_flags_in_form_order() {
        let cli = Cli::parse_from([
            "jobfinder",
            "--skills",
            "React",
            "--position",
            "Frontend Engineer",
            "--job-nature",
            "remote",
        ]);

        assert!(!cli.interactive);
        assert_eq!(
            cli.criteria.field_values(),
            vec![
                (CriteriaField::Position, "Frontend Engineer".to_string()),
                (CriteriaField::JobNature, "remote".to_string()),
                (CriteriaField::Skills, "React".to_string()),
            ]
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
