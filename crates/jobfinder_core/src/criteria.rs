use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Work arrangement requested by the user. `Unspecified` travels as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobNature {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "onsite")]
    Onsite,
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl JobNature {
    pub const ALL: [JobNature; 4] = [
        JobNature::Unspecified,
        JobNature::Remote,
        JobNature::Onsite,
        JobNature::Hybrid,
    ];

    /// Wire value, as sent in the `jobNature` key.
    pub fn as_str(self) -> &'static str {
        match self {
            JobNature::Unspecified => "",
            JobNature::Remote => "remote",
            JobNature::Onsite => "onsite",
            JobNature::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job nature {0:?} (expected remote, onsite, hybrid or empty)")]
pub struct ParseJobNatureError(pub String);

impl FromStr for JobNature {
    type Err = ParseJobNatureError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        JobNature::ALL
            .into_iter()
            .find(|nature| nature.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseJobNatureError(raw.to_string()))
    }
}

/// The structured query a user submits.
///
/// Field values are carried verbatim; optional text fields left blank are
/// sent as empty strings rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub position: String,
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(rename = "jobNature", default)]
    pub job_nature: JobNature,
    #[serde(default)]
    pub location: String,
    pub skills: String,
}

/// Form fields of [`SearchCriteria`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    Position,
    Experience,
    Salary,
    JobNature,
    Location,
    Skills,
}

impl CriteriaField {
    pub const ALL: [CriteriaField; 6] = [
        CriteriaField::Position,
        CriteriaField::Experience,
        CriteriaField::Salary,
        CriteriaField::JobNature,
        CriteriaField::Location,
        CriteriaField::Skills,
    ];

    pub fn is_required(self) -> bool {
        matches!(
            self,
            CriteriaField::Position | CriteriaField::Experience | CriteriaField::Skills
        )
    }

    /// JSON key of the field in the request body.
    pub fn key(self) -> &'static str {
        match self {
            CriteriaField::Position => "position",
            CriteriaField::Experience => "experience",
            CriteriaField::Salary => "salary",
            CriteriaField::JobNature => "jobNature",
            CriteriaField::Location => "location",
            CriteriaField::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CriteriaField::Position => "Job Title/Position",
            CriteriaField::Experience => "Experience",
            CriteriaField::Salary => "Expected Salary",
            CriteriaField::JobNature => "Job Nature",
            CriteriaField::Location => "Location",
            CriteriaField::Skills => "Skills",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CriteriaField::Position => "e.g., Frontend Engineer",
            CriteriaField::Experience => "e.g., 2 years",
            CriteriaField::Salary => "e.g., 80,000 PKR to 150,000 PKR",
            CriteriaField::JobNature => "remote, onsite, hybrid or blank",
            CriteriaField::Location => "e.g., Lahore, Pakistan",
            CriteriaField::Skills => "e.g., React, TypeScript, Node.js",
        }
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(CriteriaField),
}

impl SearchCriteria {
    /// Current text of a field; `jobNature` yields its wire value.
    pub fn value(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::Position => &self.position,
            CriteriaField::Experience => &self.experience,
            CriteriaField::Salary => &self.salary,
            CriteriaField::JobNature => self.job_nature.as_str(),
            CriteriaField::Location => &self.location,
            CriteriaField::Skills => &self.skills,
        }
    }
}

/// Checks that every required field is non-empty.
///
/// Shared by the form boundary and the controller; reports the first missing
/// field in form order.
pub fn validate_criteria(criteria: &SearchCriteria) -> Result<(), ValidationError> {
    match CriteriaField::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .find(|field| criteria.value(*field).is_empty())
    {
        Some(field) => Err(ValidationError::MissingField(field)),
        None => Ok(()),
    }
}
