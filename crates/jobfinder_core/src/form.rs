use crate::{validate_criteria, CriteriaField, JobNature, SearchCriteria, ValidationError};

/// Field bindings of the search form.
///
/// Values survive submission so the user can refine the previous query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    values: SearchCriteria,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_criteria(values: SearchCriteria) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &SearchCriteria {
        &self.values
    }

    /// Binds `value` to `field`. An unrecognised job nature leaves the
    /// selection unchanged and returns `false`.
    pub fn set(&mut self, field: CriteriaField, value: impl Into<String>) -> bool {
        let value = value.into();
        match field {
            CriteriaField::Position => self.values.position = value,
            CriteriaField::Experience => self.values.experience = value,
            CriteriaField::Salary => self.values.salary = value,
            CriteriaField::JobNature => match value.parse::<JobNature>() {
                Ok(nature) => self.values.job_nature = nature,
                Err(_) => return false,
            },
            CriteriaField::Location => self.values.location = value,
            CriteriaField::Skills => self.values.skills = value,
        }
        true
    }

    /// Produces the criteria to submit, or the first missing required field.
    pub fn submit(&self) -> Result<SearchCriteria, ValidationError> {
        validate_criteria(&self.values)?;
        Ok(self.values.clone())
    }
}
