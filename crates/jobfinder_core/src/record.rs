use serde::{Deserialize, Serialize};
use url::Url;

/// One job posting as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_title: String,
    pub company: String,
    /// Origin platform label (LinkedIn, Indeed, ...).
    pub source: String,
    pub apply_link: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(rename = "jobNature", default)]
    pub job_nature: Option<String>,
}

impl JobRecord {
    /// Display key of the record at `index` in a result list.
    pub fn display_key(&self, index: usize) -> String {
        format!("{}-{}-{}", self.source, self.company, index)
    }

    /// The apply link, if it is an absolute http(s) URL.
    pub fn apply_url(&self) -> Option<Url> {
        Url::parse(self.apply_link.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }
}

/// Success body of `POST /api/jobs/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub relevant_jobs: Vec<JobRecord>,
}
