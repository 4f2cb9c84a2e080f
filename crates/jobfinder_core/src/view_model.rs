use crate::{JobRecord, SearchCriteria, SearchPhase};

/// Frames of the loading indicator, advanced by `Msg::Tick`.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SearchPhase,
    pub form: SearchCriteria,
    /// False while a search is in flight.
    pub submit_enabled: bool,
    pub loading_frame: Option<&'static str>,
    /// Result summary; only present when there is at least one card.
    pub summary: Option<String>,
    pub cards: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub key: String,
    pub title: String,
    pub company: String,
    pub source_badge: String,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub job_nature: Option<String>,
    pub apply_link: String,
    /// False when the link is not an absolute http(s) URL.
    pub apply_link_valid: bool,
}

impl JobCardView {
    pub(crate) fn from_record(index: usize, job: &JobRecord) -> Self {
        Self {
            key: job.display_key(index),
            title: job.job_title.clone(),
            company: job.company.clone(),
            source_badge: job.source.clone(),
            location: non_blank(&job.location),
            experience: non_blank(&job.experience),
            salary: non_blank(&job.salary),
            job_nature: non_blank(&job.job_nature),
            apply_link: job.apply_link.clone(),
            apply_link_valid: job.apply_url().is_some(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(ToOwned::to_owned)
}
