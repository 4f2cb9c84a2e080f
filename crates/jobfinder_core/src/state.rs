use crate::view_model::{AppViewModel, JobCardView, SPINNER_FRAMES};
use crate::{CriteriaField, JobRecord, SearchCriteria, SearchForm};

/// Generation token of a submitted search; increases with every submission.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    form: SearchForm,
    phase: SearchPhase,
    results: Option<Vec<JobRecord>>,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    spinner_frame: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            phase: SearchPhase::Idle,
            results: None,
            in_flight: None,
            next_request_id: 1,
            spinner_frame: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results(&self) -> Option<&[JobRecord]> {
        self.results.as_deref()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn view(&self) -> AppViewModel {
        let jobs = self.results.as_deref().unwrap_or_default();
        let cards: Vec<JobCardView> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| JobCardView::from_record(index, job))
            .collect();
        let summary = (self.phase == SearchPhase::Resolved && !cards.is_empty()).then(|| {
            format!(
                "Found {} relevant job opportunities for you",
                cards.len()
            )
        });

        AppViewModel {
            phase: self.phase,
            form: self.form.values().clone(),
            submit_enabled: self.phase != SearchPhase::Loading,
            loading_frame: (self.phase == SearchPhase::Loading)
                .then(|| SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]),
            summary,
            cards,
        }
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_field(&mut self, field: CriteriaField, value: String) -> bool {
        let changed = self.form.set(field, value);
        self.dirty |= changed;
        changed
    }

    /// Enters Loading for a new request; prior results are dropped.
    pub(crate) fn begin_search(&mut self, criteria: &SearchCriteria) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.form = SearchForm::from_criteria(criteria.clone());
        self.phase = SearchPhase::Loading;
        self.results = None;
        self.in_flight = Some(request_id);
        self.spinner_frame = 0;
        self.dirty = true;
        request_id
    }

    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.phase == SearchPhase::Loading && self.in_flight == Some(request_id)
    }

    pub(crate) fn resolve(&mut self, jobs: Vec<JobRecord>) {
        self.phase = SearchPhase::Resolved;
        self.results = Some(jobs);
        self.in_flight = None;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self) {
        self.phase = SearchPhase::Idle;
        self.results = None;
        self.in_flight = None;
        self.dirty = true;
    }

    pub(crate) fn advance_spinner(&mut self) {
        if self.phase == SearchPhase::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.dirty = true;
        }
    }
}
