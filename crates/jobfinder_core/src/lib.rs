//! Job finder core: data model, validation and the pure search state machine.
mod criteria;
mod effect;
mod form;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use criteria::{
    validate_criteria, CriteriaField, JobNature, ParseJobNatureError, SearchCriteria,
    ValidationError,
};
pub use effect::{Effect, Notification, NotificationKind};
pub use form::SearchForm;
pub use msg::Msg;
pub use record::{JobRecord, JobSearchResponse};
pub use state::{AppState, RequestId, SearchPhase};
pub use update::{update, FAILURE_MESSAGE, NO_RESULTS_MESSAGE};
pub use view_model::{AppViewModel, JobCardView, SPINNER_FRAMES};
