use finder_logging::{finder_debug, finder_info, finder_warn};

use crate::{validate_criteria, AppState, Effect, Msg, Notification, NotificationKind};

pub const NO_RESULTS_MESSAGE: &str =
    "No jobs found matching your criteria. Try adjusting your search parameters.";
pub const FAILURE_MESSAGE: &str =
    "An error occurred while searching for jobs. Please try again later.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldChanged { field, value } => {
            if !state.set_field(field, value) {
                finder_debug!("Ignored invalid value for field {}", field);
            }
            Vec::new()
        }
        Msg::SearchSubmitted(criteria) => {
            // The form boundary rejects these first; never issue a request for them.
            if let Err(err) = validate_criteria(&criteria) {
                finder_warn!("Search submission rejected: {}", err);
                return (state, Vec::new());
            }
            let request_id = state.begin_search(&criteria);
            finder_info!("Search submitted request_id={}", request_id);
            vec![Effect::RunSearch {
                request_id,
                criteria,
            }]
        }
        Msg::SearchSucceeded { request_id, jobs } => {
            if !state.is_current(request_id) {
                finder_debug!("Discarding stale response request_id={}", request_id);
                return (state, Vec::new());
            }
            let count = jobs.len();
            state.resolve(jobs);
            let notification = if count == 0 {
                Notification::new(NotificationKind::Info, NO_RESULTS_MESSAGE)
            } else {
                Notification::new(
                    NotificationKind::Success,
                    format!("Found {count} relevant job opportunities!"),
                )
            };
            vec![Effect::Notify(notification)]
        }
        Msg::SearchFailed { request_id } => {
            if !state.is_current(request_id) {
                finder_debug!("Discarding stale failure request_id={}", request_id);
                return (state, Vec::new());
            }
            state.fail();
            vec![Effect::Notify(Notification::new(
                NotificationKind::Error,
                FAILURE_MESSAGE,
            ))]
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
    };

    (state, effects)
}
