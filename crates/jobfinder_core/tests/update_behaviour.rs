use std::sync::Once;

use jobfinder_core::{
    update, AppState, Effect, JobRecord, Msg, Notification, NotificationKind, SearchCriteria,
    SearchPhase, FAILURE_MESSAGE, NO_RESULTS_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn criteria() -> SearchCriteria {
    SearchCriteria {
        position: "Frontend Engineer".to_string(),
        experience: "2 years".to_string(),
        skills: "React".to_string(),
        ..SearchCriteria::default()
    }
}

fn job(title: &str, company: &str, source: &str) -> JobRecord {
    JobRecord {
        job_title: title.to_string(),
        company: company.to_string(),
        source: source.to_string(),
        apply_link: "https://jobs.example.com/1".to_string(),
        location: None,
        experience: None,
        salary: None,
        job_nature: None,
    }
}

fn submit(state: AppState) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::SearchSubmitted(criteria()));
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::RunSearch { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("run search effect");
    (state, request_id)
}

#[test]
fn submit_enters_loading_before_any_response() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::SearchSubmitted(criteria()));

    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(state.results(), None);
    assert_eq!(state.in_flight(), Some(1));
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::RunSearch {
            request_id: 1,
            criteria: criteria(),
        }]
    );
    let view = state.view();
    assert!(!view.submit_enabled);
    assert!(view.loading_frame.is_some());
}

#[test]
fn empty_response_resolves_empty_with_info_notification() {
    init_logging();
    let (state, request_id) = submit(AppState::new());
    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            jobs: Vec::new(),
        },
    );

    assert_eq!(state.phase(), SearchPhase::Resolved);
    assert_eq!(state.results(), Some(&[][..]));
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::new(
            NotificationKind::Info,
            NO_RESULTS_MESSAGE
        ))]
    );
    let view = state.view();
    assert!(view.summary.is_none());
    assert!(view.cards.is_empty());
}

#[test]
fn results_preserve_backend_order_and_report_count() {
    init_logging();
    let j1 = job("Backend Engineer", "Zeta", "Indeed");
    let j2 = job("Frontend Engineer", "Acme", "LinkedIn");
    let (state, request_id) = submit(AppState::new());
    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            jobs: vec![j1.clone(), j2.clone()],
        },
    );

    assert_eq!(state.phase(), SearchPhase::Resolved);
    assert_eq!(state.results(), Some(&[j1, j2][..]));
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::new(
            NotificationKind::Success,
            "Found 2 relevant job opportunities!"
        ))]
    );
}

#[test]
fn failure_returns_to_idle_without_results() {
    init_logging();
    let (state, request_id) = submit(AppState::new());
    let (state, effects) = update(state, Msg::SearchFailed { request_id });

    assert_eq!(state.phase(), SearchPhase::Idle);
    assert_eq!(state.results(), None);
    assert_eq!(state.in_flight(), None);
    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::new(
            NotificationKind::Error,
            FAILURE_MESSAGE
        ))]
    );
    assert!(state.view().submit_enabled);
}

#[test]
fn new_submission_clears_previous_results() {
    init_logging();
    let (state, request_id) = submit(AppState::new());
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            jobs: vec![job("Engineer", "Acme", "LinkedIn")],
        },
    );
    assert_eq!(state.view().cards.len(), 1);

    let (state, second_id) = submit(state);
    assert_eq!(second_id, request_id + 1);
    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(state.results(), None);
    assert!(state.view().cards.is_empty());
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let (state, first) = submit(AppState::new());
    let (state, second) = submit(state);

    // The first request resolves after the second was issued.
    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            request_id: first,
            jobs: vec![job("Old", "Stale", "Indeed")],
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(state.in_flight(), Some(second));

    let (state, effects) = update(
        state,
        Msg::SearchSucceeded {
            request_id: second,
            jobs: vec![job("New", "Fresh", "LinkedIn")],
        },
    );
    assert_eq!(effects.len(), 1);
    assert_eq!(state.results().unwrap()[0].job_title, "New");

    // A late failure for the superseded request changes nothing.
    let before = state.clone();
    let (state, effects) = update(state, Msg::SearchFailed { request_id: first });
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn invalid_criteria_never_issue_a_request() {
    init_logging();
    let invalid = SearchCriteria {
        position: String::new(),
        ..criteria()
    };
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SearchSubmitted(invalid));

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert_eq!(next.phase(), SearchPhase::Idle);
}

#[test]
fn tick_only_animates_while_loading() {
    init_logging();
    let (mut idle, _) = update(AppState::new(), Msg::Tick);
    assert!(!idle.consume_dirty());
    assert_eq!(idle.view().loading_frame, None);

    let (mut state, _) = submit(idle);
    assert!(state.consume_dirty());
    let first_frame = state.view().loading_frame;
    let (mut state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_ne!(state.view().loading_frame, first_frame);
}

#[test]
fn whitespace_only_required_value_still_starts_a_search() {
    init_logging();
    let spaced = SearchCriteria {
        experience: "   ".to_string(),
        ..criteria()
    };
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted(spaced.clone()));

    assert_eq!(state.phase(), SearchPhase::Loading);
    assert_eq!(
        effects,
        vec![Effect::RunSearch {
            request_id: 1,
            criteria: spaced,
        }]
    );
}
