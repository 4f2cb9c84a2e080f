use jobfinder_core::{
    update, AppState, Effect, JobNature, JobSearchResponse, Msg, SearchCriteria, SearchPhase,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn criteria_serialize_with_verbatim_keys_and_empty_strings() {
    let criteria = SearchCriteria {
        position: "Frontend Engineer".to_string(),
        experience: "2 years".to_string(),
        skills: "React".to_string(),
        ..SearchCriteria::default()
    };

    let body = serde_json::to_value(&criteria).unwrap();
    assert_eq!(
        body,
        json!({
            "position": "Frontend Engineer",
            "experience": "2 years",
            "salary": "",
            "jobNature": "",
            "location": "",
            "skills": "React",
        })
    );
}

#[test]
fn criteria_survive_the_request_body_unchanged() {
    let criteria = SearchCriteria {
        position: "Data Engineer ".to_string(),
        experience: "5+ years".to_string(),
        salary: "80,000 PKR to 150,000 PKR".to_string(),
        job_nature: JobNature::Hybrid,
        location: "Lahore, Pakistan".to_string(),
        skills: "Python, SQL,  Spark".to_string(),
    };

    let text = serde_json::to_string(&criteria).unwrap();
    let back: SearchCriteria = serde_json::from_str(&text).unwrap();
    assert_eq!(back, criteria);
}

#[test]
fn job_records_accept_missing_and_null_optionals() {
    let response: JobSearchResponse = serde_json::from_value(json!({
        "relevant_jobs": [
            {
                "job_title": "Frontend Engineer",
                "company": "Acme",
                "source": "LinkedIn",
                "apply_link": "https://x"
            },
            {
                "job_title": "React Developer",
                "company": "Globex",
                "source": "Indeed",
                "apply_link": "https://indeed.example/apply/2",
                "location": "Remote",
                "experience": null,
                "salary": "100k",
                "jobNature": "remote"
            }
        ]
    }))
    .unwrap();

    assert_eq!(response.relevant_jobs.len(), 2);
    assert_eq!(response.relevant_jobs[0].location, None);
    assert_eq!(response.relevant_jobs[1].experience, None);
    assert_eq!(response.relevant_jobs[1].job_nature.as_deref(), Some("remote"));
}

#[test]
fn job_record_without_required_field_is_rejected() {
    let result = serde_json::from_value::<JobSearchResponse>(json!({
        "relevant_jobs": [{ "job_title": "Engineer", "company": "Acme", "apply_link": "https://x" }]
    }));
    assert!(result.is_err());
}

#[test]
fn frontend_engineer_scenario_ends_with_one_linkedin_card() {
    let criteria = SearchCriteria {
        position: "Frontend Engineer".to_string(),
        experience: "2 years".to_string(),
        skills: "React".to_string(),
        ..SearchCriteria::default()
    };
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted(criteria));
    let (request_id, body) = match &effects[..] {
        [Effect::RunSearch {
            request_id,
            criteria,
        }] => (*request_id, serde_json::to_value(criteria).unwrap()),
        other => panic!("unexpected effects: {other:?}"),
    };
    assert_eq!(body["jobNature"], json!(""));
    assert_eq!(body["location"], json!(""));

    let response: JobSearchResponse = serde_json::from_str(
        r#"{"relevant_jobs":[{"job_title":"Frontend Engineer","company":"Acme","source":"LinkedIn","apply_link":"https://x"}]}"#,
    )
    .unwrap();
    let (state, _) = update(
        state,
        Msg::SearchSucceeded {
            request_id,
            jobs: response.relevant_jobs,
        },
    );

    let view = state.view();
    assert_eq!(view.phase, SearchPhase::Resolved);
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].title, "Frontend Engineer");
    assert_eq!(view.cards[0].source_badge, "LinkedIn");
    assert_eq!(view.cards[0].key, "LinkedIn-Acme-0");
    assert!(view.cards[0].apply_link_valid);
    assert_eq!(
        view.summary.as_deref(),
        Some("Found 1 relevant job opportunities for you")
    );
}
