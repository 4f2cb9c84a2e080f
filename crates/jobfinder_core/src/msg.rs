#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited a form field.
    FieldChanged {
        field: crate::CriteriaField,
        value: String,
    },
    /// User submitted the form with validated criteria.
    SearchSubmitted(crate::SearchCriteria),
    /// Backend answered a request with a result list.
    SearchSucceeded {
        request_id: crate::RequestId,
        jobs: Vec<crate::JobRecord>,
    },
    /// A request failed (transport, status or malformed body).
    SearchFailed { request_id: crate::RequestId },
    /// UI tick; drives the loading indicator.
    Tick,
}
