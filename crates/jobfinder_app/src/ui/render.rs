use jobfinder_core::{AppViewModel, JobCardView, Notification, NotificationKind, SearchPhase};

pub const LOADING_TEXT: &str = "Searching for jobs...";

/// Lines for the results area of the current view.
///
/// Idle without results and an empty resolved search render nothing.
pub fn render(view: &AppViewModel) -> Vec<String> {
    match view.phase {
        SearchPhase::Loading => {
            let frame = view.loading_frame.unwrap_or("|");
            vec![format!("{frame} {LOADING_TEXT}")]
        }
        SearchPhase::Idle | SearchPhase::Resolved => {
            let Some(summary) = &view.summary else {
                return Vec::new();
            };
            let mut lines = vec![
                String::new(),
                "Search Results".to_string(),
                summary.clone(),
            ];
            for (index, card) in view.cards.iter().enumerate() {
                lines.push(String::new());
                lines.extend(render_card(index + 1, card));
            }
            lines
        }
    }
}

fn render_card(position: usize, card: &JobCardView) -> Vec<String> {
    let mut lines = vec![
        format!("{position}. {} [{}]", card.title, card.source_badge),
        format!("   Company: {}", card.company),
    ];
    let optional = [
        ("Location", &card.location),
        ("Experience", &card.experience),
        ("Salary", &card.salary),
        ("Job Type", &card.job_nature),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("   {label}: {value}"));
        }
    }
    if card.apply_link_valid {
        lines.push(format!("   Apply Now: {}", card.apply_link));
    } else {
        lines.push(format!("   Apply Now: {} (unverified link)", card.apply_link));
    }
    lines
}

pub fn render_notification(notification: &Notification, timestamp: &str) -> String {
    let tag = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Info => "info",
        NotificationKind::Error => "error",
    };
    format!("[{timestamp}] [{tag}] {}", notification.message)
}
