use std::time::Duration;

use finder_logging::{finder_info, finder_warn};
use jobfinder_core::{Effect, Msg};
use jobfinder_engine::{EngineEvent, EngineHandle};

use crate::ui::NotificationSink;

/// Executes controller effects and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, sink: &mut dyn NotificationSink) {
        for effect in effects {
            match effect {
                Effect::RunSearch {
                    request_id,
                    criteria,
                } => {
                    finder_info!(
                        "RunSearch request_id={} position={:?}",
                        request_id,
                        criteria.position
                    );
                    self.engine.submit(request_id, criteria);
                }
                Effect::Notify(notification) => sink.notify(&notification),
            }
        }
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => match result {
            Ok(jobs) => Msg::SearchSucceeded { request_id, jobs },
            Err(err) => {
                // The user only sees the generic notification.
                if err.is_malformed() {
                    finder_warn!("Search {} returned a malformed response: {}", request_id, err);
                } else {
                    finder_warn!("Search {} failed: {}", request_id, err);
                }
                Msg::SearchFailed { request_id }
            }
        },
    }
}
