use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_logging::{finder_debug, finder_warn};
use jobfinder_core::{RequestId, SearchCriteria};

use crate::client::{ReqwestSearchClient, SearchClient, SearchSettings};
use crate::EngineEvent;

enum EngineCommand {
    Search {
        request_id: RequestId,
        criteria: SearchCriteria,
    },
}

/// Runs search requests on a background tokio runtime.
///
/// Submissions never block and are not deduplicated or cancelled: every
/// request completes with its own `EngineEvent::SearchCompleted`, in
/// arrival order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> io::Result<Self> {
        Self::with_client(Arc::new(ReqwestSearchClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn SearchClient>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("search-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                finder_debug!("Search engine shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, criteria: SearchCriteria) {
        if self
            .cmd_tx
            .send(EngineCommand::Search {
                request_id,
                criteria,
            })
            .is_err()
        {
            finder_warn!("Search engine stopped; request_id={} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search {
            request_id,
            criteria,
        } => {
            let result = client.search(&criteria).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
