//! Job finder engine: the search client and its background executor.
mod client;
mod endpoint;
mod engine;
mod types;

pub use client::{ReqwestSearchClient, SearchClient, SearchSettings, DEFAULT_BASE_URL};
pub use endpoint::{search_endpoint, SEARCH_PATH};
pub use engine::EngineHandle;
pub use types::{EngineEvent, SearchError};
