use std::sync::Arc;

use crate::{
    config::Config,
    nlp::{NlpEngine, SpacyClient},
    services::{DocumentService, McqService},
};

#[derive(Clone)]
pub struct AppState {
    pub mcq_service: Arc<McqService>,
    pub document_service: Arc<DocumentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let nlp: Arc<dyn NlpEngine> = Arc::new(SpacyClient::new(&config.nlp_service_url));
        Self::with_engine(nlp, config)
    }

    /// Wires the state around an arbitrary engine implementation. Tests use
    /// this to swap in mocks and stubs.
    pub fn with_engine(nlp: Arc<dyn NlpEngine>, config: Config) -> Self {
        Self {
            mcq_service: Arc::new(McqService::new(nlp)),
            document_service: Arc::new(DocumentService::new()),
            config: Arc::new(config),
        }
    }
}
