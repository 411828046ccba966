use std::sync::Arc;

use crate::config::{AnalysisConfig, Config};
use crate::profiles::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Defaults every analysis starts from; requests may override industry,
    /// level and threshold.
    pub analysis: AnalysisConfig,
    /// Pluggable profile importer. Default: GitHubProfileSource.
    pub profiles: Arc<dyn ProfileSource>,
}

impl AppState {
    pub fn new(config: Config, profiles: Arc<dyn ProfileSource>) -> Self {
        Self {
            analysis: config.analysis(),
            config,
            profiles,
        }
    }
}
