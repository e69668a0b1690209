use crate::config::AppConfig;
use crate::curve::PayoffCurveGenerator;
use std::sync::Arc;

/// Shared, read-only application state. Curves are computed per request;
/// nothing here changes after startup.
pub struct AppState {
    pub config: AppConfig,
    pub generator: PayoffCurveGenerator,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        let generator = PayoffCurveGenerator::with_defaults(config.max_grid_points);
        Arc::new(Self { config, generator })
    }
}
