use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::upstream::WallpaperSource;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn WallpaperSource>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn WallpaperSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            metrics: Arc::new(Metrics::new()),
        }
    }
}
