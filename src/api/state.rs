use std::sync::Arc;

use crate::config::RadarConfig;
use crate::models::BenchmarkTable;
use crate::storage::MatchStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MatchStore>,
    pub benchmarks: Arc<BenchmarkTable>,
    pub radar: Arc<RadarConfig>,
    pub cors_origin: String,
}
