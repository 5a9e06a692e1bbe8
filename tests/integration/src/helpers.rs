//! Test helpers - temp-dir backed service contexts

use std::sync::Arc;

use tempfile::TempDir;

use lunchbot_common::{try_init_tracing, TracingConfig};
use lunchbot_core::traits::CatalogRepository;
use lunchbot_core::StoreRecord;
use lunchbot_service::ServiceContext;
use lunchbot_store::{JsonCatalogStore, JsonlRecommendLog};

/// A service context wired to real file stores in a temp directory
pub struct TestContext {
    /// Keeps the backing directory alive for the duration of the test
    pub dir: TempDir,
    pub ctx: ServiceContext,
    pub catalog_store: JsonCatalogStore,
    pub recommend_log: JsonlRecommendLog,
}

/// Build a context whose catalog file starts with the given records
pub async fn context_with_catalog(records: &[StoreRecord]) -> TestContext {
    let _ = try_init_tracing(&TracingConfig::development());

    let dir = TempDir::new().expect("create temp dir");
    let catalog_store = JsonCatalogStore::new(dir.path().join("restaurants.json"));
    let recommend_log = JsonlRecommendLog::new(dir.path().join("recommend_log.jsonl"));

    catalog_store.save(records).await.expect("seed catalog");

    let ctx = ServiceContext::new(
        Arc::new(catalog_store.clone()),
        Arc::new(recommend_log.clone()),
    );

    TestContext {
        dir,
        ctx,
        catalog_store,
        recommend_log,
    }
}
