//! Test harness with testcontainers for integration testing.
//!
//! A single MongoDB container is shared across all tests; each test gets
//! its own freshly named database so counts and listings never bleed
//! between tests.

use anyhow::{Context, Result};
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;
use tokio::sync::OnceCell;
use uuid::Uuid;

use server_core::db::MongoDb;
use server_core::domains::listings::{ListingService, ListingStore};
use server_core::server::{build_app, AppState};

use super::ApiClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    mongo_url: String,
    // Keep the container alive for the entire test run
    _mongo: ContainerAsync<Mongo>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG when debugging tests; try_init() avoids panicking
        // if a previous test already installed a subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mongo = Mongo::default()
            .start()
            .await
            .context("Failed to start MongoDB container")?;

        let host = mongo.get_host().await?;
        let port = mongo.get_host_port_ipv4(27017).await?;
        let mongo_url = format!("mongodb://{}:{}", host, port);

        Ok(Self {
            mongo_url,
            _mongo: mongo,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// Uses the shared container but an isolated database per test.
pub struct TestHarness {
    pub state: AppState,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Databases are throwaway; the container is dropped at process exit
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_name = format!("reusedb_test_{}", Uuid::new_v4().simple());
        let db = MongoDb::connect(&infra.mongo_url, &db_name)
            .await
            .context("Failed to connect to test database")?;

        let store = ListingStore::new(&db);
        store
            .ensure_indexes()
            .await
            .context("Failed to create indexes")?;

        Ok(Self {
            state: AppState {
                listings: ListingService::new(store),
                db,
            },
        })
    }

    /// Get an API client driving the full router for this harness.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(build_app(self.state.clone()))
    }
}
