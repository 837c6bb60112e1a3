//! MongoDB client wrapper.
//!
//! The connection is established once at process start and handed to the
//! store layer explicitly; no module-level client state.

use bson::doc;
use mongodb::{Client, Collection};
use tracing::info;

/// Name of the database holding all persisted state.
pub const DATABASE_NAME: &str = "reusedb";

/// Handle to the application database.
#[derive(Debug, Clone)]
pub struct MongoDb {
    client: Client,
    db_name: String,
}

impl MongoDb {
    /// Connect to MongoDB and verify the connection with a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        info!("Connecting to MongoDB at {}", uri);

        // Bounded server selection so startup fails fast when the database
        // is unreachable instead of hanging.
        let timeout_uri = if uri.contains('?') {
            format!("{uri}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        } else {
            format!("{uri}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        };

        let client = Client::with_uri_str(&timeout_uri).await?;

        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get a typed collection handle.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.db_name).collection(name)
    }

    /// Ping the database; used by the health endpoint.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
    }
}
