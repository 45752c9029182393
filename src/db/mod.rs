use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::{Client, ClientUpdate, NewClient};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    national_id TEXT NOT NULL UNIQUE,
    email       TEXT NOT NULL,
    capital     REAL NOT NULL
)
"#;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a client with this national id already exists")]
    Conflict,
    #[error("client not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(config.database_url()).await
    }

    /// Connect to the given SQLite URL, creating the file if needed.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Open an in-memory database on a single pooled connection. Each
    /// in-memory connection is its own database, so the pool must not grow.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    /// Create the clients table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    // Client operations
    pub async fn create_client(&self, new: &NewClient) -> Result<Client, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Reject duplicates before inserting; the UNIQUE index is the backstop.
        let existing =
            sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE national_id = ?1")
                .bind(&new.national_id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_some() {
            return Err(StoreError::Conflict);
        }

        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, national_id, email, capital) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, name, national_id, email, capital",
        )
        .bind(&new.name)
        .bind(&new.national_id)
        .bind(&new.email)
        .bind(new.capital)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_on_unique_violation)?;

        tx.commit().await?;
        debug!(national_id = %client.national_id, id = client.id, "client persisted");

        Ok(client)
    }

    pub async fn get_client(&self, national_id: &str) -> Result<Option<Client>, StoreError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, national_id, email, capital FROM clients WHERE national_id = ?1",
        )
        .bind(national_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Merge the supplied fields into an existing record and persist the
    /// result, all inside one transaction.
    pub async fn update_client(
        &self,
        national_id: &str,
        update: &ClientUpdate,
    ) -> Result<Client, StoreError> {
        let mut tx = self.pool.begin().await?;

        let mut client = sqlx::query_as::<_, Client>(
            "SELECT id, name, national_id, email, capital FROM clients WHERE national_id = ?1",
        )
        .bind(national_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound)?;

        update.merge_into(&mut client);

        sqlx::query("UPDATE clients SET name = ?1, email = ?2, capital = ?3 WHERE id = ?4")
            .bind(&client.name)
            .bind(&client.email)
            .bind(client.capital)
            .bind(client.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(client)
    }

    pub async fn delete_client(&self, national_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE national_id = ?1")
            .bind(national_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    /// Number of stored clients.
    pub async fn count_clients(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn conflict_on_unique_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict,
        _ => StoreError::Database(err),
    }
}

/// Initialize the database connection pool and make sure the schema exists.
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;
    db.ensure_schema().await?;

    Ok(db)
}
